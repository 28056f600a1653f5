//! Source of the demo's coin flips
//!
//! Role assignment at login and the transaction outcome are random in the
//! demo. Both draw from a `DecisionSource` so tests can script them.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::features::session::Role;
use crate::services::config::OutcomeConfig;

pub trait DecisionSource {
    /// A draw in `[0, 1)`.
    fn roll(&self) -> f64;
}

/// `Math.random()` from the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl DecisionSource for BrowserRandom {
    fn roll(&self) -> f64 {
        js_sys::Math::random()
    }
}

/// Replays a fixed sequence of draws, then repeats the last one.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    rolls: RefCell<VecDeque<f64>>,
    last: RefCell<f64>,
}

impl ScriptedDecisions {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: RefCell::new(rolls.into_iter().collect()),
            last: RefCell::new(0.0),
        }
    }

    /// Always returns `value`.
    pub fn always(value: f64) -> Self {
        Self::new([value])
    }
}

impl DecisionSource for ScriptedDecisions {
    fn roll(&self) -> f64 {
        let next = self.rolls.borrow_mut().pop_front();
        match next {
            Some(value) => {
                *self.last.borrow_mut() = value;
                value
            }
            None => *self.last.borrow(),
        }
    }
}

/// Picks the role for a new session.
pub fn assign_role(source: &dyn DecisionSource, outcomes: &OutcomeConfig) -> Role {
    if source.roll() < outcomes.admin_role_probability {
        Role::Admin
    } else {
        Role::Merchant
    }
}

/// Whether the simulated registry accepts a transaction.
pub fn transaction_accepted(source: &dyn DecisionSource, outcomes: &OutcomeConfig) -> bool {
    source.roll() < outcomes.transaction_success_rate
}
