use crate::features::async_state::{AsyncState, Ticket, TicketCounter};
use crate::features::verification::classifier::{sanitize_imei_input, Imei, VerificationResult};

#[derive(Clone, Debug)]
pub enum VerificationAction {
    /// Raw keystroke value from the IMEI field
    SetImei(String),
    Submit,
    Completed { ticket: Ticket, result: VerificationResult },
    Failed { ticket: Ticket, reason: String },
    Reset,
}

/// A submission waiting on the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingVerification {
    pub ticket: Ticket,
    pub imei: Imei,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerificationState {
    pub imei_input: String,
    pub status: AsyncState<VerificationResult>,
    submitted: Option<Imei>,
    tickets: TicketCounter,
}

impl VerificationState {
    pub fn reduce_in_place(&mut self, action: VerificationAction) {
        match action {
            VerificationAction::SetImei(raw) => {
                self.imei_input = sanitize_imei_input(&raw);
            }
            VerificationAction::Submit => {
                if !self.can_submit() {
                    tracing::debug!(length = self.imei_input.len(), "verify ignored");
                    return;
                }
                match Imei::parse(&self.imei_input) {
                    Ok(imei) => {
                        let ticket = self.tickets.next();
                        self.status.begin(ticket);
                        self.submitted = Some(imei);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "sanitized IMEI failed to parse");
                    }
                }
            }
            VerificationAction::Completed { ticket, result } => {
                if self.status.resolve(ticket, result) {
                    tracing::info!(ticket, ?result, "verification completed");
                }
            }
            VerificationAction::Failed { ticket, reason } => {
                self.status.fail(ticket, reason);
            }
            VerificationAction::Reset => {
                self.imei_input.clear();
                self.status.reset();
                self.submitted = None;
            }
        }
    }

    /// The verify button is live only with exactly fifteen digits and
    /// nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.imei_input.len() == crate::features::verification::IMEI_LENGTH
            && !self.status.is_pending()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_pending()
    }

    pub fn result(&self) -> Option<VerificationResult> {
        self.status.ready().copied()
    }

    /// The submission a freshly spawned task should work on.
    pub fn pending_request(&self) -> Option<PendingVerification> {
        let ticket = self.status.pending_ticket()?;
        let imei = self.submitted.clone()?;
        Some(PendingVerification { ticket, imei })
    }

    /// "New Verification" is offered once something has settled.
    pub fn can_reset(&self) -> bool {
        self.status.is_settled()
    }
}
