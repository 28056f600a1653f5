use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::AppServices;
use crate::components::display::LoadingIndicator;
use crate::components::inputs::{InputFilter, InputType, LabeledInput};
use crate::components::primitives::{Alert, AlertTone, Card, DetailRow};
use crate::features::verification::{
    device_information, sanitize_imei_input, theft_report, VerificationAction, VerificationResult,
    VerificationState, IMEI_LENGTH,
};
use crate::services::errors::HynsError;
use crate::services::registry::DeviceRegistry;
use crate::{console_error, console_info};

/// Lookup state and the task serving it, scoped to the calling component.
///
/// The task is spawned in the caller's scope, so unmounting the caller
/// cancels it. Completions carry the ticket they were issued with and the
/// reducer drops any that no longer match.
#[derive(Clone)]
pub struct ImeiLookup {
    pub state: Signal<VerificationState>,
    task: Signal<Option<Task>>,
    registry: Rc<dyn DeviceRegistry>,
}

pub fn use_imei_lookup() -> ImeiLookup {
    let services = use_context::<AppServices>();
    let state = use_signal(VerificationState::default);
    let task = use_signal(|| None::<Task>);

    ImeiLookup {
        state,
        task,
        registry: services.registry,
    }
}

impl ImeiLookup {
    pub fn dispatch(&self, action: VerificationAction) {
        apply(self.state, action);
    }

    /// Starts a lookup for the current input. Ignored unless the input is
    /// exactly fifteen digits and nothing is in flight.
    pub fn submit(&self) {
        if !self.state.peek().can_submit() {
            return;
        }
        self.dispatch(VerificationAction::Submit);
        let Some(request) = self.state.peek().pending_request() else {
            return;
        };

        console_info!("verifying IMEI {}", request.imei);
        let registry = self.registry.clone();
        let state = self.state;
        let handle = spawn(async move {
            match registry.verify_imei(&request.imei).await {
                Ok(result) => {
                    apply(
                        state,
                        VerificationAction::Completed {
                            ticket: request.ticket,
                            result,
                        },
                    );
                }
                Err(error) => {
                    console_error!("verification failed: {}", error);
                    apply(
                        state,
                        VerificationAction::Failed {
                            ticket: request.ticket,
                            reason: HynsError::from(error).user_message(),
                        },
                    );
                }
            }
        });

        let mut task = self.task;
        task.set(Some(handle));
    }

    pub fn reset(&self) {
        let mut task = self.task;
        if let Some(handle) = task.write().take() {
            handle.cancel();
        }
        self.dispatch(VerificationAction::Reset);
    }
}

fn apply(mut state: Signal<VerificationState>, action: VerificationAction) {
    state.with_mut(|s| s.reduce_in_place(action));
}

#[derive(Props, PartialEq, Clone)]
pub struct ImeiVerificationFormProps {
    /// "Register Sale or Purchase" shortcut
    pub on_register_sale: EventHandler<()>,
}

/// IMEI lookup screen.
#[component]
pub fn ImeiVerificationForm(props: ImeiVerificationFormProps) -> Element {
    let lookup = use_imei_lookup();
    let current = lookup.state.read().clone();

    rsx! {
        div {
            class: "screen verification-screen",
            h2 { class: "screen-title", "IMEI Verification" }
            p { class: "screen-subtitle", "Check a smartphone's status before buying or selling it" }

            Card {
                title: "Verify a device".to_string(),
                LabeledInput {
                    id: "imei".to_string(),
                    label: "IMEI number".to_string(),
                    value: current.imei_input.clone(),
                    placeholder: "Enter the 15-digit IMEI".to_string(),
                    input_type: InputType::Text,
                    input_class: "imei-input".to_string(),
                    disabled: current.is_loading(),
                    max_length: IMEI_LENGTH,
                    hint: format!("{}/{} digits", current.imei_input.len(), IMEI_LENGTH),
                    filter: sanitize_imei_input as InputFilter,
                    on_change: {
                        let lookup = lookup.clone();
                        move |value: String| lookup.dispatch(VerificationAction::SetImei(value))
                    },
                }
                div {
                    class: "button-section",
                    button {
                        class: "primary-button",
                        disabled: !current.can_submit(),
                        onclick: {
                            let lookup = lookup.clone();
                            move |_| lookup.submit()
                        },
                        if current.is_loading() { "Verifying..." } else { "Verify" }
                    }
                    if current.can_reset() {
                        button {
                            class: "secondary-button",
                            onclick: {
                                let lookup = lookup.clone();
                                move |_| lookup.reset()
                            },
                            "New Verification"
                        }
                    }
                }
                if current.is_loading() {
                    LoadingIndicator { message: "Checking the HYNS database...".to_string() }
                }
            }

            if let Some(result) = current.result() {
                VerificationOutcome {
                    result: result,
                    on_register_sale: props.on_register_sale,
                }
            }

            if let Some(reason) = current.status.failure() {
                Alert {
                    tone: AlertTone::Error,
                    title: "Verification failed".to_string(),
                    "{reason}"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct VerificationOutcomeProps {
    result: VerificationResult,
    on_register_sale: EventHandler<()>,
}

#[component]
fn VerificationOutcome(props: VerificationOutcomeProps) -> Element {
    let result = props.result;
    let tone = match result {
        VerificationResult::Valid => AlertTone::Success,
        VerificationResult::NotFound => AlertTone::Warning,
        VerificationResult::Stolen => AlertTone::Error,
    };

    rsx! {
        div {
            class: "verification-outcome",
            Alert {
                tone: tone,
                title: result.headline().to_string(),
                "{result.description()}"
            }
            {
                match result {
                    VerificationResult::Valid => {
                        let info = device_information();
                        rsx! {
                            Card {
                                title: "Device Information".to_string(),
                                class: "info-box".to_string(),
                                DetailRow { label: "Brand".to_string(), value: info.brand.to_string() }
                                DetailRow { label: "Model".to_string(), value: info.model.to_string() }
                                DetailRow { label: "Status".to_string(), value: info.status.to_string() }
                            }
                        }
                    }
                    VerificationResult::Stolen => {
                        let report = theft_report();
                        rsx! {
                            Card {
                                title: "Theft Report".to_string(),
                                class: "info-box danger".to_string(),
                                DetailRow { label: "Reported".to_string(), value: report.reported.to_string() }
                                DetailRow { label: "Case ID".to_string(), value: report.case_id.to_string() }
                                DetailRow { label: "Status".to_string(), value: report.status.to_string() }
                            }
                        }
                    }
                    VerificationResult::NotFound => rsx! {},
                }
            }
            if result.allows_registration() {
                div {
                    class: "button-section",
                    button {
                        class: "primary-button",
                        onclick: move |_| props.on_register_sale.call(()),
                        "Register Sale or Purchase"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use async_trait::async_trait;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use crate::features::transaction::{TransactionForm, TransactionReceipt};
    use crate::features::verification::{classify_imei, Imei};
    use crate::features::AsyncState;
    use crate::services::config::HynsConfig;
    use crate::services::decision::ScriptedDecisions;
    use crate::services::errors::RegistryError;
    use crate::services::timing::simulated_delay;

    const LOOKUP_DELAY_MS: u32 = 60;
    const VALID_IMEI: &str = "356789012345676";

    /// Registry that counts lookups started and finished.
    #[derive(Default)]
    struct CountingRegistry {
        started: Cell<u32>,
        finished: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl DeviceRegistry for CountingRegistry {
        async fn verify_imei(&self, imei: &Imei) -> Result<VerificationResult, RegistryError> {
            self.started.set(self.started.get() + 1);
            simulated_delay(LOOKUP_DELAY_MS).await;
            self.finished.set(self.finished.get() + 1);
            Ok(classify_imei(imei))
        }

        async fn register_transaction(
            &self,
            _form: &TransactionForm,
        ) -> Result<TransactionReceipt, RegistryError> {
            Err(RegistryError::Rejected {
                reason: "not used here".to_string(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct Harness {
        registry: Rc<CountingRegistry>,
        /// Lookup status at every render of a lookup screen
        seen: Rc<RefCell<Vec<AsyncState<VerificationResult>>>>,
    }

    #[derive(Props, Clone)]
    struct RootProps {
        harness: Harness,
        /// Navigate away and back while the lookup is in flight
        leave: bool,
    }

    impl PartialEq for RootProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.harness.seen, &other.harness.seen) && self.leave == other.leave
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Phase {
        FirstVisit,
        Away,
        Back,
    }

    #[component]
    fn Root(props: RootProps) -> Element {
        let harness = props.harness.clone();
        use_context_provider(|| harness.clone());
        use_context_provider(|| AppServices {
            config: HynsConfig::instant(),
            registry: harness.registry.clone(),
            decisions: Rc::new(ScriptedDecisions::always(0.0)),
        });

        let mut phase = use_signal(|| Phase::FirstVisit);
        let leave = props.leave;
        use_hook(|| {
            if leave {
                spawn(async move {
                    simulated_delay(10).await;
                    phase.set(Phase::Away);
                    simulated_delay(10).await;
                    phase.set(Phase::Back);
                });
            }
        });

        match phase() {
            Phase::FirstVisit => rsx! { LookupScreen { submit_on_mount: true } },
            Phase::Away => rsx! { div { "elsewhere" } },
            Phase::Back => rsx! { LookupScreen { submit_on_mount: false } },
        }
    }

    #[component]
    fn LookupScreen(submit_on_mount: bool) -> Element {
        let lookup = use_imei_lookup();
        let harness = use_context::<Harness>();

        use_hook(|| {
            if submit_on_mount {
                lookup.dispatch(VerificationAction::SetImei(VALID_IMEI.to_string()));
                lookup.submit();
            }
        });

        let status = lookup.state.read().status.clone();
        harness.seen.borrow_mut().push(status);
        rsx! { div {} }
    }

    async fn run(leave: bool) -> Harness {
        let harness = Harness::default();
        let mut dom = VirtualDom::new_with_props(
            Root,
            RootProps {
                harness: harness.clone(),
                leave,
            },
        );
        dom.rebuild_in_place();

        let budget = Duration::from_millis(u64::from(LOOKUP_DELAY_MS) * 3);
        let _ = tokio::time::timeout(budget, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;

        harness
    }

    #[tokio::test]
    async fn test_lookup_settles_while_screen_stays_mounted() {
        let harness = run(false).await;

        assert_eq!(harness.registry.started.get(), 1);
        assert_eq!(harness.registry.finished.get(), 1);
        let seen = harness.seen.borrow();
        assert!(seen.iter().any(|status| status.is_pending()));
        assert_eq!(seen.last(), Some(&AsyncState::Ready(VerificationResult::Valid)));
    }

    #[tokio::test]
    async fn test_leaving_the_screen_drops_the_pending_lookup() {
        let harness = run(true).await;

        assert_eq!(harness.registry.started.get(), 1);
        assert_eq!(harness.registry.finished.get(), 0);
        let seen = harness.seen.borrow();
        assert!(seen.iter().any(|status| status.is_pending()));
        assert!(seen.iter().all(|status| status.ready().is_none()));
        assert_eq!(seen.last(), Some(&AsyncState::Idle));
    }
}
