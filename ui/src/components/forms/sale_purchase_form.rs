use dioxus::prelude::*;

use crate::app::AppServices;
use crate::components::inputs::{InputFilter, InputType, LabeledInput};
use crate::components::primitives::{Alert, AlertTone, Card, DetailRow};
use crate::features::transaction::{
    transaction_validation_message, TransactionAction, TransactionField, TransactionState,
};
use crate::features::verification::{sanitize_imei_input, IMEI_LENGTH};
use crate::services::errors::HynsError;
use crate::utils::or_not_specified;
use crate::{console_info, console_warn};

/// Labels and placeholders for one text field of the transaction form.
struct FieldSpec {
    field: TransactionField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
}

const SELLER_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        field: TransactionField::SellerName,
        id: "sellerName",
        label: "Full Name",
        placeholder: "Enter seller's full name",
    },
    FieldSpec {
        field: TransactionField::SellerNationalId,
        id: "sellerNationalId",
        label: "National ID",
        placeholder: "Enter national ID number",
    },
];

const BUYER_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        field: TransactionField::BuyerName,
        id: "buyerName",
        label: "Full Name",
        placeholder: "Enter buyer's full name",
    },
    FieldSpec {
        field: TransactionField::BuyerNationalId,
        id: "buyerNationalId",
        label: "National ID",
        placeholder: "Enter national ID number",
    },
];

/// Sale / purchase registration screen.
#[component]
pub fn SalePurchaseForm() -> Element {
    let services = use_context::<AppServices>();
    let mut state = use_signal(TransactionState::default);
    let mut registration = use_signal(|| None::<Task>);

    let dispatch = EventHandler::new(move |action: TransactionAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if !state.peek().can_submit() {
            console_warn!("transaction form submitted incomplete");
            return;
        }
        dispatch.call(TransactionAction::Submit);
        let Some(request) = state.peek().pending_request() else {
            return;
        };

        console_info!("registering transaction for IMEI {}", request.form.imei);
        let registry = services.registry.clone();
        let task = spawn(async move {
            match registry.register_transaction(&request.form).await {
                Ok(receipt) => {
                    console_info!("transaction {} registered", receipt.transaction_id);
                    dispatch.call(TransactionAction::Registered {
                        ticket: request.ticket,
                        receipt,
                    });
                }
                Err(error) => {
                    console_warn!("transaction rejected: {}", error);
                    dispatch.call(TransactionAction::Rejected {
                        ticket: request.ticket,
                        reason: HynsError::from(error).user_message(),
                    });
                }
            }
        });
        registration.set(Some(task));
    };

    let reset = move |_: MouseEvent| {
        if let Some(task) = registration.write().take() {
            task.cancel();
        }
        dispatch.call(TransactionAction::Reset);
    };

    let current = state();
    let form = &current.form;
    let locked = current.is_submitting();

    rsx! {
        div {
            class: "screen transaction-screen",
            h2 { class: "screen-title", "Register Sale / Purchase" }
            p { class: "screen-subtitle", "Register a smartphone transaction between seller and buyer" }

            form {
                class: "transaction-form",
                onsubmit: submit,
                div {
                    class: "two-column",
                    Card {
                        title: "Seller Information".to_string(),
                        for spec in SELLER_FIELDS.iter() {
                            LabeledInput {
                                key: "{spec.id}",
                                id: spec.id.to_string(),
                                label: spec.label.to_string(),
                                value: form.get(spec.field).to_string(),
                                placeholder: spec.placeholder.to_string(),
                                input_type: InputType::Text,
                                disabled: locked,
                                on_change: {
                                    let field = spec.field;
                                    move |value: String| dispatch.call(TransactionAction::SetField(field, value))
                                },
                            }
                        }
                        LabeledInput {
                            id: "imei".to_string(),
                            label: "IMEI Number".to_string(),
                            value: form.imei.clone(),
                            placeholder: "356789012345678".to_string(),
                            input_type: InputType::Text,
                            input_class: "imei-input".to_string(),
                            disabled: locked,
                            max_length: IMEI_LENGTH,
                            hint: "15-digit IMEI number of the smartphone being sold".to_string(),
                            filter: sanitize_imei_input as InputFilter,
                            on_change: move |value: String| {
                                dispatch.call(TransactionAction::SetField(TransactionField::Imei, value))
                            },
                        }
                    }
                    Card {
                        title: "Buyer Information".to_string(),
                        for spec in BUYER_FIELDS.iter() {
                            LabeledInput {
                                key: "{spec.id}",
                                id: spec.id.to_string(),
                                label: spec.label.to_string(),
                                value: form.get(spec.field).to_string(),
                                placeholder: spec.placeholder.to_string(),
                                input_type: InputType::Text,
                                disabled: locked,
                                on_change: {
                                    let field = spec.field;
                                    move |value: String| dispatch.call(TransactionAction::SetField(field, value))
                                },
                            }
                        }
                        div {
                            class: "summary-box",
                            h4 { class: "summary-title", "Transaction Summary" }
                            DetailRow { label: "Seller".to_string(), value: or_not_specified(&form.seller_name).to_string() }
                            DetailRow { label: "Buyer".to_string(), value: or_not_specified(&form.buyer_name).to_string() }
                            DetailRow { label: "IMEI".to_string(), value: or_not_specified(&form.imei).to_string() }
                        }
                    }
                }

                Card {
                    class: "action-card".to_string(),
                    if !form.is_empty() {
                        if let Some(message) = transaction_validation_message(form) {
                            p { class: "validation-message", "{message}" }
                        }
                    }
                    div {
                        class: "button-section",
                        button {
                            class: "primary-button",
                            r#type: "submit",
                            disabled: !current.can_submit(),
                            if locked { "Validating Operation..." } else { "Validate Operation" }
                        }
                        if current.can_reset() {
                            button {
                                class: "secondary-button",
                                r#type: "button",
                                onclick: reset,
                                "New Transaction"
                            }
                        }
                    }
                }
            }

            if let Some(receipt) = current.status.ready() {
                Alert {
                    tone: AlertTone::Success,
                    title: "Transaction registered successfully!".to_string(),
                    "Transaction ID: {receipt.transaction_id}"
                    br {}
                    "The ownership transfer has been recorded in the HYNS database."
                }
            }

            if let Some(reason) = current.status.failure() {
                Alert {
                    tone: AlertTone::Error,
                    title: "Transaction validation failed".to_string(),
                    "{reason}"
                }
            }
        }
    }
}
