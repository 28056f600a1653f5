use serde::{Deserialize, Serialize};

use crate::features::async_state::{AsyncState, Ticket, TicketCounter};
use crate::features::transaction::validation::validate_transaction;
use crate::features::verification::sanitize_imei_input;

/// The two-party sale/purchase record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub seller_name: String,
    pub seller_national_id: String,
    pub buyer_name: String,
    pub buyer_national_id: String,
    pub imei: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionField {
    SellerName,
    SellerNationalId,
    BuyerName,
    BuyerNationalId,
    Imei,
}

impl TransactionField {
    pub const ALL: [TransactionField; 5] = [
        TransactionField::SellerName,
        TransactionField::SellerNationalId,
        TransactionField::BuyerName,
        TransactionField::BuyerNationalId,
        TransactionField::Imei,
    ];
}

impl TransactionForm {
    pub fn fields(&self) -> [&str; 5] {
        [
            self.seller_name.as_str(),
            self.seller_national_id.as_str(),
            self.buyer_name.as_str(),
            self.buyer_national_id.as_str(),
            self.imei.as_str(),
        ]
    }

    pub fn get(&self, field: TransactionField) -> &str {
        match field {
            TransactionField::SellerName => &self.seller_name,
            TransactionField::SellerNationalId => &self.seller_national_id,
            TransactionField::BuyerName => &self.buyer_name,
            TransactionField::BuyerNationalId => &self.buyer_national_id,
            TransactionField::Imei => &self.imei,
        }
    }

    pub fn set(&mut self, field: TransactionField, value: String) {
        match field {
            TransactionField::SellerName => self.seller_name = value,
            TransactionField::SellerNationalId => self.seller_national_id = value,
            TransactionField::BuyerName => self.buyer_name = value,
            TransactionField::BuyerNationalId => self.buyer_national_id = value,
            TransactionField::Imei => self.imei = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|value| value.is_empty())
    }
}

/// What the registry hands back for an accepted transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_id: String,
}

#[derive(Clone, Debug)]
pub enum TransactionAction {
    SetField(TransactionField, String),
    Submit,
    Registered { ticket: Ticket, receipt: TransactionReceipt },
    Rejected { ticket: Ticket, reason: String },
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PendingTransaction {
    pub ticket: Ticket,
    pub form: TransactionForm,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionState {
    pub form: TransactionForm,
    pub status: AsyncState<TransactionReceipt>,
    submitted: Option<TransactionForm>,
    tickets: TicketCounter,
}

impl TransactionState {
    pub fn reduce_in_place(&mut self, action: TransactionAction) {
        match action {
            TransactionAction::SetField(TransactionField::Imei, raw) => {
                self.form.imei = sanitize_imei_input(&raw);
            }
            TransactionAction::SetField(field, value) => {
                self.form.set(field, value);
            }
            TransactionAction::Submit => {
                if !self.can_submit() {
                    tracing::debug!("transaction submit ignored");
                    return;
                }
                let ticket = self.tickets.next();
                self.status.begin(ticket);
                self.submitted = Some(self.form.clone());
            }
            TransactionAction::Registered { ticket, receipt } => {
                if self.status.resolve(ticket, receipt) {
                    tracing::info!(ticket, "transaction registered");
                }
            }
            TransactionAction::Rejected { ticket, reason } => {
                if self.status.fail(ticket, reason) {
                    tracing::warn!(ticket, "transaction rejected");
                }
            }
            TransactionAction::Reset => {
                self.form = TransactionForm::default();
                self.status.reset();
                self.submitted = None;
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        validate_transaction(&self.form)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.status.is_pending()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_pending()
    }

    pub fn pending_request(&self) -> Option<PendingTransaction> {
        let ticket = self.status.pending_ticket()?;
        let form = self.submitted.clone()?;
        Some(PendingTransaction { ticket, form })
    }

    pub fn can_reset(&self) -> bool {
        self.status.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TransactionState {
        let mut state = TransactionState::default();
        let values = [
            (TransactionField::SellerName, "Jane Smith"),
            (TransactionField::SellerNationalId, "AB123456"),
            (TransactionField::BuyerName, "John Doe"),
            (TransactionField::BuyerNationalId, "CD654321"),
            (TransactionField::Imei, "356789012345678"),
        ];
        for (field, value) in values {
            state.reduce_in_place(TransactionAction::SetField(field, value.to_string()));
        }
        state
    }

    #[test]
    fn test_imei_field_is_sanitized() {
        let mut state = TransactionState::default();
        state.reduce_in_place(TransactionAction::SetField(
            TransactionField::Imei,
            "3567-8901-2345-6789-99".to_string(),
        ));
        assert_eq!(state.form.imei, "356789012345678");

        // Other fields are stored verbatim
        state.reduce_in_place(TransactionAction::SetField(
            TransactionField::SellerName,
            "  Jane 2 ".to_string(),
        ));
        assert_eq!(state.form.seller_name, "  Jane 2 ");
    }

    #[test]
    fn test_fourteen_digit_imei_keeps_submit_disabled() {
        let mut state = filled();
        state.reduce_in_place(TransactionAction::SetField(
            TransactionField::Imei,
            "35678901234567".to_string(),
        ));
        assert!(!state.can_submit());

        state.reduce_in_place(TransactionAction::Submit);
        assert!(state.status.is_idle());
    }

    #[test]
    fn test_submit_snapshots_form() {
        let mut state = filled();
        state.reduce_in_place(TransactionAction::Submit);
        assert!(state.is_submitting());
        assert!(!state.can_submit());

        state.reduce_in_place(TransactionAction::SetField(
            TransactionField::BuyerName,
            "Someone Else".to_string(),
        ));
        let pending = state.pending_request().unwrap();
        assert_eq!(pending.form.buyer_name, "John Doe");
    }

    #[test]
    fn test_registered_then_reset_clears_everything() {
        let mut state = filled();
        state.reduce_in_place(TransactionAction::Submit);
        let ticket = state.pending_request().unwrap().ticket;
        state.reduce_in_place(TransactionAction::Registered {
            ticket,
            receipt: TransactionReceipt {
                transaction_id: "TXN-12345678".to_string(),
            },
        });
        assert!(state.can_reset());
        assert_eq!(
            state.status.ready().map(|r| r.transaction_id.as_str()),
            Some("TXN-12345678")
        );

        state.reduce_in_place(TransactionAction::Reset);
        assert!(state.form.is_empty());
        assert!(state.status.is_idle());
        assert!(state.pending_request().is_none());
    }

    #[test]
    fn test_rejection_carries_reason() {
        let mut state = filled();
        state.reduce_in_place(TransactionAction::Submit);
        let ticket = state.pending_request().unwrap().ticket;
        state.reduce_in_place(TransactionAction::Rejected {
            ticket,
            reason: "Transaction validation failed".to_string(),
        });
        assert_eq!(state.status.failure(), Some("Transaction validation failed"));
    }

    #[test]
    fn test_late_rejection_after_reset_is_dropped() {
        let mut state = filled();
        state.reduce_in_place(TransactionAction::Submit);
        let ticket = state.pending_request().unwrap().ticket;
        state.reduce_in_place(TransactionAction::Reset);

        state.reduce_in_place(TransactionAction::Rejected {
            ticket,
            reason: "late".to_string(),
        });
        assert!(state.status.is_idle());
    }
}
