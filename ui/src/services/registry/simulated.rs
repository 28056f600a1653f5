use async_trait::async_trait;
use std::rc::Rc;
use tracing::{info, instrument, warn};

use crate::features::transaction::{validate_transaction, TransactionForm, TransactionReceipt};
use crate::features::verification::{classify_imei, Imei, VerificationResult};
use crate::services::config::HynsConfig;
use crate::services::decision::{transaction_accepted, DecisionSource};
use crate::services::errors::RegistryError;
use crate::services::registry::DeviceRegistry;
use crate::services::timing::simulated_delay;
use crate::utils::platform::now_millis;

pub const TRANSACTION_REJECTED_REASON: &str =
    "Please verify all information and ensure the IMEI is valid and not reported as stolen.";

/// Builds `TXN-` plus the last eight digits of a millisecond timestamp.
pub fn transaction_id_from_millis(millis: u64) -> String {
    let digits = millis.to_string();
    let tail = &digits[digits.len().saturating_sub(8)..];
    format!("TXN-{}", tail)
}

/// Fakes the registry with delays, the last-digit rule and a coin flip.
pub struct SimulatedRegistry {
    config: HynsConfig,
    decisions: Rc<dyn DecisionSource>,
}

impl SimulatedRegistry {
    pub fn new(config: HynsConfig, decisions: Rc<dyn DecisionSource>) -> Self {
        Self { config, decisions }
    }
}

#[async_trait(?Send)]
impl DeviceRegistry for SimulatedRegistry {
    #[instrument(skip(self, imei), fields(imei = %imei))]
    async fn verify_imei(&self, imei: &Imei) -> Result<VerificationResult, RegistryError> {
        simulated_delay(self.config.timing.verification_delay_ms).await;
        let result = classify_imei(imei);
        info!(?result, "IMEI lookup finished");
        Ok(result)
    }

    #[instrument(skip(self, form))]
    async fn register_transaction(
        &self,
        form: &TransactionForm,
    ) -> Result<TransactionReceipt, RegistryError> {
        if !validate_transaction(form) {
            warn!("incomplete transaction reached the registry");
            return Err(RegistryError::Rejected {
                reason: "Transaction form is incomplete".to_string(),
            });
        }

        simulated_delay(self.config.timing.transaction_delay_ms).await;

        if transaction_accepted(self.decisions.as_ref(), &self.config.outcomes) {
            let receipt = TransactionReceipt {
                transaction_id: transaction_id_from_millis(now_millis()),
            };
            info!(transaction_id = %receipt.transaction_id, "transaction registered");
            Ok(receipt)
        } else {
            warn!("transaction rejected by simulation");
            Err(RegistryError::Rejected {
                reason: TRANSACTION_REJECTED_REASON.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::decision::ScriptedDecisions;

    fn registry(roll: f64) -> SimulatedRegistry {
        SimulatedRegistry::new(
            HynsConfig::instant(),
            Rc::new(ScriptedDecisions::always(roll)),
        )
    }

    fn complete_form() -> TransactionForm {
        TransactionForm {
            seller_name: "Jane Smith".to_string(),
            seller_national_id: "AB123456".to_string(),
            buyer_name: "John Doe".to_string(),
            buyer_national_id: "CD654321".to_string(),
            imei: "356789012345676".to_string(),
        }
    }

    #[test]
    fn test_transaction_id_format() {
        assert_eq!(transaction_id_from_millis(1_705_312_345_678), "TXN-12345678");
        assert_eq!(transaction_id_from_millis(42), "TXN-42");
    }

    #[tokio::test]
    async fn test_verify_uses_last_digit_rule() {
        let registry = registry(0.0);
        let cases = [
            ("356789012345678", VerificationResult::NotFound),
            ("356789012345676", VerificationResult::Valid),
            ("356789012345679", VerificationResult::Stolen),
        ];
        for (raw, expected) in cases {
            let imei = Imei::parse(raw).unwrap();
            assert_eq!(registry.verify_imei(&imei).await, Ok(expected));
        }
    }

    #[tokio::test]
    async fn test_accepted_transaction_gets_receipt() {
        let receipt = registry(0.1)
            .register_transaction(&complete_form())
            .await
            .unwrap();
        assert!(receipt.transaction_id.starts_with("TXN-"));
        assert_eq!(receipt.transaction_id.len(), 12);
    }

    #[tokio::test]
    async fn test_rejected_transaction_has_reason() {
        let error = registry(0.95)
            .register_transaction(&complete_form())
            .await
            .unwrap_err();
        assert_eq!(
            error,
            RegistryError::Rejected {
                reason: TRANSACTION_REJECTED_REASON.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_outcome_ignores_imei_status() {
        // A stolen-looking IMEI still goes through when the draw says so
        let mut form = complete_form();
        form.imei = "356789012345679".to_string();
        assert!(registry(0.0).register_transaction(&form).await.is_ok());
    }

    #[tokio::test]
    async fn test_incomplete_form_is_rejected_without_a_draw() {
        let decisions = Rc::new(ScriptedDecisions::new([0.0, 0.99]));
        let registry = SimulatedRegistry::new(HynsConfig::instant(), decisions.clone());

        let mut form = complete_form();
        form.buyer_name.clear();
        assert!(registry.register_transaction(&form).await.is_err());

        // The first scripted draw is still unused
        assert_eq!(decisions.roll(), 0.0);
    }
}
