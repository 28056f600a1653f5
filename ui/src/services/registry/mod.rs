//! Device registry seam
//!
//! The screens talk to a `DeviceRegistry`. The only implementation is the
//! in-browser simulation; there is no backend behind it.

mod simulated;

pub use simulated::*;

use async_trait::async_trait;

use crate::features::transaction::{TransactionForm, TransactionReceipt};
use crate::features::verification::{Imei, VerificationResult};
use crate::services::errors::RegistryError;

#[async_trait(?Send)]
pub trait DeviceRegistry {
    /// Looks up an IMEI's status.
    async fn verify_imei(&self, imei: &Imei) -> Result<VerificationResult, RegistryError>;

    /// Records a change of ownership.
    async fn register_transaction(
        &self,
        form: &TransactionForm,
    ) -> Result<TransactionReceipt, RegistryError>;
}
