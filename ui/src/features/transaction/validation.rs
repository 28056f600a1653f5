use crate::features::transaction::types::TransactionForm;
use crate::features::verification::IMEI_LENGTH;

/// All five fields filled (after trimming) and a fifteen-character IMEI.
///
/// No cross-field checks: seller and buyer may be the same person, and the
/// IMEI is not looked up.
pub fn validate_transaction(form: &TransactionForm) -> bool {
    form.fields().iter().all(|value| !value.trim().is_empty())
        && form.imei.chars().count() == IMEI_LENGTH
}

/// First unmet requirement, phrased for the form footer.
pub fn transaction_validation_message(form: &TransactionForm) -> Option<String> {
    if form.seller_name.trim().is_empty() {
        return Some("Please enter the seller's full name".to_string());
    }

    if form.seller_national_id.trim().is_empty() {
        return Some("Please enter the seller's national ID".to_string());
    }

    if form.imei.trim().is_empty() {
        return Some("Please enter the IMEI of the smartphone being sold".to_string());
    }

    let imei_length = form.imei.chars().count();
    if imei_length != IMEI_LENGTH {
        return Some(format!(
            "IMEI must be {} digits ({} entered)",
            IMEI_LENGTH, imei_length
        ));
    }

    if form.buyer_name.trim().is_empty() {
        return Some("Please enter the buyer's full name".to_string());
    }

    if form.buyer_national_id.trim().is_empty() {
        return Some("Please enter the buyer's national ID".to_string());
    }

    None
}
