pub mod imei_verification_form;
pub mod login_form;
pub mod sale_purchase_form;

pub use imei_verification_form::*;
pub use login_form::*;
pub use sale_purchase_form::*;
