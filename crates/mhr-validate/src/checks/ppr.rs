//! Personal Property Registry lien checks.
//!
//! Certain PPR base registration types registered against a home's serial
//! numbers block transfers, exemptions, and transport permits until the
//! lien is discharged.

use mhr_model::{RegistrationType, ValidationIssue};

use crate::messages;
use crate::store::{RegistrationStore, StoreError};

/// PPR base types blocking transfers and residential exemptions.
const TRANSFER_RESTRICTED: [&str; 11] = [
    "SA_TAX", "TA_TAX", "TM_TAX", "SA_GOV", "TA_GOV", "TM_GOV", "FR", "LT", "ML", "MN", "SG",
];

/// PPR base types blocking transport permits.
const PERMIT_RESTRICTED: [&str; 6] = ["SA_TAX", "TA_TAX", "TM_TAX", "LT", "ML", "MN"];

/// Check for an outstanding PPR lien that blocks the registration type.
/// Staff submissions are exempt; the caller gates.
pub fn check_ppr_lien(
    mhr_number: &str,
    reg_type: RegistrationType,
    store: &dyn RegistrationStore,
) -> Result<Vec<ValidationIssue>, StoreError> {
    let restricted: &[&str] = if reg_type.is_permit() {
        &PERMIT_RESTRICTED
    } else if reg_type == RegistrationType::Trans || reg_type == RegistrationType::ExemptionRes {
        &TRANSFER_RESTRICTED
    } else {
        return Ok(Vec::new());
    };
    if let Some(lien_type) = store.ppr_registration_type(mhr_number)?
        && restricted.contains(&lien_type.as_str())
    {
        return Ok(vec![ValidationIssue::state(messages::PPR_LIEN_EXISTS)]);
    }
    Ok(Vec::new())
}
