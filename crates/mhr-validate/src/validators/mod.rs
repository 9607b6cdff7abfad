//! Registration validators, one per registration category.
//!
//! Each validator is the single entry point for its category. It runs every
//! applicable rule, accumulating issues in submission order rather than
//! stopping at the first failure. Store failures abort the inner run; the
//! entry point logs them and degrades to a generic issue so a fault can
//! never validate a request by accident.

mod admin;
mod exemption;
mod new_registration;
mod permit;
mod transfer;

pub use admin::validate_admin_registration;
pub use exemption::validate_exemption;
pub use new_registration::validate_new_registration;
pub use permit::validate_permit;
pub use transfer::validate_transfer;

use mhr_model::{Location, OwnerGroup, Registration, ValidationIssue, ValidationReport};

use crate::checks::location;
use crate::store::{ParcelLookup, StoreError};

/// Number of owner groups of record after the change: existing minus
/// deleted plus added. Signed because an over-deleting request can go
/// negative before other rules reject it.
fn active_group_count(
    add_groups: &[OwnerGroup],
    delete_groups: &[OwnerGroup],
    registration: &Registration,
) -> i32 {
    add_groups.len() as i32 - delete_groups.len() as i32
        + registration.existing_group_count() as i32
}

/// Run the per-type required and forbidden field checks on a location.
fn check_location(report: &mut ValidationReport, location: &Location) {
    report.extend(location::check_required(location));
    report.extend(location::check_allowed(location));
}

/// Verify a location PID against the land title register. The lookup fails
/// closed: an unavailable service reports the same issue as an unknown PID.
fn check_location_pid(
    report: &mut ValidationReport,
    location: &Location,
    parcels: &dyn ParcelLookup,
) {
    let Some(pid) = location.pid_number.as_deref().filter(|pid| !pid.trim().is_empty()) else {
        return;
    };
    match parcels.pid_exists(pid) {
        Ok(true) => {}
        Ok(false) => {
            report.add(
                ValidationIssue::external(crate::messages::LOCATION_PID_INVALID)
                    .with_field("location.pidNumber"),
            );
        }
        Err(err) => {
            tracing::warn!(pid, error = %err, "PID lookup failed");
            report.add(
                ValidationIssue::external(crate::messages::LOCATION_PID_INVALID)
                    .with_field("location.pidNumber"),
            );
        }
    }
}

/// Log a store failure and degrade to the generic internal issue.
fn report_internal_fault(report: &mut ValidationReport, err: &StoreError, message: &str) {
    tracing::error!(error = %err, "validation aborted on store failure");
    report.add(ValidationIssue::internal(message));
}
