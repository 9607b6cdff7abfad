//! New manufactured home registration validation.

use mhr_model::{NewRegistration, ValidationIssue, ValidationReport};

use crate::checks::{charset, description, doc_id, owners};
use crate::context::ValidationContext;
use crate::messages;
use crate::store::{RegistrationStore, StoreError};
use crate::validators::{check_location, report_internal_fault};

/// Validate a new home registration.
pub fn validate_new_registration(
    request: &NewRegistration,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    if let Err(err) = run(request, ctx, store, &mut report) {
        report_internal_fault(&mut report, &err, messages::VALIDATOR_ERROR);
    }
    report
}

fn run(
    request: &NewRegistration,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    if ctx.is_staff {
        report.extend(doc_id::check_document_id(request.document_id.as_deref(), store)?);
        if request.owner_groups.is_empty() {
            report.add(
                ValidationIssue::structural(messages::OWNER_GROUPS_REQUIRED)
                    .with_field("ownerGroups"),
            );
        }
    }
    report.extend(charset::check_submitting_party(request.submitting_party.as_ref()));
    let owner_count = request.owner_groups.len() as i32;
    report.extend(owners::check_owner_groups(
        &request.owner_groups,
        true,
        None,
        &[],
        owner_count,
    ));
    report.extend(owners::check_owner_party_types(
        &request.owner_groups,
        true,
        false,
        &[],
        owner_count,
    ));
    if let Some(location) = request.location.as_ref() {
        check_location(report, location);
    }
    report.extend(description::check_description(request.description.as_ref(), ctx));
    Ok(())
}
