//! Residential and non-residential exemption validation.

use mhr_model::{DocumentType, ExemptionRequest, Registration, RegistrationType, ValidationIssue,
    ValidationReport};

use crate::checks::{charset, doc_id, ppr, state};
use crate::context::ValidationContext;
use crate::messages;
use crate::store::{RegistrationStore, StoreError};
use crate::validators::report_internal_fault;

/// Validate an exemption request against the home's current snapshot.
pub fn validate_exemption(
    registration: &Registration,
    request: &ExemptionRequest,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    if let Err(err) = run(registration, request, ctx, store, &mut report) {
        report_internal_fault(&mut report, &err, messages::VALIDATOR_ERROR);
    }
    report
}

fn run(
    registration: &Registration,
    request: &ExemptionRequest,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    if ctx.is_staff {
        report.extend(doc_id::check_document_id(request.document_id.as_deref(), store)?);
    } else {
        report.extend(ppr::check_ppr_lien(
            &registration.mhr_number,
            RegistrationType::ExemptionRes,
            store,
        )?);
    }
    if let Some(location) = registration.active_location()
        && (location.has_park_name() || location.has_dealer_name())
    {
        report.add(ValidationIssue::state(messages::LOCATION_NOT_ALLOWED));
    }
    report.extend(charset::check_submitting_party(request.submitting_party.as_ref()));
    let reg_type = request.exemption_type();
    report.extend(state::check_registration_state(registration, ctx, reg_type, None));
    report.extend(doc_id::check_draft(request.draft_number.as_deref(), store)?);
    if let Some(note) = request.note.as_ref() {
        if !matches!(note.document_type, DocumentType::Exrs | DocumentType::Exnr) {
            report.add(
                ValidationIssue::consistency(messages::NOTE_DOC_TYPE_INVALID)
                    .with_field("note.documentType"),
            );
        }
        if let Some(notice) = note.giving_notice_party.as_ref() {
            if notice.address.is_none() {
                report.add(
                    ValidationIssue::structural(messages::NOTICE_ADDRESS_REQUIRED)
                        .with_field("note.givingNoticeParty.address"),
                );
            }
            if notice.person_name.is_none() && notice.business_name.is_none() {
                report.add(
                    ValidationIssue::structural(messages::NOTICE_NAME_REQUIRED)
                        .with_field("note.givingNoticeParty"),
                );
            }
        }
        if let Some(expiry) = note.expiry_date_time {
            if !request.non_residential || note.document_type != DocumentType::Exnr {
                report.add(ValidationIssue::consistency(messages::DESTROYED_EXRS));
            } else if expiry > ctx.now {
                report.add(
                    ValidationIssue::consistency(messages::DESTROYED_FUTURE)
                        .with_field("note.expiryDateTime"),
                );
            }
        }
    }
    Ok(())
}
