//! Staff administrative registration validation: registry corrections,
//! unit notes, notices of redemption and cancellation.

use mhr_model::{AdminRegistration, DocumentType, Note, Registration, RegistrationType,
    ValidationIssue, ValidationReport};

use crate::checks::{charset, checksum, location, state};
use crate::context::ValidationContext;
use crate::messages;
use crate::store::{ParcelLookup, RegistrationStore, StoreError};
use crate::validators::{check_location, check_location_pid, report_internal_fault};

/// Validate a staff administrative registration against the home's current
/// snapshot. These registrations are staff-only; the state rules always run
/// with staff privileges.
pub fn validate_admin_registration(
    registration: &Registration,
    request: &AdminRegistration,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    parcels: &dyn ParcelLookup,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    if let Err(err) = run(registration, request, ctx, store, parcels, &mut report) {
        report_internal_fault(&mut report, &err, messages::ADMIN_VALIDATOR_ERROR);
    }
    report
}

fn run(
    registration: &Registration,
    request: &AdminRegistration,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    parcels: &dyn ParcelLookup,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    check_document_id(request, store, report)?;
    report.extend(charset::check_submitting_party(request.submitting_party.as_ref()));
    let doc_type = request.effective_document_type();
    let staff_ctx = ValidationContext {
        is_staff: true,
        ..*ctx
    };
    report.extend(state::check_registration_state(
        registration,
        &staff_ctx,
        RegistrationType::RegStaffAdmin,
        doc_type,
    ));
    check_giving_notice(request.note.as_ref(), doc_type, report);
    match doc_type {
        Some(DocumentType::Nred) => check_note_reference(
            registration,
            request,
            NoteReference::Redemption,
            report,
        ),
        Some(DocumentType::Ncan) => check_note_reference(
            registration,
            request,
            NoteReference::Cancellation,
            report,
        ),
        Some(DocumentType::Stat) => {
            check_admin_location(registration, request, true, &staff_ctx, parcels, report);
        }
        Some(DocumentType::Regc | DocumentType::Puba) => {
            check_admin_location(registration, request, false, &staff_ctx, parcels, report);
            if let Some(note) = request.note.as_ref()
                && note
                    .remarks
                    .as_deref()
                    .map(|remarks| remarks.trim().is_empty())
                    .unwrap_or(true)
            {
                report.add(
                    ValidationIssue::structural(messages::REMARKS_REQUIRED)
                        .with_field("note.remarks"),
                );
            }
        }
        _ => {}
    }
    Ok(())
}

/// A document id is required for every admin registration document type.
fn check_document_id(
    request: &AdminRegistration,
    store: &dyn RegistrationStore,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    let Some(doc_id) = request
        .effective_document_id()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    else {
        report.add(ValidationIssue::structural(messages::DOC_ID_REQUIRED).with_field("documentId"));
        return Ok(());
    };
    if !checksum::checksum_valid(doc_id) {
        report.add(
            ValidationIssue::structural(messages::DOC_ID_INVALID_CHECKSUM)
                .with_field("documentId"),
        );
    }
    if store.count_by_document_id(doc_id)? > 0 {
        report.add(ValidationIssue::consistency(messages::DOC_ID_EXISTS).with_field("documentId"));
    }
    Ok(())
}

fn check_giving_notice(
    note: Option<&Note>,
    doc_type: Option<DocumentType>,
    report: &mut ValidationReport,
) {
    let Some(note) = note else {
        return;
    };
    if doc_type == Some(DocumentType::Nred) && note.giving_notice_party.is_none() {
        report.add(
            ValidationIssue::structural(messages::NOTICE_REQUIRED)
                .with_field("note.givingNoticeParty"),
        );
    } else if let Some(notice) = note.giving_notice_party.as_ref() {
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
}

/// Which registration references an existing note by document id.
enum NoteReference {
    /// Notice of redemption: only a TAXN note may be redeemed.
    Redemption,
    /// Cancel note: limited to the cancellable note document types.
    Cancellation,
}

fn check_note_reference(
    registration: &Registration,
    request: &AdminRegistration,
    reference: NoteReference,
    report: &mut ValidationReport,
) {
    let Some(update_doc_id) = request
        .referenced_document_id()
        .filter(|id| !id.trim().is_empty())
    else {
        report.add(match reference {
            NoteReference::Redemption => {
                ValidationIssue::structural(messages::UPDATE_DOCUMENT_ID_REQUIRED)
                    .with_field("updateDocumentId")
            }
            NoteReference::Cancellation => {
                ValidationIssue::structural(messages::NCAN_DOCUMENT_ID_REQUIRED)
                    .with_field("updateDocumentId")
            }
        });
        return;
    };
    let note = registration.find_cancel_note(update_doc_id);
    match note {
        None => report.add(match reference {
            NoteReference::Redemption => {
                ValidationIssue::consistency(messages::UPDATE_DOCUMENT_ID_INVALID)
                    .with_field("updateDocumentId")
            }
            NoteReference::Cancellation => {
                ValidationIssue::consistency(messages::NCAN_DOCUMENT_ID_INVALID)
                    .with_field("updateDocumentId")
            }
        }),
        Some(note) if !note.is_active() => report.add(match reference {
            NoteReference::Redemption => {
                ValidationIssue::state(messages::UPDATE_DOCUMENT_ID_STATUS)
            }
            NoteReference::Cancellation => {
                ValidationIssue::state(messages::NCAN_DOCUMENT_ID_STATUS)
            }
        }),
        Some(_) => {}
    }
    if let Some(note) = note {
        match reference {
            NoteReference::Redemption => {
                if note.document_type != DocumentType::Taxn {
                    report.add(ValidationIssue::consistency(messages::NRED_INVALID_TYPE));
                }
            }
            NoteReference::Cancellation => {
                if !note.document_type.cancellable_by_ncan() {
                    report.add(ValidationIssue::consistency(messages::ncan_not_allowed(
                        note.document_type.as_str(),
                    )));
                }
            }
        }
    }
}

/// Location change rules for corrections and statutory declarations.
fn check_admin_location(
    registration: &Registration,
    request: &AdminRegistration,
    required: bool,
    ctx: &ValidationContext,
    parcels: &dyn ParcelLookup,
    report: &mut ValidationReport,
) {
    let Some(new_location) = request.location.as_ref() else {
        if required {
            report.add(ValidationIssue::structural(messages::LOCATION_REQUIRED)
                .with_field("location"));
        }
        return;
    };
    let current_location = registration.active_location();
    check_location(report, new_location);
    if let Some(current) = current_location {
        report.extend(location::check_different(new_location, current));
    }
    report.extend(location::check_tax_certificate(
        new_location,
        current_location,
        ctx,
    ));
    check_location_pid(report, new_location, parcels);
}
