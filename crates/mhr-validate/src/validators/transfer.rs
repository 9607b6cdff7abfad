//! Ownership transfer validation, covering sale/gift transfers and the
//! transfer due to death registration types.

use mhr_model::{DocumentType, Registration, RegistrationType, TransferRequest, ValidationIssue,
    ValidationReport};

use crate::checks::{charset, death, doc_id, owners, ppr, state};
use crate::context::ValidationContext;
use crate::messages;
use crate::store::{RegistrationStore, StoreError};
use crate::validators::{active_group_count, report_internal_fault};

/// Validate an ownership transfer against the home's current snapshot.
pub fn validate_transfer(
    registration: &Registration,
    request: &TransferRequest,
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
    request: &TransferRequest,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    let reg_type = request.effective_type();
    if !ctx.is_staff && reg_type.is_staff_death_transfer() {
        report.add(ValidationIssue::state(messages::REG_STAFF_ONLY));
        return Ok(());
    }
    if ctx.is_staff {
        report.extend(doc_id::check_document_id(request.document_id.as_deref(), store)?);
    } else {
        report.extend(ppr::check_ppr_lien(
            &registration.mhr_number,
            RegistrationType::Trans,
            store,
        )?);
    }
    let group_count = active_group_count(
        &request.add_owner_groups,
        &request.delete_owner_groups,
        registration,
    );
    report.extend(charset::check_submitting_party(request.submitting_party.as_ref()));
    report.extend(owners::check_owner_groups(
        &request.add_owner_groups,
        false,
        Some(registration),
        &request.delete_owner_groups,
        group_count,
    ));
    report.extend(owners::check_owner_party_types(
        &request.add_owner_groups,
        false,
        reg_type.is_staff_death_transfer(),
        &request.delete_owner_groups,
        group_count,
    ));
    report.extend(state::check_registration_state(registration, ctx, reg_type, None));
    report.extend(doc_id::check_draft(request.draft_number.as_deref(), store)?);
    if !request.delete_owner_groups.is_empty() {
        report.extend(owners::check_delete_groups(
            registration,
            &request.delete_owner_groups,
        ));
    }
    if !ctx.is_staff {
        if !request.declared_value.map(|value| value > 0).unwrap_or(false) {
            report.add(
                ValidationIssue::structural(messages::DECLARED_VALUE_REQUIRED)
                    .with_field("declaredValue"),
            );
        }
        if reg_type == RegistrationType::Trans && sale_document_type(request) {
            if request
                .consideration
                .as_deref()
                .map(|value| value.trim().is_empty())
                .unwrap_or(true)
            {
                report.add(
                    ValidationIssue::structural(messages::CONSIDERATION_REQUIRED)
                        .with_field("consideration"),
                );
            }
            if request.transfer_date.is_none() {
                report.add(
                    ValidationIssue::structural(messages::TRANSFER_DATE_REQUIRED)
                        .with_field("transferDate"),
                );
            }
        }
        if !request.delete_owner_groups.is_empty()
            && request.delete_owner_groups.len() != 1
            && ctx.is_qualified_supplier()
            && request.delete_owner_groups.len() != registration.existing_group_count() as usize
        {
            report.add(ValidationIssue::consistency(messages::TRAN_QUALIFIED_DELETE));
        }
    }
    if reg_type != RegistrationType::Trans && request.transfer_document_type.is_some() {
        report.add(
            ValidationIssue::consistency(messages::TRANS_DOC_TYPE_INVALID)
                .with_field("transferDocumentType"),
        );
    }
    if reg_type.is_death_transfer() {
        report.extend(death::check_transfer_death(registration, request, ctx));
    }
    Ok(())
}

/// Consideration and transfer date are required for a sale or gift, which
/// includes the quit claim, receivership, and severing grant variants.
fn sale_document_type(request: &TransferRequest) -> bool {
    match request.transfer_document_type {
        None => true,
        Some(
            DocumentType::TransQuitClaim
            | DocumentType::TransReceivership
            | DocumentType::TransSeverGrant,
        ) => true,
        Some(_) => false,
    }
}
