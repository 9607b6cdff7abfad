//! Staff document id and draft staleness checks.

use mhr_model::ValidationIssue;

use crate::checks::checksum::checksum_valid;
use crate::messages;
use crate::store::{RegistrationStore, StoreError};

/// Validate a manually issued document id: present, checksum valid, and not
/// already registered. Applies to staff submissions only; the caller gates.
pub fn check_document_id(
    doc_id: Option<&str>,
    store: &dyn RegistrationStore,
) -> Result<Vec<ValidationIssue>, StoreError> {
    let Some(doc_id) = doc_id.map(str::trim).filter(|id| !id.is_empty()) else {
        return Ok(vec![ValidationIssue::structural(messages::DOC_ID_REQUIRED)
            .with_field("documentId")]);
    };
    let mut issues = Vec::new();
    if !checksum_valid(doc_id) {
        issues.push(
            ValidationIssue::structural(messages::DOC_ID_INVALID_CHECKSUM).with_field("documentId"),
        );
    }
    if store.count_by_document_id(doc_id)? > 0 {
        issues.push(ValidationIssue::consistency(messages::DOC_ID_EXISTS).with_field("documentId"));
    }
    Ok(issues)
}

/// Reject a draft that was saved before other registrations changed the
/// home. Such a draft proposes changes against state that no longer exists.
pub fn check_draft(
    draft_number: Option<&str>,
    store: &dyn RegistrationStore,
) -> Result<Vec<ValidationIssue>, StoreError> {
    let Some(draft_number) = draft_number.map(str::trim).filter(|num| !num.is_empty()) else {
        return Ok(Vec::new());
    };
    if let Some(draft) = store.find_draft_by_number(draft_number)?
        && draft.stale_count > 0
    {
        return Ok(vec![ValidationIssue::state(messages::DRAFT_NOT_ALLOWED)]);
    }
    Ok(Vec::new())
}
