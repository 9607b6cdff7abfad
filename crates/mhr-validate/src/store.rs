//! Collaborator traits for registry and land title lookups.
//!
//! Validation is pure over the model types; everything that touches a
//! database or an external service sits behind these traits. Lookups
//! fail closed: a [`StoreError`] surfaces to the orchestrator, which logs
//! it and reports a generic issue instead of letting the request pass.

use mhr_model::Registration;
use thiserror::Error;

/// Failure talking to the registry store or an external service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("registry store unavailable: {0}")]
    Unavailable(String),
    #[error("registry store query failed: {0}")]
    Query(String),
}

/// A saved draft of an in-progress registration.
#[derive(Debug, Clone)]
pub struct Draft {
    pub draft_number: String,
    /// Number of registrations recorded against the home since the draft
    /// was saved. Non-zero means the draft is based on stale state.
    pub stale_count: u32,
}

/// Read-only access to registry records.
pub trait RegistrationStore {
    /// Load the base registration for a home, without its change history.
    fn find_by_mhr_number(&self, mhr_number: &str) -> Result<Option<Registration>, StoreError>;

    /// Load the full snapshot for a home: the base registration with
    /// `change_registrations` populated. Validators run against this view.
    fn find_all_by_mhr_number(&self, mhr_number: &str)
    -> Result<Option<Registration>, StoreError>;

    /// Count registrations recorded under a document id. Used for the
    /// uniqueness check on manually issued document ids.
    fn count_by_document_id(&self, document_id: &str) -> Result<u32, StoreError>;

    /// Load a saved draft by its draft number.
    fn find_draft_by_number(&self, draft_number: &str) -> Result<Option<Draft>, StoreError>;

    /// Count transport permits issued for a home under the given submitting
    /// party name (uppercased).
    fn permit_count(&self, mhr_number: &str, party_name: &str) -> Result<u32, StoreError>;

    /// Personal Property Registry lien base type registered against the
    /// home's serial numbers, if any.
    fn ppr_registration_type(&self, mhr_number: &str) -> Result<Option<String>, StoreError>;
}

/// Land Title and Survey Authority parcel identifier lookup.
pub trait ParcelLookup {
    /// Returns true when the PID identifies a valid, active parcel.
    fn pid_exists(&self, pid_number: &str) -> Result<bool, StoreError>;
}
