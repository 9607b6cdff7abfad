//! Request payloads, one per registration category.
//!
//! These are the proposed documents a caller submits for validation. They
//! are constructed once at the validation boundary (deserialized from the
//! API payload) and treated as immutable by every rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::description::HomeDescription;
use crate::enums::{DocumentType, RegistrationType};
use crate::location::Location;
use crate::note::Note;
use crate::owner::OwnerGroup;
use crate::party::Party;

/// New manufactured home registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    #[serde(default)]
    pub mhr_number: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub client_reference_id: Option<String>,
    #[serde(default)]
    pub submitting_party: Option<Party>,
    #[serde(default)]
    pub owner_groups: Vec<OwnerGroup>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub description: Option<HomeDescription>,
}

/// Ownership transfer, including the transfer due to death subtypes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[serde(default)]
    pub mhr_number: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub registration_type: Option<RegistrationType>,
    #[serde(default)]
    pub submitting_party: Option<Party>,
    #[serde(default)]
    pub add_owner_groups: Vec<OwnerGroup>,
    #[serde(default)]
    pub delete_owner_groups: Vec<OwnerGroup>,
    #[serde(default)]
    pub declared_value: Option<i64>,
    #[serde(default)]
    pub consideration: Option<String>,
    #[serde(default)]
    pub transfer_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transfer_document_type: Option<DocumentType>,
    #[serde(default)]
    pub draft_number: Option<String>,
}

impl TransferRequest {
    /// Effective registration type; a plain transfer when unspecified.
    pub fn effective_type(&self) -> RegistrationType {
        self.registration_type.unwrap_or(RegistrationType::Trans)
    }
}

/// Residential or non-residential exemption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExemptionRequest {
    #[serde(default)]
    pub mhr_number: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub submitting_party: Option<Party>,
    #[serde(default)]
    pub non_residential: bool,
    #[serde(default)]
    pub note: Option<Note>,
    #[serde(default)]
    pub draft_number: Option<String>,
}

impl ExemptionRequest {
    /// The exemption registration type implied by the payload: the
    /// non-residential flag or an EXNR note selects EXEMPTION_NON_RES.
    pub fn exemption_type(&self) -> RegistrationType {
        let exnr_note = self
            .note
            .as_ref()
            .map(|note| note.document_type == DocumentType::Exnr)
            .unwrap_or(false);
        if self.non_residential || exnr_note {
            RegistrationType::ExemptionNonRes
        } else {
            RegistrationType::ExemptionRes
        }
    }
}

/// Transport permit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitRequest {
    #[serde(default)]
    pub mhr_number: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub submitting_party: Option<Party>,
    #[serde(default)]
    pub new_location: Option<Location>,
    #[serde(default)]
    pub land_status_confirmation: bool,
    #[serde(default)]
    pub draft_number: Option<String>,
}

/// Staff administrative registration: corrections and unit notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegistration {
    #[serde(default)]
    pub mhr_number: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub document_type: Option<DocumentType>,
    #[serde(default)]
    pub submitting_party: Option<Party>,
    #[serde(default)]
    pub note: Option<Note>,
    /// Document id of the note being redeemed or cancelled (NRED/NCAN).
    #[serde(default)]
    pub update_document_id: Option<String>,
    /// Legacy alias for `update_document_id` still sent on cancel note
    /// payloads.
    #[serde(default)]
    pub cancel_document_id: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl AdminRegistration {
    /// Effective document type: the top-level value, falling back to the
    /// embedded note's document type.
    pub fn effective_document_type(&self) -> Option<DocumentType> {
        self.document_type
            .or_else(|| self.note.as_ref().map(|note| note.document_type))
    }

    /// Effective document id: the top-level value, falling back to the
    /// embedded note's document id.
    pub fn effective_document_id(&self) -> Option<&str> {
        self.document_id
            .as_deref()
            .or_else(|| self.note.as_ref().and_then(|note| note.document_id.as_deref()))
    }

    /// Document id of the note being redeemed or cancelled, accepting the
    /// legacy `cancelDocumentId` alias.
    pub fn referenced_document_id(&self) -> Option<&str> {
        self.update_document_id
            .as_deref()
            .or(self.cancel_document_id.as_deref())
    }
}
