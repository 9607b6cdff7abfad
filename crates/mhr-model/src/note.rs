//! Unit notes recorded against a home.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DocumentType, NoteStatus};
use crate::party::Party;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub document_type: DocumentType,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub status: Option<NoteStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub giving_notice_party: Option<Party>,
    /// Expiry for permits and caution notes; destroyed date for
    /// non-residential exemptions.
    #[serde(default)]
    pub expiry_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_date_time: Option<DateTime<Utc>>,
}

impl Note {
    pub fn is_active(&self) -> bool {
        self.status == Some(NoteStatus::Active)
    }

    /// Returns true when the note carries an expiry that has elapsed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date_time
            .map(|expiry| expiry <= now)
            .unwrap_or(false)
    }
}
