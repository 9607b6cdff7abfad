//! Manufactured home description.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;

/// Manufacturer base information for the home.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInformation {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub circa: bool,
}

/// Physical description of the home: year/make/model plus the safety
/// certification (CSA number or engineer inspection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDescription {
    #[serde(default)]
    pub status: Option<RecordStatus>,
    #[serde(default)]
    pub base_information: Option<BaseInformation>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub section_count: Option<u32>,
    #[serde(default)]
    pub csa_number: Option<String>,
    #[serde(default)]
    pub csa_standard: Option<String>,
    #[serde(default)]
    pub engineer_name: Option<String>,
    #[serde(default)]
    pub engineer_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rebuilt_remarks: Option<String>,
    #[serde(default)]
    pub other_remarks: Option<String>,
}

impl HomeDescription {
    pub fn has_csa_number(&self) -> bool {
        self.csa_number
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }
}
