//! Manufactured home location.
//!
//! A location carries type-specific fields (dealer lot, park, reserve, or
//! LTSA land description) and optional tax certificate information used by
//! transport permit rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{LocationType, RecordStatus};
use crate::party::Address;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub location_id: Option<u32>,
    #[serde(default)]
    pub status: Option<RecordStatus>,
    pub location_type: Option<LocationType>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub leave_province: bool,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default)]
    pub park_name: Option<String>,
    #[serde(default)]
    pub pad: Option<String>,
    #[serde(default)]
    pub band_name: Option<String>,
    #[serde(default)]
    pub reserve_number: Option<String>,
    #[serde(default)]
    pub pid_number: Option<String>,
    #[serde(default)]
    pub lot: Option<String>,
    #[serde(default)]
    pub parcel: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub district_lot: Option<String>,
    #[serde(default)]
    pub part_of: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub township: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub meridian: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub land_district: Option<String>,
    #[serde(default)]
    pub legal_description: Option<String>,
    #[serde(default)]
    pub tax_certificate: bool,
    #[serde(default)]
    pub tax_expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exception_plan: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}

impl Location {
    pub fn has_dealer_name(&self) -> bool {
        present(&self.dealer_name)
    }

    pub fn has_park_name(&self) -> bool {
        present(&self.park_name)
    }

    pub fn has_pad(&self) -> bool {
        present(&self.pad)
    }

    pub fn has_band_name(&self) -> bool {
        present(&self.band_name)
    }

    pub fn has_reserve_number(&self) -> bool {
        present(&self.reserve_number)
    }

    pub fn has_pid_number(&self) -> bool {
        present(&self.pid_number)
    }

    pub fn has_lot(&self) -> bool {
        present(&self.lot)
    }

    pub fn has_plan(&self) -> bool {
        present(&self.plan)
    }

    pub fn has_land_district(&self) -> bool {
        present(&self.land_district)
    }

    pub fn has_district_lot(&self) -> bool {
        present(&self.district_lot)
    }

    /// Returns true when any LTSA land description detail is populated.
    pub fn has_ltsa_details(&self) -> bool {
        present(&self.lot)
            || present(&self.parcel)
            || present(&self.block)
            || present(&self.district_lot)
            || present(&self.part_of)
            || present(&self.section)
            || present(&self.township)
            || present(&self.range)
            || present(&self.plan)
            || present(&self.meridian)
            || present(&self.pid_number)
            || present(&self.legal_description)
            || present(&self.land_district)
    }

    /// Normalize for the identical-location comparison: the status, location
    /// id, and leave-province flag never count as a change, nor does a blank
    /// postal code.
    pub fn normalized(&self) -> Location {
        let mut normalized = self.clone();
        normalized.status = None;
        normalized.location_id = None;
        normalized.leave_province = false;
        if let Some(address) = normalized.address.as_mut()
            && address.postal_code_blank()
        {
            address.postal_code = None;
        }
        normalized
    }
}
