//! Owners and owner groups.
//!
//! An owner group is the unit of tenancy: a SOLE group holds one owner, a
//! JOINT group holds two or more with survivorship, COMMON groups each hold
//! one owner with a fractional interest, and NA groups hold personal
//! representatives (executors, administrators, trustees).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{OwnerStatus, PartyType, TenancyType};
use crate::party::{Address, PersonName};

/// A registered owner or personal representative within an owner group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub individual_name: Option<PersonName>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub party_type: Option<PartyType>,
    /// Required for personal representative party types: describes the
    /// capacity (e.g. "EXECUTOR OF THE ESTATE OF ...").
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub death_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub death_certificate_number: Option<String>,
    /// Corporation number evidencing dissolution of a deceased business owner.
    #[serde(default)]
    pub death_corp_number: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl Owner {
    /// Effective party type; owners without an explicit type are beneficial
    /// owners.
    pub fn effective_party_type(&self) -> PartyType {
        self.party_type.unwrap_or({
            if self.organization_name.is_some() {
                PartyType::OwnerBus
            } else {
                PartyType::OwnerInd
            }
        })
    }

    pub fn is_business(&self) -> bool {
        self.organization_name
            .as_deref()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false)
    }

    /// Name equality on all components, used to detect owners carried over
    /// between a deleted and an added group.
    pub fn same_name(&self, other: &Owner) -> bool {
        match (&self.individual_name, &other.individual_name) {
            (Some(a), Some(b)) => {
                a.first == b.first
                    && a.last == b.last
                    && a.middle.clone().unwrap_or_default() == b.middle.clone().unwrap_or_default()
            }
            _ => match (&self.organization_name, &other.organization_name) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Name and address equality, used to detect unchanged owner groups.
    pub fn same_name_and_address(&self, other: &Owner) -> bool {
        let address_match = match (&self.address, &other.address) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        address_match && self.same_name(other)
    }
}

/// A group of owners holding an interest in the home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerGroup {
    #[serde(default)]
    pub group_id: u32,
    #[serde(rename = "type")]
    pub tenancy_type: TenancyType,
    #[serde(default)]
    pub status: Option<OwnerStatus>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub interest_numerator: u32,
    #[serde(default)]
    pub interest_denominator: u32,
    #[serde(default)]
    pub owners: Vec<Owner>,
}

impl OwnerGroup {
    /// Returns true when the group is active or exempt (still of record).
    pub fn is_of_record(&self) -> bool {
        matches!(
            self.status,
            Some(OwnerStatus::Active) | Some(OwnerStatus::Exempt)
        )
    }

    pub fn is_active(&self) -> bool {
        self.status == Some(OwnerStatus::Active)
    }

    /// Returns true when every owner in the group has the same set of names
    /// and addresses as `other` (order independent).
    pub fn same_owners(&self, other: &OwnerGroup) -> bool {
        if self.owners.len() != other.owners.len() {
            return false;
        }
        self.owners.iter().all(|owner| {
            other
                .owners
                .iter()
                .any(|candidate| owner.same_name_and_address(candidate))
        })
    }
}
