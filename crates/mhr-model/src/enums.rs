//! Type-safe enumerations for manufactured home registry concepts.
//!
//! These enums provide compile-time type safety for registry type codes
//! that are represented as strings in registration payloads and the
//! registry database.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registration type for a base registration or a change registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationType {
    /// New manufactured home registration.
    Mhreg,
    /// Transfer due to sale or gift.
    Trans,
    /// Transfer to surviving joint tenant(s).
    Trand,
    /// Transfer to administrator - grant of administration.
    TransAdmin,
    /// Transfer to executor - grant of probate with will.
    TransWill,
    /// Transfer to executor - estate under $25,000 with will.
    TransAffidavit,
    /// Residential exemption.
    ExemptionRes,
    /// Non-residential exemption.
    ExemptionNonRes,
    /// Transport permit.
    Permit,
    /// Transport permit extension.
    PermitExtension,
    /// Staff administrative registration (corrections, unit notes).
    RegStaffAdmin,
}

impl RegistrationType {
    /// Returns the registry type code as it appears in payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::Mhreg => "MHREG",
            RegistrationType::Trans => "TRANS",
            RegistrationType::Trand => "TRAND",
            RegistrationType::TransAdmin => "TRANS_ADMIN",
            RegistrationType::TransWill => "TRANS_WILL",
            RegistrationType::TransAffidavit => "TRANS_AFFIDAVIT",
            RegistrationType::ExemptionRes => "EXEMPTION_RES",
            RegistrationType::ExemptionNonRes => "EXEMPTION_NON_RES",
            RegistrationType::Permit => "PERMIT",
            RegistrationType::PermitExtension => "PERMIT_EXTENSION",
            RegistrationType::RegStaffAdmin => "REG_STAFF_ADMIN",
        }
    }

    /// Returns true for any transfer due to death registration type.
    pub fn is_death_transfer(&self) -> bool {
        matches!(
            self,
            RegistrationType::Trand
                | RegistrationType::TransAdmin
                | RegistrationType::TransWill
                | RegistrationType::TransAffidavit
        )
    }

    /// Returns true for the transfer due to death types restricted to staff.
    /// TRAND (surviving joint tenant) may be submitted by non-staff.
    pub fn is_staff_death_transfer(&self) -> bool {
        matches!(
            self,
            RegistrationType::TransAdmin
                | RegistrationType::TransWill
                | RegistrationType::TransAffidavit
        )
    }

    /// Returns true for residential or non-residential exemptions.
    pub fn is_exemption(&self) -> bool {
        matches!(
            self,
            RegistrationType::ExemptionRes | RegistrationType::ExemptionNonRes
        )
    }

    /// Returns true for transport permit registration types.
    pub fn is_permit(&self) -> bool {
        matches!(
            self,
            RegistrationType::Permit | RegistrationType::PermitExtension
        )
    }
}

impl fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration document type. Only the document types that participate in
/// validation rules are modelled; the registry defines many more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Caution.
    Cau,
    /// Continued caution.
    Cauc,
    /// Extension to caution.
    Caue,
    /// Rescind exemption.
    Exre,
    /// Residential exemption note.
    Exrs,
    /// Non-residential exemption note.
    Exnr,
    /// Cancel note.
    Ncan,
    /// Notice of caution.
    Ncon,
    /// Public note.
    Npub,
    /// Notice of redemption.
    Nred,
    /// Public amendment.
    Puba,
    /// Registry correction.
    Regc,
    /// Restraining order.
    Rest,
    /// Statutory declaration.
    Stat,
    /// Tax sale notice.
    Taxn,
    /// Transfer - quit claim.
    TransQuitClaim,
    /// Transfer - receivership.
    TransReceivership,
    /// Transfer - severing joint tenancy grant.
    TransSeverGrant,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cau => "CAU",
            DocumentType::Cauc => "CAUC",
            DocumentType::Caue => "CAUE",
            DocumentType::Exre => "EXRE",
            DocumentType::Exrs => "EXRS",
            DocumentType::Exnr => "EXNR",
            DocumentType::Ncan => "NCAN",
            DocumentType::Ncon => "NCON",
            DocumentType::Npub => "NPUB",
            DocumentType::Nred => "NRED",
            DocumentType::Puba => "PUBA",
            DocumentType::Regc => "REGC",
            DocumentType::Rest => "REST",
            DocumentType::Stat => "STAT",
            DocumentType::Taxn => "TAXN",
            DocumentType::TransQuitClaim => "TRANS_QUIT_CLAIM",
            DocumentType::TransReceivership => "TRANS_RECEIVERSHIP",
            DocumentType::TransSeverGrant => "TRANS_SEVER_GRANT",
        }
    }

    /// Unit note document types that freeze a home while the note is active.
    pub fn is_freezing_note(&self) -> bool {
        matches!(
            self,
            DocumentType::Taxn | DocumentType::Ncon | DocumentType::Rest
        )
    }

    /// Unit note document types permitted on a home in a non-active,
    /// non-cancelled state.
    pub fn allowed_when_inactive(&self) -> bool {
        matches!(
            self,
            DocumentType::Npub | DocumentType::Ncon | DocumentType::Ncan | DocumentType::Nred
        )
    }

    /// Document types a Cancel Note (NCAN) registration may cancel.
    pub fn cancellable_by_ncan(&self) -> bool {
        matches!(
            self,
            DocumentType::Cau
                | DocumentType::Cauc
                | DocumentType::Caue
                | DocumentType::Ncon
                | DocumentType::Npub
                | DocumentType::Regc
                | DocumentType::Rest
        )
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration status of a manufactured home record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Active,
    Exempt,
    Cancelled,
    /// Legacy intermediate state carried over from the prior registry system.
    Historical,
    Draft,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Active => "ACTIVE",
            RegistrationStatus::Exempt => "EXEMPT",
            RegistrationStatus::Cancelled => "CANCELLED",
            RegistrationStatus::Historical => "HISTORICAL",
            RegistrationStatus::Draft => "DRAFT",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an owner group or embedded record (location, description).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerStatus {
    Active,
    Exempt,
    Previous,
}

/// Status of an embedded location or description record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Active,
    Historical,
    Draft,
}

/// Status of a unit note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteStatus {
    Active,
    Expired,
    Cancelled,
}

/// Owner group tenancy type.
///
/// - **SOLE**: one owner, no co-ownership.
/// - **JOINT**: undivided co-ownership with survivorship.
/// - **COMMON**: divided fractional interests (tenants in common).
/// - **NA**: not applicable - personal representative holdings
///   (executors, administrators, trustees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenancyType {
    Sole,
    Joint,
    Common,
    Na,
}

impl TenancyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenancyType::Sole => "SOLE",
            TenancyType::Joint => "JOINT",
            TenancyType::Common => "COMMON",
            TenancyType::Na => "NA",
        }
    }
}

impl fmt::Display for TenancyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TenancyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SOLE" => Ok(TenancyType::Sole),
            "JOINT" | "JT" => Ok(TenancyType::Joint),
            "COMMON" | "TC" => Ok(TenancyType::Common),
            "NA" => Ok(TenancyType::Na),
            _ => Err(format!("Unknown tenancy type: {s}")),
        }
    }
}

/// Owner party type.
///
/// OWNER_IND and OWNER_BUS are beneficial owners; the remaining types are
/// personal representatives acting in a fiduciary capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyType {
    OwnerInd,
    OwnerBus,
    Executor,
    Administrator,
    Trustee,
    Trust,
}

impl PartyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyType::OwnerInd => "OWNER_IND",
            PartyType::OwnerBus => "OWNER_BUS",
            PartyType::Executor => "EXECUTOR",
            PartyType::Administrator => "ADMINISTRATOR",
            PartyType::Trustee => "TRUSTEE",
            PartyType::Trust => "TRUST",
        }
    }

    /// Returns true for a beneficial owner (individual or business).
    pub fn is_beneficial_owner(&self) -> bool {
        matches!(self, PartyType::OwnerInd | PartyType::OwnerBus)
    }

    /// Returns true for the personal representative types that must be
    /// uniform within an owner group (TRUST is excluded: it never mixes
    /// into representative groups).
    pub fn is_representative(&self) -> bool {
        matches!(
            self,
            PartyType::Executor | PartyType::Administrator | PartyType::Trustee
        )
    }

    /// Returns true for party types that require an owner description.
    pub fn requires_description(&self) -> bool {
        matches!(
            self,
            PartyType::Executor | PartyType::Administrator | PartyType::Trustee | PartyType::Trust
        )
    }
}

impl fmt::Display for PartyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Location type of a manufactured home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Dealer or manufacturer lot.
    Manufacturer,
    /// Manufactured home park.
    MhPark,
    /// Indian reserve land.
    Reserve,
    /// Strata lot.
    Strata,
    /// Other land: identified by PID or legal description.
    Other,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Manufacturer => "MANUFACTURER",
            LocationType::MhPark => "MH_PARK",
            LocationType::Reserve => "RESERVE",
            LocationType::Strata => "STRATA",
            LocationType::Other => "OTHER",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MANUFACTURER" => Ok(LocationType::Manufacturer),
            "MH_PARK" => Ok(LocationType::MhPark),
            "RESERVE" => Ok(LocationType::Reserve),
            "STRATA" => Ok(LocationType::Strata),
            "OTHER" => Ok(LocationType::Other),
            _ => Err(format!("Unknown location type: {s}")),
        }
    }
}
