//! Validation message fragments.
//!
//! Consuming layers match on literal substrings of these fragments to map
//! them to UI messages, so the text (including historical wording) is load
//! bearing and must not change. Every fragment ends with a trailing space so
//! that `ValidationReport::joined` reproduces the legacy concatenated form.

// Document id and draft checks.
pub const DOC_ID_REQUIRED: &str = "Document ID is required for staff registrations. ";
pub const DOC_ID_EXISTS: &str = "Document ID must be unique: provided value already exists. ";
pub const DOC_ID_INVALID_CHECKSUM: &str = "Document ID is invalid: checksum failed. ";
pub const DRAFT_NOT_ALLOWED: &str =
    "The draft for this registration is out of date: delete the draft and resubmit. ";

// Registration state machine.
pub const STATE_NOT_ALLOWED: &str =
    "The MH registration is not in a state where changes are allowed. ";
pub const STATE_FROZEN_AFFIDAVIT: &str =
    "A transfer to a benificiary is pending after an AFFIDAVIT transfer. ";
pub const STATE_FROZEN_NOTE: &str =
    "Registration not allowed: this manufactured home has an active TAXN, NCON, or REST unit note. ";
pub const STATE_FROZEN_PERMIT: &str =
    "Registration not allowed: this manufactured home has an active transport permit. ";
pub const EXEMPT_EXNR_INVALID: &str =
    "Registration not allowed: the home is exempt because of an existing non-residential exemption. ";
pub const EXEMPT_EXRS_INVALID: &str =
    "Residential exemption registration not allowed: the home is already exempt. ";

// Parties and free text.
pub const CHARACTER_SET_UNSUPPORTED: &str =
    "The character set is not supported for {desc} value {value}. ";
pub const SUBMITTING_REQUIRED: &str = "Submitting Party is required for MH registrations. ";

// External collaborators.
pub const PPR_LIEN_EXISTS: &str = "This registration is not allowed to complete as an \
    outstanding Personal Property Registry lien exists on the manufactured home. ";
pub const LOCATION_PID_INVALID: &str =
    "Location PID verification failed: either the PID is invalid or the LTSA service is unavailable. ";

// Home description.
pub const DESCRIPTION_CSA_ENGINEER_REQUIRED: &str =
    "Either a CSA number or engineer information is required for this registration. ";
pub const DESCRIPTION_MAKE_MODEL_REQUIRED: &str =
    "Either description make or description model is required. ";
pub const DESCRIPTION_YEAR_INVALID: &str = "Description manufactured home year invalid: it \
    must be between 1900 and 1 year after the current year. ";
pub const DESCRIPTION_YEAR_REQUIRED: &str = "Description manufactured home year is required. ";

// Owner groups.
pub const OWNER_GROUPS_REQUIRED: &str =
    "At least one owner group is required for staff registrations. ";
pub const ADD_SOLE_OWNER_INVALID: &str =
    "Only one sole owner and only one sole owner group can be added. ";
pub const GROUP_COMMON_INVALID: &str =
    "More than 1 group is required with the Tenants in Common owner group type. ";
pub const GROUP_NUMERATOR_MISSING: &str =
    "The owner group interest numerator is required and must be an integer greater than 0. ";
pub const GROUP_DENOMINATOR_MISSING: &str =
    "The owner group interest denominator is required and must be an integer greater than 0. ";
pub const GROUP_INTEREST_MISMATCH: &str =
    "The owner group interest numerator sum does not equal the interest common denominator. ";
pub const OWNERS_JOINT_INVALID: &str = "The owner group must contain at least 2 owners. ";
pub const OWNERS_COMMON_INVALID: &str = "Each COMMON owner group must contain exactly 1 owner. ";
pub const OWNERS_COMMON_SOLE_INVALID: &str = "SOLE owner group tenancy type is not allowed \
    when there is more than 1 owner group. Use COMMON instead. ";
pub const DELETE_GROUP_ID_INVALID: &str =
    "The owner group with ID {group_id} is not active and cannot be changed. ";
pub const DELETE_GROUP_ID_NONEXISTENT: &str = "No owner group with ID {group_id} exists. ";
pub const DELETE_GROUP_TYPE_INVALID: &str =
    "The owner group tenancy type with ID {group_id} is invalid. ";

// Owner party types.
pub const GROUP_PARTY_TYPE_INVALID: &str = "For TRUSTEE, ADMINISTRATOR, or EXECUTOR, all \
    owner party types within the group must be identical. ";
pub const OWNER_DESCRIPTION_REQUIRED: &str =
    "Owner description is required for the owner party type. ";
pub const TRANSFER_PARTY_TYPE_INVALID: &str =
    "Owner party type of administrator, executor, trustee not allowed for this registration. ";
pub const TENANCY_PARTY_TYPE_INVALID: &str =
    "Owner group tenancy type must be NA for executors, trustees, or administrators. ";
pub const TENANCY_TYPE_NA_INVALID: &str =
    "Tenancy type NA is not allowed when there is 1 active owner group with 1 owner. ";
pub const TENANCY_TYPE_NA_INVALID2: &str = "Tenancy type NA is only allowed when all owners \
    are ADMINISTRATOR, EXECUTOR, or TRUSTEE party types. ";

// Transfers.
pub const REG_STAFF_ONLY: &str =
    "Only BC Registries Staff are allowed to submit this registration. ";
pub const DECLARED_VALUE_REQUIRED: &str =
    "Declared value is required and must be greater than 0 for this registration. ";
pub const CONSIDERATION_REQUIRED: &str = "Consideration is required for this registration. ";
pub const TRANSFER_DATE_REQUIRED: &str = "Transfer date is required for this registration. ";
pub const TRAN_QUALIFIED_DELETE: &str =
    "Qualified suppliers must either delete one owner group or all owner groups. ";
pub const TRANS_DOC_TYPE_INVALID: &str =
    "The transferDocumentType is only allowed with a TRANS transfer due to sale or gift. ";

// Transfers due to death.
pub const TRAN_DEATH_GROUP_COUNT: &str =
    "Only one owner group can be modified in a transfer due to death registration. ";
pub const TRAN_DEATH_JOINT_TYPE: &str =
    "The existing tenancy type must be joint for this transfer registration. ";
pub const TRAN_DEATH_OWNER_INVALID: &str =
    "The owners must be individuals or businesses for this registration. ";
pub const TRAN_DEATH_NEW_OWNER: &str =
    "The new owners must be individuals or businesses for this registration. ";
pub const TRAN_ADMIN_NEW_OWNER: &str =
    "The new owners must be administrators for this registration. ";
pub const TRAN_AFFIDAVIT_NEW_OWNER: &str =
    "The new owners must be executors for this registration. ";
pub const TRAN_WILL_NEW_OWNER: &str =
    "The new owners must be executors for this registration. ";
pub const TRAN_DEATH_ADD_OWNER: &str = "Owners cannot be added with this registration. ";
pub const TRAN_DEATH_CERT_MISSING: &str =
    "A death certificate number is required with this registration. ";
pub const TRAN_DEATH_CORP_NUM_MISSING: &str =
    "A removed business owner corporation number is required with this registration. ";
pub const TRAN_DEATH_DATE_MISSING: &str =
    "A death date and time is required with this registration. ";
pub const TRAN_DEATH_DATE_INVALID: &str = "A death date and time must be in the past. ";
pub const TRAN_AFFIDAVIT_DECLARED_VALUE: &str =
    "Declared value must be cannot be greater than 25000 for this registration. ";
pub const TRAN_WILL_PROBATE: &str =
    "One (and only one) deceased owner must have a probate document (no death certificate). ";
pub const TRAN_WILL_DEATH_CERT: &str =
    "Deceased owners without a probate document must have a death certificate. ";
pub const TRAN_EXEC_DEATH_CERT: &str = "All deceased owners must have a death certificate. ";
pub const TRAN_ADMIN_GRANT: &str =
    "One (and only one) deceased owner must have a grant document (no death certificate). ";
pub const TRAN_ADMIN_DEATH_CERT: &str =
    "Deceased owners without a grant document must have a death certificate. ";

// Locations.
pub const LOCATION_INVALID_IDENTICAL: &str =
    "The new location cannot be identical to the existing location. ";
pub const LOCATION_DEALER_REQUIRED: &str =
    "Location dealer/manufacturer name is required for this registration. ";
pub const LOCATION_PARK_NAME_REQUIRED: &str =
    "Location park name is required for this registration. ";
pub const LOCATION_PARK_PAD_REQUIRED: &str =
    "Location park PAD is required for this registration. ";
pub const LOCATION_STRATA_REQUIRED: &str =
    "Location parcel ID or all of lot, plan, land district are required for this registration. ";
pub const LOCATION_OTHER_REQUIRED: &str = "Location parcel ID or all of lot, plan, land \
    district or all of land district, district lot are required for this registration. ";
pub const BAND_NAME_REQUIRED: &str =
    "The location Indian Reserve band name is required for this registration. ";
pub const RESERVE_NUMBER_REQUIRED: &str =
    "The location Indian Reserve number is required for this registration. ";
pub const LOCATION_MANUFACTURER_ALLOWED: &str = "Park name, PAD, band name, reserve number, \
    parcel ID, and LTSA details are not allowed with a MANUFACTURER location type. ";
pub const LOCATION_PARK_ALLOWED: &str = "Dealer/manufacturer name, band name, reserve \
    number, parcel ID, and LTSA details are not allowed with a MH_PARK location type. ";
pub const LOCATION_RESERVE_ALLOWED: &str =
    "Dealer/manufacturer name, park name, and PAD are not allowed with a RESERVE location type. ";
pub const LOCATION_STRATA_ALLOWED: &str = "Dealer/manufacturer name, park name, PAD, band \
    name, and reserve number are not allowed with a STRATA location type. ";
pub const LOCATION_OTHER_ALLOWED: &str = "Dealer/manufacturer name, park name, PAD, band \
    name, and reserve number are not allowed with an OTHER location type. ";
pub const LOCATION_TAX_DATE_INVALID: &str = "Location tax certificate date is invalid. ";
pub const LOCATION_TAX_CERT_REQUIRED: &str =
    "Location tax certificate and tax certificate expiry date is required. ";
pub const STATUS_CONFIRMATION_REQUIRED: &str =
    "The land status confirmation is required for this registration. ";
pub const LOCATION_NOT_ALLOWED: &str = "A Residential Exemption is not allowed when the home \
    current location is a dealer/manufacturer lot or manufactured home park. ";

// Transport permits.
pub const MANUFACTURER_DEALER_INVALID: &str =
    "The existing location must be a dealer or manufacturer lot for this registration. ";
pub const MANUFACTURER_PERMIT_INVALID: &str =
    "A manufacturer can only submit a transport permit once for a home. ";

// Exemption unit notes.
pub const NOTE_DOC_TYPE_INVALID: &str =
    "The note document type is invalid for the registration type. ";
pub const NOTICE_NAME_REQUIRED: &str =
    "The giving notice party person or business name is required. ";
pub const NOTICE_ADDRESS_REQUIRED: &str = "The giving notice address is required. ";
pub const NOTICE_REQUIRED: &str =
    "The giving notice party is required with the registration document type. ";
pub const DESTROYED_FUTURE: &str =
    "The exemption destroyed date and time (expiryDateTime) cannot be in the future. ";
pub const DESTROYED_EXRS: &str = "The destroyed date and time (note expiryDateTime) cannot \
    be submitted with a residential exemption. ";

// Staff admin registrations.
pub const REMARKS_REQUIRED: &str =
    "Remarks are required with the registration document type. ";
pub const UPDATE_DOCUMENT_ID_REQUIRED: &str = "The update document ID is required. ";
pub const UPDATE_DOCUMENT_ID_INVALID: &str = "The update document ID is invalid. ";
pub const UPDATE_DOCUMENT_ID_STATUS: &str =
    "The update document ID is for a note or registration that is not active. ";
pub const NRED_INVALID_TYPE: &str =
    "Notice of Redemption NRED is only allowed with the TAXN document type. ";
pub const NCAN_DOCUMENT_ID_REQUIRED: &str = "The cancellation update document ID is required. ";
pub const NCAN_DOCUMENT_ID_INVALID: &str = "The cancellation update document ID is invalid. ";
pub const NCAN_DOCUMENT_ID_STATUS: &str =
    "The cancellation update document ID is for a note that is not active. ";
pub const NCAN_NOT_ALLOWED: &str =
    "Cancel Notice is not allowed with the registration document type {doc_type}. ";
pub const LOCATION_REQUIRED: &str = "A new location is required with this registration. ";

// Generic internal fault messages, one per orchestrator.
pub const VALIDATOR_ERROR: &str = "Error performing extra validation. ";
pub const ADMIN_VALIDATOR_ERROR: &str =
    "Error performing admin registration extra validation. ";

/// Fill the `{desc}`/`{value}` placeholders of [`CHARACTER_SET_UNSUPPORTED`].
pub fn character_set_unsupported(desc: &str, value: &str) -> String {
    CHARACTER_SET_UNSUPPORTED
        .replace("{desc}", desc)
        .replace("{value}", value)
}

/// Fill the `{group_id}` placeholder of the delete-group fragments.
pub fn with_group_id(template: &str, group_id: u32) -> String {
    template.replace("{group_id}", &group_id.to_string())
}

/// Fill the `{doc_type}` placeholder of [`NCAN_NOT_ALLOWED`].
pub fn ncan_not_allowed(doc_type: &str) -> String {
    NCAN_NOT_ALLOWED.replace("{doc_type}", doc_type)
}
