//! Location checks: required and forbidden fields per location type, the
//! identical-location rule, and transport permit tax certificates.

use chrono::Days;
use mhr_model::{Location, LocationType, ValidationIssue};

use crate::context::ValidationContext;
use crate::messages;

/// Verify the fields each location type requires are present.
pub fn check_required(location: &Location) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    match location.location_type {
        Some(LocationType::Manufacturer) => {
            if !location.has_dealer_name() {
                issues.push(
                    ValidationIssue::structural(messages::LOCATION_DEALER_REQUIRED)
                        .with_field("location.dealerName"),
                );
            }
        }
        Some(LocationType::MhPark) => {
            if !location.has_park_name() {
                issues.push(
                    ValidationIssue::structural(messages::LOCATION_PARK_NAME_REQUIRED)
                        .with_field("location.parkName"),
                );
            }
            if !location.has_pad() {
                issues.push(
                    ValidationIssue::structural(messages::LOCATION_PARK_PAD_REQUIRED)
                        .with_field("location.pad"),
                );
            }
        }
        Some(LocationType::Reserve) => {
            if !location.has_band_name() {
                issues.push(
                    ValidationIssue::structural(messages::BAND_NAME_REQUIRED)
                        .with_field("location.bandName"),
                );
            }
            if !location.has_reserve_number() {
                issues.push(
                    ValidationIssue::structural(messages::RESERVE_NUMBER_REQUIRED)
                        .with_field("location.reserveNumber"),
                );
            }
        }
        Some(LocationType::Strata) => {
            let legal = location.has_lot() && location.has_plan() && location.has_land_district();
            if !location.has_pid_number() && !legal {
                issues.push(ValidationIssue::structural(messages::LOCATION_STRATA_REQUIRED));
            }
        }
        Some(LocationType::Other) => {
            let legal = location.has_lot() && location.has_plan() && location.has_land_district();
            let district = location.has_land_district() && location.has_district_lot();
            if !location.has_pid_number() && !legal && !district {
                issues.push(ValidationIssue::structural(messages::LOCATION_OTHER_REQUIRED));
            }
        }
        None => {}
    }
    issues
}

/// Verify no field forbidden for the location type is present.
pub fn check_allowed(location: &Location) -> Vec<ValidationIssue> {
    let violation = match location.location_type {
        Some(LocationType::Manufacturer) => {
            (location.has_park_name()
                || location.has_pad()
                || location.has_band_name()
                || location.has_reserve_number()
                || location.has_ltsa_details())
            .then_some(messages::LOCATION_MANUFACTURER_ALLOWED)
        }
        Some(LocationType::MhPark) => {
            (location.has_dealer_name()
                || location.has_band_name()
                || location.has_reserve_number()
                || location.has_ltsa_details())
            .then_some(messages::LOCATION_PARK_ALLOWED)
        }
        Some(LocationType::Reserve) => {
            (location.has_dealer_name() || location.has_park_name() || location.has_pad())
                .then_some(messages::LOCATION_RESERVE_ALLOWED)
        }
        Some(LocationType::Strata) => {
            (location.has_dealer_name()
                || location.has_park_name()
                || location.has_pad()
                || location.has_band_name()
                || location.has_reserve_number())
            .then_some(messages::LOCATION_STRATA_ALLOWED)
        }
        Some(LocationType::Other) => {
            (location.has_dealer_name()
                || location.has_park_name()
                || location.has_pad()
                || location.has_band_name()
                || location.has_reserve_number())
            .then_some(messages::LOCATION_OTHER_ALLOWED)
        }
        None => None,
    };
    violation
        .map(|message| vec![ValidationIssue::consistency(message)])
        .unwrap_or_default()
}

/// A transport permit must move the home: the proposed location may not be
/// identical to the current one, ignoring bookkeeping fields.
pub fn check_different(proposed: &Location, current: &Location) -> Vec<ValidationIssue> {
    if proposed.normalized() == current.normalized() {
        vec![ValidationIssue::consistency(messages::LOCATION_INVALID_IDENTICAL)]
    } else {
        Vec::new()
    }
}

/// Tax certificate rules for transport permits.
///
/// A permit requires proof that local property taxes are paid, unless the
/// home currently sits on a dealer/manufacturer lot or is moving within the
/// same park. The certificate expiry must be a current-tax-year date: on or
/// after today and no more than a year out.
pub fn check_tax_certificate(
    proposed: &Location,
    current: Option<&Location>,
    ctx: &ValidationContext,
) -> Vec<ValidationIssue> {
    if let Some(expiry) = proposed.tax_expiry_date {
        let latest = ctx.now.checked_add_days(Days::new(365));
        if expiry < ctx.now || latest.map(|limit| expiry > limit).unwrap_or(false) {
            return vec![ValidationIssue::consistency(messages::LOCATION_TAX_DATE_INVALID)
                .with_field("newLocation.taxExpiryDate")];
        }
        if !proposed.tax_certificate {
            return vec![ValidationIssue::structural(messages::LOCATION_TAX_CERT_REQUIRED)];
        }
        return Vec::new();
    }
    if let Some(current) = current {
        if current.has_dealer_name() {
            return Vec::new();
        }
        if current.has_park_name() && proposed.has_park_name() {
            return Vec::new();
        }
    }
    vec![ValidationIssue::structural(messages::LOCATION_TAX_CERT_REQUIRED)]
}
