//! Transport permit validation.

use mhr_model::{Location, LocationType, PermitRequest, Registration, RegistrationType,
    ValidationIssue, ValidationReport};

use crate::checks::{charset, doc_id, location, ppr, state};
use crate::context::ValidationContext;
use crate::messages;
use crate::store::{ParcelLookup, RegistrationStore, StoreError};
use crate::validators::{check_location, check_location_pid, report_internal_fault};

/// Validate a transport permit against the home's current snapshot.
pub fn validate_permit(
    registration: &Registration,
    request: &PermitRequest,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    parcels: &dyn ParcelLookup,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    if let Err(err) = run(registration, request, ctx, store, parcels, &mut report) {
        report_internal_fault(&mut report, &err, messages::VALIDATOR_ERROR);
    }
    report
}

fn run(
    registration: &Registration,
    request: &PermitRequest,
    ctx: &ValidationContext,
    store: &dyn RegistrationStore,
    parcels: &dyn ParcelLookup,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    if ctx.is_staff {
        report.extend(doc_id::check_document_id(request.document_id.as_deref(), store)?);
    } else {
        report.extend(ppr::check_ppr_lien(
            &registration.mhr_number,
            RegistrationType::Permit,
            store,
        )?);
    }
    let current_location = registration.active_location();
    if ctx.is_manufacturer() {
        check_manufacturer_permit(registration, request, current_location, store, report)?;
    }
    if ctx.is_dealership()
        && current_location
            .map(|loc| loc.location_type != Some(LocationType::Manufacturer))
            .unwrap_or(false)
    {
        report.add(ValidationIssue::state(messages::MANUFACTURER_DEALER_INVALID));
    }
    report.extend(charset::check_submitting_party(request.submitting_party.as_ref()));
    report.extend(state::check_registration_state(
        registration,
        ctx,
        RegistrationType::Permit,
        None,
    ));
    report.extend(doc_id::check_draft(request.draft_number.as_deref(), store)?);
    if let Some(new_location) = request.new_location.as_ref() {
        check_location(report, new_location);
        if let Some(current) = current_location {
            report.extend(location::check_different(new_location, current));
        }
        report.extend(location::check_tax_certificate(
            new_location,
            current_location,
            ctx,
        ));
        if !request.land_status_confirmation {
            check_land_status(new_location, current_location, report);
        }
        check_location_pid(report, new_location, parcels);
    }
    Ok(())
}

/// Manufacturer permits: the home must sit on a dealer/manufacturer lot and
/// a manufacturer may move a home only once.
fn check_manufacturer_permit(
    registration: &Registration,
    request: &PermitRequest,
    current_location: Option<&Location>,
    store: &dyn RegistrationStore,
    report: &mut ValidationReport,
) -> Result<(), StoreError> {
    if current_location
        .map(|location| !location.has_dealer_name())
        .unwrap_or(false)
    {
        report.add(ValidationIssue::state(messages::MANUFACTURER_DEALER_INVALID));
    }
    if let Some(name) = request
        .submitting_party
        .as_ref()
        .and_then(|party| party.lookup_name())
        && store.permit_count(&registration.mhr_number, &name)? > 0
    {
        report.add(ValidationIssue::state(messages::MANUFACTURER_PERMIT_INVALID));
    }
    Ok(())
}

/// Moves onto strata, reserve, or unstructured land need an explicit land
/// status confirmation, as does a move into a different park.
fn check_land_status(
    new_location: &Location,
    current_location: Option<&Location>,
    report: &mut ValidationReport,
) {
    match new_location.location_type {
        Some(LocationType::Strata | LocationType::Reserve | LocationType::Other) => {
            report.add(
                ValidationIssue::structural(messages::STATUS_CONFIRMATION_REQUIRED)
                    .with_field("landStatusConfirmation"),
            );
        }
        Some(LocationType::MhPark) => {
            if let Some(current) = current_location {
                let same_park = current.location_type == Some(LocationType::MhPark)
                    && current.park_name.as_deref().unwrap_or_default()
                        == new_location.park_name.as_deref().unwrap_or_default();
                if !same_park {
                    report.add(
                        ValidationIssue::structural(messages::STATUS_CONFIRMATION_REQUIRED)
                            .with_field("landStatusConfirmation"),
                    );
                }
            }
        }
        _ => {}
    }
}
