//! Home description checks for new registrations.

use chrono::Datelike;
use mhr_model::{HomeDescription, ValidationIssue};

use crate::context::ValidationContext;
use crate::messages;

/// Validate the home description: manufacture year, make or model, and the
/// safety certification.
///
/// An absent description (or base information block) is not an error here;
/// the payload schema decides whether one is required. Staff may backfill
/// years from 1900; clients are limited to last year, this year, or next
/// year (next year covers late-year manufacture runs). Clients must provide
/// either a CSA number or engineer inspection details; staff may record
/// legacy homes without either.
pub fn check_description(
    description: Option<&HomeDescription>,
    ctx: &ValidationContext,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let Some(description) = description else {
        return issues;
    };
    let current_year = ctx.now.year();
    if let Some(base) = description.base_information.as_ref() {
        match base.year {
            None => {
                issues.push(
                    ValidationIssue::structural(messages::DESCRIPTION_YEAR_REQUIRED)
                        .with_field("description.baseInformation.year"),
                );
            }
            Some(year) => {
                let valid = if ctx.is_staff {
                    (1900..=current_year + 1).contains(&year)
                } else {
                    (current_year - 1..=current_year + 1).contains(&year)
                };
                if !valid {
                    issues.push(
                        ValidationIssue::consistency(messages::DESCRIPTION_YEAR_INVALID)
                            .with_field("description.baseInformation.year"),
                    );
                }
            }
        }
        let has_make = base
            .make
            .as_deref()
            .map(|make| !make.trim().is_empty())
            .unwrap_or(false);
        let has_model = base
            .model
            .as_deref()
            .map(|model| !model.trim().is_empty())
            .unwrap_or(false);
        if !has_make && !has_model {
            issues.push(
                ValidationIssue::structural(messages::DESCRIPTION_MAKE_MODEL_REQUIRED)
                    .with_field("description.baseInformation"),
            );
        }
    }
    if !ctx.is_staff {
        let has_engineer = description
            .engineer_name
            .as_deref()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false)
            && description.engineer_date.is_some();
        if !description.has_csa_number() && !has_engineer {
            issues.push(
                ValidationIssue::structural(messages::DESCRIPTION_CSA_ENGINEER_REQUIRED)
                    .with_field("description"),
            );
        }
    }
    issues
}
