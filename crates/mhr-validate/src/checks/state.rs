//! Registration state rules: changes are only allowed on active homes, and
//! some change registrations freeze the record until resolved.

use mhr_model::{
    DocumentType, NoteStatus, Registration, RegistrationStatus, RegistrationType, ValidationIssue,
};

use crate::context::ValidationContext;
use crate::messages;

/// Validate that the home is in a state where the requested change is
/// allowed.
pub fn check_registration_state(
    registration: &Registration,
    ctx: &ValidationContext,
    reg_type: RegistrationType,
    doc_type: Option<DocumentType>,
) -> Vec<ValidationIssue> {
    if doc_type == Some(DocumentType::Exre) {
        return check_state_rescind(registration);
    }
    if reg_type.is_exemption() {
        return check_state_exemption(registration, reg_type, ctx);
    }
    let mut issues = Vec::new();
    match registration.status {
        Some(status) if status != RegistrationStatus::Active => {
            let allowed_inactive = status != RegistrationStatus::Cancelled
                && doc_type.map(|dt| dt.allowed_when_inactive()).unwrap_or(false);
            if !allowed_inactive {
                issues.push(ValidationIssue::state(messages::STATE_NOT_ALLOWED));
            }
        }
        Some(_) => {
            if let Some(last) = registration.last_change()
                && last.registration_type == RegistrationType::TransAffidavit
            {
                if !ctx.is_staff {
                    issues.push(ValidationIssue::state(messages::STATE_NOT_ALLOWED));
                } else if reg_type != RegistrationType::Trans {
                    issues.push(ValidationIssue::state(messages::STATE_NOT_ALLOWED));
                    issues.push(ValidationIssue::state(messages::STATE_FROZEN_AFFIDAVIT));
                }
            }
        }
        None => {}
    }
    issues.extend(check_state_notes(registration, ctx, reg_type));
    issues
}

/// A rescind exemption is only valid on an exempt home.
fn check_state_rescind(registration: &Registration) -> Vec<ValidationIssue> {
    match registration.status {
        Some(RegistrationStatus::Exempt) | None => Vec::new(),
        Some(_) => vec![ValidationIssue::state(messages::STATE_NOT_ALLOWED)],
    }
}

fn check_state_exemption(
    registration: &Registration,
    reg_type: RegistrationType,
    ctx: &ValidationContext,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    match registration.status {
        Some(RegistrationStatus::Active) => {
            issues.extend(check_state_notes(registration, ctx, reg_type));
        }
        Some(RegistrationStatus::Cancelled) => {
            issues.push(ValidationIssue::state(messages::STATE_NOT_ALLOWED));
        }
        Some(_) if reg_type == RegistrationType::ExemptionRes => {
            issues.push(ValidationIssue::state(messages::EXEMPT_EXRS_INVALID));
        }
        Some(_) => {
            let active_exnr = registration.change_registrations.iter().any(|reg| {
                reg.registration_type == RegistrationType::ExemptionNonRes
                    && reg
                        .notes
                        .first()
                        .map(|note| note.status == Some(NoteStatus::Active))
                        .unwrap_or(false)
            });
            if active_exnr {
                issues.push(ValidationIssue::state(messages::EXEMPT_EXNR_INVALID));
            }
        }
        None => {}
    }
    issues
}

/// Non-staff submissions are frozen out by an active TAXN, NCON, or REST
/// unit note, and by an active unexpired transport permit unless the
/// request extends or replaces the permit.
fn check_state_notes(
    registration: &Registration,
    ctx: &ValidationContext,
    reg_type: RegistrationType,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if ctx.is_staff {
        return issues;
    }
    for reg in &registration.change_registrations {
        let Some(note) = reg.notes.first() else {
            continue;
        };
        if note.document_type.is_freezing_note() && note.is_active() {
            issues.push(ValidationIssue::state(messages::STATE_FROZEN_NOTE));
        } else if reg.registration_type.is_permit()
            && !reg_type.is_permit()
            && note.is_active()
            && !note.is_expired(ctx.now)
        {
            issues.push(ValidationIssue::state(messages::STATE_FROZEN_PERMIT));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone, Utc};
    use mhr_model::Note;

    fn home(status: RegistrationStatus) -> Registration {
        Registration {
            mhr_number: "000900".to_string(),
            registration_type: RegistrationType::Mhreg,
            document_id: None,
            status: Some(status),
            registration_ts: None,
            location: None,
            description: None,
            owner_groups: vec![],
            notes: vec![],
            change_registrations: vec![],
        }
    }

    fn note_change(doc_type: DocumentType, status: NoteStatus) -> Registration {
        Registration {
            registration_type: RegistrationType::RegStaffAdmin,
            status: None,
            notes: vec![Note {
                document_type: doc_type,
                document_id: None,
                status: Some(status),
                remarks: None,
                giving_notice_party: None,
                expiry_date_time: None,
                effective_date_time: None,
            }],
            ..home(RegistrationStatus::Active)
        }
    }

    fn ctx(staff: bool) -> ValidationContext {
        let now = Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap();
        if staff {
            ValidationContext::staff(now)
        } else {
            ValidationContext::client(now)
        }
    }

    #[test]
    fn cancelled_home_rejects_changes() {
        let issues = check_registration_state(
            &home(RegistrationStatus::Cancelled),
            &ctx(true),
            RegistrationType::Trans,
            None,
        );
        assert_eq!(issues[0].message, messages::STATE_NOT_ALLOWED);
    }

    #[test]
    fn exempt_home_allows_public_note() {
        let issues = check_registration_state(
            &home(RegistrationStatus::Exempt),
            &ctx(true),
            RegistrationType::RegStaffAdmin,
            Some(DocumentType::Npub),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn active_freezing_note_blocks_clients_only() {
        let mut registration = home(RegistrationStatus::Active);
        registration
            .change_registrations
            .push(note_change(DocumentType::Taxn, NoteStatus::Active));
        let issues = check_registration_state(
            &registration,
            &ctx(false),
            RegistrationType::Trans,
            None,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, messages::STATE_FROZEN_NOTE);
        assert!(
            check_registration_state(&registration, &ctx(true), RegistrationType::Trans, None)
                .is_empty()
        );
    }

    #[test]
    fn cancelled_note_does_not_freeze() {
        let mut registration = home(RegistrationStatus::Active);
        registration
            .change_registrations
            .push(note_change(DocumentType::Taxn, NoteStatus::Cancelled));
        assert!(
            check_registration_state(&registration, &ctx(false), RegistrationType::Trans, None)
                .is_empty()
        );
    }

    #[test]
    fn active_permit_freezes_non_permit_changes() {
        let mut permit_reg = note_change(DocumentType::Regc, NoteStatus::Active);
        permit_reg.registration_type = RegistrationType::Permit;
        permit_reg.notes[0].expiry_date_time =
            Some(ctx(false).now.checked_add_days(Days::new(10)).unwrap());
        let mut registration = home(RegistrationStatus::Active);
        registration.change_registrations.push(permit_reg);
        let issues =
            check_registration_state(&registration, &ctx(false), RegistrationType::Trans, None);
        assert_eq!(issues[0].message, messages::STATE_FROZEN_PERMIT);
        assert!(
            check_registration_state(
                &registration,
                &ctx(false),
                RegistrationType::PermitExtension,
                None
            )
            .is_empty()
        );
    }

    #[test]
    fn affidavit_freeze_allows_staff_sale_transfer() {
        let mut registration = home(RegistrationStatus::Active);
        registration.change_registrations.push(Registration {
            registration_type: RegistrationType::TransAffidavit,
            status: None,
            ..home(RegistrationStatus::Active)
        });
        let client_issues =
            check_registration_state(&registration, &ctx(false), RegistrationType::Trans, None);
        assert_eq!(client_issues[0].message, messages::STATE_NOT_ALLOWED);
        assert!(
            check_registration_state(&registration, &ctx(true), RegistrationType::Trans, None)
                .is_empty()
        );
        let staff_other = check_registration_state(
            &registration,
            &ctx(true),
            RegistrationType::TransWill,
            None,
        );
        assert_eq!(staff_other.len(), 2);
        assert_eq!(staff_other[1].message, messages::STATE_FROZEN_AFFIDAVIT);
    }

    #[test]
    fn rescind_requires_exempt_status() {
        let issues = check_registration_state(
            &home(RegistrationStatus::Active),
            &ctx(true),
            RegistrationType::RegStaffAdmin,
            Some(DocumentType::Exre),
        );
        assert_eq!(issues[0].message, messages::STATE_NOT_ALLOWED);
        assert!(
            check_registration_state(
                &home(RegistrationStatus::Exempt),
                &ctx(true),
                RegistrationType::RegStaffAdmin,
                Some(DocumentType::Exre),
            )
            .is_empty()
        );
    }

    #[test]
    fn residential_exemption_on_exempt_home_rejected() {
        let issues = check_registration_state(
            &home(RegistrationStatus::Exempt),
            &ctx(false),
            RegistrationType::ExemptionRes,
            None,
        );
        assert_eq!(issues[0].message, messages::EXEMPT_EXRS_INVALID);
    }
}
