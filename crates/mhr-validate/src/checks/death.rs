//! Transfer due to death rules.
//!
//! These registrations modify exactly one owner group: surviving joint
//! tenants (TRAND), court-appointed administrators (TRANS_ADMIN), executors
//! under a will (TRANS_WILL), or executors of a small estate
//! (TRANS_AFFIDAVIT). The deceased owners' supporting documents (death
//! certificate, probate or grant document) determine which shapes are valid.

use mhr_model::{
    Owner, OwnerGroup, Registration, RegistrationType, TenancyType, TransferRequest,
    ValidationIssue,
};

use crate::context::ValidationContext;
use crate::messages;

/// Apply all transfer due to death rules for the request.
pub fn check_transfer_death(
    registration: &Registration,
    request: &TransferRequest,
    ctx: &ValidationContext,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let (Some(delete_group), Some(add_group)) = (
        request.delete_owner_groups.first(),
        request.add_owner_groups.first(),
    ) else {
        return issues;
    };
    let reg_type = request.effective_type();
    let modified_group = registration.find_group(delete_group.group_id);
    if request.delete_owner_groups.len() != 1 || request.add_owner_groups.len() != 1 {
        issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_GROUP_COUNT));
    }
    if reg_type == RegistrationType::Trand && delete_group.tenancy_type != TenancyType::Joint {
        issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_JOINT_TYPE));
    }
    issues.extend(check_existing_owners(reg_type, modified_group));
    issues.extend(check_new_owners(reg_type, &add_group.owners, modified_group));
    if !add_group.owners.is_empty() && !delete_group.owners.is_empty() {
        issues.extend(check_deceased_owners(
            reg_type,
            &add_group.owners,
            &delete_group.owners,
            ctx,
        ));
    }
    if reg_type == RegistrationType::TransAffidavit
        && request.declared_value.map(|value| value > 25000).unwrap_or(false)
    {
        issues.push(ValidationIssue::consistency(messages::TRAN_AFFIDAVIT_DECLARED_VALUE));
    }
    issues
}

/// Surviving joint tenant transfers only apply to groups of individual or
/// business owners, never personal representatives.
fn check_existing_owners(
    reg_type: RegistrationType,
    modified_group: Option<&OwnerGroup>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let Some(group) = modified_group else {
        return issues;
    };
    for owner in &group.owners {
        if reg_type == RegistrationType::Trand
            && !owner.effective_party_type().is_beneficial_owner()
        {
            issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_OWNER_INVALID));
        }
    }
    issues
}

fn check_new_owners(
    reg_type: RegistrationType,
    new_owners: &[Owner],
    modified_group: Option<&OwnerGroup>,
) -> Vec<ValidationIssue> {
    use mhr_model::PartyType;

    let mut issues = Vec::new();
    if new_owners.is_empty() {
        return issues;
    }
    let mut executor_count = 0;
    for owner in new_owners {
        let party_type = owner.party_type;
        if reg_type == RegistrationType::Trand
            && party_type.map(|pt| !pt.is_beneficial_owner()).unwrap_or(false)
        {
            issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_NEW_OWNER));
        } else if reg_type == RegistrationType::TransAdmin
            && party_type != Some(PartyType::Administrator)
        {
            issues.push(ValidationIssue::consistency(messages::TRAN_ADMIN_NEW_OWNER));
        } else if matches!(
            reg_type,
            RegistrationType::TransWill | RegistrationType::TransAffidavit
        ) && party_type == Some(PartyType::Executor)
        {
            executor_count += 1;
        }
        if reg_type == RegistrationType::Trand
            && modified_group
                .map(|group| !owner_in_group(group, owner))
                .unwrap_or(false)
        {
            issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_ADD_OWNER));
        }
    }
    if executor_count != new_owners.len() {
        if reg_type == RegistrationType::TransAffidavit {
            issues.push(ValidationIssue::consistency(messages::TRAN_AFFIDAVIT_NEW_OWNER));
        } else if reg_type == RegistrationType::TransWill {
            issues.push(ValidationIssue::consistency(messages::TRAN_WILL_NEW_OWNER));
        }
    }
    issues
}

/// Deceased owner document rules.
///
/// For TRAND every removed owner not carried over must be documented as
/// deceased. For the estate transfers, one deceased owner carries the
/// probate or grant document (no death certificate) and every other removed
/// owner needs a death certificate with an elapsed death date.
fn check_deceased_owners(
    reg_type: RegistrationType,
    new_owners: &[Owner],
    delete_owners: &[Owner],
    ctx: &ValidationContext,
) -> Vec<ValidationIssue> {
    use mhr_model::PartyType;

    let mut issues = Vec::new();
    let mut probate_count = 0;
    let mut death_count = 0;
    let mut representative_count = 0;
    for owner in delete_owners {
        let has_cert = has_text(&owner.death_certificate_number);
        let has_date = owner.death_date_time.is_some();
        if reg_type == RegistrationType::Trand && !owner_carried_over(new_owners, owner) {
            if owner.organization_name.is_some() && !has_text(&owner.death_corp_number) {
                issues.push(ValidationIssue::structural(messages::TRAN_DEATH_CORP_NUM_MISSING));
            } else if owner.organization_name.is_none() && !has_cert {
                issues.push(ValidationIssue::structural(messages::TRAN_DEATH_CERT_MISSING));
            }
            match owner.death_date_time {
                None => issues.push(ValidationIssue::structural(messages::TRAN_DEATH_DATE_MISSING)),
                Some(death) if death >= ctx.now => {
                    issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_DATE_INVALID));
                }
                Some(_) => {}
            }
        } else if matches!(
            reg_type,
            RegistrationType::TransWill
                | RegistrationType::TransAffidavit
                | RegistrationType::TransAdmin
        ) {
            if reg_type == RegistrationType::TransWill
                && owner.party_type == Some(PartyType::Executor)
            {
                representative_count += 1;
            } else if reg_type == RegistrationType::TransAdmin
                && owner.party_type == Some(PartyType::Administrator)
            {
                representative_count += 1;
            } else if !has_cert && !has_date {
                probate_count += 1;
            } else if has_cert && has_date {
                death_count += 1;
                if owner.death_date_time.map(|death| death >= ctx.now).unwrap_or(false) {
                    issues.push(ValidationIssue::consistency(messages::TRAN_DEATH_DATE_INVALID));
                }
            }
            if !has_cert && has_date {
                issues.push(ValidationIssue::structural(messages::TRAN_DEATH_CERT_MISSING));
            }
            if !has_date && has_cert {
                issues.push(ValidationIssue::structural(messages::TRAN_DEATH_DATE_MISSING));
            }
        }
    }
    if matches!(
        reg_type,
        RegistrationType::TransWill | RegistrationType::TransAdmin
    ) && representative_count < 1
    {
        if probate_count != 1 {
            issues.push(ValidationIssue::consistency(
                if reg_type == RegistrationType::TransWill {
                    messages::TRAN_WILL_PROBATE
                } else {
                    messages::TRAN_ADMIN_GRANT
                },
            ));
        }
        if death_count + 1 != delete_owners.len() {
            issues.push(ValidationIssue::consistency(
                if reg_type == RegistrationType::TransWill {
                    messages::TRAN_WILL_DEATH_CERT
                } else {
                    messages::TRAN_ADMIN_DEATH_CERT
                },
            ));
        }
    } else if reg_type == RegistrationType::TransAffidavit && death_count != delete_owners.len() {
        issues.push(ValidationIssue::consistency(messages::TRAN_EXEC_DEATH_CERT));
    }
    issues
}

/// Name-only match: surviving owners keep their registered address.
fn owner_carried_over(new_owners: &[Owner], owner: &Owner) -> bool {
    new_owners.iter().any(|candidate| candidate.same_name(owner))
}

fn owner_in_group(group: &OwnerGroup, owner: &Owner) -> bool {
    group.owners.iter().any(|candidate| candidate.same_name(owner))
}

fn has_text(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}
