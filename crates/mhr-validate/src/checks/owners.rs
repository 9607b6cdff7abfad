//! Owner group rules: tenancy shape, fractional interest reconciliation,
//! deleted group references, and owner party types.

use mhr_model::{Owner, OwnerGroup, Registration, TenancyType, ValidationIssue};

use crate::checks::charset;
use crate::messages;

/// Validate proposed owner groups. `new` is true for a new home
/// registration, false for a transfer; `active_count` is the number of
/// groups of record after the change (existing minus deleted plus added).
pub fn check_owner_groups(
    groups: &[OwnerGroup],
    new: bool,
    registration: Option<&Registration>,
    delete_groups: &[OwnerGroup],
    active_count: i32,
) -> Vec<ValidationIssue> {
    if groups.is_empty() {
        return Vec::new();
    }
    if common_tenancy(groups, new, active_count) {
        check_groups_common(groups, registration, delete_groups)
    } else {
        check_groups_simple(groups, new, active_count)
    }
}

/// Fractional interest rules apply when more than one group will be of
/// record and at least one proposed group is not SOLE.
fn common_tenancy(groups: &[OwnerGroup], new: bool, active_count: i32) -> bool {
    if new && groups.len() == 1 {
        return false;
    }
    groups
        .iter()
        .any(|group| group.tenancy_type != TenancyType::Sole)
        && active_count > 1
}

fn check_groups_simple(groups: &[OwnerGroup], new: bool, active_count: i32) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut sole_owner_count = 0;
    for group in groups {
        if new && group.tenancy_type == TenancyType::Common {
            push_unique(
                &mut issues,
                ValidationIssue::consistency(messages::GROUP_COMMON_INVALID),
            );
        }
        issues.extend(check_owner_group(group, false));
        if group.tenancy_type == TenancyType::Sole {
            sole_owner_count += group.owners.len();
        }
        for owner in &group.owners {
            issues.extend(check_owner_names(owner));
        }
    }
    if sole_owner_count > 1 || (sole_owner_count == 1 && groups.len() > 1) {
        issues.push(ValidationIssue::consistency(messages::ADD_SOLE_OWNER_INVALID));
    }
    if !new
        && active_count == 1
        && groups
            .last()
            .map(|group| group.tenancy_type == TenancyType::Common)
            .unwrap_or(false)
    {
        push_unique(
            &mut issues,
            ValidationIssue::consistency(messages::GROUP_COMMON_INVALID),
        );
    }
    issues
}

fn check_groups_common(
    groups: &[OwnerGroup],
    registration: Option<&Registration>,
    delete_groups: &[OwnerGroup],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut empty_group = false;
    let common_denominator = groups
        .iter()
        .map(|group| group.interest_denominator)
        .max()
        .unwrap_or(0);
    let int_required = interest_required(groups, registration, delete_groups);
    for group in groups {
        if group.owners.is_empty() {
            empty_group = true;
        }
        issues.extend(check_owner_group(group, int_required));
        for owner in &group.owners {
            issues.extend(check_owner_names(owner));
        }
    }
    issues.extend(check_group_interest(
        groups,
        common_denominator,
        registration,
        delete_groups,
    ));
    if empty_group {
        issues.push(ValidationIssue::structural(messages::OWNERS_COMMON_INVALID));
    }
    issues
}

/// Per-group shape rules: interest fractions, owner counts per tenancy
/// type, and the NA party type restriction.
fn check_owner_group(group: &OwnerGroup, interest_required: bool) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let tenancy = group.tenancy_type;
    if tenancy == TenancyType::Common || interest_required {
        if group.interest_numerator < 1 {
            issues.push(
                ValidationIssue::structural(messages::GROUP_NUMERATOR_MISSING)
                    .with_field("interestNumerator"),
            );
        }
        if group.interest_denominator < 1 {
            issues.push(
                ValidationIssue::structural(messages::GROUP_DENOMINATOR_MISSING)
                    .with_field("interestDenominator"),
            );
        }
    }
    if tenancy == TenancyType::Na
        && group.owners.len() > 1
        && group
            .owners
            .iter()
            .any(|owner| owner.effective_party_type().is_beneficial_owner())
    {
        issues.push(ValidationIssue::consistency(messages::TENANCY_TYPE_NA_INVALID2));
    }
    if tenancy == TenancyType::Joint && group.owners.len() < 2 {
        issues.push(ValidationIssue::consistency(messages::OWNERS_JOINT_INVALID));
    } else if tenancy == TenancyType::Common && group.owners.len() != 1 {
        issues.push(ValidationIssue::consistency(messages::OWNERS_COMMON_INVALID));
    } else if tenancy == TenancyType::Sole && interest_required {
        issues.push(ValidationIssue::consistency(messages::OWNERS_COMMON_SOLE_INVALID));
    }
    issues
}

/// Interest fractions are required when more than one group will be of
/// record after the change.
fn interest_required(
    groups: &[OwnerGroup],
    registration: Option<&Registration>,
    delete_groups: &[OwnerGroup],
) -> bool {
    if groups.len() > 1 {
        return true;
    }
    let mut count = groups.len();
    if let Some(registration) = registration {
        count += registration
            .all_groups()
            .filter(|group| {
                group.is_active()
                    && group.tenancy_type != TenancyType::Sole
                    && group.interest_denominator > 0
                    && !is_deleted(group, delete_groups)
            })
            .count();
    }
    count > 1
}

/// Verify the interest numerators, rescaled to a common denominator, sum to
/// exactly that denominator across surviving and proposed groups.
fn check_group_interest(
    groups: &[OwnerGroup],
    common_denominator: u32,
    registration: Option<&Registration>,
    delete_groups: &[OwnerGroup],
) -> Vec<ValidationIssue> {
    let mut group_count = groups.len();
    let mut numerator_sum: u64 = 0;
    if let Some(registration) = registration {
        for group in registration.all_groups() {
            if group.is_active()
                && group.tenancy_type != TenancyType::Sole
                && group.interest_denominator > 0
                && !is_deleted(group, delete_groups)
            {
                group_count += 1;
                numerator_sum += scaled_numerator(
                    group.interest_numerator,
                    group.interest_denominator,
                    common_denominator,
                );
            }
        }
    }
    if group_count < 2 {
        return Vec::new();
    }
    for group in groups {
        if group.interest_numerator > 0 && group.interest_denominator > 0 {
            numerator_sum += scaled_numerator(
                group.interest_numerator,
                group.interest_denominator,
                common_denominator,
            );
        }
    }
    if numerator_sum != u64::from(common_denominator) {
        vec![ValidationIssue::consistency(messages::GROUP_INTEREST_MISMATCH)]
    } else {
        Vec::new()
    }
}

/// Rescale a numerator from its own denominator to the common denominator.
/// Integer math only; a denominator larger than the common one truncates.
fn scaled_numerator(numerator: u32, denominator: u32, common_denominator: u32) -> u64 {
    let numerator = u64::from(numerator);
    let denominator = u64::from(denominator);
    let common = u64::from(common_denominator);
    if denominator == common || denominator == 0 {
        numerator
    } else if denominator < common {
        (common / denominator) * numerator
    } else {
        (common * numerator) / denominator
    }
}

/// Owner name character set checks. The business name wins over the
/// individual name when both are present.
fn check_owner_names(owner: &Owner) -> Vec<ValidationIssue> {
    if owner.organization_name.is_some() {
        charset::check_text(owner.organization_name.as_deref(), "owner organization name")
    } else if let Some(name) = owner.individual_name.as_ref() {
        charset::check_individual_name(name, "owner")
    } else {
        Vec::new()
    }
}

fn is_deleted(group: &OwnerGroup, delete_groups: &[OwnerGroup]) -> bool {
    delete_groups
        .iter()
        .any(|deleted| deleted.group_id == group.group_id)
}

/// Verify each deleted group references an existing, active group with a
/// matching tenancy type.
pub fn check_delete_groups(
    registration: &Registration,
    delete_groups: &[OwnerGroup],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for group in delete_groups {
        if group.group_id == 0 {
            continue;
        }
        match registration.find_group(group.group_id) {
            None => issues.push(ValidationIssue::consistency(messages::with_group_id(
                messages::DELETE_GROUP_ID_NONEXISTENT,
                group.group_id,
            ))),
            Some(existing) => {
                if !existing.is_active() {
                    issues.push(ValidationIssue::state(messages::with_group_id(
                        messages::DELETE_GROUP_ID_INVALID,
                        group.group_id,
                    )));
                }
                if group.tenancy_type != existing.tenancy_type
                    && group.tenancy_type != TenancyType::Na
                {
                    issues.push(ValidationIssue::consistency(messages::with_group_id(
                        messages::DELETE_GROUP_TYPE_INVALID,
                        group.group_id,
                    )));
                }
            }
        }
    }
    issues
}

/// Owner party type rules: personal representative types must be uniform
/// within a group, carry a description, and imply the NA tenancy type.
/// `owner_death` is true for transfer due to death registrations, which are
/// the only transfers allowed to introduce representatives.
pub fn check_owner_party_types(
    groups: &[OwnerGroup],
    new: bool,
    owner_death: bool,
    delete_groups: &[OwnerGroup],
    active_group_count: i32,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for group in groups {
        if !new && groups.len() > 1 && owners_unchanged(group, delete_groups) {
            continue;
        }
        let mut representative_count = 0;
        let mut first_representative = None;
        let mut mixed_representatives = false;
        for owner in &group.owners {
            let party_type = owner.effective_party_type();
            if party_type.is_representative() {
                representative_count += 1;
                match first_representative {
                    None => first_representative = Some(party_type),
                    Some(first) if first != party_type => mixed_representatives = true,
                    Some(_) => {}
                }
            }
            if owner.party_type.map(|pt| pt.requires_description()).unwrap_or(false) {
                if owner
                    .description
                    .as_deref()
                    .map(|desc| desc.trim().is_empty())
                    .unwrap_or(true)
                {
                    push_unique(
                        &mut issues,
                        ValidationIssue::structural(messages::OWNER_DESCRIPTION_REQUIRED),
                    );
                }
                if !new && !owner_death {
                    push_unique(
                        &mut issues,
                        ValidationIssue::consistency(messages::TRANSFER_PARTY_TYPE_INVALID),
                    );
                }
            }
        }
        let owner_count = group.owners.len();
        if active_group_count < 2 && group.tenancy_type == TenancyType::Na && owner_count == 1 {
            push_unique(
                &mut issues,
                ValidationIssue::consistency(messages::TENANCY_TYPE_NA_INVALID),
            );
        } else if active_group_count > 1
            && representative_count > 0
            && group.tenancy_type != TenancyType::Na
        {
            push_unique(
                &mut issues,
                ValidationIssue::consistency(messages::TENANCY_PARTY_TYPE_INVALID),
            );
        } else if active_group_count == 1
            && owner_count > 1
            && representative_count > 0
            && group.tenancy_type != TenancyType::Na
        {
            push_unique(
                &mut issues,
                ValidationIssue::consistency(messages::TENANCY_PARTY_TYPE_INVALID),
            );
        }
        if new && mixed_representatives {
            push_unique(
                &mut issues,
                ValidationIssue::consistency(messages::GROUP_PARTY_TYPE_INVALID),
            );
        }
    }
    issues
}

/// Returns true when the added group carries over the owners of a deleted
/// group unchanged (same names and addresses).
fn owners_unchanged(group: &OwnerGroup, delete_groups: &[OwnerGroup]) -> bool {
    delete_groups.iter().any(|deleted| deleted.same_owners(group))
}

fn push_unique(issues: &mut Vec<ValidationIssue>, issue: ValidationIssue) {
    if !issues.iter().any(|existing| existing.message == issue.message) {
        issues.push(issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhr_model::{Address, OwnerStatus, PartyType, PersonName};

    fn owner(first: &str, last: &str) -> Owner {
        Owner {
            individual_name: Some(PersonName {
                first: first.to_string(),
                middle: None,
                last: last.to_string(),
            }),
            address: Some(Address {
                street: Some("3122 LYNNLARK PLACE".to_string()),
                city: Some("VICTORIA".to_string()),
                region: Some("BC".to_string()),
                country: Some("CA".to_string()),
                postal_code: Some("V8S 4I6".to_string()),
                ..Address::default()
            }),
            ..empty_owner()
        }
    }

    fn empty_owner() -> Owner {
        Owner {
            individual_name: None,
            organization_name: None,
            address: None,
            party_type: None,
            description: None,
            death_date_time: None,
            death_certificate_number: None,
            death_corp_number: None,
            phone_number: None,
            suffix: None,
        }
    }

    fn group(tenancy: TenancyType, owners: Vec<Owner>) -> OwnerGroup {
        OwnerGroup {
            group_id: 0,
            tenancy_type: tenancy,
            status: None,
            interest: None,
            interest_numerator: 0,
            interest_denominator: 0,
            owners,
        }
    }

    fn common_group(numerator: u32, denominator: u32, owners: Vec<Owner>) -> OwnerGroup {
        OwnerGroup {
            interest_numerator: numerator,
            interest_denominator: denominator,
            interest: Some(format!("{numerator}/{denominator}")),
            ..group(TenancyType::Common, owners)
        }
    }

    #[test]
    fn sole_group_with_two_owners_flagged() {
        let groups = vec![group(
            TenancyType::Sole,
            vec![owner("JANE", "SMITH"), owner("JOHN", "SMITH")],
        )];
        let issues = check_owner_groups(&groups, true, None, &[], 1);
        assert!(
            issues
                .iter()
                .any(|issue| issue.message == messages::ADD_SOLE_OWNER_INVALID)
        );
    }

    #[test]
    fn joint_group_needs_two_owners() {
        let groups = vec![group(TenancyType::Joint, vec![owner("JANE", "SMITH")])];
        let issues = check_owner_groups(&groups, true, None, &[], 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, messages::OWNERS_JOINT_INVALID);
    }

    #[test]
    fn single_common_group_on_new_registration_flagged() {
        let groups = vec![common_group(1, 1, vec![owner("JANE", "SMITH")])];
        let issues = check_owner_groups(&groups, true, None, &[], 1);
        assert_eq!(issues[0].message, messages::GROUP_COMMON_INVALID);
    }

    #[test]
    fn interest_sum_must_equal_common_denominator() {
        let groups = vec![
            common_group(1, 2, vec![owner("JANE", "SMITH")]),
            common_group(1, 4, vec![owner("JOHN", "SMITH")]),
        ];
        let issues = check_owner_groups(&groups, true, None, &[], 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, messages::GROUP_INTEREST_MISMATCH);
    }

    #[test]
    fn interest_rescales_across_denominators() {
        let groups = vec![
            common_group(1, 2, vec![owner("JANE", "SMITH")]),
            common_group(1, 4, vec![owner("JOHN", "SMITH")]),
            common_group(1, 4, vec![owner("JILL", "SMITH")]),
        ];
        assert!(check_owner_groups(&groups, true, None, &[], 3).is_empty());
    }

    #[test]
    fn missing_interest_fraction_reported() {
        let groups = vec![
            common_group(1, 2, vec![owner("JANE", "SMITH")]),
            common_group(0, 0, vec![owner("JOHN", "SMITH")]),
        ];
        let issues = check_owner_groups(&groups, true, None, &[], 2);
        assert!(
            issues
                .iter()
                .any(|issue| issue.message == messages::GROUP_NUMERATOR_MISSING)
        );
        assert!(
            issues
                .iter()
                .any(|issue| issue.message == messages::GROUP_DENOMINATOR_MISSING)
        );
    }

    #[test]
    fn legacy_sole_group_stays_out_of_interest_sum() {
        // Legacy records sometimes carry a denominator on a SOLE group; it
        // must not enter the reconciliation.
        let registration = Registration {
            mhr_number: "000900".to_string(),
            registration_type: mhr_model::RegistrationType::Mhreg,
            document_id: None,
            status: None,
            registration_ts: None,
            location: None,
            description: None,
            owner_groups: vec![OwnerGroup {
                group_id: 1,
                status: Some(OwnerStatus::Active),
                interest_numerator: 1,
                interest_denominator: 1,
                ..group(TenancyType::Sole, vec![owner("MARY", "JONES")])
            }],
            notes: vec![],
            change_registrations: vec![],
        };
        let groups = vec![
            common_group(1, 2, vec![owner("JANE", "SMITH")]),
            common_group(1, 2, vec![owner("JOHN", "SMITH")]),
        ];
        let issues = check_owner_groups(&groups, false, Some(&registration), &[], 3);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn representative_without_description_flagged() {
        let mut executor = owner("DENNIS", "HALL");
        executor.party_type = Some(PartyType::Executor);
        let groups = vec![group(TenancyType::Na, vec![executor])];
        let issues = check_owner_party_types(&groups, false, true, &[], 2);
        assert!(
            issues
                .iter()
                .any(|issue| issue.message == messages::OWNER_DESCRIPTION_REQUIRED)
        );
    }

    #[test]
    fn representatives_not_allowed_on_sale_transfer() {
        let mut executor = owner("DENNIS", "HALL");
        executor.party_type = Some(PartyType::Executor);
        executor.description = Some("EXECUTOR OF THE ESTATE OF JUDITH HALL".to_string());
        let groups = vec![group(TenancyType::Na, vec![executor])];
        let issues = check_owner_party_types(&groups, false, false, &[], 2);
        assert!(
            issues
                .iter()
                .any(|issue| issue.message == messages::TRANSFER_PARTY_TYPE_INVALID)
        );
    }

    #[test]
    fn mixed_representative_types_flagged_on_new_registration() {
        let mut executor = owner("DENNIS", "HALL");
        executor.party_type = Some(PartyType::Executor);
        executor.description = Some("EXECUTOR OF THE ESTATE OF JUDITH HALL".to_string());
        let mut trustee = owner("SHARON", "HALL");
        trustee.party_type = Some(PartyType::Trustee);
        trustee.description = Some("TRUSTEE OF THE ESTATE OF JUDITH HALL".to_string());
        let groups = vec![group(TenancyType::Na, vec![executor, trustee])];
        let issues = check_owner_party_types(&groups, true, false, &[], 1);
        assert!(
            issues
                .iter()
                .any(|issue| issue.message == messages::GROUP_PARTY_TYPE_INVALID)
        );
    }

    #[test]
    fn delete_group_must_exist_and_be_active() {
        let registration = Registration {
            mhr_number: "000900".to_string(),
            registration_type: mhr_model::RegistrationType::Mhreg,
            document_id: None,
            status: None,
            registration_ts: None,
            location: None,
            description: None,
            owner_groups: vec![OwnerGroup {
                group_id: 1,
                status: Some(OwnerStatus::Previous),
                ..group(TenancyType::Sole, vec![owner("JANE", "SMITH")])
            }],
            notes: vec![],
            change_registrations: vec![],
        };
        let deletes = vec![
            OwnerGroup {
                group_id: 1,
                ..group(TenancyType::Sole, vec![])
            },
            OwnerGroup {
                group_id: 9,
                ..group(TenancyType::Sole, vec![])
            },
        ];
        let issues = check_delete_groups(&registration, &deletes);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("is not active"));
        assert!(issues[1].message.contains("No owner group with ID 9"));
    }
}
