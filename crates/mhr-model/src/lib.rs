pub mod description;
pub mod enums;
pub mod issue;
pub mod location;
pub mod note;
pub mod owner;
pub mod party;
pub mod registration;
pub mod requests;

pub use description::{BaseInformation, HomeDescription};
pub use enums::{
    DocumentType, LocationType, NoteStatus, OwnerStatus, PartyType, RecordStatus,
    RegistrationStatus, RegistrationType, TenancyType,
};
pub use issue::{IssueKind, ValidationIssue, ValidationReport};
pub use location::Location;
pub use note::Note;
pub use owner::{Owner, OwnerGroup};
pub use party::{Address, Party, PersonName};
pub use registration::Registration;
pub use requests::{
    AdminRegistration, ExemptionRequest, NewRegistration, PermitRequest, TransferRequest,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_joins_fragments_in_order() {
        let mut report = ValidationReport::new();
        report.add(ValidationIssue::structural("Location park name is required for this registration. "));
        report.add(ValidationIssue::state("The MH registration is not in a state where changes are allowed. "));
        assert!(!report.is_valid());
        assert_eq!(
            report.joined(),
            "Location park name is required for this registration. \
             The MH registration is not in a state where changes are allowed. "
        );
    }

    #[test]
    fn location_normalization_ignores_bookkeeping_fields() {
        let mut current = Location {
            location_type: Some(LocationType::MhPark),
            park_name: Some("GLENDALE TRAILER PARK".to_string()),
            pad: Some("2".to_string()),
            status: Some(RecordStatus::Active),
            location_id: Some(200000),
            leave_province: false,
            ..Location::default()
        };
        let mut proposed = current.clone();
        proposed.status = None;
        proposed.location_id = None;
        assert_eq!(current.normalized(), proposed.normalized());

        current.address = Some(Address {
            postal_code: Some(" ".to_string()),
            ..Address::default()
        });
        proposed.address = Some(Address::default());
        assert_eq!(current.normalized(), proposed.normalized());

        proposed.pad = Some("3".to_string());
        assert_ne!(current.normalized(), proposed.normalized());
    }

    #[test]
    fn owner_group_round_trips_wire_names() {
        let json = r#"{
            "groupId": 1,
            "type": "JOINT",
            "interestNumerator": 1,
            "interestDenominator": 2,
            "owners": [
                {
                    "individualName": {"first": "JANE", "last": "SMITH"},
                    "partyType": "OWNER_IND"
                }
            ]
        }"#;
        let group: OwnerGroup = serde_json::from_str(json).expect("deserialize group");
        assert_eq!(group.tenancy_type, TenancyType::Joint);
        assert_eq!(group.owners.len(), 1);
        let round = serde_json::to_string(&group).expect("serialize group");
        assert!(round.contains("\"type\":\"JOINT\""));
        assert!(round.contains("\"interestDenominator\":2"));
    }

    #[test]
    fn effective_party_type_defaults_by_name_shape() {
        let business = Owner {
            organization_name: Some("BOB PATERSON HOMES INC.".to_string()),
            individual_name: None,
            address: None,
            party_type: None,
            description: None,
            death_date_time: None,
            death_certificate_number: None,
            death_corp_number: None,
            phone_number: None,
            suffix: None,
        };
        assert_eq!(business.effective_party_type(), PartyType::OwnerBus);
        assert!(business.effective_party_type().is_beneficial_owner());
    }
}
