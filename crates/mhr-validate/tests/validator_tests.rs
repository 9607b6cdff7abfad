//! End to end validator scenarios with stubbed registry collaborators.

use chrono::{DateTime, Days, TimeZone, Utc};
use mhr_model::{
    Address, BaseInformation, DocumentType, HomeDescription, Location, LocationType,
    NewRegistration, Note, NoteStatus, Owner, OwnerGroup, OwnerStatus, Party, PermitRequest,
    PersonName, RecordStatus, Registration, RegistrationStatus, RegistrationType, TenancyType,
    TransferRequest,
};
use mhr_validate::{
    AccountGroup, Draft, ParcelLookup, RegistrationStore, StoreError, ValidationContext,
    validate_admin_registration, validate_exemption, validate_new_registration, validate_permit,
    validate_transfer,
};

const VALID_DOC_ID: &str = "63166035";

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
struct TestStore {
    home: Option<Registration>,
    doc_id_count: u32,
    draft: Option<Draft>,
    permit_count: u32,
    ppr_type: Option<String>,
    fail: bool,
}

impl RegistrationStore for TestStore {
    fn find_by_mhr_number(&self, mhr_number: &str) -> Result<Option<Registration>, StoreError> {
        Ok(self.find_all_by_mhr_number(mhr_number)?.map(|mut home| {
            home.change_registrations.clear();
            home
        }))
    }

    fn find_all_by_mhr_number(
        &self,
        mhr_number: &str,
    ) -> Result<Option<Registration>, StoreError> {
        Ok(self
            .home
            .as_ref()
            .filter(|home| home.mhr_number == mhr_number)
            .cloned())
    }

    fn count_by_document_id(&self, _document_id: &str) -> Result<u32, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(self.doc_id_count)
    }

    fn find_draft_by_number(&self, _draft_number: &str) -> Result<Option<Draft>, StoreError> {
        Ok(self.draft.clone())
    }

    fn permit_count(&self, _mhr_number: &str, _party_name: &str) -> Result<u32, StoreError> {
        Ok(self.permit_count)
    }

    fn ppr_registration_type(&self, _mhr_number: &str) -> Result<Option<String>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(self.ppr_type.clone())
    }
}

struct TestParcels {
    exists: bool,
    fail: bool,
}

impl Default for TestParcels {
    fn default() -> Self {
        Self {
            exists: true,
            fail: false,
        }
    }
}

impl ParcelLookup for TestParcels {
    fn pid_exists(&self, _pid_number: &str) -> Result<bool, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("service timeout".to_string()));
        }
        Ok(self.exists)
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
}

fn staff_ctx() -> ValidationContext {
    ValidationContext::staff(now())
}

fn client_ctx() -> ValidationContext {
    ValidationContext::client(now())
}

fn address() -> Address {
    Address {
        street: Some("3122 LYNNLARK PLACE".to_string()),
        city: Some("VICTORIA".to_string()),
        region: Some("BC".to_string()),
        country: Some("CA".to_string()),
        postal_code: Some("V8S 4I6".to_string()),
        ..Address::default()
    }
}

fn individual(first: &str, last: &str) -> Owner {
    Owner {
        individual_name: Some(PersonName {
            first: first.to_string(),
            middle: None,
            last: last.to_string(),
        }),
        organization_name: None,
        address: Some(address()),
        party_type: None,
        description: None,
        death_date_time: None,
        death_certificate_number: None,
        death_corp_number: None,
        phone_number: None,
        suffix: None,
    }
}

fn group(id: u32, tenancy: TenancyType, owners: Vec<Owner>) -> OwnerGroup {
    OwnerGroup {
        group_id: id,
        tenancy_type: tenancy,
        status: None,
        interest: None,
        interest_numerator: 0,
        interest_denominator: 0,
        owners,
    }
}

fn submitting_party() -> Party {
    Party {
        business_name: Some("ABC SEARCHING COMPANY".to_string()),
        person_name: None,
        address: Some(address()),
        phone_number: Some("6041234567".to_string()),
        email_address: None,
    }
}

fn park_location() -> Location {
    Location {
        location_type: Some(LocationType::MhPark),
        address: Some(address()),
        park_name: Some("GLENDALE TRAILER PARK".to_string()),
        pad: Some("1".to_string()),
        ..Location::default()
    }
}

fn description() -> HomeDescription {
    HomeDescription {
        base_information: Some(BaseInformation {
            year: Some(2024),
            make: Some("WATSON IND. (ALTA)".to_string()),
            model: Some("DUCHESS".to_string()),
            circa: false,
        }),
        section_count: Some(1),
        csa_number: Some("786356".to_string()),
        csa_standard: Some("Z240".to_string()),
        ..HomeDescription::default()
    }
}

fn new_registration() -> NewRegistration {
    NewRegistration {
        mhr_number: None,
        document_id: Some(VALID_DOC_ID.to_string()),
        client_reference_id: Some("EX-MH001234".to_string()),
        submitting_party: Some(submitting_party()),
        owner_groups: vec![group(
            1,
            TenancyType::Sole,
            vec![individual("JANE", "SMITH")],
        )],
        location: Some(park_location()),
        description: Some(description()),
    }
}

fn home() -> Registration {
    let mut location = park_location();
    location.location_id = Some(200000234);
    location.status = Some(RecordStatus::Active);
    Registration {
        mhr_number: "000900".to_string(),
        registration_type: RegistrationType::Mhreg,
        document_id: Some("REG00900".to_string()),
        status: Some(RegistrationStatus::Active),
        registration_ts: Some(now().checked_sub_days(Days::new(400)).unwrap()),
        location: Some(location),
        description: Some(description()),
        owner_groups: vec![OwnerGroup {
            status: Some(OwnerStatus::Active),
            ..group(
                1,
                TenancyType::Joint,
                vec![individual("JANE", "SMITH"), individual("JOHN", "SMITH")],
            )
        }],
        notes: vec![],
        change_registrations: vec![],
    }
}

fn transfer() -> TransferRequest {
    TransferRequest {
        mhr_number: Some("000900".to_string()),
        document_id: Some(VALID_DOC_ID.to_string()),
        registration_type: None,
        submitting_party: Some(submitting_party()),
        add_owner_groups: vec![group(
            2,
            TenancyType::Sole,
            vec![individual("MARY", "JONES")],
        )],
        delete_owner_groups: vec![OwnerGroup {
            status: Some(OwnerStatus::Active),
            ..group(
                1,
                TenancyType::Joint,
                vec![individual("JANE", "SMITH"), individual("JOHN", "SMITH")],
            )
        }],
        declared_value: Some(50000),
        consideration: Some("$50000.00".to_string()),
        transfer_date: Some(now()),
        transfer_document_type: None,
        draft_number: None,
    }
}

#[test]
fn staff_new_registration_passes() {
    let report = validate_new_registration(&new_registration(), &staff_ctx(), &TestStore::default());
    assert!(report.is_valid(), "unexpected issues: {}", report.joined());
}

#[test]
fn sole_group_with_two_owners_rejected() {
    let mut request = new_registration();
    request.owner_groups = vec![group(
        1,
        TenancyType::Sole,
        vec![individual("JANE", "SMITH"), individual("JOHN", "SMITH")],
    )];
    let report = validate_new_registration(&request, &staff_ctx(), &TestStore::default());
    assert!(report.contains("Only one sole owner"));
}

#[test]
fn duplicate_document_id_rejected() {
    let store = TestStore {
        doc_id_count: 1,
        ..TestStore::default()
    };
    let report = validate_new_registration(&new_registration(), &staff_ctx(), &store);
    assert!(report.contains("Document ID must be unique"));
}

#[test]
fn manufacturer_location_rejects_park_fields() {
    let mut request = new_registration();
    request.location = Some(Location {
        location_type: Some(LocationType::Manufacturer),
        address: Some(address()),
        dealer_name: Some("BOB PATERSON HOMES INC.".to_string()),
        park_name: Some("GLENDALE TRAILER PARK".to_string()),
        ..Location::default()
    });
    let report = validate_new_registration(&request, &staff_ctx(), &TestStore::default());
    assert!(report.contains("not allowed with a MANUFACTURER location type"));
}

#[test]
fn store_failure_degrades_to_generic_issue() {
    init_tracing();
    let store = TestStore {
        fail: true,
        ..TestStore::default()
    };
    let report = validate_new_registration(&new_registration(), &staff_ctx(), &store);
    assert!(!report.is_valid());
    assert_eq!(report.joined(), "Error performing extra validation. ");
}

#[test]
fn client_transfer_passes() {
    let store = TestStore {
        home: Some(home()),
        ..TestStore::default()
    };
    let registration = store
        .find_all_by_mhr_number("000900")
        .expect("store lookup")
        .expect("home exists");
    let report = validate_transfer(&registration, &transfer(), &client_ctx(), &store);
    assert!(report.is_valid(), "unexpected issues: {}", report.joined());
}

#[test]
fn full_snapshot_lookup_includes_change_history() {
    let mut registration = home();
    registration.change_registrations.push(Registration {
        registration_type: RegistrationType::RegStaffAdmin,
        status: None,
        owner_groups: vec![],
        notes: vec![Note {
            document_type: DocumentType::Taxn,
            document_id: Some("63245948".to_string()),
            status: Some(NoteStatus::Active),
            remarks: None,
            giving_notice_party: None,
            expiry_date_time: None,
            effective_date_time: None,
        }],
        ..home()
    });
    let store = TestStore {
        home: Some(registration),
        ..TestStore::default()
    };
    let base = store
        .find_by_mhr_number("000900")
        .expect("store lookup")
        .expect("home exists");
    assert!(base.change_registrations.is_empty());
    let full = store
        .find_all_by_mhr_number("000900")
        .expect("store lookup")
        .expect("home exists");
    let report = validate_transfer(&full, &transfer(), &client_ctx(), &store);
    assert!(report.contains("active TAXN, NCON, or REST unit note"));
}

#[test]
fn negative_declared_value_rejected() {
    let mut request = transfer();
    request.declared_value = Some(-5);
    let report = validate_transfer(&home(), &request, &client_ctx(), &TestStore::default());
    assert!(report.contains("Declared value is required and must be greater than 0"));
}

#[test]
fn staff_death_transfer_blocked_for_clients() {
    let mut request = transfer();
    request.registration_type = Some(RegistrationType::TransWill);
    let report = validate_transfer(&home(), &request, &client_ctx(), &TestStore::default());
    assert_eq!(
        report.joined(),
        "Only BC Registries Staff are allowed to submit this registration. "
    );
}

#[test]
fn affidavit_declared_value_capped() {
    let mut executor = individual("DENNIS", "HALL");
    executor.party_type = Some(mhr_model::PartyType::Executor);
    executor.description = Some("EXECUTOR OF THE ESTATE OF JANE SMITH".to_string());
    let mut second = individual("SHARON", "HALL");
    second.party_type = Some(mhr_model::PartyType::Executor);
    second.description = Some("EXECUTOR OF THE ESTATE OF JANE SMITH".to_string());
    let mut deceased_one = individual("JANE", "SMITH");
    deceased_one.death_certificate_number = Some("232432432".to_string());
    deceased_one.death_date_time = Some(now().checked_sub_days(Days::new(30)).unwrap());
    let mut deceased_two = individual("JOHN", "SMITH");
    deceased_two.death_certificate_number = Some("232432433".to_string());
    deceased_two.death_date_time = Some(now().checked_sub_days(Days::new(30)).unwrap());

    let mut request = transfer();
    request.registration_type = Some(RegistrationType::TransAffidavit);
    request.declared_value = Some(30000);
    request.add_owner_groups = vec![group(2, TenancyType::Na, vec![executor, second])];
    request.delete_owner_groups = vec![OwnerGroup {
        status: Some(OwnerStatus::Active),
        ..group(1, TenancyType::Joint, vec![deceased_one, deceased_two])
    }];
    let report = validate_transfer(&home(), &request, &staff_ctx(), &TestStore::default());
    assert!(report.contains("cannot be greater than 25000"));

    request.declared_value = Some(25000);
    let report = validate_transfer(&home(), &request, &staff_ctx(), &TestStore::default());
    assert!(report.is_valid(), "unexpected issues: {}", report.joined());
}

#[test]
fn active_tax_note_freezes_client_changes_only() {
    let mut registration = home();
    registration.change_registrations.push(Registration {
        registration_type: RegistrationType::RegStaffAdmin,
        status: None,
        owner_groups: vec![],
        notes: vec![Note {
            document_type: DocumentType::Taxn,
            document_id: Some("63245948".to_string()),
            status: Some(NoteStatus::Active),
            remarks: None,
            giving_notice_party: None,
            expiry_date_time: None,
            effective_date_time: None,
        }],
        ..home()
    });
    let report = validate_transfer(&registration, &transfer(), &client_ctx(), &TestStore::default());
    assert!(report.contains("active TAXN, NCON, or REST unit note"));
    let report = validate_transfer(&registration, &transfer(), &staff_ctx(), &TestStore::default());
    assert!(report.is_valid(), "unexpected issues: {}", report.joined());
}

#[test]
fn ppr_lien_blocks_client_transfer() {
    let store = TestStore {
        ppr_type: Some("SA_TAX".to_string()),
        ..TestStore::default()
    };
    let report = validate_transfer(&home(), &transfer(), &client_ctx(), &store);
    assert!(report.contains("outstanding Personal Property Registry lien"));
}

#[test]
fn sg_lien_blocks_client_transfer() {
    let store = TestStore {
        ppr_type: Some("SG".to_string()),
        ..TestStore::default()
    };
    let report = validate_transfer(&home(), &transfer(), &client_ctx(), &store);
    assert!(report.contains("outstanding Personal Property Registry lien"));
}

#[test]
fn stale_draft_rejected() {
    let store = TestStore {
        draft: Some(Draft {
            draft_number: "100001".to_string(),
            stale_count: 2,
        }),
        ..TestStore::default()
    };
    let mut request = transfer();
    request.draft_number = Some("100001".to_string());
    let report = validate_transfer(&home(), &request, &client_ctx(), &store);
    assert!(report.contains("draft for this registration is out of date"));
}

#[test]
fn qualified_supplier_partial_delete_rejected() {
    let mut registration = home();
    registration.owner_groups = vec![
        OwnerGroup {
            status: Some(OwnerStatus::Active),
            interest_numerator: 1,
            interest_denominator: 3,
            ..group(1, TenancyType::Common, vec![individual("JANE", "SMITH")])
        },
        OwnerGroup {
            status: Some(OwnerStatus::Active),
            interest_numerator: 1,
            interest_denominator: 3,
            ..group(2, TenancyType::Common, vec![individual("JOHN", "SMITH")])
        },
        OwnerGroup {
            status: Some(OwnerStatus::Active),
            interest_numerator: 1,
            interest_denominator: 3,
            ..group(3, TenancyType::Common, vec![individual("MARY", "JONES")])
        },
    ];
    let mut request = transfer();
    request.delete_owner_groups = vec![
        OwnerGroup {
            status: Some(OwnerStatus::Active),
            ..group(1, TenancyType::Common, vec![individual("JANE", "SMITH")])
        },
        OwnerGroup {
            status: Some(OwnerStatus::Active),
            ..group(2, TenancyType::Common, vec![individual("JOHN", "SMITH")])
        },
    ];
    let ctx = client_ctx().with_account_group(AccountGroup::QualifiedSupplier);
    let report = validate_transfer(&registration, &request, &ctx, &TestStore::default());
    assert!(report.contains("delete one owner group or all owner groups"));
}

#[test]
fn permit_to_identical_location_rejected() {
    let request = PermitRequest {
        mhr_number: Some("000900".to_string()),
        document_id: None,
        submitting_party: Some(submitting_party()),
        new_location: Some(park_location()),
        land_status_confirmation: false,
        draft_number: None,
    };
    let report = validate_permit(
        &home(),
        &request,
        &client_ctx(),
        &TestStore::default(),
        &TestParcels::default(),
    );
    assert!(report.contains("cannot be identical to the existing location"));
}

#[test]
fn permit_pid_lookup_fails_closed() {
    let mut location = Location {
        location_type: Some(LocationType::Other),
        address: Some(address()),
        pid_number: Some("007351119".to_string()),
        tax_certificate: true,
        tax_expiry_date: Some(now().checked_add_days(Days::new(90)).unwrap()),
        ..Location::default()
    };
    location.legal_description = Some("LOT 24 DISTRICT LOT 497 KAMLOOPS DIVISION".to_string());
    let request = PermitRequest {
        mhr_number: Some("000900".to_string()),
        document_id: None,
        submitting_party: Some(submitting_party()),
        new_location: Some(location),
        land_status_confirmation: true,
        draft_number: None,
    };
    let parcels = TestParcels {
        exists: true,
        fail: true,
    };
    let report = validate_permit(
        &home(),
        &request,
        &client_ctx(),
        &TestStore::default(),
        &parcels,
    );
    assert!(report.contains("PID verification failed"));
}

#[test]
fn manufacturer_limited_to_one_permit() {
    let mut registration = home();
    let mut lot = Location {
        location_type: Some(LocationType::Manufacturer),
        address: Some(address()),
        dealer_name: Some("BOB PATERSON HOMES INC.".to_string()),
        status: Some(RecordStatus::Active),
        ..Location::default()
    };
    lot.location_id = Some(200000235);
    registration.location = Some(lot);
    let store = TestStore {
        permit_count: 1,
        ..TestStore::default()
    };
    let request = PermitRequest {
        mhr_number: Some("000900".to_string()),
        document_id: None,
        submitting_party: Some(submitting_party()),
        new_location: Some(park_location()),
        land_status_confirmation: true,
        draft_number: None,
    };
    let ctx = client_ctx().with_account_group(AccountGroup::Manufacturer);
    let report = validate_permit(&registration, &request, &ctx, &store, &TestParcels::default());
    assert!(report.contains("only submit a transport permit once"));
}

#[test]
fn exemption_rejected_on_park_location() {
    let request = mhr_model::ExemptionRequest {
        mhr_number: Some("000900".to_string()),
        document_id: Some(VALID_DOC_ID.to_string()),
        submitting_party: Some(submitting_party()),
        non_residential: false,
        note: None,
        draft_number: None,
    };
    let report = validate_exemption(&home(), &request, &staff_ctx(), &TestStore::default());
    assert!(report.contains("dealer/manufacturer lot or manufactured home park"));
}

#[test]
fn destroyed_date_only_on_non_residential() {
    let mut registration = home();
    let mut other = Location {
        location_type: Some(LocationType::Other),
        address: Some(address()),
        land_district: Some("CARIBOO".to_string()),
        district_lot: Some("1652".to_string()),
        status: Some(RecordStatus::Active),
        ..Location::default()
    };
    other.location_id = Some(200000236);
    registration.location = Some(other);
    let mut request = mhr_model::ExemptionRequest {
        mhr_number: Some("000900".to_string()),
        document_id: Some(VALID_DOC_ID.to_string()),
        submitting_party: Some(submitting_party()),
        non_residential: false,
        note: Some(Note {
            document_type: DocumentType::Exrs,
            document_id: None,
            status: None,
            remarks: None,
            giving_notice_party: None,
            expiry_date_time: Some(now().checked_sub_days(Days::new(5)).unwrap()),
            effective_date_time: None,
        }),
        draft_number: None,
    };
    let report = validate_exemption(&registration, &request, &staff_ctx(), &TestStore::default());
    assert!(report.contains("cannot be submitted with a residential exemption"));

    request.non_residential = true;
    if let Some(note) = request.note.as_mut() {
        note.document_type = DocumentType::Exnr;
        note.expiry_date_time = Some(now().checked_add_days(Days::new(5)).unwrap());
    }
    let report = validate_exemption(&registration, &request, &staff_ctx(), &TestStore::default());
    assert!(report.contains("cannot be in the future"));
}

#[test]
fn ncan_cannot_cancel_a_tax_notice() {
    let mut registration = home();
    registration.change_registrations.push(Registration {
        registration_type: RegistrationType::RegStaffAdmin,
        status: None,
        owner_groups: vec![],
        notes: vec![Note {
            document_type: DocumentType::Taxn,
            document_id: Some("63245948".to_string()),
            status: Some(NoteStatus::Active),
            remarks: None,
            giving_notice_party: None,
            expiry_date_time: None,
            effective_date_time: None,
        }],
        ..home()
    });
    let request = mhr_model::AdminRegistration {
        mhr_number: Some("000900".to_string()),
        document_id: Some(VALID_DOC_ID.to_string()),
        document_type: Some(DocumentType::Ncan),
        submitting_party: Some(submitting_party()),
        note: Some(Note {
            document_type: DocumentType::Ncan,
            document_id: None,
            status: None,
            remarks: Some("CANCELLED IN ERROR".to_string()),
            giving_notice_party: None,
            expiry_date_time: None,
            effective_date_time: None,
        }),
        update_document_id: Some("63245948".to_string()),
        cancel_document_id: None,
        location: None,
    };
    let report = validate_admin_registration(
        &registration,
        &request,
        &staff_ctx(),
        &TestStore::default(),
        &TestParcels::default(),
    );
    assert!(
        report.contains("Cancel Notice is not allowed with the registration document type TAXN")
    );
}

#[test]
fn ncan_accepts_cancel_document_id_alias() {
    let mut registration = home();
    registration.change_registrations.push(Registration {
        registration_type: RegistrationType::RegStaffAdmin,
        status: None,
        owner_groups: vec![],
        notes: vec![Note {
            document_type: DocumentType::Cau,
            document_id: Some("63245948".to_string()),
            status: Some(NoteStatus::Active),
            remarks: None,
            giving_notice_party: None,
            expiry_date_time: None,
            effective_date_time: None,
        }],
        ..home()
    });
    let mut request = mhr_model::AdminRegistration {
        mhr_number: Some("000900".to_string()),
        document_id: Some(VALID_DOC_ID.to_string()),
        document_type: Some(DocumentType::Ncan),
        submitting_party: Some(submitting_party()),
        note: Some(Note {
            document_type: DocumentType::Ncan,
            document_id: None,
            status: None,
            remarks: Some("CANCELLED IN ERROR".to_string()),
            giving_notice_party: None,
            expiry_date_time: None,
            effective_date_time: None,
        }),
        update_document_id: None,
        cancel_document_id: Some("63245948".to_string()),
        location: None,
    };
    let report = validate_admin_registration(
        &registration,
        &request,
        &staff_ctx(),
        &TestStore::default(),
        &TestParcels::default(),
    );
    assert!(report.is_valid(), "unexpected issues: {}", report.joined());

    request.cancel_document_id = None;
    let report = validate_admin_registration(
        &registration,
        &request,
        &staff_ctx(),
        &TestStore::default(),
        &TestParcels::default(),
    );
    assert!(report.contains("The cancellation update document ID is required"));
}

#[test]
fn nred_requires_update_document_id() {
    let request = mhr_model::AdminRegistration {
        mhr_number: Some("000900".to_string()),
        document_id: Some(VALID_DOC_ID.to_string()),
        document_type: Some(DocumentType::Nred),
        submitting_party: Some(submitting_party()),
        note: Some(Note {
            document_type: DocumentType::Nred,
            document_id: None,
            status: None,
            remarks: None,
            giving_notice_party: Some(submitting_party()),
            expiry_date_time: None,
            effective_date_time: None,
        }),
        update_document_id: None,
        cancel_document_id: None,
        location: None,
    };
    let report = validate_admin_registration(
        &home(),
        &request,
        &staff_ctx(),
        &TestStore::default(),
        &TestParcels::default(),
    );
    assert!(report.contains("The update document ID is required"));
}

#[test]
fn transfer_payload_validates_from_registry_json() {
    let json = r#"{
        "mhrNumber": "000900",
        "declaredValue": 50000,
        "consideration": "$50000.00",
        "transferDate": "2026-08-27T10:00:00+00:00",
        "submittingParty": {
            "businessName": "ABC SEARCHING COMPANY",
            "address": {
                "street": "3122 LYNNLARK PLACE",
                "city": "VICTORIA",
                "region": "BC",
                "country": "CA",
                "postalCode": "V8S 4I6"
            }
        },
        "addOwnerGroups": [{
            "groupId": 2,
            "type": "SOLE",
            "owners": [{
                "individualName": {"first": "MARY", "last": "JONES"},
                "address": {
                    "street": "3122 LYNNLARK PLACE",
                    "city": "VICTORIA",
                    "region": "BC",
                    "country": "CA",
                    "postalCode": "V8S 4I6"
                }
            }]
        }],
        "deleteOwnerGroups": [{"groupId": 1, "type": "JOINT", "status": "ACTIVE"}]
    }"#;
    let request: TransferRequest = serde_json::from_str(json).expect("payload deserializes");
    let report = validate_transfer(&home(), &request, &client_ctx(), &TestStore::default());
    assert!(report.is_valid(), "unexpected issues: {}", report.joined());
}

#[test]
fn issues_accumulate_in_submission_order() {
    let mut request = new_registration();
    request.document_id = None;
    request.submitting_party = None;
    let report = validate_new_registration(&request, &staff_ctx(), &TestStore::default());
    let messages: Vec<&str> = report
        .issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Document ID is required for staff registrations. ",
            "Submitting Party is required for MH registrations. ",
        ]
    );
}
