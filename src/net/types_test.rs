use super::*;

#[test]
fn account_decodes_from_api_json() {
    let json = r#"{
        "id": 42,
        "name": "Casa Esperança",
        "email": "contato@esperanca.org",
        "status": "PENDING",
        "accountType": "INSTITUTION",
        "institution": {
            "cnpj": "12.345.678/0001-90",
            "category": { "name": "Education" }
        },
        "followersCount": 128,
        "followingCount": 3,
        "createdAt": "2026-07-14T10:30:00.000Z"
    }"#;

    let account: Account = serde_json::from_str(json).expect("account");
    assert_eq!(account.id, 42);
    assert_eq!(account.status, AccountStatus::Pending);
    assert_eq!(account.account_type, AccountType::Institution);
    let institution = account.institution.expect("institution sub-record");
    assert_eq!(institution.cnpj, "12.345.678/0001-90");
    assert_eq!(
        institution.category.map(|c| c.name),
        Some("Education".to_owned())
    );
    assert_eq!(account.followers_count, 128);
    assert!(account.created_at.is_some());
}

#[test]
fn account_tolerates_missing_optional_fields() {
    let json = r#"{
        "id": 7,
        "name": "Donor Person",
        "email": "donor@mail.com",
        "status": "ACTIVE",
        "accountType": "DONOR"
    }"#;

    let account: Account = serde_json::from_str(json).expect("account");
    assert!(account.institution.is_none());
    assert_eq!(account.followers_count, 0);
    assert!(account.created_at.is_none());
}

#[test]
fn donation_page_decodes_from_api_json() {
    let json = r#"{
        "data": [{
            "id": 1001,
            "amount": 150.75,
            "status": "APPROVED",
            "paymentCheckoutUrl": null,
            "paymentTransactionId": "tx-9f",
            "createdAt": "2026-08-01T09:00:00.000Z",
            "updatedAt": "2026-08-01T09:05:00.000Z",
            "donorId": 7,
            "institutionId": 42,
            "projectId": null,
            "donor": { "account": { "name": "Donor Person" } },
            "institution": { "account": { "name": "Casa Esperança" } }
        }],
        "meta": { "total": 137 }
    }"#;

    let page: Page<Donation> = serde_json::from_str(json).expect("page");
    assert_eq!(page.meta.total, 137);
    assert_eq!(page.data.len(), 1);

    let donation = &page.data[0];
    assert_eq!(donation.status, DonationStatus::Approved);
    assert_eq!(donation.donor_name(), "Donor Person");
    assert_eq!(donation.destination(), "Institution: Casa Esperança");
}

#[test]
fn donation_destination_prefers_project() {
    let json = r#"{
        "id": 1,
        "amount": 10,
        "status": "PENDING",
        "createdAt": "2026-08-01T09:00:00Z",
        "donorId": 7,
        "project": { "name": "Winter Campaign" },
        "institution": { "account": { "name": "Casa Esperança" } }
    }"#;

    let donation: Donation = serde_json::from_str(json).expect("donation");
    assert_eq!(donation.destination(), "Project: Winter Campaign");
}

#[test]
fn anonymous_donation_without_references() {
    let json = r#"{
        "id": 2,
        "amount": 25.5,
        "status": "CANCELED",
        "createdAt": "2026-08-01T09:00:00Z",
        "donorId": 9
    }"#;

    let donation: Donation = serde_json::from_str(json).expect("donation");
    assert_eq!(donation.donor_name(), "Anonymous");
    assert_eq!(donation.destination(), "General fund");
}

#[test]
fn status_round_trips_as_uppercase() {
    assert_eq!(
        serde_json::to_string(&AccountStatus::Suspended).expect("json"),
        r#""SUSPENDED""#
    );
    assert_eq!(AccountStatus::Suspended.as_str(), "SUSPENDED");
    assert_eq!(AccountType::Institution.as_str(), "INSTITUTION");
}
