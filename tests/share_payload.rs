use tirupati_services::catalog::Catalog;
use tirupati_services::config::Branding;
use tirupati_services::share::SharePayload;

#[test]
fn loan_records_share_a_loan_route() {
    let catalog = Catalog::bundled();
    let record = catalog.get("education-loan").expect("record present");
    let payload = SharePayload::for_record(record, &Branding::default());

    assert_eq!(payload.url, "https://tirupatiagencies.in/loan/education-loan");
    assert_eq!(payload.title, "Education Loan - Tirupati Agencies");
    assert!(payload.text.contains("Details from Tirupati Agencies"));
}

#[test]
fn service_records_share_a_service_route() {
    let catalog = Catalog::bundled();
    let record = catalog.get("property-card").expect("record present");
    let payload = SharePayload::for_record(record, &Branding::default());
    assert_eq!(payload.url, "https://tirupatiagencies.in/service/property-card");
}

#[test]
fn trailing_slash_in_site_url_does_not_double_up() {
    let catalog = Catalog::bundled();
    let record = catalog.get("ferfar-download").expect("record present");
    let branding = Branding {
        site_url: "https://tirupatiagencies.in/".to_string(),
        ..Branding::default()
    };
    let payload = SharePayload::for_record(record, &branding);
    assert_eq!(payload.url, "https://tirupatiagencies.in/service/ferfar-download");
}
