//! Tests for the employee directory service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{EmployeeRecord, Envelope, MockEmployeeUpstream};
use rstest::rstest;
use uuid::Uuid;

const JOHN_ID: &str = "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507";

fn make_service(upstream: MockEmployeeUpstream) -> EmployeeDirectoryService<MockEmployeeUpstream> {
    EmployeeDirectoryService::new(Arc::new(upstream))
}

fn john_id() -> EmployeeId {
    EmployeeId::parse(JOHN_ID).expect("fixture id")
}

fn record(id: EmployeeId, name: &str, salary: Option<i32>) -> EmployeeRecord {
    EmployeeRecord {
        id,
        name: name.to_owned(),
        salary,
        age: Some(30),
        title: "Developer".to_owned(),
        email: format!("{}@example.com", name.replace(' ', ".").to_lowercase()),
    }
}

fn directory() -> Vec<EmployeeRecord> {
    vec![
        record(john_id(), "John Doe", Some(50_000)),
        record(EmployeeId::from_uuid(Uuid::new_v4()), "Jane Smith", Some(75_000)),
        record(EmployeeId::from_uuid(Uuid::new_v4()), "Bob Jones", Some(60_000)),
    ]
}

fn upstream_listing(records: Vec<EmployeeRecord>) -> MockEmployeeUpstream {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_list_employees()
        .times(1)
        .return_once(move || Ok(Envelope::with_data(records, "success")));
    upstream
}

fn new_employee() -> NewEmployee {
    NewEmployee::try_from_parts(
        Some("Ada Lovelace"),
        Some(90_000),
        Some(36),
        Some("Engineer"),
        Some("ada@example.com"),
    )
    .expect("valid request")
}

#[tokio::test]
async fn list_all_preserves_upstream_order() {
    let service = make_service(upstream_listing(directory()));

    let employees = service.list_all().await.expect("list succeeds");

    let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith", "Bob Jones"]);
    assert_eq!(employees[0].id, john_id());
}

#[tokio::test]
async fn list_all_treats_missing_data_as_empty() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_list_employees()
        .times(1)
        .return_once(|| Ok(Envelope::empty("success")));
    let service = make_service(upstream);

    let employees = service.list_all().await.expect("list succeeds");
    assert!(employees.is_empty());
}

#[rstest]
#[case::rate_limited(EmployeeUpstreamError::rate_limited(), ErrorCode::RateLimited)]
#[case::not_found(EmployeeUpstreamError::not_found(), ErrorCode::NotFound)]
#[case::unknown(EmployeeUpstreamError::unknown("status 500"), ErrorCode::UpstreamError)]
#[tokio::test]
async fn list_all_maps_upstream_errors(
    #[case] upstream_error: EmployeeUpstreamError,
    #[case] expected: ErrorCode,
) {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_list_employees()
        .times(1)
        .return_once(move || Err(upstream_error));
    let service = make_service(upstream);

    let error = service.list_all().await.expect_err("list fails");
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case::lowercase("jo", vec!["John Doe", "Bob Jones"])]
#[case::uppercase("SMITH", vec!["Jane Smith"])]
#[case::no_match("zed", vec![])]
#[tokio::test]
async fn search_filters_case_insensitively(#[case] query: &str, #[case] expected: Vec<&str>) {
    let service = make_service(upstream_listing(directory()));
    let query = NameQuery::new(query).expect("non-blank");

    let employees = service.search_by_name(&query).await.expect("search succeeds");

    let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn get_by_id_returns_projection() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .withf(|id| *id == john_id())
        .times(1)
        .return_once(|id| Ok(Envelope::with_data(record(*id, "John Doe", Some(50_000)), "success")));
    let service = make_service(upstream);

    let employee = service.get_by_id(&john_id()).await.expect("lookup succeeds");
    assert_eq!(employee.name, "John Doe");
    assert_eq!(employee.salary, Some(50_000));
}

#[rstest]
#[case::upstream_404(Err(EmployeeUpstreamError::not_found()))]
#[case::missing_data(Ok(Envelope::empty("success")))]
#[tokio::test]
async fn get_by_id_reports_not_found(
    #[case] outcome: Result<Envelope<EmployeeRecord>, EmployeeUpstreamError>,
) {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .times(1)
        .return_once(move |_| outcome);
    let service = make_service(upstream);

    let error = service.get_by_id(&john_id()).await.expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), format!("Employee with ID {JOHN_ID} not found."));
}

#[tokio::test]
async fn rate_limiting_is_not_retried() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .times(1)
        .return_once(|_| Err(EmployeeUpstreamError::rate_limited()));
    let service = make_service(upstream);

    let error = service.get_by_id(&john_id()).await.expect_err("rate limited");
    assert_eq!(error.code(), ErrorCode::RateLimited);
}

#[tokio::test]
async fn highest_salary_picks_maximum() {
    let service = make_service(upstream_listing(directory()));
    assert_eq!(service.highest_salary().await.expect("aggregate"), 75_000);
}

#[tokio::test]
async fn highest_salary_sentinel_for_empty_directory() {
    let service = make_service(upstream_listing(Vec::new()));
    assert_eq!(service.highest_salary().await.expect("aggregate"), -1);
}

#[tokio::test]
async fn top_earning_names_ranked_descending() {
    let service = make_service(upstream_listing(directory()));

    let names = service.top_earning_names().await.expect("aggregate");
    assert_eq!(names, vec!["Jane Smith", "Bob Jones", "John Doe"]);
}

#[tokio::test]
async fn create_returns_created_employee() {
    let created_id = EmployeeId::from_uuid(Uuid::new_v4());
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_create_employee()
        .withf(|employee| employee.name() == "Ada Lovelace" && employee.salary() == 90_000)
        .times(1)
        .return_once(move |_| {
            Ok(Envelope::with_data(
                record(created_id, "Ada Lovelace", Some(90_000)),
                "success",
            ))
        });
    let service = make_service(upstream);

    let employee = service.create(new_employee()).await.expect("create succeeds");
    assert_eq!(employee.id, created_id);
    assert_eq!(employee.name, "Ada Lovelace");
}

#[tokio::test]
async fn create_without_data_fails() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_create_employee()
        .times(1)
        .return_once(|_| Ok(Envelope::empty("failed")));
    let service = make_service(upstream);

    let error = service.create(new_employee()).await.expect_err("no data");
    assert_eq!(error.code(), ErrorCode::CreationFailed);
}

#[tokio::test]
async fn delete_resolves_name_before_deleting() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .times(1)
        .return_once(|id| Ok(Envelope::with_data(record(*id, "John Doe", Some(50_000)), "success")));
    upstream
        .expect_delete_employee()
        .withf(|name| name == "John Doe")
        .times(1)
        .return_once(|_| Ok(Envelope::with_data(true, "success")));
    let service = make_service(upstream);

    let name = service.delete_by_id(&john_id()).await.expect("delete succeeds");
    assert_eq!(name, "John Doe");
}

#[rstest]
#[case::reported_false(Envelope::with_data(false, "failed"))]
#[case::missing_data(Envelope::empty("failed"))]
#[tokio::test]
async fn delete_soft_failure_returns_empty_name(#[case] outcome: Envelope<bool>) {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .times(1)
        .return_once(|id| Ok(Envelope::with_data(record(*id, "John Doe", Some(50_000)), "success")));
    upstream
        .expect_delete_employee()
        .times(1)
        .return_once(move |_| Ok(outcome));
    let service = make_service(upstream);

    let name = service.delete_by_id(&john_id()).await.expect("soft failure");
    assert!(name.is_empty());
}

#[tokio::test]
async fn delete_skips_upstream_delete_when_unresolved() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .times(1)
        .return_once(|_| Err(EmployeeUpstreamError::not_found()));
    upstream.expect_delete_employee().times(0);
    let service = make_service(upstream);

    let error = service.delete_by_id(&john_id()).await.expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_propagates_rate_limiting_from_delete_call() {
    let mut upstream = MockEmployeeUpstream::new();
    upstream
        .expect_fetch_employee()
        .times(1)
        .return_once(|id| Ok(Envelope::with_data(record(*id, "John Doe", Some(50_000)), "success")));
    upstream
        .expect_delete_employee()
        .times(1)
        .return_once(|_| Err(EmployeeUpstreamError::rate_limited()));
    let service = make_service(upstream);

    let error = service.delete_by_id(&john_id()).await.expect_err("rate limited");
    assert_eq!(error.code(), ErrorCode::RateLimited);
}
