use super::*;
use crate::seed::builtin_requests;
use chrono::NaiveDate;
use shared::ErrorCode;
use shared::models::{RequestStatus, RequestSubmit, ServiceRequest, ServiceType};
use std::collections::HashSet;

fn create_test_store() -> RequestStore {
    RequestStore::with_requests(builtin_requests()).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn submission(student_id: &str, name: &str, service_type: ServiceType, description: &str) -> RequestSubmit {
    RequestSubmit {
        student_id: student_id.to_string(),
        student_name: name.to_string(),
        service_type,
        description: description.to_string(),
        location: None,
    }
}

fn ids(requests: &[ServiceRequest]) -> Vec<&str> {
    requests.iter().map(|r| r.id.as_str()).collect()
}

// ========================================================================
// Submit
// ========================================================================

#[test]
fn test_submit_creates_submitted_request_with_fresh_id() {
    let store = create_test_store();
    let existing: HashSet<String> = store.snapshot().into_iter().map(|r| r.id).collect();

    let created = store
        .submit(submission("s1", "Rahul Sharma", ServiceType::Canteen, "Stale food served"))
        .unwrap();

    assert_eq!(created.status, RequestStatus::Submitted);
    assert!(!existing.contains(&created.id));
    assert!(created.remarks.is_none());
    assert_eq!(created.date, shared::util::today());
    assert_eq!(store.len(), 4);
    assert_eq!(store.get(&created.id), Some(created));
}

#[test]
fn test_submit_inserts_at_head() {
    let store = create_test_store();
    let created = store
        .submit(submission("s1", "Rahul Sharma", ServiceType::Erp, "Cannot log in to ERP"))
        .unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot[0].id, created.id);
    assert_eq!(ids(&snapshot[1..]), vec!["req1", "req2", "req3"]);
}

#[test]
fn test_submit_ids_are_unique_across_many_submissions() {
    let store = RequestStore::new();
    for i in 0..200 {
        store
            .submit(submission("s1", "Rahul Sharma", ServiceType::Other, &format!("issue {i}")))
            .unwrap();
    }
    let unique: HashSet<String> = store.snapshot().into_iter().map(|r| r.id).collect();
    assert_eq!(unique.len(), 200);
}

#[test]
fn test_submit_empty_description_fails_without_insert() {
    let store = create_test_store();

    let err = store
        .submit(submission("s1", "Rahul Sharma", ServiceType::Other, ""))
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.detail_str("field"), Some("description"));

    let err = store
        .submit(submission("s1", "Rahul Sharma", ServiceType::Other, "   \n"))
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(store.len(), 3);
}

#[test]
fn test_submit_requires_owner() {
    let store = create_test_store();
    let err = store
        .submit(submission("", "Rahul Sharma", ServiceType::Other, "Broken bench"))
        .unwrap_err();
    assert_eq!(err.detail_str("field"), Some("student_id"));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_submit_location_normalized() {
    let store = RequestStore::new();

    let mut input = submission("s1", "Rahul Sharma", ServiceType::Parking, "No space for bikes");
    input.location = Some("   ".to_string());
    assert!(store.submit(input).unwrap().location.is_none());

    let mut input = submission("s1", "Rahul Sharma", ServiceType::Parking, "Gate locked");
    input.location = Some(" North gate ".to_string());
    assert_eq!(store.submit(input).unwrap().location.as_deref(), Some("North gate"));

    let mut input = submission("s1", "Rahul Sharma", ServiceType::Parking, "Too long");
    input.location = Some("x".repeat(501));
    assert_eq!(store.submit(input).unwrap_err().code, ErrorCode::ValueOutOfRange);
    assert_eq!(store.len(), 2);
}

// ========================================================================
// UpdateStatus
// ========================================================================

#[test]
fn test_update_status_with_remarks() {
    let store = create_test_store();

    let updated = store
        .update_status("req1", RequestStatus::InProgress, Some("Plumber assigned".to_string()))
        .unwrap();
    assert_eq!(updated.status, RequestStatus::InProgress);

    let stored = store.get("req1").unwrap();
    assert_eq!(stored.status, RequestStatus::InProgress);
    assert_eq!(stored.remarks.as_deref(), Some("Plumber assigned"));
}

#[test]
fn test_update_status_without_remarks_keeps_existing() {
    let store = create_test_store();

    store.update_status("req3", RequestStatus::InProgress, None).unwrap();
    assert_eq!(
        store.get("req3").unwrap().remarks.as_deref(),
        Some("Collect from Admin block")
    );

    // blank remarks count as omitted
    store
        .update_status("req3", RequestStatus::Resolved, Some("  ".to_string()))
        .unwrap();
    assert_eq!(
        store.get("req3").unwrap().remarks.as_deref(),
        Some("Collect from Admin block")
    );
}

#[test]
fn test_update_status_is_permissive() {
    let store = create_test_store();

    // skip straight to Resolved
    store.update_status("req1", RequestStatus::Resolved, None).unwrap();
    assert_eq!(store.get("req1").unwrap().status, RequestStatus::Resolved);

    // reopen
    store.update_status("req1", RequestStatus::InProgress, None).unwrap();
    assert_eq!(store.get("req1").unwrap().status, RequestStatus::InProgress);

    // back to Submitted
    store.update_status("req1", RequestStatus::Submitted, None).unwrap();
    assert_eq!(store.get("req1").unwrap().status, RequestStatus::Submitted);
}

#[test]
fn test_update_status_unknown_id() {
    let store = create_test_store();
    let before = store.snapshot();

    let err = store
        .update_status("nonexistent-id", RequestStatus::Resolved, None)
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code, ErrorCode::RequestNotFound);

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_update_status_only_touches_status_and_remarks() {
    let store = create_test_store();
    let before = store.get("req2").unwrap();

    let after = store
        .update_status("req2", RequestStatus::Resolved, Some("Bins emptied".to_string()))
        .unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.student_id, before.student_id);
    assert_eq!(after.student_name, before.student_name);
    assert_eq!(after.date, before.date);
    assert_eq!(after.description, before.description);
    assert_eq!(after.location, before.location);
}

// ========================================================================
// ListFor
// ========================================================================

#[test]
fn test_list_for_staff_orders_by_date_desc() {
    let store = create_test_store();
    let listed = store.list_for(&Viewer::Staff, &RequestFilter::all());

    let dates: Vec<NaiveDate> = listed.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date(2023, 10, 25), date(2023, 10, 24), date(2023, 10, 20)]);
    assert_eq!(ids(&listed), vec!["req1", "req2", "req3"]);
}

#[test]
fn test_list_for_student_only_own_requests() {
    let store = create_test_store();
    let listed = store.list_for(&Viewer::Student("s1".to_string()), &RequestFilter::all());

    assert_eq!(ids(&listed), vec!["req1", "req3"]);
    assert!(listed.iter().all(|r| r.student_id == "s1"));

    let none = store.list_for(&Viewer::Student("s404".to_string()), &RequestFilter::all());
    assert!(none.is_empty());
}

#[test]
fn test_list_for_sorts_out_of_order_seed() {
    let mut seed = builtin_requests();
    seed.reverse();
    let store = RequestStore::with_requests(seed).unwrap();

    let listed = store.list_for(&Viewer::Admin, &RequestFilter::all());
    assert_eq!(ids(&listed), vec!["req1", "req2", "req3"]);
}

#[test]
fn test_list_for_same_date_ties_most_recent_insert_first() {
    let store = RequestStore::new();
    let day = date(2024, 3, 1);
    let first = store
        .submit_dated(submission("s1", "Rahul Sharma", ServiceType::Canteen, "first"), day)
        .unwrap();
    let second = store
        .submit_dated(submission("s1", "Rahul Sharma", ServiceType::Canteen, "second"), day)
        .unwrap();
    let older = store
        .submit_dated(submission("s1", "Rahul Sharma", ServiceType::Canteen, "older"), date(2024, 2, 1))
        .unwrap();

    let listed = store.list_for(&Viewer::Staff, &RequestFilter::all());
    assert_eq!(
        ids(&listed),
        vec![second.id.as_str(), first.id.as_str(), older.id.as_str()]
    );
}

#[test]
fn test_list_for_filters() {
    let store = create_test_store();

    let in_progress = store.list_for(
        &Viewer::Staff,
        &RequestFilter::all().with_status(RequestStatus::InProgress),
    );
    assert_eq!(ids(&in_progress), vec!["req2"]);

    let by_type = store.list_for(&Viewer::Staff, &RequestFilter::all().with_search("id card"));
    assert_eq!(ids(&by_type), vec!["req3"]);

    let by_id = store.list_for(&Viewer::Staff, &RequestFilter::all().with_search("REQ2"));
    assert_eq!(ids(&by_id), vec!["req2"]);

    // student scope applies before search
    let scoped = store.list_for(
        &Viewer::Student("s1".to_string()),
        &RequestFilter::all().with_search("priya"),
    );
    assert!(scoped.is_empty());
}

#[test]
fn test_list_for_is_idempotent() {
    let store = create_test_store();
    let filter = RequestFilter::all().with_search("rahul");

    let a = store.list_for(&Viewer::Staff, &filter);
    let b = store.list_for(&Viewer::Staff, &filter);
    assert_eq!(a, b);
    assert_eq!(store.len(), 3);
}

// ========================================================================
// Concurrency
// ========================================================================

#[test]
fn test_concurrent_submits_and_reads() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(create_test_store());
    let writers: Vec<_> = (0..4)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..25 {
                    store
                        .submit(submission(
                            &format!("s{w}"),
                            "Writer",
                            ServiceType::Other,
                            &format!("ticket {i}"),
                        ))
                        .unwrap();
                }
            })
        })
        .collect();
    let readers: Vec<_> = (0..2)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..25 {
                    let listed = store.list_for(&Viewer::Staff, &RequestFilter::all());
                    assert!(listed.len() >= 3);
                    assert!(listed.windows(2).all(|w| w[0].date >= w[1].date));
                }
            })
        })
        .collect();

    for h in writers.into_iter().chain(readers) {
        h.join().unwrap();
    }
    assert_eq!(store.len(), 103);
    let unique: HashSet<String> = store.snapshot().into_iter().map(|r| r.id).collect();
    assert_eq!(unique.len(), 103);
}

#[test]
fn test_with_requests_rejects_duplicate_ids() {
    let mut seed = builtin_requests();
    seed.push(seed[2].clone());
    let err = RequestStore::with_requests(seed).unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateId);
}

#[test]
fn test_aggregate_seed_scenario() {
    let store = create_test_store();
    let summary = store.aggregate(5);

    assert_eq!(summary.count_for(RequestStatus::Submitted), 1);
    assert_eq!(summary.count_for(RequestStatus::InProgress), 1);
    assert_eq!(summary.count_for(RequestStatus::Resolved), 1);
    assert_eq!(summary.resolution_rate_percent(), 33.3);

    let empty = RequestStore::new().aggregate(5);
    assert_eq!(empty.resolution_rate, 0.0);
    assert!(empty.by_service_type.is_empty());
}
