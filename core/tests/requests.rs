//! Request orchestration: snapshots, full-replace updates and the strict
//! delete policy.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use helpdesk_core::environment::Clock;
use helpdesk_core::{
    Client, ClientId, ClientInput, DeskError, HelpDesk, NewRequest, Request, RequestId,
    RequestStatus, TechnicianId,
};
use helpdesk_testing::{FixedClock, fixtures, test_clock};
use std::sync::Arc;

#[test]
fn open_embeds_value_copies() {
    let desk = fixtures::desk();
    let juan = desk.clients().create(fixtures::juan()).unwrap();
    let carlos = desk.technicians().create(fixtures::carlos_redes()).unwrap();

    let request = desk
        .requests()
        .open(NewRequest::new("No WiFi", juan.id.unwrap()).with_technician(carlos.id.unwrap()))
        .unwrap();

    desk.clients()
        .update(juan.id.unwrap(), ClientInput::default().with_name("Juan P. Gómez"))
        .unwrap();

    let stored = desk.requests().find_by_id(request.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.client.name, "Juan Pérez");
    assert_eq!(stored.technician.unwrap().specialty, "Redes");
}

#[test]
fn open_with_unknown_client_is_not_found() {
    let desk = fixtures::desk();

    let err = desk
        .requests()
        .open(NewRequest::new("No WiFi", ClientId::new(3)))
        .unwrap_err();

    assert_eq!(
        err,
        DeskError::NotFound {
            kind: "Client",
            id: 3
        }
    );
    assert_eq!(desk.requests().count().unwrap(), 0);
}

#[test]
fn full_replace_update_resets_omitted_status() {
    let desk = fixtures::seeded_desk();
    let id = RequestId::new(1);
    let original = desk.requests().find_by_id(id).unwrap().unwrap();
    assert_eq!(original.status, RequestStatus::IN_PROGRESS);

    let replacement = Request::new("WiFi drops every hour", original.client.clone());
    let updated = desk.requests().update(id, replacement).unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.description, "WiFi drops every hour");
    assert_eq!(updated.status, RequestStatus::PENDING);
    assert_eq!(updated.technician, None);
}

#[test]
fn free_form_status_is_kept() {
    let desk = fixtures::desk();
    let juan = desk.clients().create(fixtures::juan()).unwrap();

    let request = desk
        .requests()
        .create(Request::new("Monitor flickers", juan).with_status("WAITING_ON_VENDOR"))
        .unwrap();

    assert_eq!(request.status, "WAITING_ON_VENDOR");
    assert!(!RequestStatus::is_known(&request.status));
    assert_eq!(
        desk.requests().find_by_status("waiting_on_vendor").unwrap(),
        vec![request]
    );
}

#[test]
fn request_delete_is_strict() {
    let desk = fixtures::seeded_desk();
    let id = RequestId::new(2);

    desk.requests().delete(id).unwrap();
    assert_eq!(desk.requests().find_by_id(id).unwrap(), None);
    assert!(!desk.requests().exists_by_id(id).unwrap());

    let err = desk.requests().delete(id).unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_user_error());
}

#[test]
fn explicit_ids_do_not_collide_with_generated_ones() {
    let desk = fixtures::desk();
    let juan = desk.clients().create(fixtures::juan()).unwrap();

    let explicit = desk
        .requests()
        .create(Request::new("Imported", juan.clone()).with_id(RequestId::new(10)))
        .unwrap();
    let generated = desk.requests().create(Request::new("New", juan.clone())).unwrap();

    assert_eq!(explicit.id, Some(RequestId::new(10)));
    assert_eq!(generated.id, Some(RequestId::new(11)));

    let err = desk
        .requests()
        .create(Request::new("Again", juan).with_id(RequestId::new(10)))
        .unwrap_err();
    assert_eq!(
        err,
        DeskError::DuplicateIdentifier {
            kind: "Request",
            id: 10
        }
    );
}

#[test]
fn seeded_requests_are_backdated_from_the_clock() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let desk = HelpDesk::new(Arc::new(FixedClock::new(now)));
    desk.seed().unwrap();

    let requests = desk.requests().find_all().unwrap();
    assert_eq!(requests[0].created_at, Some(now - Duration::days(2)));
    assert_eq!(requests[1].created_at, Some(now - Duration::days(1)));
    assert_eq!(requests[1].status, RequestStatus::PENDING);
    assert_eq!(
        requests[1].technician.as_ref().and_then(|t| t.id),
        Some(TechnicianId::new(2))
    );
}

#[test]
fn update_moves_request_to_end_of_listing() {
    let desk = fixtures::seeded_desk();
    let first = desk.requests().find_by_id(RequestId::new(1)).unwrap().unwrap();

    desk.requests()
        .update(RequestId::new(1), first.with_status(RequestStatus::RESOLVED))
        .unwrap();

    let ids: Vec<_> = desk
        .requests()
        .find_all()
        .unwrap()
        .into_iter()
        .filter_map(|r| r.id)
        .collect();
    assert_eq!(ids, [RequestId::new(2), RequestId::new(1)]);
}

#[test]
fn reset_restarts_ids() {
    let desk = fixtures::seeded_desk();
    desk.reset().unwrap();

    let juan = desk.clients().create(fixtures::juan()).unwrap();
    let request = desk.requests().create(Request::new("No WiFi", juan)).unwrap();

    assert_eq!(request.id, Some(RequestId::new(1)));
    assert_eq!(request.created_at, Some(test_clock().now()));
}

#[test]
fn client_without_name_is_rejected() {
    let desk = fixtures::desk();

    let err = desk
        .requests()
        .create(Request::new("No WiFi", Client::new("   ", "a@x.com", "1")))
        .unwrap_err();

    assert_eq!(err, DeskError::invalid("client is required"));
    assert!(err.is_user_error());
    assert_eq!(desk.requests().count().unwrap(), 0);
}
