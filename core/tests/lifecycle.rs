//! Client and technician lifecycle through a full desk.

#![allow(clippy::unwrap_used)]

use helpdesk_core::environment::Clock;
use helpdesk_core::{
    ClientId, ClientInput, DeskError, Request, RequestStatus, TechnicianId, TechnicianInput,
};
use helpdesk_testing::{fixtures, helpers, test_clock};

#[test]
fn walkthrough_from_empty_desk() {
    helpers::init_tracing();
    let desk = fixtures::desk();

    let juan = desk.clients().create(fixtures::juan()).unwrap();
    assert_eq!(juan.id, Some(ClientId::new(1)));

    let request = desk
        .requests()
        .create(Request::new("No WiFi", juan.clone()))
        .unwrap();
    assert_eq!(request.id.map(u64::from), Some(1));
    assert_eq!(request.status, RequestStatus::PENDING);
    assert_eq!(request.created_at, Some(test_clock().now()));
    assert_eq!(request.client, juan);
}

#[test]
fn seeded_specialties_are_distinct_in_first_seen_order() {
    let desk = fixtures::seeded_desk();

    assert_eq!(
        desk.technicians().find_all_specialties().unwrap(),
        ["Redes", "Software", "Hardware", "Base de Datos", "Seguridad"]
    );
}

#[test]
fn name_search_is_case_insensitive_substring() {
    let desk = fixtures::seeded_desk();

    let clients = desk.clients().find_by_name_containing("aRl").unwrap();
    let technicians = desk.technicians().find_by_name_containing("aRl").unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Carlos López");
    assert_eq!(technicians.len(), 1);
    assert_eq!(technicians[0].name, "Carlos López");
}

#[test]
fn partial_update_keeps_unsupplied_fields() {
    let desk = fixtures::desk();
    let maria = desk.clients().create(fixtures::maria()).unwrap();
    let id = maria.id.unwrap();

    let renamed = desk
        .clients()
        .update(id, ClientInput::default().with_name("María G. Ruiz").with_phone("  "))
        .unwrap();

    assert_eq!(renamed.name, "María G. Ruiz");
    assert_eq!(renamed.email, maria.email);
    assert_eq!(renamed.phone, maria.phone);
    assert_eq!(desk.clients().find_by_id(id).unwrap(), Some(renamed));
}

#[test]
fn technician_specialties_are_title_cased() {
    let desk = fixtures::desk();

    let carlos = desk.technicians().create(fixtures::carlos_redes()).unwrap();
    let luisa = desk
        .technicians()
        .create(fixtures::luisa_base_de_datos())
        .unwrap();

    assert_eq!(carlos.specialty, "Redes");
    assert_eq!(luisa.specialty, "Base De Datos");

    let renamed = desk
        .technicians()
        .update(carlos.id.unwrap(), TechnicianInput::default().with_name("Carlos L."))
        .unwrap();
    assert_eq!(renamed.specialty, "Redes");
}

#[test]
fn client_delete_is_idempotent() {
    let desk = fixtures::desk();
    let juan = desk.clients().create(fixtures::juan()).unwrap();
    let id = juan.id.unwrap();

    desk.clients().delete(id).unwrap();
    assert_eq!(desk.clients().find_by_id(id).unwrap(), None);
    assert!(!desk.clients().exists_by_id(id).unwrap());

    assert!(desk.clients().delete(id).is_ok());
    assert!(desk.clients().delete(ClientId::new(99)).is_ok());
    assert!(desk.technicians().delete(TechnicianId::new(99)).is_ok());
}

#[test]
fn missing_required_fields_are_rejected() {
    let desk = fixtures::desk();

    let err = desk
        .clients()
        .create(ClientInput::default().with_name("Ana").with_email("ana@x.com"))
        .unwrap_err();
    assert_eq!(err, DeskError::invalid("phone is required"));
    assert!(err.is_user_error());
    assert_eq!(desk.clients().count().unwrap(), 0);
}

#[test]
fn updating_a_missing_client_is_not_found() {
    let desk = fixtures::desk();

    let err = desk
        .clients()
        .update(ClientId::new(4), ClientInput::default().with_name("Nadie"))
        .unwrap_err();
    assert_eq!(
        err,
        DeskError::NotFound {
            kind: "Client",
            id: 4
        }
    );
}

#[test]
fn email_lookup_ignores_case() {
    let desk = fixtures::seeded_desk();

    let found = desk.clients().find_by_email("MARIA@empresa.com").unwrap();
    assert_eq!(found.map(|c| c.name), Some("María García".to_string()));
    assert_eq!(desk.clients().find_by_email("nobody@x.com").unwrap(), None);
}

#[test]
fn statistics_count_seeded_specialties() {
    let desk = fixtures::seeded_desk();
    let stats = desk.technicians().statistics().unwrap();

    assert_eq!(stats.total, 6);
    let redes = stats
        .specialties
        .iter()
        .find(|s| s.specialty == "Redes")
        .unwrap();
    assert_eq!(redes.technicians, 2);
}
