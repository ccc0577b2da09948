//! Property tests for identifier issuance and specialty normalization.

#![allow(clippy::unwrap_used)]

use helpdesk_core::text::title_case;
use helpdesk_core::{EntityStore, IdGenerator, Technician};
use helpdesk_testing::{fixtures, properties};
use proptest::prelude::*;

proptest! {
    #[test]
    fn generated_ids_strictly_increase(count in 1usize..200) {
        let ids = IdGenerator::new();
        let issued: Vec<u64> = (0..count).map(|_| ids.next()).collect();

        prop_assert_eq!(issued[0], 1);
        prop_assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn saved_entities_get_increasing_ids(
        explicit in proptest::option::of(1u64..50),
        names in proptest::collection::vec(properties::person_name(), 1..20),
    ) {
        let store = EntityStore::<Technician>::new();
        if let Some(id) = explicit {
            store.save(Technician::new("Imported", "Redes").with_id(id.into())).unwrap();
        }

        let mut previous = explicit.unwrap_or(0);
        for name in names {
            let saved = store.save(Technician::new(name, "Redes")).unwrap();
            let id = u64::from(saved.id.unwrap());
            prop_assert!(id > previous);
            prop_assert_eq!(store.find_by_id(saved.id.unwrap()).unwrap(), Some(saved));
            previous = id;
        }
    }

    #[test]
    fn title_case_is_idempotent(words in properties::mixed_case_words()) {
        let once = title_case(&words);
        prop_assert_eq!(title_case(&once), once.clone());
        prop_assert!(!once.starts_with(' '));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn title_case_capitalizes_every_word(words in properties::mixed_case_words()) {
        for word in title_case(&words).split(' ') {
            let mut chars = word.chars();
            let first = chars.next().unwrap();
            prop_assert!(!first.is_lowercase());
            prop_assert!(chars.all(|c| !c.is_uppercase()));
        }
    }

    #[test]
    fn created_technicians_have_title_cased_specialty(input in properties::technician_input()) {
        let desk = fixtures::desk();
        let expected = title_case(input.specialty.as_deref().unwrap());
        let created = desk.technicians().create(input).unwrap();
        prop_assert_eq!(created.specialty, expected);
    }

    #[test]
    fn valid_client_inputs_round_trip_through_the_service(input in properties::client_input()) {
        let desk = fixtures::desk();
        let created = desk.clients().create(input.clone()).unwrap();

        prop_assert_eq!(Some(created.name), input.name);
        prop_assert_eq!(Some(created.email), input.email);
        prop_assert_eq!(desk.clients().count().unwrap(), 1);
    }
}
