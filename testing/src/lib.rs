//! # Help Desk Testing
//!
//! Testing utilities and fixtures for the help desk core.
//!
//! This crate provides:
//! - A fixed [`Clock`] so request timestamps are deterministic
//! - Ready-made desks and sample inputs
//! - proptest strategies for names, specialties and inputs
//!
//! ## Example
//!
//! ```
//! use helpdesk_testing::{fixtures, test_clock};
//! use helpdesk_core::environment::Clock;
//!
//! let desk = fixtures::desk();
//! let client = desk.clients().create(fixtures::juan()).unwrap();
//! let request = desk
//!     .requests()
//!     .create(helpdesk_core::Request::new("No WiFi", client))
//!     .unwrap();
//!
//! assert_eq!(request.created_at, Some(test_clock().now()));
//! ```

use chrono::{DateTime, Utc};
use helpdesk_core::environment::Clock;

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use helpdesk_testing::mocks::FixedClock;
    /// use helpdesk_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Sample desks and inputs.
pub mod fixtures {
    use super::mocks::test_clock;
    use helpdesk_core::{ClientInput, HelpDesk, TechnicianInput};
    use std::sync::Arc;

    /// An empty desk on [`test_clock`].
    #[must_use]
    pub fn desk() -> HelpDesk {
        HelpDesk::new(Arc::new(test_clock()))
    }

    /// A desk on [`test_clock`] loaded with the sample data.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails, which only happens on a poisoned lock.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn seeded_desk() -> HelpDesk {
        let desk = desk();
        desk.seed().expect("seeding an empty desk succeeds");
        desk
    }

    /// Juan Pérez, the first sample client.
    #[must_use]
    pub fn juan() -> ClientInput {
        ClientInput::new("Juan Pérez", "juan@empresa.com", "123456789")
    }

    /// María García, the second sample client.
    #[must_use]
    pub fn maria() -> ClientInput {
        ClientInput::new("María García", "maria@empresa.com", "987654321")
    }

    /// A networking technician with a lowercase specialty.
    #[must_use]
    pub fn carlos_redes() -> TechnicianInput {
        TechnicianInput::new("Carlos López", "redes")
    }

    /// A database technician with a lowercase multi-word specialty.
    #[must_use]
    pub fn luisa_base_de_datos() -> TechnicianInput {
        TechnicianInput::new("Luisa Fernández", "base de datos")
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Routes `tracing` output through the test harness.
    ///
    /// Honors `RUST_LOG` and defaults to `debug`. Safe to call from every
    /// test; only the first call installs the subscriber.
    pub fn init_tracing() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use helpdesk_core::{ClientInput, TechnicianInput};
    use proptest::prelude::*;

    /// One or more space-separated words in arbitrary letter case, with
    /// irregular spacing.
    pub fn mixed_case_words() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-zA-ZáéíóúñÁÉÍÓÚÑ]{1,10}", 1..5).prop_flat_map(|words| {
            let gaps = proptest::collection::vec(" {1,3}", words.len());
            (Just(words), gaps)
        })
        .prop_map(|(words, gaps)| {
            words
                .iter()
                .zip(gaps)
                .map(|(word, gap)| format!("{gap}{word}"))
                .collect::<String>()
        })
    }

    /// Names that pass boundary validation.
    pub fn person_name() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{1,12} [A-Z][a-z]{1,12}"
    }

    /// Valid client input.
    pub fn client_input() -> impl Strategy<Value = ClientInput> {
        (person_name(), "[a-z]{1,10}", "[a-z]{2,8}", "[0-9]{9}").prop_map(
            |(name, user, domain, phone)| {
                ClientInput::new(name, format!("{user}@{domain}.com"), phone)
            },
        )
    }

    /// Valid technician input with a lowercase specialty.
    pub fn technician_input() -> impl Strategy<Value = TechnicianInput> {
        (person_name(), "[a-z]{2,10}( [a-z]{2,10}){0,2}")
            .prop_map(|(name, specialty)| TechnicianInput::new(name, specialty))
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
