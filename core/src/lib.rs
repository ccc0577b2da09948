//! # Help Desk Core
//!
//! In-memory entity stores and the request lifecycle for a technical support
//! desk: clients file support requests, technicians resolve them, and requests
//! move through a small status lifecycle.
//!
//! ## Core Concepts
//!
//! - **Identifier Generator**: strictly increasing ids, one generator per store
//! - **Entity Store**: generic, lock-protected storage keyed by typed ids
//! - **Lookup Index**: on-demand searches over a store snapshot
//! - **Lifecycle Services**: validation, normalization and partial updates for
//!   clients and technicians
//! - **Request Orchestrator**: builds requests from client/technician snapshots,
//!   owns the status default and creation timestamp
//!
//! ## Example
//!
//! ```
//! use helpdesk_core::environment::SystemClock;
//! use helpdesk_core::{ClientInput, HelpDesk, Request, RequestStatus};
//! use std::sync::Arc;
//!
//! # fn main() -> helpdesk_core::Result<()> {
//! let desk = HelpDesk::new(Arc::new(SystemClock));
//!
//! let client = desk.clients().create(ClientInput::new(
//!     "Juan Pérez",
//!     "juan@empresa.com",
//!     "123456789",
//! ))?;
//!
//! let request = desk.requests().create(Request::new("No WiFi", client))?;
//! assert_eq!(request.status, RequestStatus::PENDING);
//! # Ok(())
//! # }
//! ```

pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

pub mod desk;
pub mod error;
pub mod id;
pub mod lookup;
pub mod services;
pub mod stats;
pub mod store;
pub mod text;
pub mod types;
pub mod validation;

pub use desk::HelpDesk;
pub use error::{DeskError, FieldViolation, Result};
pub use id::IdGenerator;
pub use lookup::{Lookup, Named};
pub use services::{ClientService, RequestService, TechnicianService};
pub use stats::{SpecialtyCount, TechnicianStats};
pub use store::{Entity, EntityStore};
pub use types::{
    Client, ClientId, ClientInput, NewRequest, Request, RequestId, RequestStatus, Technician,
    TechnicianId, TechnicianInput,
};
pub use validation::Validate;

/// Environment module - Dependency injection traits
///
/// All time-dependent behavior goes through [`environment::Clock`] so tests can
/// pin the creation timestamp of requests.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::environment::{Clock, SystemClock};

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
