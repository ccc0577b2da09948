//! Composition root for the three services.
//!
//! [`HelpDesk`] owns one store per entity type and wires the services over
//! them. Sample data is loaded only when the caller asks for it through
//! [`HelpDesk::seed`].

use crate::environment::Clock;
use crate::error::{DeskError, Result};
use crate::services::{ClientService, RequestService, TechnicianService};
use crate::store::EntityStore;
use crate::types::{Client, Request, RequestStatus, Technician};
use chrono::Duration;
use std::fmt;
use std::sync::{Arc, Mutex};

const SEED_CLIENTS: [(&str, &str, &str); 3] = [
    ("Juan Pérez", "juan@empresa.com", "123456789"),
    ("María García", "maria@empresa.com", "987654321"),
    ("Carlos López", "carlos@empresa.com", "555123456"),
];

const SEED_TECHNICIANS: [(&str, &str); 6] = [
    ("Carlos López", "Redes"),
    ("Ana Martínez", "Software"),
    ("Pedro García", "Hardware"),
    ("Luisa Fernández", "Base de Datos"),
    ("Miguel Rodríguez", "Redes"),
    ("Elena Castro", "Seguridad"),
];

/// The client, technician and request services over shared stores.
///
/// # Example
///
/// ```
/// use helpdesk_core::environment::SystemClock;
/// use helpdesk_core::HelpDesk;
/// use std::sync::Arc;
///
/// # fn main() -> helpdesk_core::Result<()> {
/// let desk = HelpDesk::new(Arc::new(SystemClock));
/// assert!(desk.seed()?);
/// assert_eq!(desk.technicians().count()?, 6);
/// assert!(!desk.seed()?); // already seeded
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HelpDesk {
    clients: ClientService,
    technicians: TechnicianService,
    requests: RequestService,
    clock: Arc<dyn Clock>,
    seeding: Arc<Mutex<()>>,
}

impl HelpDesk {
    /// Creates an empty desk.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let clients = Arc::new(EntityStore::<Client>::new());
        let technicians = Arc::new(EntityStore::<Technician>::new());
        let requests = Arc::new(EntityStore::<Request>::new());

        Self {
            clients: ClientService::new(Arc::clone(&clients)),
            technicians: TechnicianService::new(Arc::clone(&technicians)),
            requests: RequestService::new(requests, clients, technicians, Arc::clone(&clock)),
            clock,
            seeding: Arc::new(Mutex::new(())),
        }
    }

    /// Client lifecycle.
    #[must_use]
    pub const fn clients(&self) -> &ClientService {
        &self.clients
    }

    /// Technician lifecycle.
    #[must_use]
    pub const fn technicians(&self) -> &TechnicianService {
        &self.technicians
    }

    /// Request orchestration.
    #[must_use]
    pub const fn requests(&self) -> &RequestService {
        &self.requests
    }

    /// Loads the sample clients, technicians and requests.
    ///
    /// Does nothing and returns `false` when any store already holds data.
    /// Concurrent calls on clones of one desk are serialized, so the sample
    /// data is loaded at most once. Seed technicians are stored as written,
    /// without specialty normalization.
    ///
    /// # Errors
    ///
    /// Fails only if a store lock is poisoned.
    pub fn seed(&self) -> Result<bool> {
        let _seeding = self
            .seeding
            .lock()
            .map_err(|_| DeskError::LockPoisoned { kind: "Seed" })?;

        if self.clients.count()? > 0
            || self.technicians.count()? > 0
            || self.requests.count()? > 0
        {
            tracing::debug!("Stores already populated, skipping seed");
            return Ok(false);
        }

        let clients = SEED_CLIENTS
            .iter()
            .map(|&(name, email, phone)| self.clients.store().save(Client::new(name, email, phone)))
            .collect::<Result<Vec<_>>>()?;

        let technicians = SEED_TECHNICIANS
            .iter()
            .map(|&(name, specialty)| {
                self.technicians
                    .store()
                    .save(Technician::new(name, specialty))
            })
            .collect::<Result<Vec<_>>>()?;

        let now = self.clock.now();
        let seed_requests = [
            Request::new("No puedo conectarme a la red WiFi", clients[0].clone())
                .with_status(RequestStatus::IN_PROGRESS)
                .with_technician(technicians[0].clone())
                .with_created_at(now - Duration::days(2)),
            Request::new("Error al iniciar el sistema", clients[1].clone())
                .with_status(RequestStatus::PENDING)
                .with_technician(technicians[1].clone())
                .with_created_at(now - Duration::days(1)),
        ];
        for request in seed_requests {
            self.requests.create(request)?;
        }

        tracing::info!(
            clients = clients.len(),
            technicians = technicians.len(),
            requests = self.requests.count()?,
            specialties = ?self.technicians.find_all_specialties()?,
            "Sample data loaded"
        );
        Ok(true)
    }

    /// Empties every store and restarts identifier issuance.
    ///
    /// # Errors
    ///
    /// Fails only if a store lock is poisoned.
    pub fn reset(&self) -> Result<()> {
        self.requests.clear()?;
        self.technicians.clear()?;
        self.clients.clear()
    }
}

impl fmt::Debug for HelpDesk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpDesk")
            .field("clients", &self.clients)
            .field("technicians", &self.technicians)
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}
