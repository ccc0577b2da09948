//! Request orchestration.
//!
//! Requests embed value copies of their client and technician. Creation fills
//! in the identifier, the creation timestamp (from the injected [`Clock`]) and
//! the `PENDING` default. Updates replace every mutable field; deletes fail on
//! a missing id.

use crate::environment::Clock;
use crate::error::{DeskError, Result};
use crate::store::{Entity, EntityStore};
use crate::text::is_blank;
use crate::types::{Client, NewRequest, Request, RequestId, RequestStatus, Technician};
use std::fmt;
use std::sync::Arc;

/// Builds and maintains support requests.
#[derive(Clone)]
pub struct RequestService {
    requests: Arc<EntityStore<Request>>,
    clients: Arc<EntityStore<Client>>,
    technicians: Arc<EntityStore<Technician>>,
    clock: Arc<dyn Clock>,
}

impl RequestService {
    /// Creates an orchestrator over the three stores.
    #[must_use]
    pub fn new(
        requests: Arc<EntityStore<Request>>,
        clients: Arc<EntityStore<Client>>,
        technicians: Arc<EntityStore<Technician>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            requests,
            clients,
            technicians,
            clock,
        }
    }

    /// The underlying request store.
    #[must_use]
    pub const fn store(&self) -> &Arc<EntityStore<Request>> {
        &self.requests
    }

    /// Persists a new request.
    ///
    /// Assigns an id when absent, stamps `created_at` when absent and sets the
    /// status to `PENDING` when it is blank.
    ///
    /// # Errors
    ///
    /// - [`DeskError::InvalidArgument`] when the description or the client
    ///   name is blank
    /// - [`DeskError::DuplicateIdentifier`] when an explicit id is taken
    pub fn create(&self, mut request: Request) -> Result<Request> {
        if is_blank(&request.description) {
            return Err(DeskError::invalid("description is required"));
        }
        if is_blank(&request.client.name) {
            return Err(DeskError::invalid("client is required"));
        }

        if request.created_at.is_none() {
            request.created_at = Some(self.clock.now());
        }
        request.status = RequestStatus::or_default(&request.status);

        let saved = self.requests.save(request)?;
        tracing::info!(
            request_id = ?saved.id,
            client_id = ?saved.client.id,
            status = %saved.status,
            "Request created"
        );
        Ok(saved)
    }

    /// Resolves client and technician ids into snapshots and creates the
    /// request.
    ///
    /// # Errors
    ///
    /// - [`DeskError::NotFound`] when the client or technician does not exist
    /// - anything [`create`](Self::create) returns
    pub fn open(&self, new: NewRequest) -> Result<Request> {
        let client = self.clients.get(new.client_id)?;
        let technician = new
            .technician_id
            .map(|id| self.technicians.get(id))
            .transpose()?;

        self.create(Request {
            id: None,
            title: new.title,
            description: new.description,
            created_at: None,
            status: new.status.unwrap_or_default(),
            client,
            technician,
        })
    }

    /// Replaces every mutable field of request `id` with those of `request`.
    ///
    /// Title, description, status, client and technician are overwritten;
    /// identifier and creation timestamp are kept. A blank status becomes
    /// `PENDING`.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when no request has `id`.
    pub fn update(&self, id: RequestId, request: Request) -> Result<Request> {
        let mut existing = self.requests.get(id)?;

        existing.title = request.title;
        existing.description = request.description;
        existing.status = RequestStatus::or_default(&request.status);
        existing.client = request.client;
        existing.technician = request.technician;

        let updated = self.requests.update(existing)?;
        tracing::info!(request_id = %id, status = %updated.status, "Request updated");
        Ok(updated)
    }

    /// Deletes request `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when no request has `id`.
    pub fn delete(&self, id: RequestId) -> Result<()> {
        if !self.requests.delete_by_id(id)? {
            return Err(DeskError::NotFound {
                kind: Request::KIND,
                id: id.get(),
            });
        }
        tracing::info!(request_id = %id, "Request deleted");
        Ok(())
    }

    /// The request with `id`, if any.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_by_id(&self, id: RequestId) -> Result<Option<Request>> {
        self.requests.find_by_id(id)
    }

    /// Every request in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_all(&self) -> Result<Vec<Request>> {
        self.requests.find_all()
    }

    /// Whether request `id` exists.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn exists_by_id(&self, id: RequestId) -> Result<bool> {
        self.requests.exists_by_id(id)
    }

    /// Number of requests.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn count(&self) -> Result<usize> {
        self.requests.count()
    }

    /// Requests whose status equals `status`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`] when `status` is blank.
    pub fn find_by_status(&self, status: &str) -> Result<Vec<Request>> {
        self.requests
            .lookup()?
            .find_by_exact("status", |r| r.status.as_str(), status)
    }

    /// Removes every request and restarts ids at 1.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn clear(&self) -> Result<()> {
        self.requests.clear()?;
        tracing::info!("All requests removed");
        Ok(())
    }
}

impl fmt::Debug for RequestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestService")
            .field("requests", &self.requests)
            .field("clients", &self.clients)
            .field("technicians", &self.technicians)
            .finish_non_exhaustive()
    }
}
