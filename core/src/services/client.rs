//! Client lifecycle.

use crate::error::Result;
use crate::store::EntityStore;
use crate::text::{non_blank, required};
use crate::types::{Client, ClientId, ClientInput};
use std::sync::Arc;

/// Create/update/delete rules for clients.
#[derive(Debug, Clone)]
pub struct ClientService {
    store: Arc<EntityStore<Client>>,
}

impl ClientService {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: Arc<EntityStore<Client>>) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<EntityStore<Client>> {
        &self.store
    }

    /// Creates a client from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`](crate::DeskError::InvalidArgument)
    /// when name, email or phone is missing or blank.
    pub fn create(&self, input: ClientInput) -> Result<Client> {
        let name = required("name", input.name.as_deref())?;
        let email = required("email", input.email.as_deref())?;
        let phone = required("phone", input.phone.as_deref())?;

        let client = self.store.save(Client::new(name, email, phone))?;
        tracing::info!(
            client_id = ?client.id,
            name = %client.name,
            "Client created"
        );
        Ok(client)
    }

    /// Applies the present, non-blank fields of `input` to client `id`.
    ///
    /// The read and the write take the store lock separately. Stores assume
    /// a single writer; two concurrent partial updates of the same client
    /// can each overwrite the other's fields.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`](crate::DeskError::NotFound) when no
    /// client has `id`.
    pub fn update(&self, id: ClientId, input: ClientInput) -> Result<Client> {
        let mut client = self.store.get(id)?;

        if let Some(name) = non_blank(input.name.as_deref()) {
            client.name = name.to_string();
        }
        if let Some(email) = non_blank(input.email.as_deref()) {
            client.email = email.to_string();
        }
        if let Some(phone) = non_blank(input.phone.as_deref()) {
            client.phone = phone.to_string();
        }

        let updated = self.store.update(client)?;
        tracing::info!(client_id = %id, name = %updated.name, "Client updated");
        Ok(updated)
    }

    /// Deletes client `id`. A missing client is logged and ignored.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn delete(&self, id: ClientId) -> Result<()> {
        if self.store.delete_by_id(id)? {
            tracing::info!(client_id = %id, "Client deleted");
        } else {
            tracing::warn!(client_id = %id, "Client not found, nothing to delete");
        }
        Ok(())
    }

    /// Every client in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_all(&self) -> Result<Vec<Client>> {
        self.store.find_all()
    }

    /// The client with `id`, if any.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_by_id(&self, id: ClientId) -> Result<Option<Client>> {
        self.store.find_by_id(id)
    }

    /// Whether client `id` exists.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn exists_by_id(&self, id: ClientId) -> Result<bool> {
        self.store.exists_by_id(id)
    }

    /// Number of clients.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn count(&self) -> Result<usize> {
        self.store.count()
    }

    /// Clients whose name contains `text`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`](crate::DeskError::InvalidArgument)
    /// when `text` is blank.
    pub fn find_by_name_containing(&self, text: &str) -> Result<Vec<Client>> {
        self.store.lookup()?.find_by_name_containing(text)
    }

    /// The first client whose email equals `email`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`](crate::DeskError::InvalidArgument)
    /// when `email` is blank.
    pub fn find_by_email(&self, email: &str) -> Result<Option<Client>> {
        self.store
            .lookup()?
            .find_first_by_exact("email", |c| c.email.as_str(), email)
    }

    /// Removes every client and restarts ids at 1.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("All clients removed");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DeskError;

    fn service() -> ClientService {
        ClientService::new(Arc::new(EntityStore::new()))
    }

    #[test]
    fn create_trims_fields() {
        let clients = service();
        let client = clients
            .create(ClientInput::new("  Juan Pérez ", " juan@empresa.com", "123456789 "))
            .unwrap();

        assert_eq!(client.id, Some(ClientId::new(1)));
        assert_eq!(client.name, "Juan Pérez");
        assert_eq!(client.email, "juan@empresa.com");
        assert_eq!(client.phone, "123456789");
    }

    #[test]
    fn create_requires_every_field() {
        let clients = service();
        let err = clients
            .create(ClientInput::default().with_name("Ana").with_email("ana@x.com"))
            .unwrap_err();
        assert_eq!(err, DeskError::invalid("phone is required"));

        let err = clients
            .create(ClientInput::new("Ana", "   ", "1"))
            .unwrap_err();
        assert_eq!(err, DeskError::invalid("email is required"));
        assert_eq!(clients.count().unwrap(), 0);
    }

    #[test]
    fn update_is_partial() {
        let clients = service();
        let ana = clients
            .create(ClientInput::new("Ana", "ana@x.com", "111"))
            .unwrap();
        let id = ana.id.unwrap();

        let updated = clients
            .update(id, ClientInput::default().with_name("Ana María").with_phone("  "))
            .unwrap();

        assert_eq!(updated.name, "Ana María");
        assert_eq!(updated.email, "ana@x.com");
        assert_eq!(updated.phone, "111");
        assert_eq!(clients.find_by_id(id).unwrap(), Some(updated));
    }

    #[test]
    fn update_missing_is_not_found() {
        let err = service()
            .update(ClientId::new(3), ClientInput::default().with_name("X"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_is_idempotent() {
        let clients = service();
        assert!(clients.delete(ClientId::new(99)).is_ok());

        let ana = clients
            .create(ClientInput::new("Ana", "ana@x.com", "111"))
            .unwrap();
        clients.delete(ana.id.unwrap()).unwrap();
        clients.delete(ana.id.unwrap()).unwrap();
        assert!(!clients.exists_by_id(ana.id.unwrap()).unwrap());
    }

    #[test]
    fn find_by_email_ignores_case() {
        let clients = service();
        clients
            .create(ClientInput::new("Ana", "Ana@Empresa.com", "111"))
            .unwrap();

        let found = clients.find_by_email("ana@empresa.COM").unwrap();
        assert_eq!(found.map(|c| c.name), Some("Ana".to_string()));
        assert_eq!(clients.find_by_email("nobody@x.com").unwrap(), None);
    }
}
