//! Technician lifecycle.
//!
//! Same rules as clients, plus specialty normalization: every specialty
//! written through this service is title-cased (`"base de datos"` is stored as
//! `"Base De Datos"`).

use crate::error::Result;
use crate::stats::TechnicianStats;
use crate::store::EntityStore;
use crate::text::{non_blank, required, title_case};
use crate::types::{Technician, TechnicianId, TechnicianInput};
use std::sync::Arc;

/// Create/update/delete rules for technicians.
#[derive(Debug, Clone)]
pub struct TechnicianService {
    store: Arc<EntityStore<Technician>>,
}

impl TechnicianService {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: Arc<EntityStore<Technician>>) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<EntityStore<Technician>> {
        &self.store
    }

    /// Creates a technician with a trimmed name and title-cased specialty.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`](crate::DeskError::InvalidArgument)
    /// when name or specialty is missing or blank.
    pub fn create(&self, input: TechnicianInput) -> Result<Technician> {
        let name = required("name", input.name.as_deref())?;
        let specialty = title_case(&required("specialty", input.specialty.as_deref())?);

        let technician = self.store.save(Technician::new(name, specialty))?;
        tracing::info!(
            technician_id = ?technician.id,
            name = %technician.name,
            specialty = %technician.specialty,
            "Technician created"
        );
        Ok(technician)
    }

    /// Applies the present, non-blank fields of `input` to technician `id`.
    ///
    /// The read and the write take the store lock separately. Stores assume
    /// a single writer; two concurrent partial updates of the same technician
    /// can each overwrite the other's fields.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`](crate::DeskError::NotFound) when no
    /// technician has `id`.
    pub fn update(&self, id: TechnicianId, input: TechnicianInput) -> Result<Technician> {
        let mut technician = self.store.get(id)?;

        if let Some(name) = non_blank(input.name.as_deref()) {
            technician.name = name.to_string();
        }
        if let Some(specialty) = non_blank(input.specialty.as_deref()) {
            technician.specialty = title_case(specialty);
        }

        let updated = self.store.update(technician)?;
        tracing::info!(
            technician_id = %id,
            name = %updated.name,
            specialty = %updated.specialty,
            "Technician updated"
        );
        Ok(updated)
    }

    /// Deletes technician `id`. A missing technician is logged and ignored.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn delete(&self, id: TechnicianId) -> Result<()> {
        if self.store.delete_by_id(id)? {
            tracing::info!(technician_id = %id, "Technician deleted");
        } else {
            tracing::warn!(technician_id = %id, "Technician not found, nothing to delete");
        }
        Ok(())
    }

    /// Every technician in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_all(&self) -> Result<Vec<Technician>> {
        self.store.find_all()
    }

    /// The technician with `id`, if any.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_by_id(&self, id: TechnicianId) -> Result<Option<Technician>> {
        self.store.find_by_id(id)
    }

    /// Whether technician `id` exists.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn exists_by_id(&self, id: TechnicianId) -> Result<bool> {
        self.store.exists_by_id(id)
    }

    /// Number of technicians.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn count(&self) -> Result<usize> {
        self.store.count()
    }

    /// Technicians whose name contains `text`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`](crate::DeskError::InvalidArgument)
    /// when `text` is blank.
    pub fn find_by_name_containing(&self, text: &str) -> Result<Vec<Technician>> {
        self.store.lookup()?.find_by_name_containing(text)
    }

    /// Technicians whose specialty equals `specialty`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`](crate::DeskError::InvalidArgument)
    /// when `specialty` is blank.
    pub fn find_by_specialty(&self, specialty: &str) -> Result<Vec<Technician>> {
        self.store
            .lookup()?
            .find_by_exact("specialty", |t| t.specialty.as_str(), specialty)
    }

    /// Distinct specialties in first-seen order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn find_all_specialties(&self) -> Result<Vec<String>> {
        let specialties = self
            .store
            .lookup()?
            .distinct_values(|t| t.specialty.as_str());
        tracing::debug!(?specialties, "Listed specialties");
        Ok(specialties)
    }

    /// Headcount per specialty.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn statistics(&self) -> Result<TechnicianStats> {
        Ok(TechnicianStats::from_technicians(&self.store.find_all()?))
    }

    /// Removes every technician and restarts ids at the store base.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("All technicians removed");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DeskError;

    fn service() -> TechnicianService {
        TechnicianService::new(Arc::new(EntityStore::new()))
    }

    #[test]
    fn create_title_cases_specialty() {
        let technicians = service();
        let redes = technicians
            .create(TechnicianInput::new("Carlos López", "redes"))
            .unwrap();
        let db = technicians
            .create(TechnicianInput::new("Luisa", "base de datos"))
            .unwrap();

        assert_eq!(redes.specialty, "Redes");
        assert_eq!(db.specialty, "Base De Datos");
    }

    #[test]
    fn create_requires_specialty() {
        let err = service()
            .create(TechnicianInput::default().with_name("Ana"))
            .unwrap_err();
        assert_eq!(err, DeskError::invalid("specialty is required"));
    }

    #[test]
    fn update_keeps_absent_fields() {
        let technicians = service();
        let tech = technicians
            .create(TechnicianInput::new("Pedro", "hardware"))
            .unwrap();
        let id = tech.id.unwrap();

        let renamed = technicians
            .update(id, TechnicianInput::default().with_name("Pedro García"))
            .unwrap();
        assert_eq!(renamed.specialty, "Hardware");

        let moved = technicians
            .update(id, TechnicianInput::default().with_specialty("SEGURIDAD informática"))
            .unwrap();
        assert_eq!(moved.name, "Pedro García");
        assert_eq!(moved.specialty, "Seguridad Informática");
    }

    #[test]
    fn delete_missing_is_ok() {
        assert!(service().delete(TechnicianId::new(12)).is_ok());
    }

    #[test]
    fn specialty_search_and_listing() {
        let technicians = service();
        for (name, specialty) in [("A", "redes"), ("B", "software"), ("C", "Redes")] {
            technicians
                .create(TechnicianInput::new(name, specialty))
                .unwrap();
        }

        assert_eq!(technicians.find_by_specialty("REDES").unwrap().len(), 2);
        assert_eq!(
            technicians.find_all_specialties().unwrap(),
            ["Redes", "Software"]
        );
    }
}
