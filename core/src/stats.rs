//! Technician headcount report.

use crate::types::Technician;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of technicians sharing one specialty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyCount {
    /// Specialty as first seen in the store
    pub specialty: String,
    /// Technicians whose specialty matches, ignoring case
    pub technicians: usize,
}

/// Totals across the technician store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianStats {
    /// Number of technicians
    pub total: usize,
    /// Per-specialty headcount in first-seen order
    pub specialties: Vec<SpecialtyCount>,
}

impl TechnicianStats {
    /// Computes the report over `technicians`.
    ///
    /// Specialties are listed by their distinct spellings; each count matches
    /// case-insensitively, the same way specialty searches do.
    #[must_use]
    pub fn from_technicians(technicians: &[Technician]) -> Self {
        let mut specialties: Vec<SpecialtyCount> = Vec::new();
        for technician in technicians {
            if specialties.iter().any(|s| s.specialty == technician.specialty) {
                continue;
            }
            let wanted = technician.specialty.to_lowercase();
            let count = technicians
                .iter()
                .filter(|t| t.specialty.to_lowercase() == wanted)
                .count();
            specialties.push(SpecialtyCount {
                specialty: technician.specialty.clone(),
                technicians: count,
            });
        }

        Self {
            total: technicians.len(),
            specialties,
        }
    }
}

impl fmt::Display for TechnicianStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Technicians: {}", self.total)?;
        writeln!(f, "Specialties: {}", self.specialties.len())?;
        for entry in &self.specialties {
            writeln!(f, "  - {}: {} technician(s)", entry.specialty, entry.technicians)?;
        }
        Ok(())
    }
}
