//! Snapshot of the desk printed at the end of a run.

use helpdesk_core::{Client, HelpDesk, Request, RequestStatus, TechnicianStats};
use serde::Serialize;
use std::fmt;

/// Requests sharing one well-known status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Status value
    pub status: String,
    /// Number of requests with that status, ignoring case
    pub requests: usize,
}

/// Everything the binary prints.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Every client in insertion order
    pub clients: Vec<Client>,
    /// Technician headcount per specialty
    pub technicians: TechnicianStats,
    /// Every request in insertion order
    pub requests: Vec<Request>,
    /// Request counts per well-known status
    pub statuses: Vec<StatusCount>,
}

impl Report {
    /// Reads the current contents of `desk`.
    ///
    /// # Errors
    ///
    /// Fails only if a store lock is poisoned.
    pub fn collect(desk: &HelpDesk) -> helpdesk_core::Result<Self> {
        let statuses = RequestStatus::ALL
            .iter()
            .map(|status| {
                Ok(StatusCount {
                    status: (*status).to_string(),
                    requests: desk.requests().find_by_status(status)?.len(),
                })
            })
            .collect::<helpdesk_core::Result<Vec<_>>>()?;

        Ok(Self {
            clients: desk.clients().find_all()?,
            technicians: desk.technicians().statistics()?,
            requests: desk.requests().find_all()?,
            statuses,
        })
    }
}

fn id_or_dash<T: fmt::Display>(id: Option<T>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Help Desk ===")?;
        writeln!(f)?;

        writeln!(f, "Clients: {}", self.clients.len())?;
        for client in &self.clients {
            writeln!(
                f,
                "  #{} {} <{}> {}",
                id_or_dash(client.id),
                client.name,
                client.email,
                client.phone
            )?;
        }
        writeln!(f)?;

        write!(f, "{}", self.technicians)?;
        writeln!(f)?;

        writeln!(f, "Requests: {}", self.requests.len())?;
        for request in &self.requests {
            let technician = request
                .technician
                .as_ref()
                .map_or("unassigned", |t| t.name.as_str());
            writeln!(
                f,
                "  #{} [{}] {} (client: {}, technician: {})",
                id_or_dash(request.id),
                request.status,
                request.title.as_deref().unwrap_or(&request.description),
                request.client.name,
                technician
            )?;
        }
        for entry in &self.statuses {
            writeln!(f, "  {}: {}", entry.status, entry.requests)?;
        }
        Ok(())
    }
}
