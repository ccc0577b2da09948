//! Domain types for the help desk.
//!
//! Clients file requests, technicians resolve them. A [`Request`] embeds value
//! copies of its client and technician taken when the request was written, so
//! later edits to either never reach back into existing requests.

use crate::lookup::Named;
use crate::store::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw identifier
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw identifier
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a client
    ClientId
);

entity_id!(
    /// Unique identifier for a technician
    TechnicianId
);

entity_id!(
    /// Unique identifier for a support request
    RequestId
);

// ============================================================================
// Client
// ============================================================================

/// A customer who files support requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Assigned by the store on first save
    pub id: Option<ClientId>,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}

impl Client {
    /// Creates an unsaved client
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Sets an explicit identifier
    #[must_use]
    pub const fn with_id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Client {
    type Id = ClientId;

    const KIND: &'static str = "Client";

    fn id(&self) -> Option<ClientId> {
        self.id
    }

    fn assign_id(&mut self, id: ClientId) {
        self.id = Some(id);
    }
}

impl Named for Client {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Client fields supplied by a caller.
///
/// Every field is optional so the same type serves creation (all required)
/// and partial updates (absent or blank fields keep their prior value).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInput {
    /// Display name
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
}

impl ClientInput {
    /// Creates an input with every field present
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }

    /// Sets the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

// ============================================================================
// Technician
// ============================================================================

/// A support technician.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    /// Assigned by the store on first save
    pub id: Option<TechnicianId>,
    /// Display name
    pub name: String,
    /// Area of expertise, title-cased by the lifecycle service
    pub specialty: String,
}

impl Technician {
    /// Creates an unsaved technician
    #[must_use]
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    /// Sets an explicit identifier
    #[must_use]
    pub const fn with_id(mut self, id: TechnicianId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Technician {
    type Id = TechnicianId;

    const KIND: &'static str = "Technician";

    fn id(&self) -> Option<TechnicianId> {
        self.id
    }

    fn assign_id(&mut self, id: TechnicianId) {
        self.id = Some(id);
    }
}

impl Named for Technician {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Technician fields supplied by a caller. See [`ClientInput`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianInput {
    /// Display name
    pub name: Option<String>,
    /// Area of expertise
    pub specialty: Option<String>,
}

impl TechnicianInput {
    /// Creates an input with every field present
    #[must_use]
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            specialty: Some(specialty.into()),
        }
    }

    /// Sets the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the specialty
    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }
}

// ============================================================================
// Request
// ============================================================================

/// Well-known request status values.
///
/// The status field itself is free-form; these are the values the desk uses.
#[derive(Debug, Clone, Copy)]
pub struct RequestStatus;

impl RequestStatus {
    /// Filed, not yet picked up. Default for new requests.
    pub const PENDING: &'static str = "PENDING";
    /// A technician is working on it
    pub const IN_PROGRESS: &'static str = "IN_PROGRESS";
    /// Fixed, awaiting confirmation
    pub const RESOLVED: &'static str = "RESOLVED";
    /// Done
    pub const CLOSED: &'static str = "CLOSED";

    /// All well-known values, in lifecycle order.
    pub const ALL: [&'static str; 4] = [
        Self::PENDING,
        Self::IN_PROGRESS,
        Self::RESOLVED,
        Self::CLOSED,
    ];

    /// Returns `status`, or [`PENDING`](Self::PENDING) when it is blank.
    #[must_use]
    pub fn or_default(status: &str) -> String {
        if crate::text::is_blank(status) {
            Self::PENDING.to_string()
        } else {
            status.to_string()
        }
    }

    /// Returns `true` if `status` matches a well-known value, ignoring case.
    #[must_use]
    pub fn is_known(status: &str) -> bool {
        Self::ALL.iter().any(|known| known.eq_ignore_ascii_case(status.trim()))
    }
}

/// A support request filed by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Assigned by the store on first save
    pub id: Option<RequestId>,
    /// Optional short summary
    #[serde(default)]
    pub title: Option<String>,
    /// What went wrong
    pub description: String,
    /// Set once on creation, never changed afterwards
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Free-form status; blank means [`RequestStatus::PENDING`] on write
    #[serde(default)]
    pub status: String,
    /// Snapshot of the filing client
    pub client: Client,
    /// Snapshot of the assigned technician, if any
    #[serde(default)]
    pub technician: Option<Technician>,
}

impl Request {
    /// Creates an unsaved request with no status, timestamp or technician
    #[must_use]
    pub fn new(description: impl Into<String>, client: Client) -> Self {
        Self {
            id: None,
            title: None,
            description: description.into(),
            created_at: None,
            status: String::new(),
            client,
            technician: None,
        }
    }

    /// Sets an explicit identifier
    #[must_use]
    pub const fn with_id(mut self, id: RequestId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the status
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Assigns a technician snapshot
    #[must_use]
    pub fn with_technician(mut self, technician: Technician) -> Self {
        self.technician = Some(technician);
        self
    }

    /// Sets the creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

impl Entity for Request {
    type Id = RequestId;

    const KIND: &'static str = "Request";

    fn id(&self) -> Option<RequestId> {
        self.id
    }

    fn assign_id(&mut self, id: RequestId) {
        self.id = Some(id);
    }
}

/// A request expressed by reference: the orchestrator resolves the ids into
/// client and technician snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    /// Optional short summary
    #[serde(default)]
    pub title: Option<String>,
    /// What went wrong
    pub description: String,
    /// Initial status; absent or blank means pending
    #[serde(default)]
    pub status: Option<String>,
    /// Filing client
    pub client_id: ClientId,
    /// Assigned technician, if any
    #[serde(default)]
    pub technician_id: Option<TechnicianId>,
}

impl NewRequest {
    /// Creates a request for `client_id` with no technician
    #[must_use]
    pub fn new(description: impl Into<String>, client_id: ClientId) -> Self {
        Self {
            title: None,
            description: description.into(),
            status: None,
            client_id,
            technician_id: None,
        }
    }

    /// Assigns a technician
    #[must_use]
    pub const fn with_technician(mut self, technician_id: TechnicianId) -> Self {
        self.technician_id = Some(technician_id);
        self
    }

    /// Sets the initial status
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
