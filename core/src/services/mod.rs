//! Lifecycle services.
//!
//! Clients and technicians share one policy: partial updates and idempotent
//! deletes. Requests follow a different one: full-replace updates and deletes
//! that fail on a missing id. The divergence is kept deliberately per entity
//! type.

pub mod client;
pub mod request;
pub mod technician;

pub use client::ClientService;
pub use request::RequestService;
pub use technician::TechnicianService;
