//! User resolution for the task board.
//!
//! Maps the external identity supplied by the authentication collaborator to
//! an internal user record. Provisioning users is left to the caller; this
//! context only stores and looks them up. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
