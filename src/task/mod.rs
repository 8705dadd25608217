//! Owner-scoped task management.
//!
//! Implements listing, creation, status updates, and deletion of tasks, each
//! guarded so that only the owning user can read or change a task. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
