//! Taskboard: owner-scoped task management backend.
//!
//! This crate provides the query and mutation operations behind a personal
//! task board: listing tasks (optionally by status), creating tasks, changing
//! their status, and deleting them. Every operation receives the caller's
//! identity explicitly and only the owning user may read or change a task.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`user`]: Mapping authenticated callers to internal users
//! - [`task`]: Task records, the ownership guard, and the task board service
//! - [`config`]: Layered service configuration
//! - [`telemetry`]: Structured logging setup
//! - [`bootstrap`]: `PostgreSQL` wiring

pub mod bootstrap;
pub mod config;
pub mod task;
pub mod telemetry;
pub mod user;
