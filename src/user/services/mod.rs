//! Application services for caller resolution.

mod resolver;

pub use resolver::{UserResolutionError, UserResolutionResult, UserResolver, require_subject};
