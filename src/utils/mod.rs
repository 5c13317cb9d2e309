//! Utility modules for the todoboard application.
//!
//! - [`date`] - ISO date formatting/parsing and the injectable [`date::Clock`]
//! - [`ids`] - Client-side id generation for locally added todos

pub mod date;
pub mod ids;
