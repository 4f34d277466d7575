#![forbid(unsafe_code)]

//! Core domain model and business logic for the caffcheck system.
//!
//! This crate provides:
//! - Domain types (items, consumption entries, profiles, assessments)
//! - The read-only item catalog
//! - The configurable age-bracket limit policy
//! - Warning and recommendation message catalogs
//! - The pure assessment engine
//!
//! The engine holds no state across calls; presentation layers invoke
//! [`engine::assess`] once per request and render the result.

pub mod types;
pub mod error;
pub mod catalog;
pub mod policy;
pub mod messages;
pub mod config;
pub mod logging;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use policy::{BracketRule, LimitPolicy};
pub use config::Config;
pub use messages::{generate_problems, generate_recommendations};
pub use engine::{assess, classify, compute_total_intake};
