//! Core domain types for the caffeine assessment system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Catalog items and consumption entries
//! - The person profile an assessment is computed for
//! - Age bracket groups and over-limit severity
//! - The assessment result returned to callers

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ============================================================================
// Catalog and Consumption Types
// ============================================================================

/// A catalog entry: one consumable item and its caffeine content per unit
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CaffeineItem {
    pub id: u32,
    pub name: String,
    /// Caffeine per single unit (one cup, can, bar, ...) in milligrams
    pub caffeine_per_unit_mg: f64,
}

/// One (item, quantity) pair representing something consumed today
///
/// A request may contain the same `item_id` more than once; contributions
/// are additive, never deduplicated.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumptionEntry {
    pub item_id: u32,
    pub quantity: u32,
}

impl ConsumptionEntry {
    pub fn new(item_id: u32, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// The person an assessment is computed for
///
/// Used only to derive the daily safety threshold; never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: f64,
    pub weight_kg: f64,
}

impl Profile {
    pub fn new(age: f64, weight_kg: f64) -> Self {
        Self { age, weight_kg }
    }

    /// Reject non-positive or non-finite age/weight before any computation
    pub fn validate(&self) -> Result<()> {
        if !self.age.is_finite() || self.age <= 0.0 {
            return Err(Error::InvalidProfile(format!(
                "age must be a positive number, got {}",
                self.age
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(Error::InvalidProfile(format!(
                "weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Bracket Group and Severity
// ============================================================================

/// Age-defined policy segment a bracket rule belongs to
///
/// Determines which message tables apply on top of the per-kg multiplier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BracketGroup {
    Adolescent,
    Adult,
}

/// How far over the limit an intake landed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Elevated,
    Severe,
}

impl Severity {
    /// Classify an over-limit intake by its ratio to the limit
    ///
    /// Only meaningful when `total > limit`; the mapping is total over all
    /// positive ratios so callers never hit an unhandled case.
    pub fn for_intake(total_mg: f64, limit_mg: f64) -> Self {
        let ratio = total_mg / limit_mg;
        if ratio <= 1.25 {
            Severity::Mild
        } else if ratio <= 2.0 {
            Severity::Elevated
        } else {
            Severity::Severe
        }
    }
}

// ============================================================================
// Assessment Result
// ============================================================================

/// The result of one assessment request
///
/// Computed fresh per request and immutable once returned. Invariants:
/// `over_limit == (total_intake_mg > limit_mg)`, and `problems` is
/// non-empty exactly when `over_limit` is true.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub total_intake_mg: f64,
    pub limit_mg: f64,
    pub over_limit: bool,
    pub problems: Vec<String>,
    pub recommendations: Vec<String>,
}
