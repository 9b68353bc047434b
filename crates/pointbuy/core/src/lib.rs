//! Deterministic point-buy rules and ability-score allocation.
//!
//! `pointbuy-core` defines the canonical cost tables for the supported
//! rulesets and exposes a pure, randomized allocator that spends a point
//! budget across six ability scores. All randomness flows through the
//! injectable [`rng::RngOracle`] so allocations are reproducible from a
//! seed, and all table access flows through [`cost::CostsOracle`] so
//! alternative rulesets can be supplied at the same seam.
pub mod allocator;
pub mod cost;
pub mod edition;
pub mod error;
pub mod rng;

pub use allocator::{ABILITY_SLOTS, AllocError, Allocator, PointBuyResult, REPAIR_ATTEMPT_CAP};
pub use cost::{CostEntry, CostsOracle, RulebookCosts};
pub use edition::Edition;
pub use error::ErrorSeverity;
pub use rng::{Pcg32, RngOracle, compute_seed};
