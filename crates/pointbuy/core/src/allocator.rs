//! Randomized point-buy allocation.
//!
//! The allocator spends a point budget across six ability scores in three
//! phases:
//!
//! 1. **Seed fill** — draw random table positions and keep every draw the
//!    budget can afford, until six scores exist or the budget runs dry.
//! 2. **Repair** — spend leftover points by upgrading random slots to the
//!    next-higher score, bounded by a hard attempt cap.
//! 3. **Pad** — top up to six slots with the table's floor entry when the
//!    budget was exhausted early.
//!
//! The result is best-effort: leftover points that no affordable upgrade
//! can absorb within the attempt cap stay unspent.

use arrayvec::ArrayVec;

use crate::cost::CostsOracle;
use crate::edition::Edition;
use crate::error::ErrorSeverity;
use crate::rng::RngOracle;

/// Number of ability scores in a point-buy array.
pub const ABILITY_SLOTS: usize = 6;

/// Hard ceiling on repair-phase iterations.
///
/// This is the only guard against spinning forever when the remaining
/// budget can no longer buy any upgrade. Changing it changes output
/// distributions, so it is part of the allocator's contract.
pub const REPAIR_ATTEMPT_CAP: u32 = 500;

/// A generated six-score array with its per-slot and total costs.
///
/// Invariants, maintained through every phase and on return:
/// `scores` and `costs` are parallel, `total_cost` equals the sum of
/// `costs`, and `total_cost` never exceeds the requested budget.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointBuyResult {
    pub scores: ArrayVec<i32, ABILITY_SLOTS>,
    pub costs: ArrayVec<i32, ABILITY_SLOTS>,
    pub total_cost: i32,
}

impl PointBuyResult {
    pub fn new() -> Self {
        Self {
            scores: ArrayVec::new(),
            costs: ArrayVec::new(),
            total_cost: 0,
        }
    }

    /// True once all six slots are filled.
    pub fn is_complete(&self) -> bool {
        self.scores.len() == ABILITY_SLOTS
    }
}

impl Default for PointBuyResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised when a lookup the allocator derived from the table itself
/// comes back empty.
///
/// Every variant means the cost table is corrupt or incomplete. These are
/// never conflated with a legitimate zero-cost score and never retried
/// inside the allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllocError {
    /// A sampled table position had no entry.
    #[error("cost table for {edition} has no entry at position {position}")]
    MissingPosition { edition: Edition, position: usize },

    /// A score known to exist in the table had no cost entry.
    #[error("cost table for {edition} has no cost for score {score}")]
    MissingCost { edition: Edition, score: i32 },
}

impl AllocError {
    /// Severity of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    /// Stable identifier for categorization and logging.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPosition { .. } => "ALLOC_MISSING_POSITION",
            Self::MissingCost { .. } => "ALLOC_MISSING_COST",
        }
    }
}

/// Randomized best-effort point-buy allocator.
///
/// Holds the cost oracle by reference and consumes an owned RNG stream, so
/// each allocation's randomness is exactly the stream it was constructed
/// with. Callers running batches construct one allocator per allocation
/// with independently derived seeds.
pub struct Allocator<'a, C: CostsOracle + ?Sized, R: RngOracle> {
    costs: &'a C,
    rng: R,
}

impl<'a, C: CostsOracle + ?Sized, R: RngOracle> Allocator<'a, C, R> {
    pub fn new(costs: &'a C, rng: R) -> Self {
        Self { costs, rng }
    }

    /// Produce a six-score point-buy array for `budget` under `edition`.
    ///
    /// `budget` is assumed to already be clamped to the edition's ceiling;
    /// the allocator itself only guarantees it never overspends whatever
    /// budget it is handed.
    pub fn allocate(
        &mut self,
        budget: i32,
        edition: Edition,
    ) -> Result<PointBuyResult, AllocError> {
        let mut buy = PointBuyResult::new();
        let mut remaining = budget;

        self.seed_fill(&mut buy, &mut remaining, edition)?;
        self.repair(&mut buy, &mut remaining, edition)?;
        self.pad(&mut buy, edition)?;

        Ok(buy)
    }

    /// Phase 1: accept random affordable draws until six scores exist or
    /// the budget is spent. Unaffordable draws are redrawn without bound;
    /// termination comes from the two loop conditions alone.
    fn seed_fill(
        &mut self,
        buy: &mut PointBuyResult,
        remaining: &mut i32,
        edition: Edition,
    ) -> Result<(), AllocError> {
        let table_len = self.costs.table_len(edition);

        while *remaining > 0 && buy.scores.len() < ABILITY_SLOTS {
            let position = self.rng.next_int(0, table_len as i32 - 1) as usize;
            let score = self
                .costs
                .score_at_position(position, edition)
                .ok_or(AllocError::MissingPosition { edition, position })?;
            let cost = self
                .costs
                .cost_for(score, edition)
                .ok_or(AllocError::MissingCost { edition, score })?;

            if *remaining - cost >= 0 {
                *remaining -= cost;
                buy.scores.push(score);
                buy.costs.push(cost);
                buy.total_cost += cost;
            }
        }

        Ok(())
    }

    /// Phase 2: upgrade random slots one table step at a time while budget
    /// remains, giving up after [`REPAIR_ATTEMPT_CAP`] attempts.
    ///
    /// Every iteration burns one attempt, whether it upgrades, picks a slot
    /// already at the table top, or picks an unfilled slot. Returns the
    /// number of attempts consumed.
    fn repair(
        &mut self,
        buy: &mut PointBuyResult,
        remaining: &mut i32,
        edition: Edition,
    ) -> Result<u32, AllocError> {
        let mut attempts = 0;

        while *remaining > 0 && attempts < REPAIR_ATTEMPT_CAP {
            attempts += 1;

            let slot = self.rng.next_int(0, ABILITY_SLOTS as i32 - 1) as usize;
            let Some(&current) = buy.scores.get(slot) else {
                continue;
            };

            // Slot already at the table's top score.
            let Some(next) = self.costs.score_for(current + 1, edition) else {
                continue;
            };
            let next_cost = self
                .costs
                .cost_for(next, edition)
                .ok_or(AllocError::MissingCost { edition, score: next })?;

            let delta = next_cost - buy.costs[slot];
            if *remaining - delta >= 0 {
                *remaining -= delta;
                buy.total_cost += delta;
                buy.scores[slot] = next;
                buy.costs[slot] = next_cost;
            }
        }

        Ok(attempts)
    }

    /// Phase 3: fill any slots left open by an exhausted budget with the
    /// table's floor entry, regardless of remaining points. Floor costs are
    /// zero or negative in every edition, so this never overspends.
    fn pad(&mut self, buy: &mut PointBuyResult, edition: Edition) -> Result<(), AllocError> {
        while buy.scores.len() < ABILITY_SLOTS {
            let score = self
                .costs
                .score_at_position(0, edition)
                .ok_or(AllocError::MissingPosition {
                    edition,
                    position: 0,
                })?;
            let cost = self
                .costs
                .cost_for(score, edition)
                .ok_or(AllocError::MissingCost { edition, score })?;

            buy.scores.push(score);
            buy.costs.push(cost);
            buy.total_cost += cost;
        }

        Ok(())
    }
}
