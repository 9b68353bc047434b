//! Batch point-buy generation.
//!
//! This crate is the orchestration layer over the pure rules core: it
//! applies the request policies the core deliberately leaves to callers
//! (default budget, budget clamped to the edition ceiling, batch size
//! capped) and hands every allocation in a batch its own independently
//! seeded RNG stream.

use pointbuy_core::{
    AllocError, Allocator, CostsOracle, Edition, ErrorSeverity, Pcg32, PointBuyResult,
    RulebookCosts, compute_seed,
};

/// Most point-buy arrays a single request may generate.
pub const MAX_BATCH: usize = 10;

/// Budget used when a request names none (the 5e default).
pub const DEFAULT_BUDGET: i32 = 27;

/// One batch request: which edition, how many arrays, and for how many
/// points.
///
/// Out-of-range values are clamped rather than rejected: a budget above the
/// edition's ceiling drops to the ceiling, a count above [`MAX_BATCH`]
/// drops to the cap. A count of zero yields an empty batch.
#[derive(Clone, Copy, Debug)]
pub struct GenerateRequest {
    pub edition: Edition,
    pub count: usize,
    pub budget: Option<i32>,
}

impl GenerateRequest {
    /// A single-array request for `edition` at the default budget.
    pub fn new(edition: Edition) -> Self {
        Self {
            edition,
            count: 1,
            budget: None,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_budget(mut self, budget: i32) -> Self {
        self.budget = Some(budget);
        self
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::new(Edition::default())
    }
}

/// Errors surfaced by batch generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The rules core hit a corrupt or incomplete cost table.
    #[error("point-buy allocation failed: {0}")]
    Allocation(#[from] AllocError),
}

impl GenerateError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Allocation(inner) => inner.severity(),
        }
    }

    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Allocation(inner) => inner.error_code(),
        }
    }
}

/// Batch generator holding the cost oracle and the seed state.
///
/// Each allocation draws its stream from `compute_seed(base_seed, nonce)`
/// with the nonce advancing per allocation, so no two allocations ever
/// share a stream and a generator rebuilt from the same base seed replays
/// the same batches in the same order.
pub struct Generator<C: CostsOracle = RulebookCosts> {
    costs: C,
    base_seed: u64,
    nonce: u64,
}

impl Generator<RulebookCosts> {
    /// Generator over the rulebook tables with an entropy-drawn base seed.
    pub fn new() -> Self {
        Self::with_costs(RulebookCosts, rand::random())
    }

    /// Deterministic generator over the rulebook tables.
    pub fn seeded(base_seed: u64) -> Self {
        Self::with_costs(RulebookCosts, base_seed)
    }
}

impl Default for Generator<RulebookCosts> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CostsOracle> Generator<C> {
    /// Generator over a caller-supplied cost oracle.
    pub fn with_costs(costs: C, base_seed: u64) -> Self {
        Self {
            costs,
            base_seed,
            nonce: 0,
        }
    }

    /// Generate a batch of point-buy arrays for `request`.
    ///
    /// Fails only when the cost oracle turns out to be corrupt; whether to
    /// retry a failed batch is the caller's decision.
    pub fn generate(
        &mut self,
        request: &GenerateRequest,
    ) -> Result<Vec<PointBuyResult>, GenerateError> {
        let ceiling = self.costs.max_budget(request.edition);
        let mut budget = request.budget.unwrap_or(DEFAULT_BUDGET);
        if budget > ceiling {
            tracing::debug!(
                requested = budget,
                ceiling,
                edition = %request.edition,
                "clamping budget to edition ceiling"
            );
            budget = ceiling;
        }

        let mut count = request.count;
        if count > MAX_BATCH {
            tracing::debug!(requested = count, cap = MAX_BATCH, "clamping batch size");
            count = MAX_BATCH;
        }

        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            let rng = Pcg32::seeded(compute_seed(self.base_seed, self.nonce));
            self.nonce += 1;

            let mut allocator = Allocator::new(&self.costs, rng);
            match allocator.allocate(budget, request.edition) {
                Ok(buy) => results.push(buy),
                Err(err) => {
                    tracing::error!(
                        code = err.error_code(),
                        edition = %request.edition,
                        "point-buy allocation failed"
                    );
                    return Err(err.into());
                }
            }
        }

        Ok(results)
    }
}
