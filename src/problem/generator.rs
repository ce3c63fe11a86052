//! @acp:module "Problem Generator"
//! @acp:summary "Rejection sampling of range-constrained problems per operation mode"
//! @acp:domain generation
//! @acp:layer logic
//!
//! Operands are drawn uniformly from the outcome range and tested against a
//! per-mode policy. Samples that fail are thrown away and drawn again. Each
//! problem slot gets at most `max_attempts` draws, so a range that can never
//! satisfy the policy ends in [`GenerationError::Unsatisfiable`].

use rand::Rng;

use super::{GenerationError, OperationMode, Problem, ProblemSet, Range, UNKNOWN};

/// Default cap on consecutive rejected draws for one problem
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;

/// Bounded rejection-sampling generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemGenerator {
    max_attempts: u64,
}

impl Default for ProblemGenerator {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ProblemGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-problem attempt cap (at least one draw)
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Generate exactly `count` problems, in acceptance order
    pub fn generate<R: Rng>(
        &self,
        mode: OperationMode,
        range: Range,
        count: usize,
        rng: &mut R,
    ) -> Result<ProblemSet, GenerationError> {
        let mut problems = Vec::with_capacity(count);
        let mut draws: u64 = 0;

        while problems.len() < count {
            let (problem, attempts) = self.next_problem(mode, range, rng)?;
            draws += attempts;
            tracing::trace!(problem = problem.text(), attempts, "accepted problem");
            problems.push(problem);
        }

        tracing::debug!(
            mode = mode.label(),
            %range,
            count,
            draws,
            rejected = draws - count as u64,
            "generated problem set"
        );

        Ok(ProblemSet::new(mode, range, problems))
    }

    /// Draw until one sample passes, returning it with the number of draws used
    fn next_problem<R: Rng>(
        &self,
        mode: OperationMode,
        range: Range,
        rng: &mut R,
    ) -> Result<(Problem, u64), GenerationError> {
        for attempt in 1..=self.max_attempts {
            if let Some(problem) = sample(mode, range, rng) {
                return Ok((problem, attempt));
            }
        }

        tracing::warn!(
            mode = mode.label(),
            %range,
            attempts = self.max_attempts,
            "giving up on unsatisfiable range"
        );
        Err(GenerationError::Unsatisfiable {
            mode,
            range,
            attempts: self.max_attempts,
        })
    }
}

/// Generate with the thread-local RNG and the default attempt cap
pub fn generate(
    mode: OperationMode,
    range: Range,
    count: usize,
) -> Result<ProblemSet, GenerationError> {
    ProblemGenerator::default().generate(mode, range, count, &mut rand::rng())
}

/// One draw: sample operands and try the mode's policy
pub fn sample<R: Rng>(mode: OperationMode, range: Range, rng: &mut R) -> Option<Problem> {
    let mut operand = || rng.random_range(range.min()..=range.max());
    let a = operand();
    let b = operand();

    match mode {
        OperationMode::AddSub => {
            let heads = rng.random_bool(0.5);
            add_sub(a, b, heads, range)
        }
        OperationMode::MulDiv => {
            let heads = rng.random_bool(0.5);
            mul_div(a, b, heads, range)
        }
        OperationMode::Algebra => {
            let c = rng.random_range(range.min()..=range.max());
            let variant = rng.random_range(0..3u8);
            algebra(a, b, c, variant, range)
        }
    }
}

fn sum_within(a: i64, b: i64, range: Range) -> Option<i64> {
    a.checked_add(b).filter(|sum| *sum <= range.max())
}

fn difference_within(a: i64, b: i64, range: Range) -> Option<i64> {
    a.checked_sub(b).filter(|diff| *diff >= range.min())
}

/// Addition on heads when the sum fits, otherwise subtraction when the
/// difference fits
pub(crate) fn add_sub(a: i64, b: i64, heads: bool, range: Range) -> Option<Problem> {
    if heads && sum_within(a, b, range).is_some() {
        return Some(Problem::new(format!("{} + {} = ", a, b)));
    }
    difference_within(a, b, range).map(|_| Problem::new(format!("{} - {} = ", a, b)))
}

/// Multiplication on heads when the product fits, otherwise exact division
pub(crate) fn mul_div(a: i64, b: i64, heads: bool, range: Range) -> Option<Problem> {
    if heads && a.checked_mul(b).is_some_and(|product| product <= range.max()) {
        return Some(Problem::new(format!("{} * {} = ", a, b)));
    }

    if b == 0 {
        return None;
    }
    let exact = a.checked_rem(b) == Some(0);
    let quotient_fits = a.checked_div(b).is_some_and(|q| q >= range.min());
    if exact && quotient_fits {
        Some(Problem::new(format!("{} / {} = ", a, b)))
    } else {
        None
    }
}

/// One equation with a single unknown
///
/// - variant 0: the result is unknown
/// - variant 1: the first operand is unknown (solution `c`)
/// - variant 2: the second operand is unknown (solution `c`)
pub(crate) fn algebra(a: i64, b: i64, c: i64, variant: u8, range: Range) -> Option<Problem> {
    let text = match variant {
        0 => {
            if sum_within(a, b, range).is_some() {
                format!("{} + {} = {}", a, b, UNKNOWN)
            } else if difference_within(a, b, range).is_some() {
                format!("{} - {} = {}", a, b, UNKNOWN)
            } else {
                return None;
            }
        }
        1 => {
            if let Some(sum) = sum_within(b, c, range) {
                format!("{} + {} = {}", UNKNOWN, b, sum)
            } else if let Some(diff) = difference_within(c, b, range) {
                format!("{} - {} = {}", UNKNOWN, b, diff)
            } else {
                return None;
            }
        }
        _ => {
            if let Some(sum) = sum_within(a, c, range) {
                format!("{} + {} = {}", a, UNKNOWN, sum)
            } else if let Some(diff) = difference_within(a, c, range) {
                format!("{} - {} = {}", a, UNKNOWN, diff)
            } else {
                return None;
            }
        }
    };
    Some(Problem::new(text))
}
