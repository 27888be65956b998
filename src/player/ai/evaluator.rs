//! Evaluator trait for board evaluation
//!
//! Defines a common interface for different evaluation strategies.

use crate::core::{Board, Score};

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the board from O's perspective
    ///
    /// Returns:
    ///   - Positive score: O advantage
    ///   - Negative score: X advantage
    ///   - Zero: Equal position
    ///
    /// Must be deterministic for a given board. The scale is up to the
    /// evaluator; the search clamps it into `MIN_SCORE..=MAX_SCORE`.
    fn evaluate(&self, board: &Board) -> Score;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}

/// Adapts a plain function or closure into an [`Evaluator`].
pub struct FnEvaluator<F> {
    name: String,
    f: F,
}

impl<F> FnEvaluator<F>
where
    F: Fn(&Board) -> Score + Send + Sync,
{
    pub fn new(name: &str, f: F) -> Self {
        Self {
            name: name.to_string(),
            f,
        }
    }
}

impl<F> Evaluator for FnEvaluator<F>
where
    F: Fn(&Board) -> Score + Send + Sync,
{
    fn evaluate(&self, board: &Board) -> Score {
        (self.f)(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, board: &Board) -> Score {
        (**self).evaluate(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
