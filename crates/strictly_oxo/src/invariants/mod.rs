//! First-class invariants over [`GameState`](crate::GameState).
//!
//! Invariants are logical properties that must hold after every
//! controller operation. They are testable independently and the
//! controller checks them in debug builds.

use crate::state::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, reporting every one that fails.
pub trait InvariantSet<S> {
    /// Returns all violations, or `Ok` if every invariant holds.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod outcome_exclusive;
pub mod rectangular_board;
pub mod turn_pointer;

pub use outcome_exclusive::OutcomeExclusiveInvariant;
pub use rectangular_board::RectangularBoardInvariant;
pub use turn_pointer::TurnPointerInvariant;

/// All game state invariants as a composable set.
pub type OxoInvariants = (
    OutcomeExclusiveInvariant,
    TurnPointerInvariant,
    RectangularBoardInvariant,
);

/// Logs any violated invariants and panics in debug builds.
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    let result = OxoInvariants::check_all(state);
    if let Err(violations) = &result {
        for v in violations {
            warn!(description = %v.description, "Invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Invariants violated: {:?}", result);
}
