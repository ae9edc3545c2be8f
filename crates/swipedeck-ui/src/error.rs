//! Error taxonomy for the card stack.

use crate::controller::SwipePhase;

/// Errors surfaced by deck construction and queue operations.
///
/// Gesture callbacks never return these; the controller logs an
/// [`InvalidGestureSequence`](DeckError::InvalidGestureSequence) at warn
/// level and drops the event, because crashing the UI event loop over a
/// stray pointer callback is worse than ignoring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// An operation ran against state that cannot satisfy it, such as
    /// popping an empty queue or building a deck with duplicate ids.
    PreconditionViolation { detail: String },
    /// A gesture callback arrived in a phase that does not accept it.
    InvalidGestureSequence {
        event: &'static str,
        phase: SwipePhase,
    },
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::PreconditionViolation { detail } => {
                write!(f, "precondition violated: {detail}")
            }
            DeckError::InvalidGestureSequence { event, phase } => {
                write!(f, "{event} arrived during {phase:?}")
            }
        }
    }
}

impl std::error::Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let error = DeckError::PreconditionViolation {
            detail: "duplicate card id 3".into(),
        };
        assert_eq!(error.to_string(), "precondition violated: duplicate card id 3");

        let error = DeckError::InvalidGestureSequence {
            event: "on_drag_move",
            phase: SwipePhase::Idle,
        };
        assert_eq!(error.to_string(), "on_drag_move arrived during Idle");
    }
}
