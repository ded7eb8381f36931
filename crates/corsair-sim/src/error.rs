//! Initialization errors.
//!
//! Gameplay never fails: every in-game transition is a total function.
//! Only bringing a world up can go wrong.

use std::fmt;

use corsair_core::enums::{GamePhase, TemplateKind};

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The asset loader never supplied a required template.
    MissingTemplate { kind: TemplateKind },
    /// `start` was called outside the Loading phase.
    AlreadyStarted { phase: GamePhase },
    /// The configuration cannot produce a playable world.
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTemplate { kind } => write!(f, "missing entity template: {kind:?}"),
            Self::AlreadyStarted { phase } => {
                write!(f, "game already started (phase {phase:?})")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid simulation config: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
