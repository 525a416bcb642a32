//! Invalid-argument errors raised by swatch and harmony generation.
//!
//! Every error here is synchronous and deterministic: the same inputs fail
//! the same way, and no partial output is ever returned alongside one.

use thiserror::Error;

use crate::harmony::HarmonyKind;

/// An argument outside the domain an operation accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A tone index that is not one of the ten Material ramp steps.
    #[error("invalid tone {tone}: expected one of 50, 100, 200, 300, 400, 500, 600, 700, 800, 900")]
    InvalidTone { tone: u16 },

    /// A step count below the minimum for its harmony kind.
    #[error("{kind} harmony needs at least {min} steps, got {steps}")]
    TooFewSteps {
        kind: HarmonyKind,
        steps: usize,
        min: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_tone_lists_valid_set() {
        let msg = Error::InvalidTone { tone: 999 }.to_string();
        assert!(msg.contains("999"));
        for tone in ["50", "100", "500", "900"] {
            assert!(msg.contains(tone), "missing {tone} in {msg}");
        }
    }

    #[test]
    fn too_few_steps_names_kind() {
        let err = Error::TooFewSteps {
            kind: HarmonyKind::Monochromatic,
            steps: 1,
            min: 2,
        };
        assert_eq!(
            err.to_string(),
            "monochromatic harmony needs at least 2 steps, got 1"
        );
    }
}
