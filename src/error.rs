//! Error types for cube and session operations.

use thiserror::Error;

/// Errors raised by the cube model and the session controller.
///
/// All of these are caller errors: they are deterministic and will recur
/// identically if the same call is repeated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("unknown move {0:?}, expected one of R L U D F B with an optional '")]
    UnknownMove(String),
    #[error("scramble index {index} is out of range, catalog has {len} entries")]
    ScrambleOutOfRange { index: usize, len: usize },
    #[error("no scramble named {0:?} in the catalog")]
    UnknownScramble(String),
}
