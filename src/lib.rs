//! Rubik's Cube stepper library
//!
//! Models a 3x3x3 cube as six 9-facelet faces, applies the twelve quarter-turn
//! moves, and plays back a catalog scramble followed by its reversed, inverted
//! solution one step at a time.

pub mod cube;
pub mod error;
pub mod layout;
pub mod moves;
pub mod session;

pub use cube::{Color, Cube, CubeState};
pub use error::CubeError;
pub use moves::{Face, Move, Turn};
pub use session::{Direction, Session, CATALOG};

/// Presentation seam: anything that paints the session's current state.
///
/// Implementors only read the session; navigation and selection stay with
/// the caller.
pub trait Presenter {
    fn render(&mut self, session: &Session);
}
