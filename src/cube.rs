//! Facelet colors, cube state and the cube model.
//!
//! The state is six fixed 9-cell arrays. It only ever changes through moves,
//! so every state the model produces is reachable from solved.

use rustc_hash::FxHashMap;

use crate::error::CubeError;
use crate::moves::{edge_cycle, Face, Move, CELLS_PER_FACE, CLOCKWISE_SOURCES, FACELETS};

/// Color of a single facelet: the solved color of one of the six faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    /// The color a face shows when the cube is solved.
    pub const fn of_face(face: Face) -> Color {
        match face {
            Face::Top => Color::White,
            Face::Bottom => Color::Yellow,
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Right => Color::Blue,
            Face::Left => Color::Green,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }

    /// Single-character form used by the text net.
    pub const fn glyph(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    /// Display swatch as linear RGB components in 0.0..=1.0.
    pub const fn rgb(self) -> (f32, f32, f32) {
        match self {
            Color::White => (0.95, 0.95, 0.95),
            Color::Yellow => (1.0, 0.85, 0.1),
            Color::Red => (0.85, 0.1, 0.1),
            Color::Orange => (1.0, 0.5, 0.0),
            Color::Blue => (0.1, 0.3, 0.9),
            Color::Green => (0.1, 0.7, 0.2),
        }
    }
}

/// The 54 facelet colors, one row-major 3x3 grid per face.
///
/// `CubeState` is `Copy`: every snapshot is an independent value and can
/// never alias the live cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [[Color; CELLS_PER_FACE]; 6],
}

impl CubeState {
    /// Every face filled with its own color.
    pub const SOLVED: CubeState = CubeState::solved();

    const fn solved() -> Self {
        let mut faces = [[Color::White; CELLS_PER_FACE]; 6];
        let mut f = 0;
        while f < 6 {
            faces[f] = [Color::of_face(Face::ALL[f]); CELLS_PER_FACE];
            f += 1;
        }
        Self { faces }
    }

    pub fn face(&self, face: Face) -> &[Color; CELLS_PER_FACE] {
        &self.faces[face.index()]
    }

    #[inline]
    pub fn facelet(&self, face: Face, cell: usize) -> Color {
        self.faces[face.index()][cell]
    }

    #[inline(always)]
    fn flat(&self, slot: usize) -> Color {
        self.faces[slot / CELLS_PER_FACE][slot % CELLS_PER_FACE]
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Counts facelets per color across all six faces.
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for color in self.faces.iter().flatten() {
            *counts.entry(*color).or_insert(0) += 1;
        }
        counts
    }

    /// Rotates the 3x3 grid of one face clockwise, leaving its neighbours alone.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        let before = self.faces[face.index()];
        for (cell, &src) in CLOCKWISE_SOURCES.iter().enumerate() {
            self.faces[face.index()][cell] = before[src];
        }
    }

    /// Clockwise quarter turn computed step by step: rotate the face, then
    /// cycle the neighbouring strips.
    ///
    /// This is the reference definition the move tables are built from;
    /// [`CubeState::apply`] gives the same result in a single pass.
    pub fn quarter_turn(&mut self, face: Face) {
        self.rotate_face_clockwise(face);

        let cycle = edge_cycle(face);
        let (first_face, first_cells) = cycle[0];
        let saved = first_cells.map(|cell| self.facelet(first_face, cell));

        for pair in cycle.windows(2) {
            let (dest_face, dest_cells) = pair[0];
            let (src_face, src_cells) = pair[1];
            for (&dest, &src) in dest_cells.iter().zip(&src_cells) {
                self.faces[dest_face.index()][dest] = self.faces[src_face.index()][src];
            }
        }

        let (last_face, last_cells) = cycle[3];
        for (&dest, color) in last_cells.iter().zip(saved) {
            self.faces[last_face.index()][dest] = color;
        }
    }

    /// Applies a move through its precomputed facelet table.
    pub fn apply(&mut self, mv: Move) {
        let before = *self;
        for (slot, &src) in mv.sources().iter().enumerate() {
            self.faces[slot / CELLS_PER_FACE][slot % CELLS_PER_FACE] = before.flat(src as usize);
        }
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::SOLVED
    }
}

// the flat addressing in `apply` relies on this
const _: () = assert!(FACELETS == 6 * CELLS_PER_FACE);

/// The live cube: one mutable state plus snapshot/restore.
#[derive(Debug, Clone, Default)]
pub struct Cube {
    state: CubeState,
}

impl Cube {
    /// Creates a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every face to its solved single-color fill.
    pub fn reset(&mut self) {
        self.state = CubeState::SOLVED;
    }

    /// Read access for painting.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Independent copy of the current state.
    pub fn snapshot(&self) -> CubeState {
        self.state
    }

    /// Replaces the live state with a copy of `snapshot`.
    ///
    /// Any `CubeState` is a complete 6x9 grid of valid colors, so there is
    /// nothing to validate here.
    pub fn restore(&mut self, snapshot: &CubeState) {
        self.state = *snapshot;
    }

    pub fn rotate_face_clockwise(&mut self, face: Face) {
        self.state.rotate_face_clockwise(face);
    }

    pub fn apply(&mut self, mv: Move) {
        self.state.apply(mv);
    }

    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Parses and applies one move symbol such as `"F'"`.
    pub fn apply_symbol(&mut self, symbol: &str) -> Result<Move, CubeError> {
        let mv: Move = symbol.parse()?;
        self.apply(mv);
        Ok(mv)
    }
}
