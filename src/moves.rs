//! Face identifiers, quarter-turn moves and their permutation tables.
//!
//! A move is a quarter turn of one face: the face's own 3x3 grid rotates
//! clockwise and a 3-facelet strip cycles through the four neighbouring faces.
//! Counter-clockwise turns are three clockwise turns.
//!
//! Facelets are addressed as `face.index() * 9 + cell`, where `cell` is the
//! row-major position 0..8 within the face as drawn in the cross net.

use std::fmt;
use std::str::FromStr;

use crate::error::CubeError;

/// Number of facelets on one face.
pub const CELLS_PER_FACE: usize = 9;

/// Number of facelets on the whole cube.
pub const FACELETS: usize = 6 * CELLS_PER_FACE;

/// One of the six sides of the cube.
///
/// The discriminant is the face's slot in a [`crate::cube::CubeState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Top,
    Bottom,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Notation letter for turns of this face.
    pub const fn letter(self) -> char {
        match self {
            Face::Top => 'U',
            Face::Bottom => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Front => "front",
            Face::Back => "back",
            Face::Right => "right",
            Face::Left => "left",
        }
    }

    fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

/// Direction of a quarter turn, looking at the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// A quarter turn of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const R: Move = Move::clockwise(Face::Right);
    pub const R_PRIME: Move = Move::counter_clockwise(Face::Right);
    pub const L: Move = Move::clockwise(Face::Left);
    pub const L_PRIME: Move = Move::counter_clockwise(Face::Left);
    pub const U: Move = Move::clockwise(Face::Top);
    pub const U_PRIME: Move = Move::counter_clockwise(Face::Top);
    pub const D: Move = Move::clockwise(Face::Bottom);
    pub const D_PRIME: Move = Move::counter_clockwise(Face::Bottom);
    pub const F: Move = Move::clockwise(Face::Front);
    pub const F_PRIME: Move = Move::counter_clockwise(Face::Front);
    pub const B: Move = Move::clockwise(Face::Back);
    pub const B_PRIME: Move = Move::counter_clockwise(Face::Back);

    /// All twelve moves, each clockwise turn followed by its inverse.
    pub const ALL: [Move; 12] = [
        Move::R,
        Move::R_PRIME,
        Move::L,
        Move::L_PRIME,
        Move::U,
        Move::U_PRIME,
        Move::D,
        Move::D_PRIME,
        Move::F,
        Move::F_PRIME,
        Move::B,
        Move::B_PRIME,
    ];

    pub const fn clockwise(face: Face) -> Self {
        Self {
            face,
            turn: Turn::Clockwise,
        }
    }

    pub const fn counter_clockwise(face: Face) -> Self {
        Self {
            face,
            turn: Turn::CounterClockwise,
        }
    }

    /// The same face turned the opposite way.
    pub const fn inverse(self) -> Self {
        match self.turn {
            Turn::Clockwise => Move::counter_clockwise(self.face),
            Turn::CounterClockwise => Move::clockwise(self.face),
        }
    }

    /// Facelet source indices for this move: `new[i] = old[sources[i]]`.
    #[inline]
    pub fn sources(self) -> &'static [u8; FACELETS] {
        &MOVE_TABLE[self.table_index()]
    }

    #[inline(always)]
    const fn table_index(self) -> usize {
        self.face.index() * 2
            + match self.turn {
                Turn::Clockwise => 0,
                Turn::CounterClockwise => 1,
            }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{}", self.face.letter()),
            Turn::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parses exactly one of the twelve symbols, e.g. `R` or `U'`.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        let mut chars = symbol.chars();
        let face = chars.next().and_then(Face::from_letter);
        let suffix = chars.as_str();

        match (face, suffix) {
            (Some(face), "") => Ok(Move::clockwise(face)),
            (Some(face), "'") => Ok(Move::counter_clockwise(face)),
            _ => Err(CubeError::UnknownMove(symbol.to_string())),
        }
    }
}

/// Formats a move sequence in space-separated notation.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `scramble`: reversed order, each move inverted.
pub fn solution(scramble: &[Move]) -> Vec<Move> {
    scramble.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Source cell for each destination cell of a clockwise face rotation.
pub(crate) const CLOCKWISE_SOURCES: [usize; CELLS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// A 3-facelet strip on one face.
pub(crate) type Strip = (Face, [usize; 3]);

/// The four strips moved by a turn of `face`, in cycle order.
///
/// Each strip is overwritten by the next one; the last is overwritten by the
/// first. Cell order within a strip is significant: the reversed strips keep
/// sticker orientation correct across the turn.
pub(crate) const fn edge_cycle(face: Face) -> [Strip; 4] {
    match face {
        Face::Right => [
            (Face::Top, [2, 5, 8]),
            (Face::Front, [2, 5, 8]),
            (Face::Bottom, [2, 5, 8]),
            (Face::Back, [6, 3, 0]),
        ],
        Face::Left => [
            (Face::Top, [0, 3, 6]),
            (Face::Back, [8, 5, 2]),
            (Face::Bottom, [0, 3, 6]),
            (Face::Front, [0, 3, 6]),
        ],
        Face::Top => [
            (Face::Front, [0, 1, 2]),
            (Face::Right, [0, 1, 2]),
            (Face::Back, [0, 1, 2]),
            (Face::Left, [0, 1, 2]),
        ],
        Face::Bottom => [
            (Face::Front, [6, 7, 8]),
            (Face::Left, [6, 7, 8]),
            (Face::Back, [6, 7, 8]),
            (Face::Right, [6, 7, 8]),
        ],
        Face::Front => [
            (Face::Top, [6, 7, 8]),
            (Face::Left, [8, 5, 2]),
            (Face::Bottom, [2, 1, 0]),
            (Face::Right, [0, 3, 6]),
        ],
        Face::Back => [
            (Face::Top, [0, 1, 2]),
            (Face::Right, [2, 5, 8]),
            (Face::Bottom, [8, 7, 6]),
            (Face::Left, [6, 3, 0]),
        ],
    }
}

/// Builds the source table of a clockwise quarter turn of `face`.
///
/// Runs the rotate-then-cycle definition on an identity labelling, so each
/// entry records which facelet lands in that slot.
const fn quarter_turn_sources(face: Face) -> [u8; FACELETS] {
    let mut sources = [0u8; FACELETS];
    let mut i = 0;
    while i < FACELETS {
        sources[i] = i as u8;
        i += 1;
    }

    let base = face.index() * CELLS_PER_FACE;
    let mut cell = 0;
    while cell < CELLS_PER_FACE {
        sources[base + cell] = (base + CLOCKWISE_SOURCES[cell]) as u8;
        cell += 1;
    }

    // strips sit on the four neighbours, never on the turned face
    let cycle = edge_cycle(face);
    let before = sources;
    let mut strip = 0;
    while strip < 4 {
        let (dest_face, dest_cells) = cycle[strip];
        let (src_face, src_cells) = cycle[(strip + 1) % 4];
        let mut j = 0;
        while j < 3 {
            sources[dest_face.index() * CELLS_PER_FACE + dest_cells[j]] =
                before[src_face.index() * CELLS_PER_FACE + src_cells[j]];
            j += 1;
        }
        strip += 1;
    }

    sources
}

/// Table for `first` followed by `then`.
const fn compose(first: &[u8; FACELETS], then: &[u8; FACELETS]) -> [u8; FACELETS] {
    let mut composed = [0u8; FACELETS];
    let mut i = 0;
    while i < FACELETS {
        composed[i] = first[then[i] as usize];
        i += 1;
    }
    composed
}

/// Builds source tables for all twelve moves, indexed by `Move::table_index`.
const fn build_move_table() -> [[u8; FACELETS]; 12] {
    let mut table = [[0u8; FACELETS]; 12];
    let mut f = 0;
    while f < 6 {
        let clockwise = quarter_turn_sources(Face::ALL[f]);
        let half = compose(&clockwise, &clockwise);
        table[f * 2] = clockwise;
        table[f * 2 + 1] = compose(&half, &clockwise);
        f += 1;
    }
    table
}

static MOVE_TABLE: [[u8; FACELETS]; 12] = build_move_table();
