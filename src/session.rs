//! Scramble catalog and stepped playback of a scramble's solution.
//!
//! Selecting a scramble records a trace of snapshots: the scrambled state,
//! then the state after each solution move. Navigation only moves a cursor
//! over that trace and restores the cube to the snapshot under it.

use std::fmt;

use tracing::debug;

use crate::cube::{Cube, CubeState};
use crate::error::CubeError;
use crate::moves::{format_moves, solution, Move};

/// A named, fixed move sequence from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scramble {
    pub name: &'static str,
    pub moves: &'static [Move],
}

impl Scramble {
    /// The move sequence that returns this scramble to solved.
    pub fn solution(&self) -> Vec<Move> {
        solution(self.moves)
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} moves): {}",
            self.name,
            self.moves.len(),
            format_moves(self.moves)
        )
    }
}

/// The built-in scrambles, easiest first.
pub const CATALOG: &[Scramble] = &[
    Scramble {
        name: "Easy",
        moves: &[Move::R, Move::U, Move::R_PRIME, Move::U_PRIME],
    },
    Scramble {
        name: "Medium",
        moves: &[
            Move::L_PRIME,
            Move::U_PRIME,
            Move::L,
            Move::U,
            Move::F,
            Move::U,
            Move::F_PRIME,
        ],
    },
    Scramble {
        name: "Hard",
        moves: &[
            Move::B,
            Move::U,
            Move::L,
            Move::U_PRIME,
            Move::B_PRIME,
            Move::U_PRIME,
            Move::L_PRIME,
            Move::F,
            Move::U,
            Move::R,
            Move::U_PRIME,
            Move::F_PRIME,
            Move::R_PRIME,
            Move::D,
            Move::R,
            Move::D_PRIME,
            Move::R_PRIME,
            Move::U_PRIME,
        ],
    },
];

/// One navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    /// Re-restores the current position; used for the first paint.
    Stay,
    Forward,
}

impl Direction {
    pub const fn offset(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Stay => 0,
            Direction::Forward => 1,
        }
    }
}

/// The move that led to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastMove {
    Start,
    Move(Move),
}

/// The move that leads away from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextMove {
    Move(Move),
    Complete,
}

impl fmt::Display for LastMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastMove::Start => f.write_str("Start"),
            LastMove::Move(mv) => write!(f, "{mv}"),
        }
    }
}

impl fmt::Display for NextMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextMove::Move(mv) => write!(f, "{mv}"),
            NextMove::Complete => f.write_str("Complete"),
        }
    }
}

/// Where playback stands within the active scramble's solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInfo {
    pub scramble: Scramble,
    pub position: usize,
    pub total: usize,
    pub last_move: LastMove,
    pub next_move: NextMove,
    /// `position / total`; 1.0 for an empty solution.
    pub ratio: f64,
}

/// Playback data for the selected scramble.
#[derive(Debug, Clone)]
struct Playback {
    index: usize,
    solution: Vec<Move>,
    trace: Vec<CubeState>,
    position: usize,
}

impl Playback {
    fn last_position(&self) -> usize {
        self.trace.len() - 1
    }
}

/// Owns the cube model and drives scramble selection and navigation.
///
/// Starts unselected. [`Session::select_scramble`] makes it active; only
/// [`Session::reset`] makes it unselected again.
#[derive(Debug, Clone)]
pub struct Session {
    cube: Cube,
    catalog: &'static [Scramble],
    active: Option<Playback>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session over the built-in [`CATALOG`].
    pub fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    pub fn with_catalog(catalog: &'static [Scramble]) -> Self {
        Self {
            cube: Cube::new(),
            catalog,
            active: None,
        }
    }

    pub fn catalog(&self) -> &'static [Scramble] {
        self.catalog
    }

    /// Read access to the cube model, for painting.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Looks up a catalog entry by case-insensitive name or zero-based index.
    pub fn find_scramble(&self, key: &str) -> Result<usize, CubeError> {
        if let Some(index) = self
            .catalog
            .iter()
            .position(|scramble| scramble.name.eq_ignore_ascii_case(key))
        {
            return Ok(index);
        }
        match key.parse::<usize>() {
            Ok(index) if index < self.catalog.len() => Ok(index),
            Ok(index) => Err(CubeError::ScrambleOutOfRange {
                index,
                len: self.catalog.len(),
            }),
            Err(_) => Err(CubeError::UnknownScramble(key.to_string())),
        }
    }

    /// Applies the scramble at `index` to a fresh cube and records the trace
    /// of its solution. Playback starts at the scrambled state.
    pub fn select_scramble(&mut self, index: usize) -> Result<(), CubeError> {
        let scramble = self
            .catalog
            .get(index)
            .ok_or(CubeError::ScrambleOutOfRange {
                index,
                len: self.catalog.len(),
            })?;

        let solution = scramble.solution();
        let mut trace = Vec::with_capacity(solution.len() + 1);

        self.cube.reset();
        self.cube.apply_all(scramble.moves);
        trace.push(self.cube.snapshot());
        for &mv in &solution {
            self.cube.apply(mv);
            trace.push(self.cube.snapshot());
        }

        debug!(
            scramble = scramble.name,
            moves = scramble.moves.len(),
            trace_len = trace.len(),
            "selected scramble"
        );

        // the old trace is replaced only once the new one is complete
        self.active = Some(Playback {
            index,
            solution,
            trace,
            position: 0,
        });
        self.step(Direction::Stay);
        Ok(())
    }

    /// Moves the cursor by one (clamped to the trace) and restores the cube
    /// to the snapshot there. No-op while unselected.
    pub fn step(&mut self, direction: Direction) {
        let Some(playback) = self.active.as_mut() else {
            debug!("step ignored, no scramble selected");
            return;
        };

        let target = playback.position as isize + direction.offset();
        playback.position = target.clamp(0, playback.last_position() as isize) as usize;
        self.cube.restore(&playback.trace[playback.position]);
        debug!(position = playback.position, ?direction, "stepped");
    }

    /// Returns the cube to solved and drops the active scramble.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.active = None;
        debug!("session reset");
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_scramble(&self) -> Option<&'static Scramble> {
        self.active
            .as_ref()
            .map(|playback| &self.catalog[playback.index])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|playback| playback.index)
    }

    pub fn solution(&self) -> Option<&[Move]> {
        self.active
            .as_ref()
            .map(|playback| playback.solution.as_slice())
    }

    pub fn trace(&self) -> Option<&[CubeState]> {
        self.active.as_ref().map(|playback| playback.trace.as_slice())
    }

    pub fn position(&self) -> Option<usize> {
        self.active.as_ref().map(|playback| playback.position)
    }

    pub fn can_step_back(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|playback| playback.position > 0)
    }

    pub fn can_step_forward(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|playback| playback.position < playback.last_position())
    }

    /// Describes the current position: last and next move plus progress.
    pub fn progress(&self) -> Option<ProgressInfo> {
        let playback = self.active.as_ref()?;
        let position = playback.position;
        let total = playback.solution.len();

        let last_move = match position {
            0 => LastMove::Start,
            _ => LastMove::Move(playback.solution[position - 1]),
        };
        let next_move = playback
            .solution
            .get(position)
            .map_or(NextMove::Complete, |&mv| NextMove::Move(mv));
        let ratio = if total == 0 {
            1.0
        } else {
            position as f64 / total as f64
        };

        Some(ProgressInfo {
            scramble: self.catalog[playback.index],
            position,
            total,
            last_move,
            next_move,
            ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_times(session: &mut Session, direction: Direction, times: usize) {
        for _ in 0..times {
            session.step(direction);
        }
    }

    #[test]
    fn test_catalog_contents() {
        let names: Vec<_> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Easy", "Medium", "Hard"]);
        let lengths: Vec<_> = CATALOG.iter().map(|s| s.moves.len()).collect();
        assert_eq!(lengths, [4, 7, 18]);
    }

    #[test]
    fn test_easy_solution() {
        assert_eq!(
            CATALOG[0].solution(),
            vec![Move::U, Move::R, Move::U_PRIME, Move::R_PRIME]
        );
    }

    #[test]
    fn test_new_session_is_unselected() {
        let mut session = Session::new();
        assert!(!session.is_active());
        assert_eq!(session.progress(), None);
        assert_eq!(session.position(), None);
        assert!(!session.can_step_back());
        assert!(!session.can_step_forward());

        session.step(Direction::Forward);
        assert!(!session.is_active());
        assert!(session.cube().state().is_solved());
    }

    #[test]
    fn test_trace_length_for_every_scramble() {
        let mut session = Session::new();
        for (index, scramble) in CATALOG.iter().enumerate() {
            session.select_scramble(index).unwrap();
            let trace = session.trace().unwrap();
            assert_eq!(trace.len(), scramble.solution().len() + 1);
            assert_eq!(session.position(), Some(0));
        }
    }

    #[test]
    fn test_every_scramble_solves() {
        let mut session = Session::new();
        for (index, scramble) in CATALOG.iter().enumerate() {
            session.select_scramble(index).unwrap();
            assert!(
                !session.cube().state().is_solved(),
                "{} left the cube solved",
                scramble.name
            );

            step_times(&mut session, Direction::Forward, scramble.moves.len());
            assert!(
                session.cube().state().is_solved(),
                "{} did not return to solved",
                scramble.name
            );
            assert!(session.trace().unwrap().last().unwrap().is_solved());
        }
    }

    #[test]
    fn test_trace_starts_at_scrambled_state() {
        let mut session = Session::new();
        session.select_scramble(1).unwrap();

        let mut cube = Cube::new();
        cube.apply_all(CATALOG[1].moves);
        assert_eq!(session.trace().unwrap()[0], *cube.state());
        assert_eq!(session.cube().state(), cube.state());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut session = Session::new();
        session.select_scramble(0).unwrap();
        assert_eq!(
            session.select_scramble(3),
            Err(CubeError::ScrambleOutOfRange { index: 3, len: 3 })
        );
        // the failed selection leaves the active scramble alone
        assert_eq!(session.active_index(), Some(0));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = Session::new();
        session.select_scramble(0).unwrap();
        let last = session.trace().unwrap().len() - 1;

        step_times(&mut session, Direction::Backward, 3);
        assert_eq!(session.position(), Some(0));
        assert!(!session.can_step_back());

        step_times(&mut session, Direction::Forward, last + 5);
        assert_eq!(session.position(), Some(last));
        assert!(!session.can_step_forward());
        assert!(session.can_step_back());

        session.step(Direction::Stay);
        assert_eq!(session.position(), Some(last));

        step_times(&mut session, Direction::Backward, last + 5);
        assert_eq!(session.position(), Some(0));
        assert_eq!(session.cube().state(), &session.trace().unwrap()[0]);
    }

    #[test]
    fn test_step_restores_snapshot() {
        let mut session = Session::new();
        session.select_scramble(2).unwrap();
        step_times(&mut session, Direction::Forward, 5);
        let expected = session.trace().unwrap()[5];
        assert_eq!(*session.cube().state(), expected);
        session.step(Direction::Backward);
        session.step(Direction::Forward);
        assert_eq!(*session.cube().state(), expected);
    }

    #[test]
    fn test_progress_info() {
        let mut session = Session::new();
        session.select_scramble(0).unwrap();

        let progress = session.progress().unwrap();
        assert_eq!(progress.scramble.name, "Easy");
        assert_eq!(progress.position, 0);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.last_move, LastMove::Start);
        assert_eq!(progress.next_move, NextMove::Move(Move::U));
        assert_eq!(progress.ratio, 0.0);

        session.step(Direction::Forward);
        let progress = session.progress().unwrap();
        assert_eq!(progress.last_move, LastMove::Move(Move::U));
        assert_eq!(progress.next_move, NextMove::Move(Move::R));
        assert_eq!(progress.ratio, 0.25);

        step_times(&mut session, Direction::Forward, 3);
        let progress = session.progress().unwrap();
        assert_eq!(progress.position, 4);
        assert_eq!(progress.last_move, LastMove::Move(Move::R_PRIME));
        assert_eq!(progress.next_move, NextMove::Complete);
        assert_eq!(progress.ratio, 1.0);
        assert_eq!(progress.last_move.to_string(), "R'");
        assert_eq!(progress.next_move.to_string(), "Complete");
    }

    #[test]
    fn test_reset_returns_to_unselected() {
        let mut session = Session::new();
        session.select_scramble(2).unwrap();
        session.step(Direction::Forward);
        session.reset();
        assert!(!session.is_active());
        assert_eq!(session.trace(), None);
        assert!(session.cube().state().is_solved());
    }

    #[test]
    fn test_reselect_replaces_trace() {
        let mut session = Session::new();
        session.select_scramble(2).unwrap();
        step_times(&mut session, Direction::Forward, 7);
        session.select_scramble(0).unwrap();
        assert_eq!(session.position(), Some(0));
        assert_eq!(session.trace().unwrap().len(), 5);
        assert_eq!(session.active_scramble().unwrap().name, "Easy");
    }

    #[test]
    fn test_find_scramble() {
        let session = Session::new();
        assert_eq!(session.find_scramble("hard"), Ok(2));
        assert_eq!(session.find_scramble("Medium"), Ok(1));
        assert_eq!(session.find_scramble("0"), Ok(0));
        assert_eq!(
            session.find_scramble("9"),
            Err(CubeError::ScrambleOutOfRange { index: 9, len: 3 })
        );
        assert_eq!(
            session.find_scramble("expert"),
            Err(CubeError::UnknownScramble("expert".to_string()))
        );
    }

    #[test]
    fn test_empty_scramble_catalog_entry() {
        static TRIVIAL: &[Scramble] = &[Scramble {
            name: "Solved",
            moves: &[],
        }];
        let mut session = Session::with_catalog(TRIVIAL);
        session.select_scramble(0).unwrap();
        assert_eq!(session.trace().unwrap().len(), 1);
        let progress = session.progress().unwrap();
        assert_eq!(progress.next_move, NextMove::Complete);
        assert_eq!(progress.ratio, 1.0);
        assert!(!session.can_step_forward());
    }
}
