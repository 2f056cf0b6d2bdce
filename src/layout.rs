//! Flat cross layout of the six faces and text rendering of cube states.
//!
//! ```text
//!     top
//! left front right back
//!     bottom
//! ```
//!
//! Each face occupies a 3x3 block; the whole net is 3x4 blocks.

use crate::cube::CubeState;
use crate::moves::{format_moves, Face};
use crate::session::Session;
use crate::Presenter;

/// Face drawn in each block of the net, by block row and block column.
pub const NET: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::Top), None, None],
    [
        Some(Face::Left),
        Some(Face::Front),
        Some(Face::Right),
        Some(Face::Back),
    ],
    [None, Some(Face::Bottom), None, None],
];

/// A facelet's place in the net, in cell units from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetCell {
    pub row: usize,
    pub col: usize,
    pub face: Face,
    pub cell: usize,
}

/// All 54 facelets with their net positions, in row-major net order.
pub fn net_cells() -> impl Iterator<Item = NetCell> {
    (0..9).flat_map(|row| {
        (0..12).filter_map(move |col| {
            NET[row / 3][col / 3].map(|face| NetCell {
                row,
                col,
                face,
                cell: (row % 3) * 3 + col % 3,
            })
        })
    })
}

/// Renders a state as a cross-shaped net of color glyphs.
///
/// Blocks are separated by one space; rows carry no trailing whitespace.
pub fn format_state(state: &CubeState) -> String {
    let mut output = String::new();

    for row in 0..9 {
        let mut line = String::new();
        for (block_col, face) in NET[row / 3].iter().enumerate() {
            if block_col > 0 {
                line.push(' ');
            }
            match face {
                Some(face) => {
                    for col in 0..3 {
                        let cell = (row % 3) * 3 + col;
                        line.push(state.facelet(*face, cell).glyph());
                    }
                }
                None => line.push_str("   "),
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// One-line status, used as a window title.
pub fn status_line(session: &Session) -> String {
    match session.progress() {
        Some(progress) => format!(
            "Solving {} - {}/{} - Last: {} | Next: {}",
            progress.scramble.name,
            progress.position,
            progress.total,
            progress.last_move,
            progress.next_move
        ),
        None => "No scramble selected".to_string(),
    }
}

/// Full text frame: status, scramble, progress and the net.
pub fn format_frame(session: &Session) -> String {
    let mut output = String::new();

    match session.progress() {
        Some(progress) => {
            output.push_str(&format!("Solving {}\n", progress.scramble.name));
            output.push_str(&format!(
                "Scramble: {}\n",
                format_moves(progress.scramble.moves)
            ));
            output.push_str(&format!(
                "Progress: {} / {}\n",
                progress.position, progress.total
            ));
            output.push_str(&format!(
                "Last Move: {} | Next: {}\n",
                progress.last_move, progress.next_move
            ));
        }
        None => output.push_str("No scramble selected\n"),
    }
    output.push_str(&format_state(session.cube().state()));

    output
}

/// Collects rendered frames as text.
#[derive(Debug, Default)]
pub struct TextPresenter {
    output: String,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Presenter for TextPresenter {
    fn render(&mut self, session: &Session) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(&format_frame(session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::session::Direction;

    #[test]
    fn test_net_covers_every_facelet_once() {
        let mut seen = [[false; 9]; 6];
        let mut count = 0;
        for cell in net_cells() {
            assert!(!seen[cell.face.index()][cell.cell]);
            seen[cell.face.index()][cell.cell] = true;
            count += 1;
        }
        assert_eq!(count, 54);
    }

    #[test]
    fn test_net_cell_positions() {
        let cells: Vec<_> = net_cells().collect();
        assert_eq!(
            cells[0],
            NetCell {
                row: 0,
                col: 3,
                face: Face::Top,
                cell: 0
            }
        );
        let back_corner = cells
            .iter()
            .find(|c| c.face == Face::Back && c.cell == 8)
            .unwrap();
        assert_eq!((back_corner.row, back_corner.col), (5, 11));
    }

    #[test]
    fn test_solved_net_snapshot() {
        insta::assert_snapshot!("solved_net", format_state(&CubeState::SOLVED));
    }

    #[test]
    fn test_r_net_snapshot() {
        let mut state = CubeState::SOLVED;
        state.apply(Move::R);
        insta::assert_snapshot!("r_net", format_state(&state));
    }

    #[test]
    fn test_status_line() {
        let mut session = Session::new();
        assert_eq!(status_line(&session), "No scramble selected");

        session.select_scramble(0).unwrap();
        assert_eq!(
            status_line(&session),
            "Solving Easy - 0/4 - Last: Start | Next: U"
        );
        session.step(Direction::Forward);
        assert_eq!(
            status_line(&session),
            "Solving Easy - 1/4 - Last: U | Next: R"
        );
    }

    #[test]
    fn test_text_presenter_frames() {
        let mut session = Session::new();
        session.select_scramble(0).unwrap();
        let mut presenter = TextPresenter::new();
        for _ in 0..4 {
            session.step(Direction::Forward);
        }
        presenter.render(&session);

        let expected = format!(
            "Solving Easy\nScramble: R U R' U'\nProgress: 4 / 4\nLast Move: R' | Next: Complete\n{}",
            format_state(&CubeState::SOLVED)
        );
        assert_eq!(presenter.output(), expected);

        presenter.render(&session);
        assert_eq!(presenter.into_output(), format!("{expected}\n{expected}"));
    }
}
