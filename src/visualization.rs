//! Interactive viewer that paints the flat cross net using kiss3d.

use kiss3d::prelude::*;
use tracing::warn;

use stepcube::layout::{net_cells, status_line};
use stepcube::{Direction, Face, Presenter, Session};

const CONTROLS: &str = "[Up/Down] scramble, [Left/Right] step, [R] reset";

/// One facelet tile in the scene.
struct Tile {
    node: SceneNode3d,
    face: Face,
    cell: usize,
}

/// Paints session state onto 54 flat tiles laid out as the cross net.
struct NetViewer {
    tiles: Vec<Tile>,
    title: String,
}

impl NetViewer {
    /// Builds the tiles once; later renders only recolor them.
    ///
    /// Coordinate conventions:
    /// - Net cells are 12 columns by 9 rows, row 0 at the top.
    /// - Tiles lie in the z = 0 plane, centered on the origin.
    fn new(scene: &mut SceneNode3d) -> Self {
        /// Edge length of a tile (slightly smaller than the spacing for visible gaps).
        const TILE_SIZE: f32 = 0.9;
        /// Tiles are thin slabs rather than cubes.
        const TILE_DEPTH: f32 = 0.1;
        const CELL_SPACING: f32 = 1.0;

        let tiles = net_cells()
            .map(|net_cell| {
                let position = Vec3::new(
                    (net_cell.col as f32 - 5.5) * CELL_SPACING,
                    (4.0 - net_cell.row as f32) * CELL_SPACING,
                    0.0,
                );
                let node = scene
                    .add_cube(TILE_SIZE, TILE_SIZE, TILE_DEPTH)
                    .set_position(position);
                Tile {
                    node,
                    face: net_cell.face,
                    cell: net_cell.cell,
                }
            })
            .collect();

        Self {
            tiles,
            title: String::new(),
        }
    }
}

impl Presenter for NetViewer {
    fn render(&mut self, session: &Session) {
        let state = session.cube().state();
        for tile in &mut self.tiles {
            let (r, g, b) = state.facelet(tile.face, tile.cell).rgb();
            tile.node.set_color(Color::new(r, g, b, 1.0));
        }
        self.title = format!("{} - {}", status_line(session), CONTROLS);
    }
}

/// Opens the viewer over `session` and runs until the window closes.
pub fn display(session: Session) {
    pollster::block_on(display_async(session));
}

async fn display_async(mut session: Session) {
    let catalog_len = session.catalog().len();

    let mut window = Window::new(&format!("stepcube - {}", CONTROLS)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(16.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(0.0, 0.0, 10.0));

    let mut viewer = NetViewer::new(&mut scene);
    viewer.render(&session);
    window.set_title(&viewer.title);

    loop {
        // whether the tiles need repainting after this frame's input
        let mut needs_render = false;

        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press && catalog_len > 0 {
                    let selection = match key {
                        Key::Up => Some(
                            session
                                .active_index()
                                .map_or(0, |index| (index + 1) % catalog_len),
                        ),
                        Key::Down => Some(
                            session
                                .active_index()
                                .and_then(|index| index.checked_sub(1))
                                .unwrap_or(catalog_len - 1),
                        ),
                        Key::Left => {
                            session.step(Direction::Backward);
                            None
                        }
                        Key::Right => {
                            session.step(Direction::Forward);
                            None
                        }
                        Key::R => {
                            session.reset();
                            None
                        }
                        _ => continue,
                    };
                    if let Some(index) = selection {
                        if let Err(e) = session.select_scramble(index) {
                            warn!("failed to select scramble: {e}");
                        }
                    }
                    needs_render = true;
                }
            }
        }

        if needs_render {
            viewer.render(&session);
            window.set_title(&viewer.title);
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
