//! Stateless draw pass
//!
//! `render` walks the board once per frame and emits one colored cell per
//! tile through the `DrawSurface` seam. No game logic lives here; colors are
//! a pure function of tile role.

use crate::sim::GameState;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// What occupies a tile, for color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRole {
    /// Empty board cell; `dark` alternates in a checkerboard
    Ground { dark: bool },
    Snake,
    Food,
}

/// Color for a tile role: two green shades for the ground checkerboard, red
/// snake, blue food.
pub const fn tile_color(role: TileRole) -> Rgb {
    match role {
        TileRole::Ground { dark: false } => Rgb::new(0, 153, 0),
        TileRole::Ground { dark: true } => Rgb::new(0, 128, 0),
        TileRole::Snake => Rgb::new(255, 0, 0),
        TileRole::Food => Rgb::new(0, 0, 255),
    }
}

/// Minimal drawing interface the host display implements.
pub trait DrawSurface {
    /// Paint one grid cell. Coordinates are grid cells, not pixels; y grows
    /// downward from the top-left corner.
    fn draw_cell(&mut self, x: i32, y: i32, color: Rgb);
}

/// Draw the whole board: checkerboard background, then the snake, then the
/// food. Runs every frame, independent of the tick rate.
pub fn render(state: &GameState, surface: &mut impl DrawSurface) {
    let n = state.tuning.grid_size;
    for y in 0..n {
        for x in 0..n {
            let dark = (x + y) % 2 == 1;
            surface.draw_cell(x, y, tile_color(TileRole::Ground { dark }));
        }
    }
    for cell in &state.snake {
        surface.draw_cell(cell.x, cell.y, tile_color(TileRole::Snake));
    }
    surface.draw_cell(state.food.x, state.food.y, tile_color(TileRole::Food));
}
