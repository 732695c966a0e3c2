use crate::grid::Tile;
use crate::state::GameState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const EMPTY_COLOR: Rgb = Rgb(0xf4, 0xf4, 0xf4);
pub const SNAKE_COLOR: Rgb = Rgb(0x5c, 0x77, 0x62);
pub const FRUIT_COLOR: Rgb = Rgb(0xc6, 0x4c, 0x41);
pub const TEXT_COLOR: Rgb = Rgb(0, 0, 0);

const TEXT_MARGIN: u16 = 1;

/// Something the board can be painted on. Units are whatever the
/// surface uses (terminal cells, pixels); the renderer scales tiles to
/// fit `size()`.
pub trait Surface {
    type Error;

    fn size(&self) -> (u16, u16);

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb);

    /// Writes `text` starting at `(x, y)` over whatever is already there.
    fn fill_text(&mut self, text: &str, x: u16, y: u16, color: Rgb);

    fn present(&mut self) -> Result<(), Self::Error>;
}

pub fn tile_color(tile: Tile) -> Rgb {
    match tile {
        Tile::Empty => EMPTY_COLOR,
        Tile::Snake => SNAKE_COLOR,
        Tile::Fruit => FRUIT_COLOR,
    }
}

pub fn draw<S: Surface>(state: &GameState, surface: &mut S) -> Result<(), S::Error> {
    let grid = state.grid();
    let (width, height) = surface.size();
    let tile_width = width / grid.width();
    let tile_height = height / grid.height();

    for ((x, y), tile) in grid.tiles() {
        surface.fill_rect(x * tile_width, y * tile_height, tile_width, tile_height, tile_color(tile));
    }

    let text = format!("SCORE: {}", state.score());
    surface.fill_text(&text, TEXT_MARGIN, height.saturating_sub(TEXT_MARGIN), TEXT_COLOR);

    surface.present()
}
