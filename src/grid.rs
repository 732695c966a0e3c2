use crate::{Coords, GridInt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Snake,
    Fruit,
}

/// Column-major board of tiles. Accessors assume the caller already
/// checked the coordinates; out of range indices panic.
pub struct Grid {
    width: GridInt,
    height: GridInt,
    cells: Vec<Tile>,
}

impl Grid {
    pub fn new(fill: Tile, width: GridInt, height: GridInt) -> Self {
        let mut grid = Grid { width: 0, height: 0, cells: vec![] };
        grid.init(fill, width, height);
        grid
    }

    pub fn init(&mut self, fill: Tile, width: GridInt, height: GridInt) {
        self.width = width;
        self.height = height;
        self.cells = vec![fill; width as usize * height as usize];
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn get(&self, x: GridInt, y: GridInt) -> Tile {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, tile: Tile, x: GridInt, y: GridInt) {
        let idx = self.index(x, y);
        self.cells[idx] = tile;
    }

    /// Converts a possibly out of range position into grid coordinates.
    pub fn contains(&self, x: i32, y: i32) -> Option<Coords> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some((x as GridInt, y as GridInt))
        }
    }

    #[cfg(test)]
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|t| **t == tile).count()
    }

    /// All cells, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = (Coords, Tile)> + '_ {
        let height = self.height as usize;
        self.cells.iter().enumerate().map(move |(i, tile)| {
            (((i / height) as GridInt, (i % height) as GridInt), *tile)
        })
    }

    fn index(&self, x: GridInt, y: GridInt) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) outside the grid", x, y);
        x as usize * self.height as usize + y as usize
    }
}
