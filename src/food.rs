use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use crate::grid::{Grid, Tile};
use crate::Coords;

/// Turns a uniformly chosen empty cell into fruit. Returns `None` and
/// leaves the grid untouched when the board is full.
pub fn place_food<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Coords> {
    let choices: Vec<Coords> = grid.tiles()
        .filter(|(_, tile)| *tile == Tile::Empty)
        .map(|(pos, _)| pos)
        .collect();

    match choices.choose(rng).copied() {
        Some((x, y)) => {
            grid.set(Tile::Fruit, x, y);
            debug!("fruit placed at ({}, {}), {} free cells", x, y, choices.len() - 1);
            Some((x, y))
        },
        None => {
            warn!("no empty cell left for fruit");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn places_exactly_one_fruit_on_an_empty_cell() {
        let mut grid = Grid::new(Tile::Empty, 6, 4);
        grid.set(Tile::Snake, 2, 2);
        let mut rng = StdRng::seed_from_u64(7);

        let (x, y) = place_food(&mut grid, &mut rng).unwrap();
        assert_eq!(grid.get(x, y), Tile::Fruit);
        assert_ne!((x, y), (2, 2));
        assert_eq!(grid.count(Tile::Fruit), 1);
        assert_eq!(grid.count(Tile::Snake), 1);
    }

    #[test]
    fn only_remaining_cell_is_chosen() {
        let mut grid = Grid::new(Tile::Snake, 3, 3);
        grid.set(Tile::Empty, 1, 2);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_food(&mut grid, &mut rng), Some((1, 2)));
        assert_eq!(grid.get(1, 2), Tile::Fruit);
    }

    #[test]
    fn full_board_places_nothing() {
        let mut grid = Grid::new(Tile::Snake, 2, 2);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place_food(&mut grid, &mut rng), None);
        assert_eq!(grid.count(Tile::Snake), 4);
    }

    #[test]
    fn every_empty_cell_can_be_chosen() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..400 {
            let mut grid = Grid::new(Tile::Empty, 3, 3);
            grid.set(Tile::Snake, 1, 1);
            seen.insert(place_food(&mut grid, &mut rng).unwrap());
        }

        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&(1, 1)));
    }
}
