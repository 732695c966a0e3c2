use std::collections::VecDeque;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body cells, head at the front. Movement legality is checked by the
/// caller, the snake only records what it is told.
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(direction: Direction, x: GridInt, y: GridInt) -> Self {
        let mut snake = Snake { body: VecDeque::new(), direction };
        snake.init(direction, x, y);
        snake
    }

    pub fn init(&mut self, direction: Direction, x: GridInt, y: GridInt) {
        self.body.clear();
        self.direction = direction;
        self.insert(x, y);
    }

    pub fn insert(&mut self, x: GridInt, y: GridInt) {
        self.body.push_front((x, y));
    }

    pub fn remove(&mut self) -> Option<Coords> {
        self.body.pop_back()
    }

    /// The most recently inserted cell.
    pub fn head(&self) -> Coords {
        // init() always leaves one cell, and remove() is only ever
        // followed by insert() within the same step
        self.body[0]
    }

    #[cfg(test)]
    pub fn body(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Where the head would land after one step in the current direction.
    pub fn next_head(&self) -> (i32, i32) {
        let (x, y) = self.head();
        let (dx, dy) = self.direction.offset();
        (x as i32 + dx, y as i32 + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites() {
        for dir in [Up, Down, Left, Right].iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn init_leaves_a_single_cell() {
        let mut snake = Snake::new(Up, 15, 34);
        snake.insert(15, 33);
        snake.insert(15, 32);
        snake.init(Left, 3, 4);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (3, 4));
        assert_eq!(snake.direction(), Left);
    }

    #[test]
    fn insert_moves_head_and_remove_pops_tail() {
        let mut snake = Snake::new(Up, 5, 5);
        snake.insert(5, 4);
        snake.insert(6, 4);

        assert_eq!(snake.head(), (6, 4));
        assert_eq!(snake.body().copied().collect::<Vec<_>>(), vec![(6, 4), (5, 4), (5, 5)]);
        assert_eq!(snake.remove(), Some((5, 5)));
        assert_eq!(snake.remove(), Some((5, 4)));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (6, 4));
    }

    #[test]
    fn next_head_follows_direction() {
        let mut snake = Snake::new(Up, 0, 0);
        assert_eq!(snake.next_head(), (0, -1));
        snake.set_direction(Right);
        assert_eq!(snake.next_head(), (1, 0));
        snake.set_direction(Down);
        assert_eq!(snake.next_head(), (0, 1));
    }

    #[test]
    fn set_direction_does_not_validate() {
        let mut snake = Snake::new(Up, 3, 3);
        snake.set_direction(Down);
        assert_eq!(snake.direction(), Down);
    }
}
