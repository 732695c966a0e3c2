use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

/// Direction keys, in the order they are evaluated each step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

const EVALUATION_ORDER: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

impl Key {
    pub fn from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Left | KeyCode::Char('a') => Some(Key::Left),
            KeyCode::Right | KeyCode::Char('d') => Some(Key::Right),
            KeyCode::Up | KeyCode::Char('w') => Some(Key::Up),
            KeyCode::Down | KeyCode::Char('s') => Some(Key::Down),
            _ => None,
        }
    }

    fn direction(self) -> Direction {
        match self {
            Key::Left => Left,
            Key::Right => Right,
            Key::Up => Up,
            Key::Down => Down,
        }
    }
}

/// Keys held since the last movement step.
#[derive(Default, Debug)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        KeyState::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Resolves the held keys against `current`, in evaluation order.
    /// Each accepted key becomes the direction the next one is checked
    /// against. A key is rejected when it reverses that running direction
    /// or the direction the step started with.
    pub fn steer(&self, current: Direction) -> Direction {
        EVALUATION_ORDER.iter()
            .filter(|key| self.is_held(**key))
            .map(|key| key.direction())
            .fold(current, |dir, wanted| {
                if wanted == dir.opposite() || wanted == current.opposite() {
                    dir
                } else {
                    wanted
                }
            })
    }
}

pub fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
        || matches!(ev.code, KeyCode::Char('q'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> KeyState {
        let mut state = KeyState::new();
        for key in keys {
            state.press(*key);
        }
        state
    }

    #[test]
    fn no_keys_keeps_direction() {
        assert_eq!(KeyState::new().steer(Up), Up);
        assert_eq!(KeyState::new().steer(Left), Left);
    }

    #[test]
    fn reverse_is_ignored() {
        assert_eq!(held(&[Key::Left]).steer(Right), Right);
        assert_eq!(held(&[Key::Right]).steer(Left), Left);
        assert_eq!(held(&[Key::Down]).steer(Up), Up);
        assert_eq!(held(&[Key::Up]).steer(Down), Down);
    }

    #[test]
    fn perpendicular_turn_is_taken() {
        assert_eq!(held(&[Key::Up]).steer(Right), Up);
        assert_eq!(held(&[Key::Left]).steer(Down), Left);
    }

    #[test]
    fn accepted_keys_steer_the_ones_after_them() {
        assert_eq!(held(&[Key::Left, Key::Up]).steer(Right), Up);
        // up is taken, then down reverses it
        assert_eq!(held(&[Key::Up, Key::Down]).steer(Left), Up);
        // left is taken, then right reverses it
        assert_eq!(held(&[Key::Left, Key::Right]).steer(Up), Left);
        assert_eq!(held(&[Key::Left, Key::Right, Key::Down]).steer(Up), Left);
    }

    #[test]
    fn two_turns_never_reverse_within_a_step() {
        // left is taken, up would undo the step's downward direction
        assert_eq!(held(&[Key::Left, Key::Up]).steer(Down), Left);
        assert_eq!(held(&[Key::Right, Key::Up]).steer(Down), Right);
        assert_eq!(held(&[Key::Up, Key::Left]).steer(Right), Up);
        for key in EVALUATION_ORDER.iter() {
            for current in [Up, Down, Left, Right].iter() {
                let all = held(&[*key, Key::Left, Key::Right, Key::Up, Key::Down]);
                assert_ne!(all.steer(*current), current.opposite());
            }
        }
    }

    #[test]
    fn clear_forgets_held_keys() {
        let mut state = held(&[Key::Up, Key::Left]);
        assert!(state.is_held(Key::Up));
        state.clear();
        assert!(!state.is_held(Key::Left));
        assert_eq!(state.steer(Right), Right);
    }

    #[test]
    fn arrow_keys_and_wasd() {
        assert_eq!(Key::from_code(KeyCode::Up), Some(Key::Up));
        assert_eq!(Key::from_code(KeyCode::Char('a')), Some(Key::Left));
        assert_eq!(Key::from_code(KeyCode::Char('s')), Some(Key::Down));
        assert_eq!(Key::from_code(KeyCode::Right), Some(Key::Right));
        assert_eq!(Key::from_code(KeyCode::Enter), None);
    }

    #[test]
    fn quit_keys() {
        let key = |code, modifiers| KeyEvent { code, modifiers };
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
