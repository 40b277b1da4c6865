use std::collections::HashMap;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum KeyState {
    Up, Down,
}

impl Default for KeyState {
    fn default() -> Self {
        KeyState::Up
    }
}

impl ::std::ops::Not for KeyState {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            KeyState::Down => KeyState::Up,
            KeyState::Up => KeyState::Down,
        }
    }
}

impl KeyState {
    pub fn is_down(&self) -> bool {
        match *self {
            KeyState::Down => true,
            KeyState::Up => false,
        }
    }
    pub fn is_up(&self) -> bool {
        !self.is_down()
    }
}

/// Keyboard state table. Written only while events are pumped, read only by
/// the per-frame update; the window-close request is a separate signal, not
/// an entry in the table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Input {
    pub wants_to_quit: bool,
    keys: HashMap<Keycode, KeyState>,
}

impl Input {
    pub fn key(&self, keycode: Keycode) -> KeyState {
        *self.keys.get(&keycode).unwrap_or(&KeyState::Up)
    }
    pub fn handle_sdl2_event_before_new_tick(&mut self, event: &Event) {
        match *event {
            Event::Quit {..} => {
                self.wants_to_quit = true;
            },
            Event::KeyDown { keycode, repeat, .. } => {
                if !repeat {
                    if let Some(keycode) = keycode {
                        self.keys.insert(keycode, KeyState::Down);
                    } else {
                        warn!("Some key was pressed, but keycode is None");
                    }
                }
            },
            Event::KeyUp { keycode, .. } => {
                if let Some(keycode) = keycode {
                    self.keys.insert(keycode, KeyState::Up);
                } else {
                    warn!("Some key was released, but keycode is None");
                }
            },
            _ => (),
        };
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use sdl2::keyboard::{Mod, Scancode};

    pub fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0, window_id: 0,
            keycode: Some(keycode), scancode: None::<Scancode>,
            keymod: Mod::empty(), repeat: false,
        }
    }
    pub fn key_up(keycode: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0, window_id: 0,
            keycode: Some(keycode), scancode: None::<Scancode>,
            keymod: Mod::empty(), repeat: false,
        }
    }
    pub fn key_repeat(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0, window_id: 0,
            keycode: Some(keycode), scancode: None::<Scancode>,
            keymod: Mod::empty(), repeat: true,
        }
    }

    #[test]
    fn unknown_keys_read_up() {
        let input = Input::default();
        assert_eq!(input.key(Keycode::Left), KeyState::Up);
        assert!(input.key(Keycode::Space).is_up());
    }

    #[test]
    fn press_and_release_flip_state() {
        let mut input = Input::default();
        input.handle_sdl2_event_before_new_tick(&key_down(Keycode::Left));
        assert!(input.key(Keycode::Left).is_down());
        input.handle_sdl2_event_before_new_tick(&key_up(Keycode::Left));
        assert!(input.key(Keycode::Left).is_up());
    }

    #[test]
    fn key_repeats_do_not_change_state() {
        let mut input = Input::default();
        input.handle_sdl2_event_before_new_tick(&key_repeat(Keycode::Right));
        assert!(input.key(Keycode::Right).is_up());
    }

    #[test]
    fn quit_signal_is_terminal() {
        let mut input = Input::default();
        assert!(!input.wants_to_quit);
        input.handle_sdl2_event_before_new_tick(&Event::Quit { timestamp: 0 });
        assert!(input.wants_to_quit);
        input.handle_sdl2_event_before_new_tick(&Event::Quit { timestamp: 1 });
        input.handle_sdl2_event_before_new_tick(&key_down(Keycode::Down));
        assert!(input.wants_to_quit);
    }

    #[test]
    fn quit_signal_is_distinct_from_key_table() {
        let mut input = Input::default();
        input.handle_sdl2_event_before_new_tick(&key_down(Keycode::Up));
        assert!(!input.wants_to_quit);
    }
}
