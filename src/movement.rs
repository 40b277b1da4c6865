use sdl2::keyboard::Keycode;
use input::Input;
use v::Vec2;

// Clip-space units per frame. Panning speed is deliberately frame-rate
// dependent, like the rest of this demo.
pub const STEP_X: f32 = 0.00105;
pub const STEP_Y: f32 = 0.00185;

/// Pan delta for one frame from the currently held arrow keys.
/// Opposite keys cancel; orthogonal keys compose into diagonal motion.
pub fn pan_delta(input: &Input) -> Vec2<f32> {
    let mut delta = Vec2::zero();
    if input.key(Keycode::Left).is_down() {
        delta.x += STEP_X;
    }
    if input.key(Keycode::Right).is_down() {
        delta.x -= STEP_X;
    }
    if input.key(Keycode::Up).is_down() {
        delta.y -= STEP_Y;
    }
    if input.key(Keycode::Down).is_down() {
        delta.y += STEP_Y;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::tests::{key_down, key_up};

    fn input_holding(keys: &[Keycode]) -> Input {
        let mut input = Input::default();
        for &k in keys {
            input.handle_sdl2_event_before_new_tick(&key_down(k));
        }
        input
    }

    #[test]
    fn no_keys_no_motion() {
        let input = Input::default();
        assert_eq!(pan_delta(&input), Vec2::zero());
    }

    #[test]
    fn single_directions() {
        assert_eq!(pan_delta(&input_holding(&[Keycode::Left])), Vec2::new(STEP_X, 0.));
        assert_eq!(pan_delta(&input_holding(&[Keycode::Right])), Vec2::new(-STEP_X, 0.));
        assert_eq!(pan_delta(&input_holding(&[Keycode::Up])), Vec2::new(0., -STEP_Y));
        assert_eq!(pan_delta(&input_holding(&[Keycode::Down])), Vec2::new(0., STEP_Y));
    }

    #[test]
    fn opposite_keys_cancel() {
        let input = input_holding(&[Keycode::Left, Keycode::Right]);
        assert_eq!(pan_delta(&input), Vec2::zero());
        let input = input_holding(&[Keycode::Up, Keycode::Down]);
        assert_eq!(pan_delta(&input), Vec2::zero());
    }

    #[test]
    fn orthogonal_keys_compose() {
        let input = input_holding(&[Keycode::Right, Keycode::Up]);
        assert_eq!(pan_delta(&input), Vec2::new(-STEP_X, -STEP_Y));
    }

    #[test]
    fn released_key_stops_contributing() {
        let mut input = input_holding(&[Keycode::Down]);
        input.handle_sdl2_event_before_new_tick(&key_up(Keycode::Down));
        assert_eq!(pan_delta(&input), Vec2::zero());
    }
}
