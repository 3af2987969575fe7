// Keyboard flags shared between the window listeners and the game tick.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Returns true when the key maps to a game control (the caller then
    /// suppresses the browser default, e.g. page scroll on Space).
    pub fn press(&mut self, key: &str) -> bool {
        self.apply(key, true)
    }

    pub fn release(&mut self, key: &str) -> bool {
        self.apply(key, false)
    }

    fn apply(&mut self, key: &str, down: bool) -> bool {
        match key {
            "ArrowLeft" | "a" | "A" => {
                self.left = down;
                true
            }
            "ArrowRight" | "d" | "D" => {
                self.right = down;
                true
            }
            "ArrowUp" | "w" | "W" | " " => {
                self.jump = down;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_the_same_controls() {
        let mut a = InputState::default();
        let mut b = InputState::default();
        assert!(a.press("ArrowLeft"));
        assert!(b.press("a"));
        assert_eq!(a, b);
        assert!(a.release("ArrowLeft"));
        assert!(!a.left);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.press("Escape"));
        assert_eq!(input, InputState::default());
    }
}
