//! Paddle input state
//!
//! Each paddle has one direction scalar. Key presses set it, any release
//! on that paddle's keys zeroes it; the latest event wins.

/// A key bound to paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// Press or release edge. Auto-repeat counts as a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
}

/// Direction per paddle: -1 (down), 0 (idle) or +1 (up)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub left_dir: f32,
    pub right_dir: f32,
}

impl InputState {
    pub fn apply(&mut self, key: PaddleKey, action: KeyAction) {
        let (slot, dir) = match key {
            PaddleKey::LeftUp => (&mut self.left_dir, 1.0),
            PaddleKey::LeftDown => (&mut self.left_dir, -1.0),
            PaddleKey::RightUp => (&mut self.right_dir, 1.0),
            PaddleKey::RightDown => (&mut self.right_dir, -1.0),
        };
        *slot = match action {
            KeyAction::Press => dir,
            KeyAction::Release => 0.0,
        };
    }
}
