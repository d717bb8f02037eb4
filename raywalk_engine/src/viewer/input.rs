/// Input mapping from winit key codes and scroll deltas to viewer actions.
///
/// Movement holds one signed magnitude per axis. A key press sets its
/// axis to `±step`. A key release only clears the axis if it still holds
/// the sign of the released key, so pressing S while W is held and then
/// releasing W keeps moving backwards.

use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Camera axis driven by a key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAxis {
    Forward,
    Left,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Move along `axis`; `positive` is the sign of the step.
    Move { axis: MoveAxis, positive: bool },
    /// Advance the stepwise traversal by one level.
    TraverseStep,
}

impl ViewerAction {
    /// Key binding: W/S forward, A/D left, Space/ShiftLeft up, ArrowUp step.
    pub fn from_key_code(key: KeyCode) -> Option<Self> {
        let action = match key {
            KeyCode::KeyW => Self::Move { axis: MoveAxis::Forward, positive: true },
            KeyCode::KeyS => Self::Move { axis: MoveAxis::Forward, positive: false },
            KeyCode::KeyA => Self::Move { axis: MoveAxis::Left, positive: true },
            KeyCode::KeyD => Self::Move { axis: MoveAxis::Left, positive: false },
            KeyCode::Space => Self::Move { axis: MoveAxis::Up, positive: true },
            KeyCode::ShiftLeft => Self::Move { axis: MoveAxis::Up, positive: false },
            KeyCode::ArrowUp => Self::TraverseStep,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Direction of a wheel event; `None` for a zero vertical delta.
    pub fn from_delta(delta: MouseScrollDelta) -> Option<Self> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(pos) => pos.y,
        };
        if y > 0.0 {
            Some(Self::Up)
        } else if y < 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// Held movement, one signed step per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Movement {
    pub forward: f32,
    pub left: f32,
    pub up: f32,
}

impl Movement {
    pub fn press(&mut self, axis: MoveAxis, positive: bool, step: f32) {
        *self.axis_mut(axis) = if positive { step } else { -step };
    }

    pub fn release(&mut self, axis: MoveAxis, positive: bool) {
        let value = self.axis_mut(axis);
        if (positive && *value > 0.0) || (!positive && *value < 0.0) {
            *value = 0.0;
        }
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.left == 0.0 && self.up == 0.0
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    fn axis_mut(&mut self, axis: MoveAxis) -> &mut f32 {
        match axis {
            MoveAxis::Forward => &mut self.forward,
            MoveAxis::Left => &mut self.left,
            MoveAxis::Up => &mut self.up,
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
