use std::cell::Cell;
use std::rc::Rc;

pub const SPEED_STEP: f64 = 0.5;
pub const MAX_SPEED: f64 = 32.5;

/// Shared angular-velocity scalar. Clones observe the same value, so the
/// pointer listener and the frame loop can both hold one. `Rc` keeps it on a
/// single thread.
#[derive(Debug, Clone, Default)]
pub struct Speed(Rc<Cell<f64>>);

impl Speed {
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// Pointer movement: one step faster, up to `MAX_SPEED`.
    pub fn boost(&self) {
        self.0.set((self.get() + SPEED_STEP).min(MAX_SPEED));
    }

    /// Frame decay: one step slower, never below zero.
    pub fn decay(&self) {
        if self.get() > 0.0 {
            self.0.set((self.get() - SPEED_STEP).max(0.0));
        }
    }

    /// Clamped into `[0, MAX_SPEED]`.
    pub fn set(&self, value: f64) {
        self.0.set(value.clamp(0.0, MAX_SPEED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_clamps() {
        for moves in [0, 1, 3, 64, 65, 66, 200] {
            let speed = Speed::default();
            for _ in 0..moves {
                speed.boost();
            }
            assert_eq!(speed.get(), (0.5 * moves as f64).min(MAX_SPEED), "{moves} moves");
        }
    }

    #[test]
    fn test_decay_never_negative() {
        let speed = Speed::default();
        speed.set(0.3);
        speed.decay();
        assert_eq!(speed.get(), 0.0);

        speed.decay();
        assert_eq!(speed.get(), 0.0);
    }

    #[test]
    fn test_clones_share_state() {
        let speed = Speed::default();
        let listener = speed.clone();
        listener.boost();
        listener.boost();
        speed.decay();
        assert_eq!(listener.get(), 0.5);
    }
}
