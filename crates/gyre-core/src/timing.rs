/// Fixed-interval gate for a refresh-driven loop. Frames arriving sooner than
/// the interval are skipped; committed frames re-base on the interval grid so
/// timing error does not accumulate.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGate {
    interval_ms: f64,
    last_frame: f64,
}

impl FrameGate {
    pub fn new(fps: u32, now: f64) -> Self {
        Self {
            interval_ms: 1000.0 / fps as f64,
            last_frame: now,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_frame(&self) -> f64 {
        self.last_frame
    }

    /// Returns whether a frame is due at `now`, committing it if so.
    pub fn try_advance(&mut self, now: f64) -> bool {
        let delta = now - self.last_frame;
        if delta > self.interval_ms {
            self.last_frame = now - (delta % self.interval_ms);
            true
        } else {
            false
        }
    }
}
