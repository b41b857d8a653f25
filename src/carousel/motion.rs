/// Continuous rotation of the whole ring. Purely a presentation concern:
/// pausing freezes the phase and never touches card placements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    phase: f32, // fraction of a full turn, in [0, 1)
}

impl Spin {
    /// Advances by `dt` seconds for a revolution lasting `duration` seconds.
    pub fn advance(&mut self, dt: f32, duration: f32, paused: bool) {
        if paused || duration <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.phase = (self.phase + dt / duration).rem_euclid(1.0);
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Current ring rotation in degrees.
    pub fn degrees(&self) -> f32 {
        self.phase * 360.0
    }
}
