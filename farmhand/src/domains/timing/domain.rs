use serde::{Deserialize, Serialize};

pub struct TimingDomain {
    /// Simulation seconds since the farm was founded.
    pub now: f64,
    pub speed: f32,
}

impl Default for TimingDomain {
    fn default() -> Self {
        Self {
            now: 0.0,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Timing {
    TimeUpdated { now: f64, speed: f32 },
}

impl TimingDomain {
    pub fn load(&mut self, now: f64) {
        self.now = now.max(0.0);
    }
}
