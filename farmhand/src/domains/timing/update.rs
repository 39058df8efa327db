use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn update(&mut self, real_seconds: f32) -> Vec<Timing> {
        self.now += (real_seconds * self.speed) as f64;
        vec![Timing::TimeUpdated {
            now: self.now,
            speed: self.speed,
        }]
    }

    pub fn change_speed(&mut self, speed: f32) -> Vec<Timing> {
        self.speed = speed.max(0.0);
        vec![Timing::TimeUpdated {
            now: self.now,
            speed: self.speed,
        }]
    }
}
