use crate::api::Event;
use crate::Game;

impl Game {
    /// Advances the simulation by `real_seconds` of wall time.
    pub fn update(&mut self, real_seconds: f32) -> Vec<Event> {
        let mut events: Vec<Event> = vec![];
        events.push(self.timing.update(real_seconds).into());
        events.push(self.landscaping.update().into());
        let now = self.timing.now;
        events.push(self.planting.update(now, &self.landscaping.irrigated).into());
        events.extend(self.update_workers());
        events.retain(|event| !event.is_empty());
        events
    }
}
