use crate::api::Event;
use crate::math::Position;
use crate::{occur, Game};

impl Game {
    pub fn move_farmer(&mut self, destination: Position) -> Vec<Event> {
        occur![self.farmer.relocate(destination),]
    }
}
