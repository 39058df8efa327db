use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn fertilize(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        self.ensure_fertile_ground(place)?;
        let fertilize = self.planting.fertilize(place)?;
        Ok(occur![fertilize(),])
    }
}
