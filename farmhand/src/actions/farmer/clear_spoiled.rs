use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn clear_spoiled(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        let clear_crop = self.planting.clear_crop(place)?;
        Ok(occur![clear_crop(),])
    }
}
