use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn dig_hole(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        self.planting.ensure_no_crop(place)?;
        let dig_hole = self.landscaping.dig_hole(place)?;
        Ok(occur![dig_hole(), self.planting.exhaust_soil(place),])
    }
}
