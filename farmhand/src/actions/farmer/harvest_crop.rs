use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn harvest_crop(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        let (kind, harvest_crop) = self.planting.harvest_crop(place)?;
        Ok(occur![
            harvest_crop(),
            self.economy.credit(kind.harvest_value),
        ])
    }
}
