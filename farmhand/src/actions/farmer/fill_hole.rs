use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn fill_hole(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        self.planting.ensure_no_crop(place)?;
        let fill_hole = self.landscaping.fill_hole(place)?;
        let empty_bucket = self.farmer.empty_bucket()?;
        let pay = self.economy.spend(self.known.rules.water_cost)?;
        Ok(occur![fill_hole(), empty_bucket(), pay(),])
    }
}
