use crate::api::{ActionError, Event};
use crate::landscaping::WELL_FOOTPRINT;
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn build_well(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        for x in 0..WELL_FOOTPRINT {
            for y in 0..WELL_FOOTPRINT {
                let block = [place[0] + x, place[1] + y];
                self.planting.ensure_no_crop(block)?;
                self.planting.ensure_not_fertilized(block)?;
            }
        }
        let build_well = self.landscaping.build_well(place)?;
        Ok(occur![build_well(),])
    }
}
