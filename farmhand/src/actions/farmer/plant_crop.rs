use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::planting::CropKey;
use crate::{occur, Game};

impl Game {
    pub fn plant_crop(&mut self, place: Tile, crop: CropKey) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.crops.get(crop)?;
        self.ensure_open_ground(place)?;
        let plant_crop =
            self.planting
                .plant_crop(place, &kind, self.timing.now, &mut self.random)?;
        let consume_seed = self.economy.consume_seed(crop)?;
        Ok(occur![plant_crop(), consume_seed(),])
    }
}
