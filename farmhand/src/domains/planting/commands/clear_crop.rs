use crate::math::Tile;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn clear_crop(
        &mut self,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let crop = self.get_crop(place)?;
        if !crop.is_spoiled() {
            return Err(PlantingError::CropNotSpoiled { place });
        }
        let command = move || {
            self.crops.remove(&place);
            let mut events = vec![Planting::CropRemoved { place }];
            events.extend(self.exhaust_soil(place));
            events
        };
        Ok(command)
    }
}
