use crate::math::Tile;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn fertilize(
        &mut self,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        self.ensure_no_crop(place)?;
        if self.fertilized.contains(&place) {
            return Err(PlantingError::AlreadyFertilized { place });
        }
        let command = move || {
            self.fertilized.insert(place);
            vec![Planting::SoilFertilized { place }]
        };
        Ok(command)
    }

    pub fn exhaust_soil(&mut self, place: Tile) -> Vec<Planting> {
        if self.fertilized.remove(&place) {
            vec![Planting::SoilExhausted { place }]
        } else {
            vec![]
        }
    }
}
