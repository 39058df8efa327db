use crate::collections::Shared;
use crate::math::Tile;
use crate::planting::{CropKind, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn harvest_crop(
        &mut self,
        place: Tile,
    ) -> Result<(Shared<CropKind>, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let crop = self.get_crop(place)?;
        if !crop.is_harvestable() {
            return Err(PlantingError::NotReadyToHarvest {
                place,
                stage: crop.stage,
            });
        }
        let kind = crop.kind.clone();
        let key = kind.id;
        let command = move || {
            self.crops.remove(&place);
            let mut events = vec![Planting::CropHarvested { place, crop: key }];
            events.extend(self.exhaust_soil(place));
            events
        };
        Ok((kind, command))
    }
}
