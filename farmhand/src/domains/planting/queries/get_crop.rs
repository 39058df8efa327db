use crate::math::Tile;
use crate::planting::{Crop, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn get_crop(&self, place: Tile) -> Result<&Crop, PlantingError> {
        self.crops
            .get(&place)
            .ok_or(PlantingError::CropNotFound { place })
    }

    pub fn has_crop(&self, place: Tile) -> bool {
        self.crops.contains_key(&place)
    }

    pub fn ensure_no_crop(&self, place: Tile) -> Result<(), PlantingError> {
        if self.has_crop(place) {
            return Err(PlantingError::CropAlreadyPlanted { place });
        }
        Ok(())
    }

    pub fn is_fertilized(&self, place: Tile) -> bool {
        self.fertilized.contains(&place)
    }

    pub fn ensure_not_fertilized(&self, place: Tile) -> Result<(), PlantingError> {
        if self.is_fertilized(place) {
            return Err(PlantingError::AlreadyFertilized { place });
        }
        Ok(())
    }
}
