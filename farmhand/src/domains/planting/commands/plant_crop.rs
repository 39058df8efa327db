use crate::collections::Shared;
use crate::math::Tile;
use crate::planting::{Crop, CropKind, Planting, PlantingDomain, PlantingError, SEEDLING_STAGE};
use rand::Rng;

pub const GROWTH_FACTOR_MIN: f32 = 0.7;
pub const GROWTH_FACTOR_MAX: f32 = 1.3;

impl PlantingDomain {
    pub fn plant_crop(
        &mut self,
        place: Tile,
        kind: &Shared<CropKind>,
        now: f64,
        random: &mut impl Rng,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        self.ensure_no_crop(place)?;
        if !self.fertilized.contains(&place) {
            return Err(PlantingError::NotFertilized { place });
        }
        let growth_factor = random.gen_range(GROWTH_FACTOR_MIN..=GROWTH_FACTOR_MAX);
        let crop = Crop {
            kind: kind.clone(),
            place,
            stage: SEEDLING_STAGE,
            planted_at: now,
            spoiled: false,
            growth_factor,
        };
        let command = move || {
            let event = Planting::CropPlanted {
                place,
                crop: crop.kind.id,
                growth_factor,
            };
            self.crops.insert(place, crop);
            vec![event]
        };
        Ok(command)
    }
}
