use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError};
use crate::math::Tile;

impl LandscapingDomain {
    pub fn dig_hole(
        &mut self,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        self.ensure_not_well(place)?;
        if self.has_water(place) {
            return Err(LandscapingError::WaterHoleExists { place });
        }
        let command = move || {
            self.holes.insert(place);
            vec![Landscaping::HoleDug { place }]
        };
        Ok(command)
    }
}
