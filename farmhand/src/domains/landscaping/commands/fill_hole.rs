use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError};
use crate::math::Tile;

impl LandscapingDomain {
    pub fn fill_hole(
        &mut self,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        self.ensure_not_well(place)?;
        if self.has_water(place) {
            return Err(LandscapingError::WaterHoleExists { place });
        }
        if !self.holes.contains(&place) {
            return Err(LandscapingError::HoleNotDug { place });
        }
        let command = move || {
            self.water.insert(place);
            let mut events = vec![Landscaping::HoleFilled { place }];
            events.extend(self.recompute_irrigation());
            events
        };
        Ok(command)
    }
}
