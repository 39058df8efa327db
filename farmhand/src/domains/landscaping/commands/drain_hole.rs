use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError};
use crate::math::Tile;

impl LandscapingDomain {
    pub fn drain_hole(
        &mut self,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        if !self.has_water(place) {
            return Err(LandscapingError::WaterHoleNotFound { place });
        }
        let command = move || {
            self.water.remove(&place);
            self.holes.remove(&place);
            let mut events = vec![Landscaping::HoleDrained { place }];
            events.extend(self.recompute_irrigation());
            events
        };
        Ok(command)
    }
}
