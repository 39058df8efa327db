use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError, WELL_FOOTPRINT};
use crate::math::{Tile, TileMath};

impl LandscapingDomain {
    pub fn build_well(
        &mut self,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        if let Some(well) = self
            .wells
            .iter()
            .find(|well| well.manhattan(place) < self.well_spacing)
        {
            return Err(LandscapingError::WellTooClose {
                place,
                well: *well,
            });
        }
        for x in 0..WELL_FOOTPRINT {
            for y in 0..WELL_FOOTPRINT {
                let block = [place[0] + x, place[1] + y];
                if self.has_water(block) {
                    return Err(LandscapingError::WaterHoleExists { place: block });
                }
                if self.is_dug(block) {
                    return Err(LandscapingError::HoleExists { place: block });
                }
            }
        }
        let command = move || {
            self.wells.push(place);
            let mut events = vec![Landscaping::WellBuilt { place }];
            events.extend(self.recompute_irrigation());
            events
        };
        Ok(command)
    }
}
