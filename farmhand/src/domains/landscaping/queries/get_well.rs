use crate::landscaping::{well_covers, LandscapingDomain, LandscapingError, WELL_FOOTPRINT};
use crate::math::{Tile, TileMath};

impl LandscapingDomain {
    pub fn is_well_block(&self, place: Tile) -> bool {
        self.wells.iter().any(|well| well_covers(*well, place))
    }

    pub fn ensure_not_well(&self, place: Tile) -> Result<(), LandscapingError> {
        if self.is_well_block(place) {
            return Err(LandscapingError::WellReserved { place });
        }
        Ok(())
    }

    /// Finds a well close enough to draw water from, measured to the nearest
    /// block of its footprint.
    pub fn find_well_near(&self, place: Tile) -> Result<Tile, LandscapingError> {
        self.wells
            .iter()
            .copied()
            .find(|well| {
                let nearest = [
                    place[0].clamp(well[0], well[0] + WELL_FOOTPRINT - 1),
                    place[1].clamp(well[1], well[1] + WELL_FOOTPRINT - 1),
                ];
                nearest.manhattan(place) <= self.well_draw_radius
            })
            .ok_or(LandscapingError::NoWellNearby { place })
    }
}
