use crate::landscaping::LandscapingDomain;
use crate::math::Tile;

impl LandscapingDomain {
    pub fn has_water(&self, place: Tile) -> bool {
        self.water.contains(&place)
    }

    pub fn is_dug(&self, place: Tile) -> bool {
        self.holes.contains(&place)
    }

    pub fn is_irrigated(&self, place: Tile) -> bool {
        self.irrigated.contains(&place)
    }
}
