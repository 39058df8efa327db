use crate::landscaping::{Landscaping, LandscapingDomain};
use crate::math::TileMath;
use std::collections::BTreeSet;

impl LandscapingDomain {
    /// Rebuilds irrigation from scratch. Reports only when the set changes.
    pub fn recompute_irrigation(&mut self) -> Vec<Landscaping> {
        let mut irrigated = BTreeSet::new();
        for hole in &self.water {
            for place in hole.diamond(self.irrigation_radius) {
                if !self.water.contains(&place) && !self.is_well_block(place) {
                    irrigated.insert(place);
                }
            }
        }
        if irrigated == self.irrigated {
            return vec![];
        }
        self.irrigated = irrigated;
        vec![Landscaping::IrrigationChanged {
            irrigated: self.irrigated.iter().copied().collect(),
        }]
    }

    pub fn update(&mut self) -> Vec<Landscaping> {
        self.recompute_irrigation()
    }
}
