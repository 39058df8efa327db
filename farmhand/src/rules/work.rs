use crate::math::{Tile, TileMath};
use crate::working::Role;
use crate::Game;

impl Game {
    pub(crate) fn is_work_available(&self, role: Role, place: Tile) -> bool {
        match role {
            Role::Planter => {
                self.planting.is_fertilized(place)
                    && !self.planting.has_crop(place)
                    && self.ensure_open_ground(place).is_ok()
            }
            Role::Harvester => self
                .planting
                .get_crop(place)
                .map(|crop| crop.is_harvestable())
                .unwrap_or(false),
            Role::Fertilizer => {
                !self.planting.is_fertilized(place)
                    && !self.planting.has_crop(place)
                    && self.ensure_fertile_ground(place).is_ok()
            }
        }
    }

    /// Work targets for the role ordered by Manhattan distance from `origin`,
    /// ties broken by tile order.
    pub(crate) fn find_work(&self, role: Role, origin: Tile) -> Vec<Tile> {
        let mut places: Vec<Tile> = match role {
            Role::Planter => {
                let has_seeds = self
                    .economy
                    .get_selected_seed()
                    .map(|crop| self.economy.seed_count(crop) > 0)
                    .unwrap_or(false);
                if !has_seeds {
                    return vec![];
                }
                self.planting.fertilized.iter().copied().collect()
            }
            Role::Harvester => self.planting.crops.keys().copied().collect(),
            Role::Fertilizer => self.landscaping.irrigated.iter().copied().collect(),
        };
        places.retain(|place| self.is_work_available(role, *place));
        places.sort_by_key(|place| (place.manhattan(origin), *place));
        places
    }
}
