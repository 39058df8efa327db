use crate::math::Tile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Width and height of the block reserved by a well, in tiles.
pub const WELL_FOOTPRINT: i32 = 2;

pub fn well_covers(well: Tile, place: Tile) -> bool {
    (well[0]..well[0] + WELL_FOOTPRINT).contains(&place[0])
        && (well[1]..well[1] + WELL_FOOTPRINT).contains(&place[1])
}

pub struct LandscapingDomain {
    pub irrigation_radius: i32,
    pub well_spacing: i32,
    pub well_draw_radius: i32,
    pub wells: Vec<Tile>,
    pub holes: BTreeSet<Tile>,
    pub water: BTreeSet<Tile>,
    pub irrigated: BTreeSet<Tile>,
}

impl Default for LandscapingDomain {
    fn default() -> Self {
        Self {
            irrigation_radius: 5,
            well_spacing: 5,
            well_draw_radius: 2,
            wells: vec![],
            holes: BTreeSet::new(),
            water: BTreeSet::new(),
            irrigated: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Landscaping {
    HoleDug { place: Tile },
    HoleFilled { place: Tile },
    HoleDrained { place: Tile },
    WellBuilt { place: Tile },
    IrrigationChanged { irrigated: Vec<Tile> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LandscapingError {
    WellReserved { place: Tile },
    WaterHoleExists { place: Tile },
    HoleExists { place: Tile },
    HoleNotDug { place: Tile },
    WaterHoleNotFound { place: Tile },
    WellTooClose { place: Tile, well: Tile },
    NoWellNearby { place: Tile },
}

impl LandscapingDomain {
    pub fn load(
        &mut self,
        wells: Vec<Tile>,
        holes: BTreeSet<Tile>,
        water: BTreeSet<Tile>,
    ) -> Vec<Landscaping> {
        self.wells = wells;
        self.holes = holes;
        self.water = water;
        // every water hole is dug
        self.holes.extend(self.water.iter().copied());
        self.recompute_irrigation()
    }
}
