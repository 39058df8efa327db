use crate::collections::Shared;
use crate::math::Tile;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const SEEDLING_STAGE: u8 = 1;
pub const MATURE_STAGE: u8 = 6;
pub const SPOILED_STAGE: u8 = 7;

/// Mature crops stay harvestable for this many growth steps.
pub const RIPENESS_STEPS: f64 = 3.0;
/// Spoiled crops rot away after this many growth steps since planting.
pub const DECAY_STEPS: f64 = 15.0;

#[derive(Default)]
pub struct PlantingDomain {
    pub fertilized: BTreeSet<Tile>,
    pub crops: BTreeMap<Tile, Crop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CropKey(pub usize);

#[derive(Debug)]
pub struct CropKind {
    pub id: CropKey,
    pub name: String,
    pub color: [u8; 3],
    pub price: u32,
    pub harvest_value: u32,
    /// Seconds per growth stage before the planting's growth factor applies.
    pub growth: f32,
}

#[derive(Debug, Clone)]
pub struct Crop {
    pub kind: Shared<CropKind>,
    pub place: Tile,
    pub stage: u8,
    pub planted_at: f64,
    pub spoiled: bool,
    pub growth_factor: f32,
}

impl Crop {
    pub fn effective_growth(&self) -> f64 {
        self.kind.growth as f64 * self.growth_factor as f64
    }

    pub fn is_harvestable(&self) -> bool {
        self.stage == MATURE_STAGE && !self.spoiled
    }

    pub fn is_spoiled(&self) -> bool {
        self.spoiled || self.stage == SPOILED_STAGE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spoilage {
    Drought,
    Overripe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Planting {
    SoilFertilized {
        place: Tile,
    },
    SoilExhausted {
        place: Tile,
    },
    CropPlanted {
        place: Tile,
        crop: CropKey,
        growth_factor: f32,
    },
    CropGrown {
        place: Tile,
        stage: u8,
    },
    CropSpoiled {
        place: Tile,
        cause: Spoilage,
    },
    CropHarvested {
        place: Tile,
        crop: CropKey,
    },
    CropRemoved {
        place: Tile,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlantingError {
    AlreadyFertilized { place: Tile },
    NotFertilized { place: Tile },
    CropAlreadyPlanted { place: Tile },
    CropNotFound { place: Tile },
    NotReadyToHarvest { place: Tile, stage: u8 },
    CropNotSpoiled { place: Tile },
}

impl PlantingDomain {
    pub fn load(&mut self, fertilized: BTreeSet<Tile>, crops: Vec<Crop>) {
        self.fertilized = fertilized;
        self.crops = crops.into_iter().map(|crop| (crop.place, crop)).collect();
    }
}
