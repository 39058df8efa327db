use crate::planting::CropKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct EconomyDomain {
    pub money: u32,
    pub seeds: BTreeMap<CropKey, u32>,
    pub selected_seed: Option<CropKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Economy {
    MoneyChanged { money: u32 },
    SeedsChanged { crop: CropKey, quantity: u32 },
    SeedSelected { crop: CropKey },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EconomyError {
    InsufficientFunds { required: u32, available: u32 },
    InsufficientSeeds { crop: CropKey },
    SeedNotSelected,
    SeedsOverflow { crop: CropKey },
}

impl EconomyDomain {
    pub fn load(&mut self, money: u32, seeds: BTreeMap<CropKey, u32>, selected_seed: Option<CropKey>) {
        self.money = money;
        self.seeds = seeds;
        self.selected_seed = selected_seed;
    }
}
