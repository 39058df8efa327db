use crate::economy::{EconomyDomain, EconomyError};
use crate::planting::CropKey;

impl EconomyDomain {
    pub fn seed_count(&self, crop: CropKey) -> u32 {
        self.seeds.get(&crop).copied().unwrap_or(0)
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.money >= amount
    }

    pub fn get_selected_seed(&self) -> Result<CropKey, EconomyError> {
        self.selected_seed.ok_or(EconomyError::SeedNotSelected)
    }
}
