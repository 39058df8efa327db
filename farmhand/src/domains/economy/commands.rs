use crate::economy::{Economy, EconomyDomain, EconomyError};
use crate::planting::CropKey;

impl EconomyDomain {
    pub fn spend(&mut self, amount: u32) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.money < amount {
            return Err(EconomyError::InsufficientFunds {
                required: amount,
                available: self.money,
            });
        }
        let command = move || {
            self.money -= amount;
            vec![Economy::MoneyChanged { money: self.money }]
        };
        Ok(command)
    }

    pub fn credit(&mut self, amount: u32) -> Vec<Economy> {
        self.money = self.money.saturating_add(amount);
        vec![Economy::MoneyChanged { money: self.money }]
    }

    pub fn consume_seed(
        &mut self,
        crop: CropKey,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.seed_count(crop) == 0 {
            return Err(EconomyError::InsufficientSeeds { crop });
        }
        let command = move || {
            let quantity = self.seeds.entry(crop).or_insert(1);
            *quantity -= 1;
            vec![Economy::SeedsChanged {
                crop,
                quantity: *quantity,
            }]
        };
        Ok(command)
    }

    pub fn add_seeds(
        &mut self,
        crop: CropKey,
        quantity: u32,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        let total = self
            .seed_count(crop)
            .checked_add(quantity)
            .ok_or(EconomyError::SeedsOverflow { crop })?;
        let command = move || {
            self.seeds.insert(crop, total);
            vec![Economy::SeedsChanged {
                crop,
                quantity: total,
            }]
        };
        Ok(command)
    }

    pub fn select_seed(&mut self, crop: CropKey) -> Vec<Economy> {
        self.selected_seed = Some(crop);
        vec![Economy::SeedSelected { crop }]
    }
}
