use crate::api::{ActionError, Event};
use crate::economy::EconomyError;
use crate::planting::CropKey;
use crate::{occur, Game};

impl Game {
    pub fn buy_seeds(&mut self, crop: CropKey, quantity: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.crops.get(crop)?;
        let cost = kind
            .price
            .checked_mul(quantity)
            .ok_or(EconomyError::InsufficientFunds {
                required: u32::MAX,
                available: self.economy.money,
            })?;
        if !self.economy.can_afford(cost) {
            return Err(EconomyError::InsufficientFunds {
                required: cost,
                available: self.economy.money,
            }
            .into());
        }
        let add_seeds = self.economy.add_seeds(crop, quantity)?;
        let mut events = occur![add_seeds(),];
        let pay = self.economy.spend(cost)?;
        events.push(pay().into());
        Ok(events)
    }
}
