use crate::api::{ActionError, Event};
use crate::planting::CropKey;
use crate::{occur, Game};

impl Game {
    pub fn select_seed(&mut self, crop: CropKey) -> Result<Vec<Event>, ActionError> {
        self.known.crops.get(crop)?;
        Ok(occur![self.economy.select_seed(crop),])
    }
}
