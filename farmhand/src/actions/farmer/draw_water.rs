use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub fn draw_water(&mut self) -> Result<Vec<Event>, ActionError> {
        let place = self.farmer_tile();
        self.landscaping.find_well_near(place)?;
        let fill_bucket = self.farmer.fill_bucket()?;
        Ok(occur![fill_bucket(),])
    }
}
