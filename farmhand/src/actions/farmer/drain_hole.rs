use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::{occur, Game};

impl Game {
    pub fn drain_hole(&mut self, place: Tile) -> Result<Vec<Event>, ActionError> {
        let drain_hole = self.landscaping.drain_hole(place)?;
        Ok(occur![drain_hole(),])
    }
}
