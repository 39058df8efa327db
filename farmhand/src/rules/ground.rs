use crate::api::ActionError;
use crate::landscaping::LandscapingError;
use crate::math::Tile;
use crate::Game;

impl Game {
    /// Ground that is neither a well nor a water hole.
    pub(crate) fn ensure_open_ground(&self, place: Tile) -> Result<(), ActionError> {
        self.landscaping.ensure_not_well(place)?;
        if self.landscaping.has_water(place) {
            return Err(LandscapingError::WaterHoleExists { place }.into());
        }
        Ok(())
    }

    pub(crate) fn ensure_fertile_ground(&self, place: Tile) -> Result<(), ActionError> {
        self.ensure_open_ground(place)?;
        if !self.landscaping.is_irrigated(place) {
            return Err(ActionError::NotIrrigated { place });
        }
        Ok(())
    }
}
