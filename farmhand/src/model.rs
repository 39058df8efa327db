use crate::api::ActionError;
use crate::math::{Position, Tile, VectorMath};
use serde::{Deserialize, Serialize};

/// The player controlled character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub position: Position,
    /// Whether the farmer carries a bucket of water.
    #[serde(default)]
    pub bucket: bool,
}

impl Farmer {
    pub fn tile(&self, cell_size: f32) -> Tile {
        self.position.to_tile(cell_size)
    }

    pub fn fill_bucket(&mut self) -> Result<impl FnOnce() -> Vec<Universe> + '_, ActionError> {
        if self.bucket {
            return Err(ActionError::BucketFull);
        }
        let command = move || {
            self.bucket = true;
            vec![Universe::BucketChanged { full: true }]
        };
        Ok(command)
    }

    pub fn empty_bucket(&mut self) -> Result<impl FnOnce() -> Vec<Universe> + '_, ActionError> {
        if !self.bucket {
            return Err(ActionError::BucketEmpty);
        }
        let command = move || {
            self.bucket = false;
            vec![Universe::BucketChanged { full: false }]
        };
        Ok(command)
    }

    pub fn relocate(&mut self, position: Position) -> Vec<Universe> {
        self.position = position;
        vec![Universe::FarmerMoved { position }]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Universe {
    FarmerMoved { position: Position },
    BucketChanged { full: bool },
}
