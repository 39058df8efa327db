use crate::collections::DictionaryError;
use crate::economy::{Economy, EconomyError};
use crate::landscaping::{Landscaping, LandscapingError};
use crate::math::{Position, Tile};
use crate::model::Universe;
use crate::planting::{CropKey, Planting, PlantingError};
use crate::timing::Timing;
use crate::working::{Role, WorkerId, Working, WorkingError};
use serde::{Deserialize, Serialize};

/// Player intents. Farm actions apply to the tile under the farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    MoveFarmer { destination: Position },
    DrawWater,
    DigHole,
    FillHole,
    DrainHole,
    BuildWell,
    Fertilize,
    PlantCrop,
    HarvestCrop,
    ClearSpoiled,
    SelectSeed { crop: CropKey },
    BuySeeds { crop: CropKey, quantity: u32 },
    HireWorker { role: Role },
    FireWorker { worker: WorkerId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Universe(Vec<Universe>),
    Timing(Vec<Timing>),
    Landscaping(Vec<Landscaping>),
    Planting(Vec<Planting>),
    Working(Vec<Working>),
    Economy(Vec<Economy>),
}

impl From<Vec<Universe>> for Event {
    fn from(events: Vec<Universe>) -> Self {
        Self::Universe(events)
    }
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Self::Timing(events)
    }
}

impl From<Vec<Landscaping>> for Event {
    fn from(events: Vec<Landscaping>) -> Self {
        Self::Landscaping(events)
    }
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Self::Planting(events)
    }
}

impl From<Vec<Working>> for Event {
    fn from(events: Vec<Working>) -> Self {
        Self::Working(events)
    }
}

impl From<Vec<Economy>> for Event {
    fn from(events: Vec<Economy>) -> Self {
        Self::Economy(events)
    }
}

impl Event {
    pub fn is_empty(&self) -> bool {
        match self {
            Event::Universe(events) => events.is_empty(),
            Event::Timing(events) => events.is_empty(),
            Event::Landscaping(events) => events.is_empty(),
            Event::Planting(events) => events.is_empty(),
            Event::Working(events) => events.is_empty(),
            Event::Economy(events) => events.is_empty(),
        }
    }
}

#[macro_export]
macro_rules! occur {
    () => (
        vec![]
    );
    ($($x:expr),+ $(,)?) => (
        vec![$($x.into()),+]
    );
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ActionError {
    Landscaping(LandscapingError),
    Planting(PlantingError),
    Working(WorkingError),
    Economy(EconomyError),
    Knowledge(DictionaryError),
    NotIrrigated { place: Tile },
    BucketEmpty,
    BucketFull,
}

/// Coarse classification of a rejected action for player feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Failure {
    PreconditionNotMet,
    InsufficientFunds,
    InsufficientInventory,
}

impl ActionError {
    pub fn failure(&self) -> Failure {
        match self {
            ActionError::Economy(EconomyError::InsufficientFunds { .. }) => {
                Failure::InsufficientFunds
            }
            ActionError::Economy(EconomyError::InsufficientSeeds { .. }) => {
                Failure::InsufficientInventory
            }
            _ => Failure::PreconditionNotMet,
        }
    }
}

impl From<LandscapingError> for ActionError {
    fn from(error: LandscapingError) -> Self {
        Self::Landscaping(error)
    }
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        Self::Planting(error)
    }
}

impl From<WorkingError> for ActionError {
    fn from(error: WorkingError) -> Self {
        Self::Working(error)
    }
}

impl From<EconomyError> for ActionError {
    fn from(error: EconomyError) -> Self {
        Self::Economy(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Knowledge(error)
    }
}
