use crate::collections::Shared;
use crate::landscaping::well_covers;
use crate::math::{Position, Tile};
use crate::model::Farmer;
use crate::planting::{Crop, CropKey, SEEDLING_STAGE, SPOILED_STAGE};
use crate::working::{Task, Worker, WorkerId, WorkerKind};
use crate::Game;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Complete farm state. Every field may be missing from stored data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub time: f64,
    pub money: Option<u32>,
    pub seeds: Option<BTreeMap<String, u32>>,
    pub selected_seed: Option<String>,
    pub farmer: Option<Farmer>,
    pub wells: Option<Vec<Tile>>,
    pub holes: Vec<Tile>,
    pub water: Vec<Tile>,
    pub fertilized: Vec<Tile>,
    pub crops: Vec<CropSnapshot>,
    pub workers: Vec<WorkerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSnapshot {
    pub place: Tile,
    pub species: String,
    #[serde(default = "seedling")]
    pub stage: u8,
    /// Seconds since planting.
    #[serde(default)]
    pub elapsed: f64,
    #[serde(default)]
    pub spoiled: bool,
    #[serde(default = "neutral_growth")]
    pub growth_factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSnapshot {
    pub role: String,
    pub position: Position,
    #[serde(default = "active")]
    pub active: bool,
    #[serde(default)]
    pub since_payment: f64,
    #[serde(default)]
    pub since_action: f64,
}

fn seedling() -> u8 {
    SEEDLING_STAGE
}

fn neutral_growth() -> f32 {
    1.0
}

fn active() -> bool {
    true
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Fails only on text that is not JSON at all, see [`Snapshot::from_value`].
    pub fn from_json(json: &str) -> Result<Snapshot, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Snapshot::from_value(value))
    }

    /// Reads stored data field by field. A malformed field falls back to its
    /// default and a malformed list entry is skipped, the rest is kept.
    pub fn from_value(value: Value) -> Snapshot {
        let mut document = match value {
            Value::Object(document) => document,
            other => {
                warn!("Snapshot is not a document, default used: {}", other);
                return Snapshot::default();
            }
        };
        Snapshot {
            time: field(&mut document, "time"),
            money: field(&mut document, "money"),
            seeds: seeds(&mut document),
            selected_seed: field(&mut document, "selected_seed"),
            farmer: field(&mut document, "farmer"),
            wells: optional_entries(&mut document, "wells"),
            holes: entries(&mut document, "holes"),
            water: entries(&mut document, "water"),
            fertilized: entries(&mut document, "fertilized"),
            crops: entries(&mut document, "crops"),
            workers: entries(&mut document, "workers"),
        }
    }
}

fn field<T: DeserializeOwned + Default>(document: &mut Map<String, Value>, name: &str) -> T {
    match document.remove(name) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|error| {
            warn!("Snapshot field {} malformed, default used: {}", name, error);
            T::default()
        }),
    }
}

fn optional_entries<T: DeserializeOwned>(
    document: &mut Map<String, Value>,
    name: &str,
) -> Option<Vec<T>> {
    match document.remove(name) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(entry) => Some(entry),
                    Err(error) => {
                        warn!("Snapshot {} entry malformed, skipped: {}", name, error);
                        None
                    }
                })
                .collect(),
        ),
        Some(other) => {
            warn!("Snapshot field {} is not a list, default used: {}", name, other);
            None
        }
    }
}

fn entries<T: DeserializeOwned>(document: &mut Map<String, Value>, name: &str) -> Vec<T> {
    optional_entries(document, name).unwrap_or_default()
}

fn seeds(document: &mut Map<String, Value>) -> Option<BTreeMap<String, u32>> {
    match document.remove("seeds") {
        None | Some(Value::Null) => None,
        Some(Value::Object(stock)) => Some(
            stock
                .into_iter()
                .filter_map(|(name, quantity)| match serde_json::from_value(quantity) {
                    Ok(quantity) => Some((name, quantity)),
                    Err(error) => {
                        warn!("Seeds of {} malformed, skipped: {}", name, error);
                        None
                    }
                })
                .collect(),
        ),
        Some(other) => {
            warn!("Snapshot field seeds is not a map, default used: {}", other);
            None
        }
    }
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        let now = self.timing.now;
        let name_of = |crop: CropKey| {
            self.known
                .crops
                .values()
                .find(|kind| kind.id == crop)
                .map(|kind| kind.name.clone())
        };
        Snapshot {
            time: now,
            money: Some(self.economy.money),
            seeds: Some(
                self.economy
                    .seeds
                    .iter()
                    .filter_map(|(crop, quantity)| Some((name_of(*crop)?, *quantity)))
                    .collect(),
            ),
            selected_seed: self.economy.selected_seed.and_then(name_of),
            farmer: Some(self.farmer),
            wells: Some(self.landscaping.wells.clone()),
            holes: self.landscaping.holes.iter().copied().collect(),
            water: self.landscaping.water.iter().copied().collect(),
            fertilized: self.planting.fertilized.iter().copied().collect(),
            crops: self
                .planting
                .crops
                .values()
                .map(|crop| CropSnapshot {
                    place: crop.place,
                    species: crop.kind.name.clone(),
                    stage: crop.stage,
                    elapsed: now - crop.planted_at,
                    spoiled: crop.spoiled,
                    growth_factor: crop.growth_factor,
                })
                .collect(),
            workers: self
                .working
                .workers
                .iter()
                .map(|worker| WorkerSnapshot {
                    role: worker.kind.name.clone(),
                    position: worker.position,
                    active: worker.active,
                    since_payment: now - worker.last_payment,
                    since_action: now - worker.last_action,
                })
                .collect(),
        }
    }

    /// Replaces the whole farm state. Entries referring to unknown kinds are
    /// dropped, workers come back without claims.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let rules = self.known.rules.clone();
        self.timing.load(snapshot.time);
        let now = self.timing.now;

        let mut seeds = BTreeMap::new();
        let stored_seeds = snapshot
            .seeds
            .unwrap_or_else(|| rules.starting_seeds.clone());
        for (name, quantity) in stored_seeds {
            match self.known.crops.find(&name) {
                Ok(kind) => {
                    seeds.insert(kind.id, quantity);
                }
                Err(_) => warn!("Seeds of unknown crop {} dropped", name),
            }
        }
        let selected_seed = snapshot
            .selected_seed
            .unwrap_or_else(|| rules.selected_seed.clone());
        let selected_seed = self.known.crops.find(&selected_seed).ok().map(|kind| kind.id);
        if selected_seed.is_none() {
            warn!("Selected seed not restored");
        }
        let money = snapshot.money.unwrap_or(rules.starting_money);
        self.economy.load(money, seeds, selected_seed);

        self.farmer = snapshot.farmer.unwrap_or(Farmer {
            position: rules.farmer_position,
            bucket: false,
        });

        let wells = snapshot.wells.unwrap_or_else(|| rules.wells.clone());
        let open = |what: &str, place: &Tile| {
            let reserved = wells.iter().any(|well| well_covers(*well, *place));
            if reserved {
                warn!("{} at well block {:?} dropped", what, place);
            }
            !reserved
        };
        let holes: BTreeSet<Tile> = snapshot
            .holes
            .into_iter()
            .filter(|place| open("Hole", place))
            .collect();
        let water: BTreeSet<Tile> = snapshot
            .water
            .into_iter()
            .filter(|place| open("Water hole", place))
            .collect();
        let fertilized: BTreeSet<Tile> = snapshot
            .fertilized
            .into_iter()
            .filter(|place| open("Fertilized soil", place))
            .collect();
        let stored_crops: Vec<CropSnapshot> = snapshot
            .crops
            .into_iter()
            .filter(|crop| open("Crop", &crop.place))
            .collect();
        self.landscaping.load(wells, holes, water.clone());

        let mut crops = vec![];
        for data in stored_crops {
            let kind = match self.known.crops.find(&data.species) {
                Ok(kind) => kind,
                Err(_) => {
                    warn!("Crop of unknown species {} at {:?} dropped", data.species, data.place);
                    continue;
                }
            };
            if water.contains(&data.place) {
                warn!("Crop at water hole {:?} dropped", data.place);
                continue;
            }
            crops.push(Crop {
                kind,
                place: data.place,
                stage: data.stage.clamp(SEEDLING_STAGE, SPOILED_STAGE),
                planted_at: now - data.elapsed.max(0.0),
                spoiled: data.spoiled,
                growth_factor: data.growth_factor,
            });
        }
        self.planting.load(fertilized, crops);

        let mut workers = vec![];
        for data in snapshot.workers {
            let kind = match self.known.workers.find(&data.role) {
                Ok(kind) => kind,
                Err(_) => {
                    warn!("Worker of unknown role {} dropped", data.role);
                    continue;
                }
            };
            workers.push(restore_worker(WorkerId(workers.len() + 1), kind, &data, now));
        }
        let sequence = workers.len();
        self.working.load_workers(workers, sequence);
        info!(
            "Farm restored at {:.1}s: {} crops, {} workers",
            now,
            self.planting.crops.len(),
            self.working.workers.len()
        );
    }
}

fn restore_worker(
    id: WorkerId,
    kind: Shared<WorkerKind>,
    data: &WorkerSnapshot,
    now: f64,
) -> Worker {
    Worker {
        id,
        kind,
        position: data.position,
        active: data.active,
        task: Task::Seeking,
        last_action: now - data.since_action,
        last_payment: now - data.since_payment,
    }
}
