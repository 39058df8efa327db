use crate::collections::Dictionary;
use crate::math::Position;
use crate::planting::{CropKey, CropKind};
use crate::working::{Role, WorkerKind};
use log::info;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Immutable reference data of the farm, injected into the game at construction.
pub struct Knowledge {
    pub crops: Dictionary<CropKey, CropKind>,
    pub workers: Dictionary<Role, WorkerKind>,
    pub rules: FarmRules,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FarmRules {
    /// Size of a grid cell in pixels.
    pub cell_size: f32,
    pub irrigation_radius: i32,
    pub water_cost: u32,
    pub well_draw_radius: i32,
    pub well_spacing: i32,
    pub wells: Vec<[i32; 2]>,
    pub starting_money: u32,
    pub starting_seeds: BTreeMap<String, u32>,
    pub selected_seed: String,
    pub farmer_position: Position,
}

impl Default for FarmRules {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            irrigation_radius: 5,
            water_cost: 5,
            well_draw_radius: 2,
            well_spacing: 5,
            wells: vec![[0, 0]],
            starting_money: 100,
            starting_seeds: BTreeMap::from([
                ("milho".to_string(), 20),
                ("tomate".to_string(), 10),
                ("alface".to_string(), 30),
            ]),
            selected_seed: "milho".to_string(),
            farmer_position: [120.0, 137.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CropData {
    name: String,
    #[serde(default)]
    color: [u8; 3],
    price: u32,
    harvest_value: u32,
    growth: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkerData {
    role: Role,
    name: String,
    #[serde(default = "default_worker_price")]
    price: u32,
    #[serde(default = "default_worker_upkeep")]
    upkeep: u32,
    #[serde(default = "default_upkeep_interval")]
    upkeep_interval: f32,
    #[serde(default = "default_action_interval")]
    action_interval: f32,
    #[serde(default = "default_worker_speed")]
    speed: f32,
}

fn default_worker_price() -> u32 {
    300
}

fn default_worker_upkeep() -> u32 {
    5
}

fn default_upkeep_interval() -> f32 {
    20.0
}

fn default_action_interval() -> f32 {
    0.5
}

fn default_worker_speed() -> f32 {
    12.0
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KnowledgeData {
    crops: Option<Vec<CropData>>,
    workers: Option<Vec<WorkerData>>,
    rules: FarmRules,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    Parse { message: String },
    UnknownCrop { name: String },
    DuplicatedRole { role: Role },
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }
}

fn reference_crops() -> Vec<CropData> {
    let crop = |name: &str, color, price, harvest_value, growth| CropData {
        name: name.to_string(),
        color,
        price,
        harvest_value,
        growth,
    };
    vec![
        crop("milho", [255, 255, 0], 10, 25, 5.0),
        crop("tomate", [255, 0, 0], 15, 40, 8.0),
        crop("alface", [0, 255, 0], 8, 20, 3.0),
    ]
}

fn reference_workers() -> Vec<WorkerData> {
    let worker = |role, name: &str| WorkerData {
        role,
        name: name.to_string(),
        price: default_worker_price(),
        upkeep: default_worker_upkeep(),
        upkeep_interval: default_upkeep_interval(),
        action_interval: default_action_interval(),
        speed: default_worker_speed(),
    };
    vec![
        worker(Role::Planter, "cultivador"),
        worker(Role::Harvester, "coletador"),
        worker(Role::Fertilizer, "adubador"),
    ]
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::assemble(reference_crops(), reference_workers(), FarmRules::default())
    }
}

impl Knowledge {
    pub fn from_json(json: &str) -> Result<Knowledge, DataError> {
        let data: KnowledgeData = serde_json::from_str(json)?;
        let crops = data.crops.unwrap_or_else(reference_crops);
        let workers = data.workers.unwrap_or_else(reference_workers);
        let mut roles = BTreeSet::new();
        for worker in &workers {
            if !roles.insert(worker.role) {
                return Err(DataError::DuplicatedRole { role: worker.role });
            }
        }
        let knowledge = Self::assemble(crops, workers, data.rules);
        let rules = &knowledge.rules;
        for name in rules.starting_seeds.keys().chain([&rules.selected_seed]) {
            if knowledge.crops.find(name).is_err() {
                return Err(DataError::UnknownCrop { name: name.clone() });
            }
        }
        info!(
            "Knowledge loaded: {} crops, {} worker roles",
            knowledge.crops.len(),
            knowledge.workers.len()
        );
        Ok(knowledge)
    }

    fn assemble(crops: Vec<CropData>, workers: Vec<WorkerData>, rules: FarmRules) -> Knowledge {
        let mut knowledge = Knowledge {
            crops: Dictionary::default(),
            workers: Dictionary::default(),
            rules,
        };
        for (index, data) in crops.into_iter().enumerate() {
            let kind = CropKind {
                id: CropKey(index + 1),
                name: data.name.clone(),
                color: data.color,
                price: data.price,
                harvest_value: data.harvest_value,
                growth: data.growth,
            };
            knowledge.crops.insert(kind.id, data.name, kind);
        }
        for data in workers {
            let kind = WorkerKind {
                role: data.role,
                name: data.name.clone(),
                price: data.price,
                upkeep: data.upkeep,
                upkeep_interval: data.upkeep_interval,
                action_interval: data.action_interval,
                speed: data.speed,
            };
            knowledge.workers.insert(kind.role, data.name, kind);
        }
        knowledge
    }
}
