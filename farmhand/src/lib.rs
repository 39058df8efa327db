pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::data::Knowledge;
use crate::economy::EconomyDomain;
use crate::landscaping::LandscapingDomain;
use crate::math::Tile;
use crate::model::Farmer;
use crate::planting::{CropKey, PlantingDomain};
use crate::timing::TimingDomain;
use crate::working::WorkingDomain;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
pub mod math;
pub mod model;
pub mod persistence;
mod rules;
mod update;
mod workers;

pub struct Game {
    pub known: Knowledge,
    pub timing: TimingDomain,
    pub landscaping: LandscapingDomain,
    pub planting: PlantingDomain,
    pub working: WorkingDomain,
    pub economy: EconomyDomain,
    pub farmer: Farmer,
    random: StdRng,
}

impl Game {
    pub fn new(knowledge: Knowledge) -> Self {
        Self::with_random(knowledge, StdRng::from_entropy())
    }

    /// Creates a game with reproducible growth factors.
    pub fn with_seed(knowledge: Knowledge, seed: u64) -> Self {
        Self::with_random(knowledge, StdRng::seed_from_u64(seed))
    }

    fn with_random(knowledge: Knowledge, random: StdRng) -> Self {
        let rules = knowledge.rules.clone();
        let mut landscaping = LandscapingDomain {
            irrigation_radius: rules.irrigation_radius,
            well_spacing: rules.well_spacing,
            well_draw_radius: rules.well_draw_radius,
            ..LandscapingDomain::default()
        };
        landscaping.load(rules.wells.clone(), Default::default(), Default::default());
        let mut seeds = BTreeMap::new();
        for (name, quantity) in &rules.starting_seeds {
            match knowledge.crops.find(name) {
                Ok(kind) => {
                    seeds.insert(kind.id, *quantity);
                }
                Err(error) => warn!("Starting seeds skipped: {:?}", error),
            }
        }
        let selected_seed = knowledge.crops.find(&rules.selected_seed).ok().map(|kind| kind.id);
        let mut economy = EconomyDomain::default();
        economy.load(rules.starting_money, seeds, selected_seed);
        info!(
            "New farm with {} wells and ${}",
            landscaping.wells.len(),
            economy.money
        );
        Self {
            known: knowledge,
            timing: TimingDomain::default(),
            landscaping,
            planting: PlantingDomain::default(),
            working: WorkingDomain::default(),
            economy,
            farmer: Farmer {
                position: rules.farmer_position,
                bucket: false,
            },
            random,
        }
    }

    pub fn farmer_tile(&self) -> Tile {
        self.farmer.tile(self.known.rules.cell_size)
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        let place = self.farmer_tile();
        let events = match action {
            Action::MoveFarmer { destination } => self.move_farmer(destination),
            Action::DrawWater => self.draw_water()?,
            Action::DigHole => self.dig_hole(place)?,
            Action::FillHole => self.fill_hole(place)?,
            Action::DrainHole => self.drain_hole(place)?,
            Action::BuildWell => self.build_well(place)?,
            Action::Fertilize => self.fertilize(place)?,
            Action::PlantCrop => {
                let crop = self.economy.get_selected_seed()?;
                self.plant_crop(place, crop)?
            }
            Action::HarvestCrop => self.harvest_crop(place)?,
            Action::ClearSpoiled => self.clear_spoiled(place)?,
            Action::SelectSeed { crop } => self.select_seed(crop)?,
            Action::BuySeeds { crop, quantity } => self.buy_seeds(crop, quantity)?,
            Action::HireWorker { role } => {
                let position = self.farmer.position;
                self.hire_worker(role, position)?
            }
            Action::FireWorker { worker } => self.fire_worker(worker)?,
        };
        Ok(events)
    }

    pub fn crop_key(&self, name: &str) -> Result<CropKey, ActionError> {
        Ok(self.known.crops.find(name)?.id)
    }
}
