#![allow(dead_code)]

use farmhand::api::{Action, ActionError, Event, Failure};
use farmhand::data::Knowledge;
use farmhand::math::{Position, Tile, TileMath};
use farmhand::planting::{CropKey, MATURE_STAGE};
use farmhand::working::{Role, Task, WorkerId};
use farmhand::Game;

pub const SEED: u64 = 42;

pub fn at(x: i32, y: i32) -> Tile {
    [x, y]
}

pub struct GameTestScenario {
    pub game: Game,
    workers: Vec<WorkerId>,
    current_action_result: Option<Result<Vec<Event>, ActionError>>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        Self::with_knowledge(Knowledge::default())
    }

    pub fn with_knowledge(knowledge: Knowledge) -> Self {
        GameTestScenario {
            game: Game::with_seed(knowledge, SEED),
            workers: vec![],
            current_action_result: None,
        }
    }

    /// Farm without wells, so every tile around the origin is usable.
    pub fn without_wells() -> Self {
        let knowledge = Knowledge::from_json(r#"{"rules": {"wells": []}}"#).unwrap();
        Self::with_knowledge(knowledge)
    }

    pub fn crop(&self, name: &str) -> CropKey {
        self.game.crop_key(name).unwrap()
    }

    pub fn worker(&self, index: usize) -> WorkerId {
        self.workers[index]
    }

    fn cell_size(&self) -> f32 {
        self.game.known.rules.cell_size
    }

    pub fn given_money(mut self, money: u32) -> Self {
        self.game.economy.money = money;
        self
    }

    pub fn given_seeds(mut self, crop: &str, quantity: u32) -> Self {
        let crop = self.crop(crop);
        self.game.economy.seeds.insert(crop, quantity);
        self
    }

    pub fn given_farmer_at(mut self, place: Tile) -> Self {
        let position = place.position(self.cell_size());
        self.game.move_farmer(position);
        self
    }

    pub fn given_water_hole(mut self, place: Tile) -> Self {
        self.game.landscaping.holes.insert(place);
        self.game.landscaping.water.insert(place);
        self.game.landscaping.recompute_irrigation();
        self
    }

    pub fn given_fertilized(mut self, place: Tile) -> Self {
        self.game.fertilize(place).unwrap();
        self
    }

    pub fn given_crop(mut self, place: Tile, crop: &str) -> Self {
        let crop = self.crop(crop);
        self.game.plant_crop(place, crop).unwrap();
        self
    }

    pub fn given_growth_factor(mut self, place: Tile, growth_factor: f32) -> Self {
        self.game.planting.crops.get_mut(&place).unwrap().growth_factor = growth_factor;
        self
    }

    pub fn given_worker(mut self, role: Role, place: Tile) -> Self {
        let position = place.position(self.cell_size());
        let money = self.game.economy.money;
        let price = self.game.known.workers.get(role).unwrap().price;
        self.game.economy.money = money + price;
        let (id, _) = self.game.hire_worker_with_id(role, position).unwrap();
        self.workers.push(id);
        self
    }

    pub fn when_farmer_perform(mut self, action: Action) -> Self {
        self.current_action_result = Some(self.game.perform_action(action));
        self
    }

    pub fn when_farmer_perform_at(self, place: Tile, action: Action) -> Self {
        self.given_farmer_at(place).when_farmer_perform(action)
    }

    pub fn when_time_passes(mut self, seconds: f32) -> Self {
        self.game.update(seconds);
        self
    }

    /// Steps the simulation with fixed frames, the way the host does.
    pub fn when_ticks_pass(mut self, ticks: usize, frame: f32) -> Self {
        for _ in 0..ticks {
            self.game.update(frame);
        }
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        match &self.current_action_result {
            Some(Ok(_)) => {}
            other => panic!("Action expected to succeed, got {:?}", other),
        }
        self
    }

    pub fn then_action_should_fail(self, expected: ActionError) -> Self {
        match &self.current_action_result {
            Some(Err(error)) => assert_eq!(error, &expected),
            other => panic!("Action expected to fail with {:?}, got {:?}", expected, other),
        }
        self
    }

    pub fn then_failure_should_be(self, expected: Failure) -> Self {
        match &self.current_action_result {
            Some(Err(error)) => assert_eq!(error.failure(), expected),
            other => panic!("Action expected to fail, got {:?}", other),
        }
        self
    }

    pub fn then_events_should_contain(self, expected: Event) -> Self {
        match &self.current_action_result {
            Some(Ok(events)) => assert!(
                events.contains(&expected),
                "{:?} not found in {:?}",
                expected,
                events
            ),
            other => panic!("Action expected to succeed, got {:?}", other),
        }
        self
    }

    pub fn then_money_should_be(self, money: u32) -> Self {
        assert_eq!(self.game.economy.money, money);
        self
    }

    pub fn then_seeds_should_be(self, crop: &str, quantity: u32) -> Self {
        assert_eq!(self.game.economy.seed_count(self.crop(crop)), quantity);
        self
    }

    pub fn then_irrigated_should_be(self, place: Tile, irrigated: bool) -> Self {
        assert_eq!(self.game.landscaping.is_irrigated(place), irrigated, "{:?}", place);
        self
    }

    pub fn then_fertilized_should_be(self, place: Tile, fertilized: bool) -> Self {
        assert_eq!(self.game.planting.is_fertilized(place), fertilized, "{:?}", place);
        self
    }

    pub fn then_crop_stage_should_be(self, place: Tile, stage: u8) -> Self {
        assert_eq!(self.game.planting.get_crop(place).unwrap().stage, stage);
        self
    }

    pub fn then_crop_should_be_spoiled(self, place: Tile) -> Self {
        assert!(self.game.planting.get_crop(place).unwrap().spoiled);
        self
    }

    pub fn then_crop_should_be_absent(self, place: Tile) -> Self {
        assert!(!self.game.planting.has_crop(place), "crop at {:?}", place);
        self
    }

    pub fn then_crop_should_be_harvestable(self, place: Tile) -> Self {
        let crop = self.game.planting.get_crop(place).unwrap();
        assert_eq!(crop.stage, MATURE_STAGE);
        assert!(!crop.spoiled);
        self
    }

    pub fn then_worker_active_should_be(self, index: usize, active: bool) -> Self {
        let worker = self.game.working.get_worker(self.worker(index)).unwrap();
        assert_eq!(worker.active, active);
        self
    }

    pub fn then_worker_task_should_be(self, index: usize, task: Task) -> Self {
        let worker = self.game.working.get_worker(self.worker(index)).unwrap();
        assert_eq!(worker.task, task);
        self
    }

    pub fn then_worker_position_should_be(self, index: usize, position: Position) -> Self {
        let worker = self.game.working.get_worker(self.worker(index)).unwrap();
        assert_eq!(worker.position, position);
        self
    }

    pub fn then_claims_should_be(self, claims: usize) -> Self {
        assert_eq!(self.game.working.claims.len(), claims);
        self
    }
}
