use crate::testing::{at, GameTestScenario, SEED};
use farmhand::data::Knowledge;
use farmhand::persistence::Snapshot;
use farmhand::working::{Role, Task};
use farmhand::Game;

mod testing;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn test_restore_reproduces_farm() {
    let scenario = GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_fertilized(at(10, 11))
        .given_fertilized(at(10, 12))
        .given_crop(at(10, 11), "milho")
        .given_growth_factor(at(10, 11), 1.2)
        .given_worker(Role::Harvester, at(10, 20))
        .when_time_passes(3.0);
    let json = scenario.game.snapshot().to_json().unwrap();

    let mut game = Game::with_seed(Knowledge::default(), SEED);
    game.restore(Snapshot::from_json(&json).unwrap());

    assert_eq!(game.timing.now, 3.0);
    assert_eq!(game.economy.money, 100);
    assert_eq!(game.economy.seed_count(game.crop_key("milho").unwrap()), 19);
    assert!(game.landscaping.has_water(at(10, 10)));
    assert!(game.landscaping.is_irrigated(at(10, 11)));
    assert!(game.planting.is_fertilized(at(10, 12)));
    let crop = game.planting.get_crop(at(10, 11)).unwrap();
    assert_eq!(crop.growth_factor, 1.2);
    assert_eq!(crop.planted_at, 0.0);
    assert_eq!(crop.kind.name, "milho");
    assert_eq!(game.working.workers.len(), 1);
    let worker = &game.working.workers[0];
    assert_eq!(worker.kind.role, Role::Harvester);
    assert_eq!(worker.position, [400.0, 800.0]);
    assert_eq!(worker.task, Task::Seeking);
    assert_eq!(worker.last_payment, 0.0);
    assert!(game.working.claims.is_empty());
}

#[test]
fn test_restore_empty_snapshot_starts_fresh_farm() {
    let mut game = Game::with_seed(Knowledge::default(), SEED);
    game.economy.money = 7;
    game.restore(Snapshot::from_json("{}").unwrap());
    assert_eq!(game.economy.money, 100);
    assert_eq!(game.landscaping.wells, vec![at(0, 0)]);
    assert_eq!(game.economy.seed_count(game.crop_key("alface").unwrap()), 30);
    assert_eq!(game.economy.selected_seed, Some(game.crop_key("milho").unwrap()));
    assert_eq!(game.farmer.position, [120.0, 137.0]);
}

#[test]
fn test_restore_drops_unknown_kinds() {
    let json = r#"{
        "water": [[10, 10]],
        "fertilized": [[10, 11], [10, 12]],
        "crops": [
            {"place": [10, 11], "species": "arroz", "stage": 3},
            {"place": [10, 12], "species": "alface", "stage": 2, "elapsed": 4.0}
        ],
        "workers": [
            {"role": "pastor", "position": [0.0, 0.0]},
            {"role": "adubador", "position": [40.0, 40.0], "active": false}
        ]
    }"#;
    let mut game = Game::with_seed(Knowledge::default(), SEED);
    game.restore(Snapshot::from_json(json).unwrap());
    assert!(!game.planting.has_crop(at(10, 11)));
    assert!(game.planting.has_crop(at(10, 12)));
    assert_eq!(game.working.workers.len(), 1);
    assert_eq!(game.working.workers[0].kind.role, Role::Fertilizer);
    assert!(!game.working.workers[0].active);
}

#[test]
fn test_missing_growth_factor_restored_as_neutral() {
    let json = r#"{
        "time": 100.0,
        "water": [[10, 10]],
        "fertilized": [[10, 11]],
        "crops": [{"place": [10, 11], "species": "milho", "stage": 5, "elapsed": 26.0}]
    }"#;
    let mut game = Game::with_seed(Knowledge::default(), SEED);
    game.restore(Snapshot::from_json(json).unwrap());
    assert_eq!(game.planting.get_crop(at(10, 11)).unwrap().growth_factor, 1.0);
    game.update(FRAME);
    let crop = game.planting.get_crop(at(10, 11)).unwrap();
    assert_eq!(crop.stage, 6);
    assert!(!crop.spoiled);
}

#[test]
fn test_restored_workers_get_fresh_ids() {
    let scenario = GameTestScenario::new()
        .given_worker(Role::Planter, at(1, 5))
        .given_worker(Role::Planter, at(2, 5))
        .given_worker(Role::Harvester, at(3, 5));
    let first = scenario.worker(0);
    let mut scenario = scenario;
    scenario.game.fire_worker(first).unwrap();
    let snapshot = scenario.game.snapshot();

    let mut game = Game::with_seed(Knowledge::default(), SEED);
    game.restore(snapshot);
    game.economy.money = 300;
    let (id, _) = game.hire_worker_with_id(Role::Fertilizer, [0.0, 0.0]).unwrap();
    let ids: Vec<_> = game.working.workers.iter().map(|worker| worker.id).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.iter().filter(|other| **other == id).count(), 1);
}

#[test]
fn test_restore_keeps_valid_fields_of_damaged_save() {
    let json = r#"{
        "time": 8.0,
        "money": 500,
        "seeds": {"milho": -1, "tomate": 4},
        "farmer": "lost",
        "fertilized": [[10, 11], "rich"]
    }"#;
    let mut game = Game::with_seed(Knowledge::default(), SEED);
    game.restore(Snapshot::from_json(json).unwrap());
    assert_eq!(game.timing.now, 8.0);
    assert_eq!(game.economy.money, 500);
    assert_eq!(game.economy.seed_count(game.crop_key("milho").unwrap()), 0);
    assert_eq!(game.economy.seed_count(game.crop_key("tomate").unwrap()), 4);
    assert_eq!(game.farmer.position, [120.0, 137.0]);
    assert!(game.planting.is_fertilized([10, 11]));
}
