use crate::testing::{at, GameTestScenario};
use farmhand::api::Action;
use farmhand::data::Knowledge;
use farmhand::working::Role;

mod testing;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn test_grow_corn_from_dry_ground_to_harvest() {
    let knowledge = Knowledge::from_json(r#"{"rules": {"wells": [[-3, 0]]}}"#).unwrap();
    GameTestScenario::with_knowledge(knowledge)
        .when_farmer_perform_at(at(-1, 0), Action::DrawWater)
        .then_action_should_succeed()
        .when_farmer_perform_at(at(0, 0), Action::DigHole)
        .then_action_should_succeed()
        .when_farmer_perform(Action::FillHole)
        .then_action_should_succeed()
        .then_money_should_be(95)
        .then_irrigated_should_be(at(0, 1), true)
        .when_farmer_perform_at(at(0, 1), Action::Fertilize)
        .then_action_should_succeed()
        .when_farmer_perform(Action::PlantCrop)
        .then_action_should_succeed()
        .then_seeds_should_be("milho", 19)
        .given_growth_factor(at(0, 1), 1.0)
        .when_ticks_pass(26 * 60, FRAME)
        .then_crop_should_be_harvestable(at(0, 1))
        .when_farmer_perform(Action::HarvestCrop)
        .then_action_should_succeed()
        .then_money_should_be(120)
        .then_crop_should_be_absent(at(0, 1))
        .then_fertilized_should_be(at(0, 1), false);
}

#[test]
fn test_crew_runs_farm_unattended() {
    let knowledge = Knowledge::from_json(r#"{"rules": {"starting_money": 10000}}"#).unwrap();
    let scenario = GameTestScenario::with_knowledge(knowledge)
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 13))
        .given_worker(Role::Planter, at(10, 13))
        .given_worker(Role::Harvester, at(10, 13))
        .when_ticks_pass(45 * 60, FRAME);
    let game = &scenario.game;
    assert!(game.economy.seed_count(game.crop_key("milho").unwrap()) < 20);
    // upkeep is 3 workers x 2 payments x $5
    assert!(game.economy.money > 10000 - 30, "money {}", game.economy.money);
    assert!(game.working.workers.iter().all(|worker| worker.active));
}
