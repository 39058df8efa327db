use crate::testing::{at, GameTestScenario};
use farmhand::api::{Action, Failure};
use farmhand::working::{Role, RoleCensus, Task};

mod testing;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn test_fertilizer_works_own_tile_first() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 12))
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(0, Task::Moving { target: at(10, 12) })
        .then_claims_should_be(1)
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(0, Task::Acting { target: at(10, 12) })
        .when_ticks_pass(1, FRAME)
        .then_fertilized_should_be(at(10, 12), true)
        .then_worker_task_should_be(0, Task::Seeking)
        .then_claims_should_be(0);
}

#[test]
fn test_workers_never_share_target() {
    let scenario = GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 12))
        .given_worker(Role::Fertilizer, at(10, 12))
        .when_ticks_pass(1, FRAME)
        .then_claims_should_be(2)
        .then_worker_task_should_be(0, Task::Moving { target: at(10, 12) })
        .then_worker_task_should_be(1, Task::Moving { target: at(9, 12) });
    let claims = &scenario.game.working.claims;
    assert_eq!(claims.claimant(at(10, 12)), Some(scenario.worker(0)));
    assert_eq!(claims.claimant(at(9, 12)), Some(scenario.worker(1)));
}

#[test]
fn test_worker_walks_to_distant_target() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 20))
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(0, Task::Moving { target: at(10, 15) })
        .when_ticks_pass(1, FRAME)
        .then_worker_position_should_be(0, [400.0, 788.0])
        .when_ticks_pass(16, FRAME)
        .then_worker_position_should_be(0, [400.0, 600.0])
        .then_worker_task_should_be(0, Task::Acting { target: at(10, 15) })
        .then_fertilized_should_be(at(10, 15), false)
        .when_ticks_pass(1, FRAME)
        .then_fertilized_should_be(at(10, 15), true);
}

#[test]
fn test_worker_rests_between_actions() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 12))
        .when_ticks_pass(3, FRAME)
        .then_fertilized_should_be(at(10, 12), true)
        .when_ticks_pass(10, FRAME)
        .then_worker_task_should_be(0, Task::Seeking)
        .then_claims_should_be(0)
        .when_time_passes(0.5)
        .then_claims_should_be(1);
}

#[test]
fn test_planter_uses_selected_seed() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_fertilized(at(10, 11))
        .given_worker(Role::Planter, at(10, 11))
        .when_ticks_pass(3, FRAME)
        .then_crop_stage_should_be(at(10, 11), 1)
        .then_seeds_should_be("milho", 19)
        .then_claims_should_be(0);
}

#[test]
fn test_planter_idles_without_seeds() {
    GameTestScenario::new()
        .given_seeds("milho", 0)
        .given_water_hole(at(10, 10))
        .given_fertilized(at(10, 11))
        .given_worker(Role::Planter, at(10, 11))
        .when_ticks_pass(3, FRAME)
        .then_worker_task_should_be(0, Task::Seeking)
        .then_worker_active_should_be(0, true)
        .then_worker_position_should_be(0, [400.0, 440.0])
        .then_crop_should_be_absent(at(10, 11));
}

#[test]
fn test_harvester_collects_mature_crop() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_fertilized(at(10, 11))
        .given_crop(at(10, 11), "milho")
        .given_growth_factor(at(10, 11), 1.0)
        .given_worker(Role::Harvester, at(10, 11))
        .when_ticks_pass(1, FRAME)
        .then_claims_should_be(0)
        .when_time_passes(26.0)
        .then_worker_task_should_be(0, Task::Moving { target: at(10, 11) })
        .then_money_should_be(95)
        .when_ticks_pass(2, FRAME)
        .then_crop_should_be_absent(at(10, 11))
        .then_money_should_be(120);
}

#[test]
fn test_stale_claim_released_without_change() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_fertilized(at(10, 11))
        .given_worker(Role::Planter, at(10, 14))
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(0, Task::Moving { target: at(10, 11) })
        .when_farmer_perform_at(at(10, 11), Action::PlantCrop)
        .when_ticks_pass(10, FRAME)
        .then_worker_task_should_be(0, Task::Acting { target: at(10, 11) })
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(0, Task::Seeking)
        .then_claims_should_be(0)
        .then_seeds_should_be("milho", 19);
}

#[test]
fn test_upkeep_paid_periodically() {
    GameTestScenario::new()
        .given_worker(Role::Fertilizer, at(3, 3))
        .when_time_passes(19.0)
        .then_money_should_be(100)
        .when_time_passes(1.0)
        .then_money_should_be(95)
        .when_time_passes(20.0)
        .then_money_should_be(90)
        .then_worker_active_should_be(0, true);
}

#[test]
fn test_unpaid_worker_suspended_and_resumed() {
    let scenario = GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 20))
        .when_ticks_pass(1, FRAME)
        .then_claims_should_be(1)
        .given_money(0)
        .when_time_passes(20.0)
        .then_worker_active_should_be(0, false)
        .then_worker_task_should_be(0, Task::Seeking)
        .then_claims_should_be(0)
        .then_worker_position_should_be(0, [400.0, 800.0])
        .when_time_passes(5.0)
        .then_worker_active_should_be(0, false)
        .given_money(7)
        .when_ticks_pass(1, FRAME)
        .then_worker_active_should_be(0, true)
        .then_money_should_be(2)
        .then_worker_position_should_be(0, [400.0, 800.0]);
    let worker = scenario.game.working.get_worker(scenario.worker(0)).unwrap();
    assert_eq!(worker.kind.role, Role::Fertilizer);
}

#[test]
fn test_suspended_worker_target_taken_by_other() {
    GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 20))
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(0, Task::Moving { target: at(10, 15) })
        .given_money(0)
        .when_time_passes(20.0)
        .then_worker_active_should_be(0, false)
        .given_worker(Role::Fertilizer, at(10, 20))
        .when_ticks_pass(1, FRAME)
        .then_worker_task_should_be(1, Task::Moving { target: at(10, 15) });
}

#[test]
fn test_hire_requires_funds() {
    let scenario = GameTestScenario::new()
        .when_farmer_perform(Action::HireWorker {
            role: Role::Planter,
        })
        .then_failure_should_be(Failure::InsufficientFunds)
        .then_money_should_be(100);
    assert!(scenario.game.working.workers.is_empty());
    let scenario = scenario
        .given_money(300)
        .when_farmer_perform(Action::HireWorker {
            role: Role::Planter,
        })
        .then_action_should_succeed()
        .then_money_should_be(0);
    let census = scenario.game.working.census();
    assert_eq!(
        census.get(&Role::Planter),
        Some(&RoleCensus {
            active: 1,
            total: 1
        })
    );
    assert_eq!(scenario.game.working.workers[0].position, [120.0, 137.0]);
}

#[test]
fn test_fired_worker_releases_claims() {
    let scenario = GameTestScenario::new()
        .given_water_hole(at(10, 10))
        .given_worker(Role::Fertilizer, at(10, 20))
        .when_ticks_pass(1, FRAME)
        .then_claims_should_be(1);
    let worker = scenario.worker(0);
    let scenario = scenario
        .when_farmer_perform(Action::FireWorker { worker })
        .then_action_should_succeed()
        .then_claims_should_be(0);
    assert!(scenario.game.working.workers.is_empty());
}
