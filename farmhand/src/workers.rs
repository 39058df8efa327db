use crate::api::{ActionError, Event};
use crate::math::Tile;
use crate::working::{Role, Task, WorkerId};
use crate::{occur, Game};
use log::{debug, error, info};

impl Game {
    /// Ticks every worker in hiring order.
    pub(crate) fn update_workers(&mut self) -> Vec<Event> {
        let now = self.timing.now;
        let workers: Vec<WorkerId> = self.working.workers.iter().map(|worker| worker.id).collect();
        let mut events = vec![];
        for id in workers {
            match self.update_worker(id, now) {
                Ok(worker_events) => events.extend(worker_events),
                Err(error) => error!("Unable to update worker {:?}: {:?}", id, error),
            }
        }
        events
    }

    fn update_worker(&mut self, id: WorkerId, now: f64) -> Result<Vec<Event>, ActionError> {
        let worker = self.working.get_worker(id)?;
        let active = worker.active;
        let role = worker.kind.role;
        let upkeep = worker.kind.upkeep;
        let task = worker.task;
        let rested = worker.is_rested(now);
        let upkeep_due = worker.is_upkeep_due(now);

        if !active {
            if !upkeep_due || !self.economy.can_afford(upkeep) {
                return Ok(vec![]);
            }
            let resume_worker = self.working.resume_worker(id, now)?;
            let pay = self.economy.spend(upkeep)?;
            info!("Worker {:?} resumed work", id);
            return Ok(occur![pay(), resume_worker(),]);
        }

        let mut events = vec![];
        if upkeep_due {
            if !self.economy.can_afford(upkeep) {
                let suspend_worker = self.working.suspend_worker(id)?;
                info!("Worker {:?} suspended, upkeep of ${} not paid", id, upkeep);
                return Ok(occur![suspend_worker(),]);
            }
            let pay_upkeep = self.working.pay_upkeep(id, now)?;
            let pay = self.economy.spend(upkeep)?;
            events.extend(occur![pay(), pay_upkeep(),]);
        }

        match task {
            Task::Seeking if rested => events.extend(self.seek_work(id, role)?),
            Task::Seeking => {}
            Task::Moving { .. } => {
                let move_worker = self.working.move_worker(id, self.known.rules.cell_size)?;
                events.push(move_worker().into());
            }
            Task::Acting { target } => events.extend(self.perform_work(id, role, target, now)?),
        }
        Ok(events)
    }

    fn seek_work(&mut self, id: WorkerId, role: Role) -> Result<Vec<Event>, ActionError> {
        let origin = self
            .working
            .get_worker_tile(id, self.known.rules.cell_size)?;
        let target = self
            .find_work(role, origin)
            .into_iter()
            .find(|place| !self.working.claims.is_claimed(*place));
        match target {
            Some(place) => {
                let claim_task = self.working.claim_task(id, place)?;
                debug!("Worker {:?} claimed {:?}", id, place);
                Ok(occur![claim_task(),])
            }
            None => {
                debug!("Worker {:?} has no available target", id);
                Ok(vec![])
            }
        }
    }

    fn perform_work(
        &mut self,
        id: WorkerId,
        role: Role,
        target: Tile,
        now: f64,
    ) -> Result<Vec<Event>, ActionError> {
        if !self.is_work_available(role, target) {
            debug!("Worker {:?} found stale claim on {:?}", id, target);
            let abandon_task = self.working.abandon_task(id)?;
            return Ok(occur![abandon_task(),]);
        }
        let outcome = match role {
            Role::Planter => self
                .economy
                .get_selected_seed()
                .map_err(ActionError::from)
                .and_then(|crop| self.plant_crop(target, crop)),
            Role::Harvester => self.harvest_crop(target),
            Role::Fertilizer => self.fertilize(target),
        };
        let mut events = match outcome {
            Ok(events) => events,
            Err(error) => {
                debug!("Worker {:?} failed to work on {:?}: {:?}", id, target, error);
                vec![]
            }
        };
        let complete_task = self.working.complete_task(id, now)?;
        events.push(complete_task().into());
        Ok(events)
    }
}
