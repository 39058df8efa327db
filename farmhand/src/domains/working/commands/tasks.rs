use crate::math::Tile;
use crate::working::{Task, WorkerId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn claim_task(
        &mut self,
        id: WorkerId,
        place: Tile,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let worker = self.get_worker(id)?;
        if !worker.active {
            return Err(WorkingError::WorkerSuspended { id });
        }
        if worker.task != Task::Seeking {
            return Err(WorkingError::WorkerBusy { id });
        }
        if let Some(claimant) = self.claims.claimant(place) {
            return Err(WorkingError::TargetAlreadyClaimed { place, claimant });
        }
        let command = move || {
            self.claims.claim(place, id);
            if let Ok(worker) = self.get_worker_mut(id) {
                worker.task = Task::Moving { target: place };
            }
            vec![Working::TaskClaimed { id, place }]
        };
        Ok(command)
    }

    /// Drops the current target without counting it as work done.
    pub fn abandon_task(
        &mut self,
        id: WorkerId,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let target = self
            .get_worker(id)?
            .task
            .target()
            .ok_or(WorkingError::TaskNotFound { id })?;
        let command = move || {
            let mut events = vec![];
            if self.claims.release(target, id) {
                events.push(Working::TaskReleased { id, place: target });
            }
            if let Ok(worker) = self.get_worker_mut(id) {
                worker.task = Task::Seeking;
            }
            events
        };
        Ok(command)
    }

    pub fn complete_task(
        &mut self,
        id: WorkerId,
        now: f64,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let target = self
            .get_worker(id)?
            .task
            .target()
            .ok_or(WorkingError::TaskNotFound { id })?;
        let command = move || {
            let mut events = vec![];
            if self.claims.release(target, id) {
                events.push(Working::TaskReleased { id, place: target });
            }
            if let Ok(worker) = self.get_worker_mut(id) {
                worker.task = Task::Seeking;
                worker.last_action = now;
            }
            events.push(Working::TaskCompleted { id, place: target });
            events
        };
        Ok(command)
    }
}
