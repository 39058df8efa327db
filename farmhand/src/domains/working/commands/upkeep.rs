use crate::working::{Task, WorkerId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn pay_upkeep(
        &mut self,
        id: WorkerId,
        now: f64,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let worker = self.get_worker_mut(id)?;
        if !worker.active {
            return Err(WorkingError::WorkerSuspended { id });
        }
        let command = move || {
            worker.last_payment = now;
            vec![Working::UpkeepPaid { id }]
        };
        Ok(command)
    }

    /// Stops the worker and gives up every claimed target so others can take it.
    pub fn suspend_worker(
        &mut self,
        id: WorkerId,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let index = self
            .workers
            .iter()
            .position(|worker| worker.id == id)
            .ok_or(WorkingError::WorkerNotFound { id })?;
        if !self.workers[index].active {
            return Err(WorkingError::WorkerSuspended { id });
        }
        let command = move || {
            let worker = &mut self.workers[index];
            worker.active = false;
            worker.task = Task::Seeking;
            let mut events: Vec<Working> = self
                .claims
                .release_all(id)
                .into_iter()
                .map(|place| Working::TaskReleased { id, place })
                .collect();
            events.push(Working::WorkerSuspended { id });
            events
        };
        Ok(command)
    }

    /// Reactivation counts as the missed payment.
    pub fn resume_worker(
        &mut self,
        id: WorkerId,
        now: f64,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let worker = self.get_worker_mut(id)?;
        if worker.active {
            return Err(WorkingError::WorkerAlreadyActive { id });
        }
        let command = move || {
            worker.active = true;
            worker.last_payment = now;
            vec![Working::UpkeepPaid { id }, Working::WorkerResumed { id }]
        };
        Ok(command)
    }
}
