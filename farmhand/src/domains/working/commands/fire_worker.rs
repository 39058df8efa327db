use crate::working::{WorkerId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn fire_worker(
        &mut self,
        id: WorkerId,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let index = self
            .workers
            .iter()
            .position(|worker| worker.id == id)
            .ok_or(WorkingError::WorkerNotFound { id })?;
        let command = move || {
            self.workers.remove(index);
            let mut events: Vec<Working> = self
                .claims
                .release_all(id)
                .into_iter()
                .map(|place| Working::TaskReleased { id, place })
                .collect();
            events.push(Working::WorkerFired { id });
            events
        };
        Ok(command)
    }
}
