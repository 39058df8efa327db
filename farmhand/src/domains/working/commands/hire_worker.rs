use crate::collections::Shared;
use crate::math::Position;
use crate::working::{Task, Worker, WorkerId, WorkerKind, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn hire_worker(
        &mut self,
        kind: &Shared<WorkerKind>,
        position: Position,
        now: f64,
    ) -> Result<(WorkerId, impl FnOnce() -> Vec<Working> + '_), WorkingError> {
        let mut workers_id = self.workers_id.introduce();
        let id = workers_id.one(WorkerId);
        let worker = Worker {
            id,
            kind: kind.clone(),
            position,
            active: true,
            task: Task::Seeking,
            last_action: now - kind.action_interval as f64,
            last_payment: now,
        };
        let command = move || {
            self.workers_id = workers_id;
            let event = Working::WorkerHired {
                id,
                role: worker.kind.role,
                position,
            };
            self.workers.push(worker);
            vec![event]
        };
        Ok((id, command))
    }
}
