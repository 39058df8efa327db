use crate::math::{TileMath, VectorMath};
use crate::working::{Task, WorkerId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    /// Advances a moving worker one tick toward its target tile, switching to
    /// acting on arrival.
    pub fn move_worker(
        &mut self,
        id: WorkerId,
        cell_size: f32,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let worker = self.get_worker_mut(id)?;
        let target = match worker.task {
            Task::Moving { target } => target,
            _ => return Err(WorkingError::TaskNotFound { id }),
        };
        let (position, arrived) = worker
            .position
            .step_towards(target.position(cell_size), worker.kind.speed);
        let command = move || {
            worker.position = position;
            if arrived {
                worker.task = Task::Acting { target };
            }
            vec![Working::WorkerMoved { id, position }]
        };
        Ok(command)
    }
}
