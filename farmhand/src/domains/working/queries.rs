use crate::math::{Tile, VectorMath};
use crate::working::{Role, Worker, WorkerId, WorkingDomain, WorkingError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCensus {
    pub active: usize,
    pub total: usize,
}

impl WorkingDomain {
    pub fn get_worker(&self, id: WorkerId) -> Result<&Worker, WorkingError> {
        self.workers
            .iter()
            .find(|worker| worker.id == id)
            .ok_or(WorkingError::WorkerNotFound { id })
    }

    pub fn get_worker_mut(&mut self, id: WorkerId) -> Result<&mut Worker, WorkingError> {
        self.workers
            .iter_mut()
            .find(|worker| worker.id == id)
            .ok_or(WorkingError::WorkerNotFound { id })
    }

    pub fn get_worker_tile(&self, id: WorkerId, cell_size: f32) -> Result<Tile, WorkingError> {
        let worker = self.get_worker(id)?;
        Ok(worker.position.to_tile(cell_size))
    }

    pub fn census(&self) -> BTreeMap<Role, RoleCensus> {
        let mut census: BTreeMap<Role, RoleCensus> = BTreeMap::new();
        for worker in &self.workers {
            let entry = census.entry(worker.kind.role).or_default();
            entry.total += 1;
            if worker.active {
                entry.active += 1;
            }
        }
        census
    }
}
