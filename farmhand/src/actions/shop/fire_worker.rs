use crate::api::{ActionError, Event};
use crate::working::WorkerId;
use crate::{occur, Game};
use log::info;

impl Game {
    pub fn fire_worker(&mut self, worker: WorkerId) -> Result<Vec<Event>, ActionError> {
        let fire_worker = self.working.fire_worker(worker)?;
        info!("Worker {:?} fired", worker);
        Ok(occur![fire_worker(),])
    }
}
