use crate::api::{ActionError, Event};
use crate::math::Position;
use crate::working::{Role, WorkerId};
use crate::{occur, Game};
use log::info;

impl Game {
    pub fn hire_worker(&mut self, role: Role, position: Position) -> Result<Vec<Event>, ActionError> {
        self.hire_worker_with_id(role, position).map(|(_, events)| events)
    }

    pub fn hire_worker_with_id(
        &mut self,
        role: Role,
        position: Position,
    ) -> Result<(WorkerId, Vec<Event>), ActionError> {
        let kind = self.known.workers.get(role)?;
        let pay = self.economy.spend(kind.price)?;
        let (id, hire_worker) = self.working.hire_worker(&kind, position, self.timing.now)?;
        info!("Worker {:?} hired as {} for ${}", id, kind.name, kind.price);
        Ok((id, occur![pay(), hire_worker(),]))
    }
}
