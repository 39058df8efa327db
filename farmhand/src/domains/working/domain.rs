use crate::collections::{Sequence, Shared};
use crate::math::{Position, Tile};
use crate::working::TaskLedger;
use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct WorkingDomain {
    pub workers_id: Sequence,
    pub workers: Vec<Worker>,
    pub claims: TaskLedger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Planter,
    Harvester,
    Fertilizer,
}

#[derive(Debug)]
pub struct WorkerKind {
    pub role: Role,
    pub name: String,
    pub price: u32,
    pub upkeep: u32,
    pub upkeep_interval: f32,
    pub action_interval: f32,
    /// Pixels per tick on each axis.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    Seeking,
    Moving { target: Tile },
    Acting { target: Tile },
}

impl Task {
    pub fn target(&self) -> Option<Tile> {
        match *self {
            Task::Seeking => None,
            Task::Moving { target } | Task::Acting { target } => Some(target),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Worker {
    pub id: WorkerId,
    pub kind: Shared<WorkerKind>,
    pub position: Position,
    pub active: bool,
    pub task: Task,
    pub last_action: f64,
    pub last_payment: f64,
}

impl Worker {
    pub fn is_rested(&self, now: f64) -> bool {
        now - self.last_action >= self.kind.action_interval as f64
    }

    pub fn is_upkeep_due(&self, now: f64) -> bool {
        now - self.last_payment >= self.kind.upkeep_interval as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Working {
    WorkerHired {
        id: WorkerId,
        role: Role,
        position: Position,
    },
    WorkerFired {
        id: WorkerId,
    },
    WorkerMoved {
        id: WorkerId,
        position: Position,
    },
    TaskClaimed {
        id: WorkerId,
        place: Tile,
    },
    TaskReleased {
        id: WorkerId,
        place: Tile,
    },
    TaskCompleted {
        id: WorkerId,
        place: Tile,
    },
    UpkeepPaid {
        id: WorkerId,
    },
    WorkerSuspended {
        id: WorkerId,
    },
    WorkerResumed {
        id: WorkerId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkingError {
    WorkerNotFound { id: WorkerId },
    WorkerSuspended { id: WorkerId },
    WorkerAlreadyActive { id: WorkerId },
    WorkerBusy { id: WorkerId },
    TargetAlreadyClaimed { place: Tile, claimant: WorkerId },
    TaskNotFound { id: WorkerId },
}

impl WorkingDomain {
    pub fn load_workers(&mut self, workers: Vec<Worker>, sequence: usize) {
        self.workers_id.reset();
        self.workers_id.register(sequence);
        self.claims = TaskLedger::default();
        self.workers = workers;
    }
}
