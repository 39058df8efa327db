use crate::math::Tile;
use crate::working::WorkerId;
use std::collections::BTreeMap;

/// Mutual exclusion of work targets: at most one worker owns a tile.
#[derive(Debug, Default)]
pub struct TaskLedger {
    claims: BTreeMap<Tile, WorkerId>,
}

impl TaskLedger {
    pub fn claim(&mut self, place: Tile, worker: WorkerId) -> bool {
        if self.claims.contains_key(&place) {
            return false;
        }
        self.claims.insert(place, worker);
        true
    }

    pub fn release(&mut self, place: Tile, worker: WorkerId) -> bool {
        if self.claimant(place) != Some(worker) {
            return false;
        }
        self.claims.remove(&place);
        true
    }

    pub fn release_all(&mut self, worker: WorkerId) -> Vec<Tile> {
        let places: Vec<Tile> = self
            .claims
            .iter()
            .filter(|(_, claimant)| **claimant == worker)
            .map(|(place, _)| *place)
            .collect();
        for place in &places {
            self.claims.remove(place);
        }
        places
    }

    #[inline]
    pub fn is_claimed(&self, place: Tile) -> bool {
        self.claims.contains_key(&place)
    }

    pub fn claimant(&self, place: Tile) -> Option<WorkerId> {
        self.claims.get(&place).copied()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
