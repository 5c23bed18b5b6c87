use serde::{Deserialize, Serialize};

/// League-wide id source shared by players, prospects, picks, games,
/// trades and notifications. Stored with the league so ids stay unique
/// across save and load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn starting_at(next: u32) -> Self {
        IdSequence { next: next.max(1) }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        IdSequence { next: 1 }
    }
}
