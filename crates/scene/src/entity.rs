use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn index(&self) -> u32 {
        self.0
    }
}
