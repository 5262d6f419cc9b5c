//! Pass/fail criteria evaluated by the execution harness.

use sim::ActorId;

/// Fails if the bound actor collides with anything.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionTest {
    pub name: String,
    pub actor: ActorId,
}

impl CollisionTest {
    #[must_use]
    pub fn new(actor: ActorId) -> Self {
        Self {
            name: "CollisionTest".to_string(),
            actor,
        }
    }
}

/// A criterion attached to a scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Criterion {
    CollisionTest(CollisionTest),
}

impl Criterion {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CollisionTest(c) => &c.name,
        }
    }

    /// The actor this criterion observes.
    #[must_use]
    pub const fn actor(&self) -> ActorId {
        match self {
            Self::CollisionTest(c) => c.actor,
        }
    }
}

impl From<CollisionTest> for Criterion {
    fn from(value: CollisionTest) -> Self {
        Self::CollisionTest(value)
    }
}
