//! Atomic behaviors and the sequence composite.
//!
//! Each atomic is a description of a single actor-affecting command. The
//! execution engine that ticks them owns their runtime semantics (when a
//! velocity hold ends, how a teleport interacts with physics).

use sim::{ActorId, Transform};

/// Places an actor at a transform.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTransformSetter {
    pub name: String,
    pub actor: ActorId,
    pub transform: Transform,
    /// Re-enable physics on the actor after placing it.
    pub physics: bool,
}

impl ActorTransformSetter {
    #[must_use]
    pub fn new(actor: ActorId, transform: Transform) -> Self {
        Self {
            name: "ActorTransformSetter".to_string(),
            actor,
            transform,
            physics: true,
        }
    }
}

/// Holds an actor at a forward target speed until the engine ends the step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeepVelocity {
    pub name: String,
    pub actor: ActorId,
    /// Target speed in m/s along the actor's forward axis.
    pub target_velocity: f64,
}

impl KeepVelocity {
    #[must_use]
    pub fn new(actor: ActorId, target_velocity: f64) -> Self {
        Self {
            name: "KeepVelocity".to_string(),
            actor,
            target_velocity,
        }
    }
}

/// Removes an actor from the world.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorDestroy {
    pub name: String,
    pub actor: ActorId,
}

impl ActorDestroy {
    #[must_use]
    pub fn new(actor: ActorId) -> Self {
        Self {
            name: "ActorDestroy".to_string(),
            actor,
        }
    }
}

/// Discriminant of a [`Behavior`], useful for asserting sequence shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    TransformSetter,
    KeepVelocity,
    Destroy,
}

/// One step of a behavior sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Behavior {
    ActorTransformSetter(ActorTransformSetter),
    KeepVelocity(KeepVelocity),
    ActorDestroy(ActorDestroy),
}

impl Behavior {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ActorTransformSetter(b) => &b.name,
            Self::KeepVelocity(b) => &b.name,
            Self::ActorDestroy(b) => &b.name,
        }
    }

    /// The actor this step acts on.
    #[must_use]
    pub const fn actor(&self) -> ActorId {
        match self {
            Self::ActorTransformSetter(b) => b.actor,
            Self::KeepVelocity(b) => b.actor,
            Self::ActorDestroy(b) => b.actor,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> BehaviorKind {
        match self {
            Self::ActorTransformSetter(_) => BehaviorKind::TransformSetter,
            Self::KeepVelocity(_) => BehaviorKind::KeepVelocity,
            Self::ActorDestroy(_) => BehaviorKind::Destroy,
        }
    }
}

impl From<ActorTransformSetter> for Behavior {
    fn from(value: ActorTransformSetter) -> Self {
        Self::ActorTransformSetter(value)
    }
}

impl From<KeepVelocity> for Behavior {
    fn from(value: KeepVelocity) -> Self {
        Self::KeepVelocity(value)
    }
}

impl From<ActorDestroy> for Behavior {
    fn from(value: ActorDestroy) -> Self {
        Self::ActorDestroy(value)
    }
}

/// Runs its children one after another; no branching, no repetition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    pub name: String,
    children: Vec<Behavior>,
}

impl Sequence {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: impl Into<Behavior>) {
        self.children.push(child.into());
    }

    #[must_use]
    pub fn children(&self) -> &[Behavior] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Kinds of the children in execution order.
    #[must_use]
    pub fn kinds(&self) -> Vec<BehaviorKind> {
        self.children.iter().map(Behavior::kind).collect()
    }
}
