//! Behavior and criterion descriptors for openloop scenarios.
//!
//! A scenario does not execute anything. It hands an execution engine a
//! [`Sequence`] of atomic behaviors to tick and a list of [`Criterion`]
//! values to evaluate. This crate defines those descriptors.

mod behavior;
mod criteria;

pub use behavior::{
    ActorDestroy, ActorTransformSetter, Behavior, BehaviorKind, KeepVelocity, Sequence,
};
pub use criteria::{CollisionTest, Criterion};

#[cfg(test)]
mod tests {
    use super::*;
    use sim::ActorId;

    #[test]
    fn public_api_exports() {
        let actor = ActorId(0);
        let _ = Sequence::new("Root");
        let _ = Behavior::from(ActorDestroy::new(actor));
        let _ = BehaviorKind::KeepVelocity;
        let _ = Criterion::from(CollisionTest::new(actor));
    }
}
