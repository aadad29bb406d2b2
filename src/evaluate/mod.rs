//! Merge-gating decision engine
//!
//! Three-phase pattern:
//! 1. Gather - the harness snapshots branches/milestones and resolves bugs (effectful, bounded)
//! 2. Plan - [`evaluate`] produces a [`Verdict`] and at most one milestone change (pure, testable)
//! 3. Execute - [`apply`] performs the planned milestone change (effectful)

mod apply;
mod branch;
pub mod messages;
mod plan;
mod verdict;

pub use apply::apply;
pub use branch::release_pattern;
pub use plan::{Evaluation, HostSnapshot, evaluate};
pub use verdict::Verdict;
