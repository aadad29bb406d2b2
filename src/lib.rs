//! Merge-gating policy evaluation for pull requests
//!
//! merge-gate decides whether an open pull request is mergeable under a
//! product release process, by cross-checking the pull request's target
//! branch, milestone, and linked tracker bugs against the milestones the
//! hosting system knows about. The decision engine lives in [`evaluate`];
//! [`platform`] and [`tracker`] hold the collaborator boundaries, and
//! [`run`] ties them together into an evaluation pass.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod links;
pub mod platform;
pub mod run;
pub mod tracker;
pub mod types;
