//! Verdict accumulator with sticky not-mergeable semantics

/// The accumulated verdict for one pull request
///
/// Starts mergeable with no complaints. Complaints only ever append, and
/// once a stage marks the verdict not-mergeable no later stage can flip it
/// back. Fields are private so stages cannot reset state by accident.
#[derive(Debug, Clone, Default)]
pub struct Verdict {
    not_mergeable: bool,
    complaints: Vec<String>,
}

impl Verdict {
    /// A fresh verdict: mergeable, no complaints
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pull request satisfies all policy checks so far
    pub const fn is_mergeable(&self) -> bool {
        !self.not_mergeable
    }

    /// Complaints accumulated so far, in the order they were recorded
    pub fn complaints(&self) -> &[String] {
        &self.complaints
    }

    /// Mark not-mergeable and record a complaint
    #[must_use]
    pub fn reject(mut self, complaint: impl Into<String>) -> Self {
        self.not_mergeable = true;
        self.complaints.push(complaint.into());
        self
    }
}
