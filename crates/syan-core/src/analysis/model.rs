//! Analysis type domain models.

use serde::Serialize;

/// A named, fixed instruction template guiding the model's analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisTypeDescriptor {
    /// Unique within its engine.
    pub key: &'static str,
    pub label: &'static str,
    /// One-line description shown on the selection card.
    pub description: &'static str,
    /// Instructional text sent as the system prompt.
    pub instructions: &'static str,
}

impl AnalysisTypeDescriptor {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        description: &'static str,
        instructions: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            description,
            instructions,
        }
    }
}
