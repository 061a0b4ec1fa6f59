//! Analysis types: named instruction templates per engine.

mod builtin;
mod model;

pub use builtin::{GLOBAL_ANALYSIS_TYPES, TAMPA_BAY_ANALYSIS_TYPES};
pub use model::AnalysisTypeDescriptor;

/// Looks up an analysis type by key.
pub fn find<'a>(
    analysis_types: &'a [AnalysisTypeDescriptor],
    key: &str,
) -> Option<&'a AnalysisTypeDescriptor> {
    analysis_types.iter().find(|a| a.key == key)
}
