//! Analysis engines.
//!
//! An engine bundles a dataset catalog, the analysis types offered for it and
//! the framing text (geographic focus, project) added to every composed request.

use serde::Serialize;

use crate::analysis::{self, AnalysisTypeDescriptor, GLOBAL_ANALYSIS_TYPES, TAMPA_BAY_ANALYSIS_TYPES};
use crate::catalog::{DatasetDescriptor, GLOBAL_DATASETS, TAMPA_BAY_DATASETS};
use crate::error::{Result, SyanError};

const PROJECT: &str = "SYAN.EARTH - Living Earth Digital Twin for HAB Detection";

const TAMPA_BAY_PREAMBLE: &str = "You are an expert oceanographer and climate scientist analyzing Tampa Bay data for the SYAN.EARTH Living Earth Digital Twin platform. You specialize in harmful algal bloom (HAB) prediction, particularly Karenia brevis (red tide) and Pyrodinium bahamense dynamics.

Key Tampa Bay context:
- Egmont Channel is the primary gateway for Gulf waters entering the bay
- Old Tampa Bay has restricted circulation, making it susceptible to HAB accumulation
- MacDill AFB provides 80+ years of continuous weather observations
- The 2021 summer red tide event following Piney Point discharge was anomalous
- Tampa Bay has been an environmental success story since 1979 wastewater improvements

Provide actionable insights for aquaculture operators, coastal managers, and the SYAN.EARTH platform. Include specific correlation findings with estimated R-values where appropriate.";

/// A named bundle of catalog, analysis types and framing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub datasets: &'static [DatasetDescriptor],
    #[serde(skip)]
    pub analysis_types: &'static [AnalysisTypeDescriptor],
    pub default_analysis: &'static str,
    pub geographic_focus: &'static str,
    pub project: &'static str,
    pub default_max_tokens: u32,
    /// Expert context placed ahead of the analysis instructions in the system prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_preamble: Option<&'static str>,
}

impl Engine {
    /// Looks up an analysis type offered by this engine.
    pub fn analysis_type(&self, key: &str) -> Result<&'static AnalysisTypeDescriptor> {
        analysis::find(self.analysis_types, key)
            .ok_or_else(|| SyanError::not_found("analysis type", key))
    }

    /// Fixed instructional text for `key`, with the engine preamble if any.
    pub fn system_prompt(&self, key: &str) -> Result<String> {
        let analysis = self.analysis_type(key)?;
        Ok(match self.system_preamble {
            Some(preamble) => format!("{preamble}\n\n{}", analysis.instructions),
            None => analysis.instructions.to_string(),
        })
    }
}

pub static GLOBAL_ENGINE: Engine = Engine {
    id: "global",
    name: "Global Correlation Engine",
    description: "Cross-domain correlation analysis across 366 years of UK and North Atlantic weather, ocean and biology records",
    datasets: GLOBAL_DATASETS,
    analysis_types: GLOBAL_ANALYSIS_TYPES,
    default_analysis: "cross-domain",
    geographic_focus: "UK, Ireland, North Atlantic",
    project: PROJECT,
    default_max_tokens: 2000,
    system_preamble: None,
};

pub static TAMPA_BAY_ENGINE: Engine = Engine {
    id: "tampa-bay",
    name: "Tampa Bay HAB Engine",
    description: "Regional red tide analysis over 200K+ HAB records since 1953",
    datasets: TAMPA_BAY_DATASETS,
    analysis_types: TAMPA_BAY_ANALYSIS_TYPES,
    default_analysis: "hab_prediction",
    geographic_focus: "Tampa Bay, Gulf of Mexico",
    project: PROJECT,
    default_max_tokens: 2500,
    system_preamble: Some(TAMPA_BAY_PREAMBLE),
};

/// All builtin engines.
pub fn engines() -> [&'static Engine; 2] {
    [&GLOBAL_ENGINE, &TAMPA_BAY_ENGINE]
}

/// Looks up an engine by id.
pub fn find_engine(id: &str) -> Result<&'static Engine> {
    engines()
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| SyanError::not_found("engine", id))
}
