//! Request composition.
//!
//! Turns a [`SelectionState`] into one [`OutboundRequest`]. Composition is pure:
//! datasets are rendered in catalog order, so identical selections produce
//! byte-identical messages no matter the order the user clicked them in.

use crate::catalog::{self, DatasetDescriptor, DomainCategory};
use crate::engine::Engine;
use crate::error::{Result, SyanError};
use crate::request::{ChatMessage, DEFAULT_MODEL, McpServerDescriptor, OutboundRequest, ToolDescriptor};
use crate::selection::SelectionState;

/// Minimum number of resolved datasets needed for a correlation analysis.
pub const MIN_DATASETS: usize = 2;

/// Caller overrides applied on top of the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub system: Option<String>,
}

/// Builds the outbound request for the current selection.
///
/// Fails with a validation error when fewer than [`MIN_DATASETS`] selected ids
/// resolve against the engine catalog; unknown ids are ignored.
pub fn compose(
    selection: &SelectionState,
    engine: &Engine,
    options: &ComposeOptions,
) -> Result<OutboundRequest> {
    let datasets = catalog::resolve(engine.datasets, selection.selected());
    if datasets.len() < MIN_DATASETS {
        return Err(SyanError::validation(format!(
            "Select at least {MIN_DATASETS} data sources to analyze correlations"
        )));
    }

    let system = match &options.system {
        Some(system) => system.clone(),
        None => engine.system_prompt(selection.analysis_key())?,
    };

    let content = context_block(engine, &datasets, selection.query());

    let tools = selection
        .web_search_enabled()
        .then(|| vec![ToolDescriptor::web_search()]);
    let mcp_servers = selection
        .knowledge_base_enabled()
        .then(|| vec![McpServerDescriptor::knowledge_base()]);

    let max_tokens = options
        .max_tokens
        .filter(|n| *n > 0)
        .unwrap_or(engine.default_max_tokens);

    tracing::debug!(
        "[Composer] engine={} analysis={} datasets={} web_search={} knowledge_base={}",
        engine.id,
        selection.analysis_key(),
        datasets.len(),
        tools.is_some(),
        mcp_servers.is_some()
    );

    Ok(OutboundRequest {
        model: options
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        max_tokens,
        system: Some(system),
        messages: vec![ChatMessage::user(content)],
        tools,
        mcp_servers,
    })
}

/// `Single domain: x` or `Cross-domain: x, y`.
pub fn domain_coverage(domains: &[DomainCategory]) -> String {
    let names: Vec<&str> = domains.iter().map(|d| d.as_ref()).collect();
    if names.len() == 1 {
        format!("Single domain: {}", names[0])
    } else {
        format!("Cross-domain: {}", names.join(", "))
    }
}

fn context_block(engine: &Engine, datasets: &[&DatasetDescriptor], query: &str) -> String {
    let lines: Vec<String> = datasets.iter().map(|d| d.context_line()).collect();
    let coverage = domain_coverage(&catalog::domains(datasets));
    let user_query = if query.is_empty() {
        let names: Vec<&str> = datasets.iter().map(|d| d.display_name).collect();
        format!("Analyze correlation potential between: {}", names.join(", "))
    } else {
        query.to_string()
    };

    format!(
        "SELECTED DATA SOURCES:\n{}\n\nDOMAIN COVERAGE:\n{}\n\nGEOGRAPHIC FOCUS: {}\nPROJECT: {}\n\nUSER QUERY: {}",
        lines.join("\n"),
        coverage,
        engine.geographic_focus,
        engine.project,
        user_query
    )
}
