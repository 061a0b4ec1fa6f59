use anyhow::Result;
use syan_core::catalog;
use syan_core::report::{AnalysisReport, ToolsUsed};
use syan_interaction::RelayClient;

use super::compose::{build_request, build_selection};
use crate::SelectionArgs;

/// Composes, sends through the relay and renders the analysis text.
///
/// The request is validated before anything goes on the wire, so fewer than
/// two datasets never reach the relay.
pub async fn run(args: &SelectionArgs, relay_url: &str, json: bool) -> Result<()> {
    let (engine, selection) = build_selection(args)?;
    let request = build_request(args, engine, &selection)?;

    let datasets = catalog::resolve(engine.datasets, selection.selected());
    let sources = datasets.iter().map(|d| d.display_name.to_string()).collect();
    let domains = catalog::domains(&datasets);
    let tools_used = ToolsUsed {
        web_search: selection.web_search_enabled(),
        knowledge_base: selection.knowledge_base_enabled(),
    };

    let client = RelayClient::new(relay_url);
    tracing::info!(
        "[Analyze] {} datasets via {} ({})",
        datasets.len(),
        client.url(),
        selection.analysis_key()
    );
    let result = client.analyze(&request).await?;

    let report = AnalysisReport::from_relay_result(&result, sources, domains, tools_used)
        .map_err(|err| anyhow::anyhow!("Analysis failed: {err}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.analysis);
        println!();
        println!("Sources: {}", report.sources.join(", "));
        println!(
            "Domains: {}",
            report
                .domains
                .iter()
                .map(|d| d.label())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Generated: {}", report.timestamp.to_rfc3339());
    }

    Ok(())
}
