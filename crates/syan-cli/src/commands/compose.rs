use anyhow::Result;
use syan_core::engine::{self, Engine};
use syan_core::{ComposeOptions, OutboundRequest, SelectionState, compose};

use crate::SelectionArgs;

pub fn run(args: &SelectionArgs) -> Result<()> {
    let (engine, selection) = build_selection(args)?;
    let request = build_request(args, engine, &selection)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Replays the flags as the toggle actions a dashboard user would perform.
pub fn build_selection(args: &SelectionArgs) -> Result<(&'static Engine, SelectionState)> {
    let engine = engine::find_engine(&args.engine)?;
    let mut selection = SelectionState::new(engine);

    if args.all {
        selection.select_all(engine);
    }
    for id in &args.sources {
        if selection.is_selected(id) {
            continue;
        }
        if let Err(err) = selection.toggle(engine, id) {
            tracing::warn!("[Compose] ignoring {}: {}", id, err);
        }
    }
    if let Some(key) = &args.analysis {
        selection.set_analysis(engine, key)?;
    }
    if let Some(query) = &args.query {
        selection.set_query(query.clone());
    }
    selection.set_web_search(!args.no_web_search);
    selection.set_knowledge_base(!args.no_knowledge_base);

    Ok((engine, selection))
}

pub fn build_request(
    args: &SelectionArgs,
    engine: &Engine,
    selection: &SelectionState,
) -> Result<OutboundRequest> {
    let options = ComposeOptions {
        model: args.model.clone(),
        max_tokens: args.max_tokens,
        system: args.system.clone(),
    };
    Ok(compose(selection, engine, &options)?)
}
