//! View-side selection state.
//!
//! One `SelectionState` lives for one dashboard session. It only changes through
//! the explicit toggle operations below, which keep the selected ids a subset of
//! the engine catalog.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog;
use crate::engine::Engine;
use crate::error::{Result, SyanError};

/// Dataset selection, analysis choice and capability toggles for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    engine_id: &'static str,
    selected: BTreeSet<String>,
    analysis_key: String,
    query: String,
    web_search_enabled: bool,
    knowledge_base_enabled: bool,
}

impl SelectionState {
    /// Fresh state for `engine`: nothing selected, default analysis, both
    /// capabilities enabled.
    pub fn new(engine: &Engine) -> Self {
        Self {
            engine_id: engine.id,
            selected: BTreeSet::new(),
            analysis_key: engine.default_analysis.to_string(),
            query: String::new(),
            web_search_enabled: true,
            knowledge_base_enabled: true,
        }
    }

    pub fn engine_id(&self) -> &'static str {
        self.engine_id
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn analysis_key(&self) -> &str {
        &self.analysis_key
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn web_search_enabled(&self) -> bool {
        self.web_search_enabled
    }

    pub fn knowledge_base_enabled(&self) -> bool {
        self.knowledge_base_enabled
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Flips the selection of one dataset. Returns the new selected flag.
    pub fn toggle(&mut self, engine: &Engine, id: &str) -> Result<bool> {
        if !catalog::contains(engine.datasets, id) {
            return Err(SyanError::not_found("dataset", id));
        }
        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.to_string());
            Ok(true)
        }
    }

    pub fn select_all(&mut self, engine: &Engine) {
        self.selected = engine.datasets.iter().map(|d| d.id.to_string()).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Switches the active analysis type. Unknown keys leave the state unchanged.
    pub fn set_analysis(&mut self, engine: &Engine, key: &str) -> Result<()> {
        engine.analysis_type(key)?;
        self.analysis_key = key.to_string();
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_web_search(&mut self, enabled: bool) {
        self.web_search_enabled = enabled;
    }

    pub fn set_knowledge_base(&mut self, enabled: bool) {
        self.knowledge_base_enabled = enabled;
    }
}
