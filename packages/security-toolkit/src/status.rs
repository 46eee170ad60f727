//! Installed/not-installed tracking for every registry tool

use std::collections::HashMap;

use crate::backend::ToolBackend;
use crate::registry::{Category, ToolRegistry};

/// Installed flag per tool. Keys always match the registry's tool names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolStatus {
    installed: HashMap<String, bool>,
}

impl ToolStatus {
    /// Every registry tool set to `installed`
    pub fn uniform(registry: &ToolRegistry, installed: bool) -> Self {
        Self {
            installed: registry
                .tools()
                .map(|t| (t.name.clone(), installed))
                .collect(),
        }
    }

    /// Probe every tool through the backend, one category at a time.
    /// `on_category` is called after each category has been checked.
    pub async fn probe<F>(
        registry: &ToolRegistry,
        backend: &dyn ToolBackend,
        mut on_category: F,
    ) -> Self
    where
        F: FnMut(&Category),
    {
        let mut installed = HashMap::with_capacity(registry.tool_count());
        for category in registry.categories() {
            for tool in &category.tools {
                let present = backend.is_installed(&tool.name).await;
                tracing::debug!(tool = %tool.name, installed = present, "probed tool");
                installed.insert(tool.name.clone(), present);
            }
            on_category(category);
        }
        Self { installed }
    }

    pub fn is_installed(&self, tool: &str) -> bool {
        self.installed.get(tool).copied().unwrap_or(false)
    }

    /// Flag `tool` as installed. Returns false for names outside the registry,
    /// which are left untracked.
    pub fn mark_installed(&mut self, tool: &str) -> bool {
        match self.installed.get_mut(tool) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Installed count for a category
    pub fn installed_in(&self, category: &Category) -> usize {
        category
            .tool_names()
            .filter(|name| self.is_installed(name))
            .count()
    }

    /// Status summary string (e.g., "3/5 installed")
    pub fn summary(&self, category: &Category) -> String {
        format!("{}/{} installed", self.installed_in(category), category.len())
    }

    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.installed.keys().map(String::as_str)
    }
}
