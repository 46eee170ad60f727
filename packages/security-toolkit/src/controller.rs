//! Menu controller
//!
//! Drives the two-level menu: the main menu lists categories, a category menu
//! lists its tools. Actions (run, install, update) go through the injected
//! backend and are awaited one at a time; a failing action is reported on the
//! console and never ends the loop.

use anyhow::Result;
use console::style;
use std::path::Path;
use std::sync::Arc;

use crate::backend::ToolBackend;
use crate::config::Config;
use crate::error::{BackendError, SelectionError};
use crate::menu::{CategoryChoice, MainChoice};
use crate::registry::ToolRegistry;
use crate::render;
use crate::status::ToolStatus;
use crate::terminal::Console;

const MAIN_PROMPT: &str = "Choose a category or command";
const CATEGORY_PROMPT: &str = "Choose a tool or command";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";

pub struct Controller<C: Console> {
    registry: ToolRegistry,
    config: Config,
    status: ToolStatus,
    backend: Arc<dyn ToolBackend>,
    console: C,
    /// Category whose submenu is open
    current_category: Option<String>,
}

impl<C: Console> Controller<C> {
    pub fn new(
        registry: ToolRegistry,
        config: Config,
        status: ToolStatus,
        backend: Arc<dyn ToolBackend>,
        console: C,
    ) -> Self {
        Self {
            registry,
            config,
            status,
            backend,
            console,
            current_category: None,
        }
    }

    /// Load the config (falling back to defaults on failure) and probe every
    /// registry tool through the backend.
    pub async fn start(
        registry: ToolRegistry,
        config_path: Option<&Path>,
        backend: Arc<dyn ToolBackend>,
        mut console: C,
    ) -> Self {
        let (config, err) = Config::load_or_default(config_path);
        if let Some(err) = err {
            console.print_error(&format!("Error loading config: {}", err));
        }

        let pb = console.progress_bar(registry.categories().len() as u64, "Checking tools...");
        let status = ToolStatus::probe(&registry, backend.as_ref(), |_| pb.inc(1)).await;
        pb.finish_and_clear();
        tracing::debug!(backend = backend.name(), tools = status.len(), "tool status ready");

        Self::new(registry, config, status, backend, console)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status(&self) -> &ToolStatus {
        &self.status
    }

    pub fn current_category(&self) -> Option<&str> {
        self.current_category.as_deref()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    // =========================================================================
    // Menus
    // =========================================================================

    /// Main menu loop; returns when the user quits
    pub async fn main_loop(&mut self) -> Result<()> {
        loop {
            self.display_header();
            self.display_categories();

            match self.prompt_main()? {
                MainChoice::Quit => break,
                MainChoice::Update => self.update_tools().await,
                MainChoice::Help => self.show_help()?,
                MainChoice::Category(name) => self.open_category(&name).await?,
            }
        }
        tracing::debug!("main menu closed");
        Ok(())
    }

    /// Open the submenu for `name` and stay there until the user goes back.
    /// Unknown names are rejected before anything is rendered.
    pub async fn open_category(&mut self, name: &str) -> Result<()> {
        if self.registry.category(name).is_none() {
            return Err(SelectionError::UnknownCategory(name.to_string()).into());
        }

        tracing::debug!(category = name, "entering category");
        self.current_category = Some(name.to_string());
        let result = self.category_menu().await;
        self.current_category = None;
        result
    }

    async fn category_menu(&mut self) -> Result<()> {
        // Keep a failure message on screen until the next action
        let mut keep_screen = false;

        while let Some(name) = self.current_category.clone() {
            if !keep_screen {
                self.console.clear()?;
            }
            self.display_header();
            self.display_tools(&name)?;

            keep_screen = match self.prompt_category(&name)? {
                CategoryChoice::Back => break,
                CategoryChoice::Install => !self.install_category_tools().await,
                CategoryChoice::Tool(tool) => !self.run_tool(&tool).await,
            };
        }
        Ok(())
    }

    fn prompt_main(&mut self) -> Result<MainChoice> {
        let options = MainChoice::options(&self.registry);
        loop {
            let answer = self.console.choose(MAIN_PROMPT, &options)?;
            match MainChoice::resolve(&self.registry, &answer) {
                Ok(choice) => return Ok(choice),
                Err(err) => Self::reject(&mut self.console, err),
            }
        }
    }

    fn prompt_category(&mut self, name: &str) -> Result<CategoryChoice> {
        let category = self
            .registry
            .category(name)
            .ok_or_else(|| SelectionError::UnknownCategory(name.to_string()))?;
        let options = CategoryChoice::options(category);
        loop {
            let answer = self.console.choose(CATEGORY_PROMPT, &options)?;
            match CategoryChoice::resolve(category, &answer) {
                Ok(choice) => return Ok(choice),
                Err(err) => Self::reject(&mut self.console, err),
            }
        }
    }

    fn reject(console: &mut C, err: SelectionError) {
        tracing::debug!(error = %err, "rejected selection");
        console.print_warning(&format!(
            "{}. Please select one of the available options.",
            err
        ));
    }

    // =========================================================================
    // Display
    // =========================================================================

    pub fn display_header(&mut self) {
        let header = render::header_panel(&self.config.version());
        self.console.print(&header);
    }

    pub fn display_categories(&mut self) {
        let table = render::categories_table(&self.registry, &self.status);
        self.console.print(&table);
    }

    pub fn display_tools(&mut self, name: &str) -> Result<()> {
        let category = self
            .registry
            .category(name)
            .ok_or_else(|| SelectionError::UnknownCategory(name.to_string()))?;
        let table = render::tools_table(category, &self.status);
        self.console.print(&table);
        Ok(())
    }

    pub fn show_help(&mut self) -> Result<()> {
        let help = render::help_panel(&self.registry);
        self.console.print(&help);
        self.console.acknowledge(CONTINUE_PROMPT)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Run a tool and wait for it. Returns whether it succeeded; failures are
    /// reported on the console.
    pub async fn run_tool(&mut self, tool: &str) -> bool {
        if !self.known_tool(tool) {
            return false;
        }
        let message = format!("Running {}...", tool);
        let spinner = if self.backend.attaches_terminal() {
            self.console.print(&style(&message).cyan().to_string());
            None
        } else {
            Some(self.console.spinner(&message))
        };

        let result = self.backend.run(tool).await;
        match result {
            Ok(()) => {
                tracing::info!(tool, "tool completed");
                let done = format!("Completed {}", tool);
                match spinner {
                    Some(pb) => pb.finish_with_message(done),
                    None => self.console.print_success(&done),
                }
                true
            }
            Err(err) => {
                if let Some(pb) = spinner {
                    pb.finish_and_clear();
                }
                tracing::warn!(tool, error = %err, "tool run failed");
                self.console
                    .print_error(&format!("Error running {}: {}", tool, err));
                false
            }
        }
    }

    /// Install a single tool behind a spinner. The status flag only flips on success.
    pub async fn install_tool(&mut self, tool: &str) -> bool {
        if !self.known_tool(tool) {
            return false;
        }
        let pb = self.console.spinner(&format!("Installing {}...", tool));
        match self.try_install(tool).await {
            Ok(()) => {
                pb.finish_with_message(format!("Installed {}", tool));
                true
            }
            Err(err) => {
                pb.finish_and_clear();
                self.console
                    .print_error(&format!("Installation failed: {}", err));
                false
            }
        }
    }

    /// Install every tool of the open category, one after another.
    /// Returns false if any install failed.
    pub async fn install_category_tools(&mut self) -> bool {
        let Some(category) = self
            .current_category
            .as_deref()
            .and_then(|name| self.registry.category(name))
        else {
            tracing::warn!("install requested with no category open");
            return false;
        };
        let tools: Vec<String> = category.tool_names().map(str::to_string).collect();

        let pb = self
            .console
            .progress_bar(tools.len() as u64, "Installing tools...");
        let mut all_ok = true;
        for tool in &tools {
            pb.set_message(format!("Installing {}", tool));
            if let Err(err) = self.try_install(tool).await {
                all_ok = false;
                let console = &mut self.console;
                pb.suspend(|| console.print_error(&format!("Installation failed: {}", err)));
            }
            pb.inc(1);
        }
        pb.finish_with_message("Installing tools...");
        all_ok
    }

    /// Run the backend's update over every registry tool. Status is untouched.
    pub async fn update_tools(&mut self) {
        let tools: Vec<String> = self.registry.tools().map(|t| t.name.clone()).collect();
        let pb = self
            .console
            .progress_bar(tools.len() as u64, "Updating tools...");

        for tool in &tools {
            if let Err(err) = self.backend.update(tool).await {
                tracing::warn!(tool = %tool, error = %err, "tool update failed");
                let console = &mut self.console;
                pb.suspend(|| console.print_error(&format!("Update failed: {}", err)));
            }
            pb.inc(1);
        }
        pb.finish_with_message("Updating tools...");
    }

    /// Tools outside the registry are reported and never reach the backend
    fn known_tool(&mut self, tool: &str) -> bool {
        if self.registry.contains_tool(tool) {
            return true;
        }
        self.console
            .print_warning(&format!("'{}' is not a known tool", tool));
        false
    }

    async fn try_install(&mut self, tool: &str) -> Result<(), BackendError> {
        match self.backend.install(tool).await {
            Ok(()) => {
                self.status.mark_installed(tool);
                tracing::info!(tool, "tool installed");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(tool, error = %err, "tool install failed");
                Err(err)
            }
        }
    }
}
