//! Menu choices
//!
//! Every prompt offers a fixed set of answers. The types here list those
//! answers and turn a raw answer back into a choice, rejecting anything
//! outside the set before the controller acts on it.

use crate::error::SelectionError;
use crate::registry::{Category, ToolRegistry};

pub const QUIT: &str = "quit";
pub const UPDATE: &str = "update";
pub const HELP: &str = "help";
pub const BACK: &str = "back";
pub const INSTALL: &str = "install";

/// Answers accepted by the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainChoice {
    Category(String),
    Update,
    Help,
    Quit,
}

impl MainChoice {
    /// Prompt options: category names followed by the commands
    pub fn options(registry: &ToolRegistry) -> Vec<String> {
        registry
            .category_names()
            .chain([QUIT, UPDATE, HELP])
            .map(str::to_string)
            .collect()
    }

    pub fn resolve(registry: &ToolRegistry, answer: &str) -> Result<Self, SelectionError> {
        let answer = answer.trim();
        match answer.to_lowercase().as_str() {
            QUIT => return Ok(Self::Quit),
            UPDATE => return Ok(Self::Update),
            HELP => return Ok(Self::Help),
            _ => {}
        }

        registry
            .category_names()
            .find(|name| *name == answer)
            .or_else(|| {
                registry
                    .category_names()
                    .find(|name| name.eq_ignore_ascii_case(answer))
            })
            .map(|name| Self::Category(name.to_string()))
            .ok_or_else(|| SelectionError::UnknownCategory(answer.to_string()))
    }
}

/// Answers accepted inside a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Tool(String),
    Back,
    Install,
}

impl CategoryChoice {
    /// Prompt options: tool names followed by the commands
    pub fn options(category: &Category) -> Vec<String> {
        category
            .tool_names()
            .chain([BACK, INSTALL])
            .map(str::to_string)
            .collect()
    }

    pub fn resolve(category: &Category, answer: &str) -> Result<Self, SelectionError> {
        let answer = answer.trim();
        match answer.to_lowercase().as_str() {
            BACK => return Ok(Self::Back),
            INSTALL => return Ok(Self::Install),
            _ => {}
        }

        category
            .tool(answer)
            .map(|t| Self::Tool(t.name.clone()))
            .ok_or_else(|| SelectionError::UnknownTool {
                category: category.name.clone(),
                tool: answer.to_string(),
            })
    }
}
