//! Tool registry
//!
//! The registry is the fixed catalogue of categories and the tools listed
//! under each one. It is built once at startup and handed to the controller;
//! nothing mutates it afterwards.

/// Built-in catalogue in display order: (category, [(tool, description)])
const BUILTIN_CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Information Gathering",
        &[
            ("nmap", "Network scanning"),
            ("osif", "OSINT Framework"),
            ("red_hawk", "Information gathering"),
            ("seeker", "Geolocation tracker"),
            ("astranmap", "Advanced Nmap automation"),
        ],
    ),
    (
        "Web Security",
        &[
            ("sqlmap", "SQL injection"),
            ("nikto", "Web server scanner"),
            ("websploit", "Web exploitation"),
            ("whatweb", "Web scanner"),
            ("wfuzz", "Web fuzzer"),
        ],
    ),
    (
        "Network Security",
        &[
            ("wireshark", "Network analyzer"),
            ("routersploit", "Router exploitation"),
            ("hydra", "Password cracker"),
            ("aircrack-ng", "Wireless security"),
        ],
    ),
    (
        "Exploitation Tools",
        &[
            ("metasploit", "Exploitation framework"),
            ("beef", "Browser exploitation"),
            ("commix", "Command injection"),
            ("xattacker", "Website vulnerability scanner"),
        ],
    ),
    (
        "Forensics Tools",
        &[
            ("volatility", "Memory forensics"),
            ("autopsy", "Digital forensics"),
            ("foremost", "File recovery"),
            ("scalpel", "Data carving"),
        ],
    ),
];

/// A single managed tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    /// Display-only description
    pub description: String,
}

/// A named group of tools shown together in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub tools: Vec<Tool>,
}

impl Category {
    pub fn new(name: &str, tools: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            tools: tools
                .iter()
                .map(|(name, description)| Tool {
                    name: name.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }

    /// Look up a tool by exact name
    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Ordered, immutable catalogue of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRegistry {
    categories: Vec<Category>,
}

impl ToolRegistry {
    /// Build a registry from explicit categories (category order is kept)
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The catalogue shipped with the toolkit
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CATEGORIES
                .iter()
                .map(|(name, tools)| Category::new(name, tools))
                .collect(),
        )
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Every tool across all categories, in display order
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.categories.iter().flat_map(|c| c.tools.iter())
    }

    pub fn contains_tool(&self, name: &str) -> bool {
        self.tools().any(|t| t.name == name)
    }

    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }
}
