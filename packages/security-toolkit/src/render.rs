//! Panel and table rendering
//!
//! Everything here returns a `String`; printing is up to the console.

use console::{measure_text_width, pad_str, style, Alignment, StyledObject};

use crate::registry::{Category, ToolRegistry};
use crate::status::ToolStatus;

const PANEL_WIDTH: usize = 60;

/// Header shown above every menu
pub fn header_panel(version: &str) -> String {
    panel(
        "Main Menu",
        &[
            style("Security Toolkit").cyan().bold().to_string(),
            style("Educational Security Tools").green().to_string(),
        ],
        Some(&format!("Version {}", version)),
    )
}

/// Category summary table for the main menu
pub fn categories_table(registry: &ToolRegistry, status: &ToolStatus) -> String {
    let rows: Vec<Vec<StyledObject<String>>> = registry
        .categories()
        .iter()
        .map(|category| {
            vec![
                style(category.name.clone()).cyan(),
                style(format!("{} tools", category.len())).green(),
                style(status.summary(category)).yellow(),
            ]
        })
        .collect();

    table("Tool Categories", &["Category", "Tools", "Status"], rows)
}

/// Tool table for a single category
pub fn tools_table(category: &Category, status: &ToolStatus) -> String {
    let rows: Vec<Vec<StyledObject<String>>> = category
        .tools
        .iter()
        .map(|tool| {
            let state = if status.is_installed(&tool.name) {
                style("Installed".to_string()).green()
            } else {
                style("Not Installed".to_string()).red()
            };
            vec![
                style(tool.name.clone()).cyan(),
                style(tool.description.clone()),
                state,
            ]
        })
        .collect();

    table(
        &format!("{} Tools", category.name),
        &["Tool", "Description", "Status"],
        rows,
    )
}

/// Help panel listing the commands and categories
pub fn help_panel(registry: &ToolRegistry) -> String {
    let mut lines = vec![
        style("Available Commands:").cyan().to_string(),
        "- Select a category to view its tools".to_string(),
        "- 'update' to update all tools".to_string(),
        "- 'quit' to exit".to_string(),
        "- 'help' to show this help".to_string(),
        String::new(),
        style("Tool Categories:").yellow().to_string(),
    ];
    lines.extend(registry.category_names().map(|name| format!("- {}", name)));
    panel("Help", &lines, None)
}

/// Rounded box with a title in the top border and an optional subtitle in the bottom one
fn panel(title: &str, lines: &[String], subtitle: Option<&str>) -> String {
    let inner = lines
        .iter()
        .map(|l| measure_text_width(l) + 2)
        .chain([title.len() + 4, subtitle.map_or(0, |s| s.len() + 4)])
        .max()
        .unwrap_or(0)
        .max(PANEL_WIDTH);

    let mut out = String::new();
    out.push_str(&border('╭', '╮', Some(title), inner));
    out.push('\n');
    for line in lines {
        out.push_str(&format!(
            "│ {} │\n",
            pad_str(line, inner - 2, Alignment::Left, None)
        ));
    }
    out.push_str(&border('╰', '╯', subtitle, inner));
    out
}

fn border(left: char, right: char, label: Option<&str>, inner: usize) -> String {
    let Some(label) = label else {
        return format!("{}{}{}", left, "─".repeat(inner), right);
    };
    let label = format!(" {} ", label);
    let label_width = measure_text_width(&label);
    let fill = inner.saturating_sub(label_width);
    let lead = fill / 2;
    format!(
        "{}{}{}{}{}",
        left,
        "─".repeat(lead),
        label,
        "─".repeat(fill - lead),
        right
    )
}

/// Titled table with a header row; column widths fit the widest cell
fn table(title: &str, headers: &[&str], rows: Vec<Vec<StyledObject<String>>>) -> String {
    let cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(|c| c.to_string()).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| measure_text_width(c))
                .chain([h.len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_row = |row: &[String]| -> String {
        let padded: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad_str(cell, *w, Alignment::Left, None).into_owned())
            .collect();
        format!("│ {} │", padded.join(" │ "))
    };
    let rule = |left: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let total: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
    let mut out = String::new();
    out.push_str(&pad_str(
        &style(title).italic().to_string(),
        total,
        Alignment::Center,
        None,
    ));
    out.push('\n');
    out.push_str(&rule("┏", "┳", "┓").replace('─', "━"));
    out.push('\n');
    let header_cells: Vec<String> = headers
        .iter()
        .map(|h| style(*h).bold().to_string())
        .collect();
    out.push_str(&render_row(&header_cells).replace('│', "┃"));
    out.push('\n');
    out.push_str(&rule("┡", "╇", "┩").replace('─', "━"));
    out.push('\n');
    for row in &cells {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn plain(s: &str) -> String {
        strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn test_header_shows_version() {
        let header = plain(&header_panel("9.9.9"));
        assert!(header.contains("Main Menu"));
        assert!(header.contains("Security Toolkit"));
        assert!(header.contains("Educational Security Tools"));
        assert!(header.contains("Version 9.9.9"));
    }

    #[test]
    fn test_panel_lines_align() {
        let header = plain(&header_panel("2.7.4"));
        let widths: Vec<usize> = header.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{header}");
    }

    #[test]
    fn test_categories_table_counts() {
        let registry = ToolRegistry::builtin();
        let mut status = ToolStatus::uniform(&registry, false);
        status.mark_installed("sqlmap");
        let table = plain(&categories_table(&registry, &status));

        assert!(table.contains("Tool Categories"));
        let web = table.lines().find(|l| l.contains("Web Security")).unwrap();
        assert!(web.contains("5 tools"));
        assert!(web.contains("1/5 installed"));
        let net = table.lines().find(|l| l.contains("Network Security")).unwrap();
        assert!(net.contains("0/4 installed"));
    }

    #[test]
    fn test_tools_table_labels() {
        let registry = ToolRegistry::builtin();
        let mut status = ToolStatus::uniform(&registry, false);
        status.mark_installed("volatility");
        let forensics = registry.category("Forensics Tools").unwrap();
        let table = plain(&tools_table(forensics, &status));

        let row = table.lines().find(|l| l.contains("volatility")).unwrap();
        assert!(row.contains("Memory forensics"));
        assert!(row.contains("Installed") && !row.contains("Not Installed"));
        let row = table.lines().find(|l| l.contains("scalpel")).unwrap();
        assert!(row.contains("Not Installed"));
    }

    #[test]
    fn test_help_lists_categories() {
        let registry = ToolRegistry::builtin();
        let help = plain(&help_panel(&registry));
        assert!(help.contains("'update' to update all tools"));
        for name in registry.category_names() {
            assert!(help.contains(&format!("- {}", name)));
        }
    }
}
