//! Menu controller tests driven by a scripted console and the mock backend.

use std::io::Write;
use std::sync::Arc;

use security_toolkit::backend::SimulatedBackend;
use security_toolkit::testing::{MockBackend, Output, ScriptedConsole};
use security_toolkit::{Controller, ToolRegistry};

async fn start(answers: &[&str], backend: &MockBackend) -> Controller<ScriptedConsole> {
    Controller::start(
        ToolRegistry::builtin(),
        None,
        Arc::new(backend.clone()),
        ScriptedConsole::new(answers.iter().copied()),
    )
    .await
}

fn clears(console: &ScriptedConsole) -> usize {
    console
        .output()
        .iter()
        .filter(|o| matches!(o, Output::Clear))
        .count()
}

// =============================================================================
// Navigation
// =============================================================================

#[tokio::test]
async fn quit_ends_loop_without_further_prompts() {
    let backend = MockBackend::new();
    let mut controller = start(&["quit"], &backend).await;

    controller.main_loop().await.unwrap();

    let console = controller.console();
    assert_eq!(console.prompts().len(), 1);
    assert_eq!(console.remaining(), 0);
    assert!(backend.runs().is_empty());
    assert!(backend.installs().is_empty());
}

#[tokio::test]
async fn main_prompt_offers_categories_and_commands() {
    let backend = MockBackend::new();
    let mut controller = start(&["quit"], &backend).await;
    controller.main_loop().await.unwrap();

    let prompt = controller.console().prompts()[0].clone();
    assert_eq!(
        prompt.options,
        vec![
            "Information Gathering",
            "Web Security",
            "Network Security",
            "Exploitation Tools",
            "Forensics Tools",
            "quit",
            "update",
            "help",
        ]
    );
}

#[tokio::test]
async fn unknown_category_is_rejected_and_reprompted() {
    let backend = MockBackend::new();
    let mut controller = start(&["Crypto", "quit"], &backend).await;

    controller.main_loop().await.unwrap();

    let console = controller.console();
    assert_eq!(console.prompts().len(), 2);
    let text = console.text();
    assert!(text.contains("'Crypto' is not a category or command"));
    // No tool table was ever drawn
    assert!(!text.contains("Description"));
    assert_eq!(clears(console), 0);
}

#[tokio::test]
async fn unknown_tool_is_rejected_inside_category() {
    let backend = MockBackend::new();
    let mut controller = start(&["Web Security", "nmap", "back", "quit"], &backend).await;

    controller.main_loop().await.unwrap();

    assert!(backend.runs().is_empty());
    assert!(controller
        .console()
        .text()
        .contains("'nmap' is not a tool in Web Security"));
}

#[tokio::test]
async fn open_category_rejects_unknown_name_before_rendering() {
    let backend = MockBackend::new();
    let mut controller = start(&[], &backend).await;

    let err = controller.open_category("Crypto Tools").await.unwrap_err();

    assert!(err.to_string().contains("Crypto Tools"));
    assert!(controller.console().output().is_empty());
    assert_eq!(controller.current_category(), None);
}

#[tokio::test]
async fn back_returns_to_main_menu_and_clears_selection() {
    let backend = MockBackend::new();
    let mut controller = start(
        &["Web Security", "back", "Network Security", "back", "quit"],
        &backend,
    )
    .await;

    controller.main_loop().await.unwrap();

    assert_eq!(controller.current_category(), None);
    let prompts = controller.console().prompts();
    assert_eq!(prompts.len(), 5);
    assert_eq!(
        prompts[1].options,
        vec!["sqlmap", "nikto", "websploit", "whatweb", "wfuzz", "back", "install"]
    );
    assert_eq!(
        prompts[3].options,
        vec!["wireshark", "routersploit", "hydra", "aircrack-ng", "back", "install"]
    );
    // Main menu prompts in between
    assert!(prompts[2].options.contains(&"quit".to_string()));
    assert!(prompts[4].options.contains(&"quit".to_string()));
}

#[tokio::test]
async fn launcher_category_returns_after_back() {
    let backend = MockBackend::new();
    let mut controller = start(&["back"], &backend).await;

    controller.open_category("Web Security").await.unwrap();

    let console = controller.console();
    assert_eq!(console.prompts().len(), 1);
    assert_eq!(console.remaining(), 0);
    assert!(console.text().contains("Web Security Tools"));
    assert_eq!(controller.current_category(), None);
    assert!(backend.runs().is_empty());
}

#[tokio::test]
async fn running_out_of_input_is_an_error() {
    let backend = MockBackend::new();
    let mut controller = start(&["Web Security"], &backend).await;

    assert!(controller.main_loop().await.is_err());
}

// =============================================================================
// Status
// =============================================================================

#[tokio::test]
async fn startup_probes_every_tool_once() {
    let backend = MockBackend::new();
    let controller = start(&[], &backend).await;

    let registry = ToolRegistry::builtin();
    assert_eq!(backend.probes().len(), registry.tool_count());
    assert_eq!(controller.status().len(), registry.tool_count());
    assert!(registry.tools().all(|t| controller.status().tools().any(|s| s == t.name)));

    // Probe bar ticks once per category
    let bar = &controller.console().bars()[0];
    assert_eq!(bar.position(), registry.categories().len() as u64);
}

#[tokio::test]
async fn summary_counts_match_status() {
    let backend = MockBackend::new()
        .with_installed("nmap")
        .with_installed("seeker")
        .with_installed("hydra");
    let mut controller = start(&["quit"], &backend).await;
    controller.main_loop().await.unwrap();

    let text = controller.console().text();
    let row = |name: &str| text.lines().find(|l| l.contains(name)).unwrap().to_string();
    assert!(row("Information Gathering").contains("2/5 installed"));
    assert!(row("Network Security").contains("1/4 installed"));
    assert!(row("Web Security").contains("0/5 installed"));

    for category in controller.registry().categories() {
        let installed = controller.status().installed_in(category);
        assert!(installed <= category.len());
    }
}

// =============================================================================
// Actions
// =============================================================================

#[tokio::test]
async fn install_category_installs_every_tool() {
    let backend = MockBackend::new();
    let mut controller = start(&["Forensics Tools", "install", "back", "quit"], &backend).await;

    controller.main_loop().await.unwrap();

    let forensics = controller.registry().category("Forensics Tools").unwrap().clone();
    assert_eq!(
        backend.installs(),
        vec!["volatility", "autopsy", "foremost", "scalpel"]
    );
    assert!(forensics
        .tool_names()
        .all(|t| controller.status().is_installed(t)));
    assert!(!controller.status().is_installed("nmap"));

    let bar = controller.console().bars().last().unwrap().clone();
    assert_eq!(bar.length(), Some(4));
    assert_eq!(bar.position(), 4);

    // Main menu summary after returning
    let text = controller.console().text();
    let last_row = text
        .lines()
        .filter(|l| l.contains("Forensics Tools") && l.contains("installed"))
        .last()
        .unwrap()
        .to_string();
    assert!(last_row.contains("4/4 installed"));
}

#[tokio::test]
async fn failed_install_leaves_status_and_still_advances() {
    let backend = MockBackend::new().failing_install("autopsy", "disk full");
    let mut controller = start(&["Forensics Tools", "install", "back", "quit"], &backend).await;

    controller.main_loop().await.unwrap();

    let status = controller.status();
    assert!(!status.is_installed("autopsy"));
    assert!(status.is_installed("volatility"));
    assert!(status.is_installed("foremost"));
    assert!(status.is_installed("scalpel"));
    assert_eq!(backend.installs().len(), 4);

    let bar = controller.console().bars().last().unwrap().clone();
    assert_eq!(bar.position(), 4);
    assert!(controller
        .console()
        .text()
        .contains("Installation failed: autopsy: disk full"));
}

#[tokio::test]
async fn single_install_flips_status_only_on_success() {
    let backend = MockBackend::new().failing_install("beef", "mirror unreachable");
    let mut controller = start(&[], &backend).await;

    assert!(controller.install_tool("commix").await);
    assert!(controller.status().is_installed("commix"));

    assert!(!controller.install_tool("beef").await);
    assert!(!controller.status().is_installed("beef"));
    assert!(controller
        .console()
        .text()
        .contains("Installation failed: beef: mirror unreachable"));
}

#[tokio::test]
async fn run_failure_is_reported_and_loop_continues() {
    let backend = MockBackend::new().failing_run("sqlmap", "segfault");
    let mut controller = start(
        &["Web Security", "sqlmap", "nikto", "back", "quit"],
        &backend,
    )
    .await;

    controller.main_loop().await.unwrap();

    assert_eq!(backend.runs(), vec!["sqlmap", "nikto"]);
    let console = controller.console();
    assert_eq!(console.prompts().len(), 5);
    assert!(console.text().contains("Error running sqlmap: sqlmap: segfault"));
    // The failure stays on screen: no clear before the next prompt
    assert_eq!(clears(console), 2);
}

#[tokio::test]
async fn successful_run_finishes_spinner() {
    let backend = MockBackend::new();
    let mut controller = start(&[], &backend).await;

    assert!(controller.run_tool("wfuzz").await);

    let spinner = controller.console().bars().last().unwrap().clone();
    assert!(spinner.is_finished());
    assert_eq!(spinner.message(), "Completed wfuzz");
}

#[tokio::test]
async fn attached_run_prints_instead_of_spinning() {
    let backend = MockBackend::new().attached();
    let mut controller = start(&[], &backend).await;
    let bars_before = controller.console().bars().len();

    assert!(controller.run_tool("nikto").await);

    let console = controller.console();
    assert_eq!(console.bars().len(), bars_before);
    let text = console.text();
    assert!(text.contains("Running nikto..."));
    assert!(text.contains("Completed nikto"));
}

#[tokio::test]
async fn attached_run_failure_is_reported() {
    let backend = MockBackend::new().attached().failing_run("hydra", "exit code 2");
    let mut controller = start(&[], &backend).await;

    assert!(!controller.run_tool("hydra").await);

    let text = controller.console().text();
    assert!(text.contains("Running hydra..."));
    assert!(text.contains("Error running hydra: hydra: exit code 2"));
    assert!(!text.contains("Completed hydra"));
}

#[tokio::test]
async fn unregistered_tool_never_reaches_backend() {
    let backend = MockBackend::new();
    let mut controller = start(&[], &backend).await;

    assert!(!controller.run_tool("john").await);
    assert!(!controller.install_tool("john").await);

    assert!(backend.runs().is_empty());
    assert!(backend.installs().is_empty());
    assert!(!controller.status().is_installed("john"));
    assert!(controller.console().text().contains("'john' is not a known tool"));
}

#[tokio::test(start_paused = true)]
async fn simulated_run_completes() {
    let mut controller = Controller::start(
        ToolRegistry::builtin(),
        None,
        Arc::new(SimulatedBackend::new()),
        ScriptedConsole::new(["Exploitation Tools", "metasploit", "back", "quit"]),
    )
    .await;

    controller.main_loop().await.unwrap();

    assert!(!controller.console().text().contains("Error running"));
    assert_eq!(controller.console().remaining(), 0);
}

#[tokio::test]
async fn update_touches_every_tool_but_not_status() {
    let backend = MockBackend::new().failing_update("wireshark", "offline");
    let mut controller = start(&["update", "quit"], &backend).await;
    let before = controller.status().clone();

    controller.main_loop().await.unwrap();

    assert_eq!(backend.updates().len(), ToolRegistry::builtin().tool_count());
    assert_eq!(controller.status(), &before);
    assert!(controller
        .console()
        .text()
        .contains("Update failed: wireshark: offline"));

    let bar = controller.console().bars().last().unwrap().clone();
    assert_eq!(bar.position(), bar.length().unwrap());
}

#[tokio::test]
async fn help_waits_for_acknowledgement() {
    let backend = MockBackend::new();
    let mut controller = start(&["help", "", "quit"], &backend).await;

    controller.main_loop().await.unwrap();

    let console = controller.console();
    assert!(console
        .output()
        .iter()
        .any(|o| matches!(o, Output::Acknowledge(p) if p == "Press Enter to continue...")));
    assert!(console.text().contains("Available Commands:"));
    assert_eq!(console.prompts().len(), 2);
}

// =============================================================================
// Config
// =============================================================================

#[tokio::test]
async fn header_shows_configured_version() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "version: \"9.9.9\"").unwrap();

    let mut controller = Controller::start(
        ToolRegistry::builtin(),
        Some(file.path()),
        Arc::new(MockBackend::new()),
        ScriptedConsole::new(["quit"]),
    )
    .await;
    controller.main_loop().await.unwrap();

    assert!(controller.console().text().contains("Version 9.9.9"));
}

#[tokio::test]
async fn header_defaults_without_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(".security_toolkit").join("config.yml");

    let mut controller = Controller::start(
        ToolRegistry::builtin(),
        Some(missing.as_path()),
        Arc::new(MockBackend::new()),
        ScriptedConsole::new(["quit"]),
    )
    .await;
    controller.main_loop().await.unwrap();

    let text = controller.console().text();
    assert!(text.contains("Version 2.7.4"));
    assert!(!text.contains("Error loading config"));
}

#[tokio::test]
async fn malformed_config_is_reported_not_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "version: [9.9").unwrap();

    let mut controller = Controller::start(
        ToolRegistry::builtin(),
        Some(file.path()),
        Arc::new(MockBackend::new()),
        ScriptedConsole::new(["quit"]),
    )
    .await;
    controller.main_loop().await.unwrap();

    let text = controller.console().text();
    assert!(text.contains("Error loading config"));
    assert!(text.contains("Version 2.7.4"));
}
