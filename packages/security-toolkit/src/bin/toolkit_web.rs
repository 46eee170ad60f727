//! Opens the menu directly on the web security tools.

use std::process::ExitCode;

use security_toolkit::app::{launch, Entry};

#[tokio::main]
async fn main() -> ExitCode {
    launch(Entry::Category("Web Security")).await
}
