//! Opens the menu directly on the information gathering tools.

use std::process::ExitCode;

use security_toolkit::app::{launch, Entry};

#[tokio::main]
async fn main() -> ExitCode {
    launch(Entry::Category("Information Gathering")).await
}
