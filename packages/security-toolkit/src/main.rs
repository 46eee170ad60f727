use std::process::ExitCode;

use security_toolkit::app::{launch, Entry};

#[tokio::main]
async fn main() -> ExitCode {
    launch(Entry::MainMenu).await
}
