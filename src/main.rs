use scheduler::commands::{exit_status, is_rendered, Cli};
use scheduler::libs::messages::macros::is_debug_mode;
use scheduler::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Values from .env feed the SCHEDULER_* overrides
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_target(false)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !is_rendered(&err) {
                msg_error!(err);
            }
            ExitCode::from(exit_status(&err))
        }
    }
}
