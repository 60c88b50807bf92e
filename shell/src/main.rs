//! Mosaic launcher.
//!
//! Opens the slot database in the data directory, restores the saved panel
//! arrangement and prints it. Logs go to stderr, filtered by `MOSAIC_LOG`.

mod logging;
mod render;
mod storage;

use mosaic_core::core::SlotStore;
use mosaic_core::types::AppConfig;
use mosaic_core::{Workspace, WorkspaceError};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let (slots, app_config) = storage::init();
    let result = match slots {
        storage::Slots::Durable(db) => run(db, &app_config),
        storage::Slots::Memory(memory) => run(memory, &app_config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run<S: SlotStore + Clone>(slots: S, config: &AppConfig) -> Result<(), WorkspaceError> {
    let workspace = Workspace::open(slots, config)?;
    print!("{}", render::render(workspace.model(), workspace.theme()));
    Ok(())
}
