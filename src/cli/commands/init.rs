use std::{fs, path::Path};

use anyhow::Result;

use super::helper::finish;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let summary = create_config(Path::new(CONFIG_FILE_NAME))?;
    Ok(finish(CommandSummary::Init(summary), Vec::new(), 0, true))
}

fn create_config(config_path: &Path) -> Result<InitSummary> {
    if config_path.exists() {
        return Ok(InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        });
    }

    fs::write(config_path, default_config_json()?)?;
    tracing::debug!("Wrote {}", config_path.display());

    Ok(InitSummary {
        created: true,
        error: None,
    })
}
