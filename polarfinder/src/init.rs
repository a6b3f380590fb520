use std::path::PathBuf;

use anyhow::Result;

const LOG_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "polarfinder";

pub fn init() -> Result<()> {
    dotenv::dotenv().ok();

    if let Err(err) = init_trace() {
        eprintln!("File logging disabled: {err:#}");
    }

    Ok(())
}

fn init_trace() -> Result<()> {
    common::log_setup::setup_logging(LOG_LEVEL, &log_dir(), LOG_FILE_PREFIX)
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("polarfinder").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
