use std::path::Path;

use crate::domain::AppError;
use crate::services::install_default_config;

pub fn run_init_config(path: &Path) -> Result<(), AppError> {
    if install_default_config(path)? {
        println!("✅ Wrote default configuration to {}", path.display());
    } else {
        println!("ℹ️ Configuration already exists at {}", path.display());
    }
    Ok(())
}
