//! Handle `gly init`.

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct InitResponse {
    created: bool,
    root: String,
}

/// Create the `.galley` directory and open the database once so migrations run.
pub async fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match flags.project.as_deref() {
        Some(path) => std::path::PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let galley_dir = root.join(".galley");
    let created = !galley_dir.is_dir();
    std::fs::create_dir_all(&galley_dir)
        .with_context(|| format!("failed to create {}", galley_dir.display()))?;

    let config = gly_config::GalleyConfig::load_with_dotenv()?;
    let db_path = galley_dir.join(&config.database.filename);
    gly_db::service::GalleyService::new_local(&db_path.to_string_lossy())
        .await
        .context("failed to initialize galley database")?;

    output(
        &InitResponse {
            created,
            root: root.display().to_string(),
        },
        flags.format,
    )
}
