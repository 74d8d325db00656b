use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::press::PressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `press` command: same path as `POST /api/press`.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Press { button, location } = cmd {
        let button = PressLogic::resolve(button)?;
        let pool = DbPool::with_size(cfg.database_path(), 1)?;

        let stored = PressLogic::record(&pool, button, location.clone()).await?;

        success(format!(
            "Recorded press #{}: {} min at '{}' ({})",
            stored.id,
            stored.duration_minutes,
            stored.location,
            stored.recorded_at.to_rfc3339()
        ));
    }
    Ok(())
}
