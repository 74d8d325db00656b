use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::estimate::EstimateLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::describe_estimate;
use crate::utils::formatting::pad_right;

/// Handle the `estimate` command.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Estimate { location } = cmd {
        let pool = DbPool::with_size(cfg.database_path(), 1)?;

        match location {
            Some(loc) => {
                let est = EstimateLogic::for_location(&pool, loc).await?;
                println!("{loc}: {}", describe_estimate(&est));
            }
            None => {
                let all = EstimateLogic::for_all(&pool).await?;
                if all.is_empty() {
                    warning("No presses recorded yet.");
                    return Ok(());
                }

                let width = all.keys().map(|k| k.chars().count()).max().unwrap_or(0) + 2;
                for (loc, est) in &all {
                    println!("{}{}", pad_right(loc, width), describe_estimate(est));
                }
            }
        }
    }
    Ok(())
}
