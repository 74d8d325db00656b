use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::press::PressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs::File;
use std::io::{self, BufWriter};

/// Handle the `dump` command: every row, as JSON or CSV.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dump { format, output } = cmd {
        let pool = DbPool::with_size(cfg.database_path(), 1)?;
        let rows = PressLogic::all(&pool).await?;

        match output {
            Some(path) => {
                let file = BufWriter::new(File::create(path)?);
                format.write(&rows, file)?;
                success(format!(
                    "{} export completed: {} rows → {}",
                    format.as_str().to_uppercase(),
                    rows.len(),
                    path.display()
                ));
            }
            None => format.write(&rows, io::stdout().lock())?,
        }
    }
    Ok(())
}
