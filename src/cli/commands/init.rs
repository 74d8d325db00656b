use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command: create the `presses` table if it is missing.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let db_path = cfg.database_path();
    info(format!("Database : {db_path}"));

    let conn = Connection::open(db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
