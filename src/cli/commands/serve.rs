use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::start_server;

/// Handle the `serve` command; flags override the loaded configuration.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut cfg = cfg.clone();

    if let Commands::Serve { bind, static_dir } = cmd {
        if let Some(bind) = bind {
            cfg.bind = bind.clone();
        }
        if let Some(dir) = static_dir {
            cfg.static_dir = dir.clone();
        }
    }

    start_server(&cfg).await
}
