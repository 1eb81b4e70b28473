use aaa_staking_cli::{Console, Outcome, config::AppConfig, session};
use aaa_staking_sdk::{Client, ConfigBuilder, StakingApi};
use anyhow::Context;
use log::info;
use std::env;
use tokio::io::{self, BufReader};

fn load_config() -> anyhow::Result<AppConfig> {
    dotenv::dotenv()
        .map_err(|err| {
            eprintln!(".env file error: {}", err);
            err
        })
        .ok();

    AppConfig::fetch().context("failed to load log config")
}

pub async fn bootstrap() -> anyhow::Result<Outcome> {
    let app_config = load_config()?;

    unsafe { env::set_var("RUST_LOG", app_config.log_config.log_level.as_str()) };
    env_logger::init();

    let staking_config = ConfigBuilder::default()
        .from_env()
        .build()
        .context("failed to load staking config")?;
    let client = Client::new(staking_config)
        .await
        .context("failed to connect to the RPC provider")?;
    info!("Using wallet {}", client.account());

    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout(), io::stderr());
    let outcome = session::run(&client, &mut console).await?;
    info!("Session finished: {outcome:?}");

    Ok(outcome)
}
