use habitflow_infrastructure::config::AppConfig;
use habitflow_infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init_logger(&config.log_dir)?;

    habitflow_lib::run(config).await
}
