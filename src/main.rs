use log::info;
use recipe_chat::{server, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("recipe-chat v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    server::run(config).await?;

    Ok(())
}
