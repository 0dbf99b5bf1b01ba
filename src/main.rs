use std::env;

use config::Config;
use dotenvy::dotenv;

use prompt_wizard::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config_path = env::var("CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    let server_config = Config::builder()
        .add_source(config::File::with_name(&config_path))
        .add_source(config::Environment::default().separator("__"))
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    prompt_wizard::run(server_config).await
}
