use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use transflow_console::cli::{self, TerminalPrompt};
use transflow_console::config::EnvironmentConfig;
use transflow_console::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚚 TransFlow - entorno {}", config.environment);
    info!("💾 Sesión en {}", config.session_file.display());

    let ctx = match AppContext::from_config(config, Arc::new(TerminalPrompt)) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("❌ Error inicializando la consola: {}", e);
            return Err(e.into());
        }
    };

    cli::run(&ctx).await
}
