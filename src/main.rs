use anyhow::Result;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use emberfall::app::App;
use emberfall::constants::LOOP_TIME;

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut app = App::new()?;
    info!("Starting game loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);
    while app.run() {}

    Ok(())
}
