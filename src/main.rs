use std::sync::Arc;

use anyhow::Context;
use log::info;
use tokio::sync::mpsc;

use rigpanel::{init_logger, HttpTransport, Message, PanelConfig, PanelController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = PanelConfig::from_env();
    info!("rigpanel connecting to {}", config.base_url);

    let transport = Arc::new(HttpTransport::new(&config).context("building HTTP transport")?);
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = PanelController::new(&config, transport, tx.clone());
    let event_loop = tokio::spawn(controller.run(rx));

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("shutting down");
    let _ = tx.send(Message::Shutdown);
    let _ = event_loop.await;

    Ok(())
}
