//! Cycle the disco program speed on group 1.
//!
//! Run with: cargo run --example disco -- 192.168.2.141

use std::time::Duration;

use limitless_lights_rs::Controller;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::args().nth(1).ok_or("usage: disco <host>")?;
    let controller = Controller::connect(&host).await?;
    let group = controller.group(1).expect("group 1 is always valid");

    group.disco().await?;
    tokio::time::sleep(Duration::from_millis(1000)).await;
    group.disco_slower().await?;
    tokio::time::sleep(Duration::from_millis(1000)).await;
    group.disco_faster().await?;

    controller.close().await;
    Ok(())
}
