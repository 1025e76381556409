//! Put group 1 into night mode.
//!
//! Run with: cargo run --example night -- 192.168.2.141

use limitless_lights_rs::Controller;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::args().nth(1).ok_or("usage: night <host>")?;
    let controller = Controller::connect(&host).await?;

    let group = controller.group(1).expect("group 1 is always valid");
    group.night().await?;

    controller.close().await;
    Ok(())
}
