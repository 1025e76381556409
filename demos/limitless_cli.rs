//! CLI application for controlling LimitLess/MiLight bridges.
//!
//! This example demonstrates a command-line interface covering every
//! operation the protocol supports.
//!
//! Run with: cargo run --example limitless_cli -- --help

use clap::{Parser, Subcommand};
use limitless_lights_rs::{Controller, Hsv};

#[derive(Parser)]
#[command(name = "limitless-cli")]
#[command(about = "Control LimitLess LED / MiLight bridges from the command line", long_about = None)]
struct Cli {
    /// Host address of the bridge
    #[arg(short = 'H', long)]
    host: String,

    /// Bulb group id (1-4)
    #[arg(short, long, default_value = "1")]
    group: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn the group on
    On,
    /// Turn the group off
    Off,
    /// Turn every group on the bridge on
    AllOn,
    /// Turn every group on the bridge off
    AllOff,
    /// Switch the group to the white channel
    White,
    /// Switch the group to night mode
    Night,
    /// Start the built-in disco program
    Disco,
    /// Speed the disco program up
    DiscoFaster,
    /// Slow the disco program down
    DiscoSlower,
    /// Set the raw device hue byte
    Hue {
        /// Device hue byte (0-255)
        value: u8,
    },
    /// Set the brightness level
    Brightness {
        /// Level from 0 to 27 (0x1B)
        level: u8,
    },
    /// Apply a perceptual HSV color
    Color {
        /// Hue in degrees (0-360)
        hue: f32,
        /// Saturation (0.0-1.0)
        saturation: f32,
        /// Value (0.0-1.0)
        value: f32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let controller = Controller::connect(&cli.host).await?;

    match cli.command {
        Commands::AllOn => controller.all_on().await?,
        Commands::AllOff => controller.all_off().await?,
        command => {
            let group = controller
                .group(cli.group)
                .ok_or("group id must be between 1 and 4")?;
            match command {
                Commands::On => group.on().await?,
                Commands::Off => group.off().await?,
                Commands::White => group.white().await?,
                Commands::Night => group.night().await?,
                Commands::Disco => group.disco().await?,
                Commands::DiscoFaster => group.disco_faster().await?,
                Commands::DiscoSlower => group.disco_slower().await?,
                Commands::Hue { value } => group.set_hue(value).await?,
                Commands::Brightness { level } => group.set_brightness(level).await?,
                Commands::Color {
                    hue,
                    saturation,
                    value,
                } => {
                    let color = Hsv::create(hue, saturation, value)
                        .ok_or("color components out of range")?;
                    group.apply_color(&color).await?;
                }
                Commands::AllOn | Commands::AllOff => unreachable!(),
            }
        }
    }

    controller.close().await;
    Ok(())
}
