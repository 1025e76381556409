//! # limitless_lights_rs
//!
//! An async Rust library for controlling LimitLess LED / MiLight lighting
//! bridges over UDP.
//!
//! This crate provides a **runtime-agnostic** async API for the proprietary
//! 3-byte command protocol spoken by LimitLess/MiLight-style RGBW bridge
//! controllers. It supports power, white and night modes, the built-in disco
//! programs, raw hue/brightness control, and a perceptual color API.
//!
//! ## Quick Start
//!
//! ```ignore
//! use limitless_lights_rs::{Controller, Hsv};
//!
//! // Works with any async runtime!
//! async fn set_purple() -> Result<(), limitless_lights_rs::Error> {
//!     // Open the UDP transport toward the bridge
//!     let controller = Controller::connect("192.168.2.141").await?;
//!
//!     // Address bulb group 1 and apply a saturated purple
//!     let group = controller.group(1).expect("group ids run from 1 to 4");
//!     group.apply_color(&Hsv::create(280.0, 1.0, 0.8).unwrap()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Runtime Agnostic**: Works with tokio, async-std, or smol async runtimes
//! - **Power Control**: Per-group on/off plus controller-wide all-on/all-off
//! - **Colors**: Perceptual HSV colors via [`Hsv`], translated to the device's
//!   hue wheel and brightness scale
//! - **White & Night Modes**: Dedicated white channel and night mode
//! - **Disco Programs**: Start the built-in animation and adjust its speed
//! - **Raw Access**: [`Frame`] and [`Command`] expose the wire protocol
//!   directly when you need it
//!
//! ## Communication
//!
//! All communication occurs over UDP on port 8899, fire-and-forget: the
//! bridge never acknowledges a frame, so delivery is best-effort and a failed
//! write is surfaced immediately without retries. Several commands only take
//! effect when preceded by an "activate" (power-on) pulse and a 100 ms
//! settling delay; the [`Group`] API enforces that ordering internally, so a
//! call like [`Group::set_hue`] may span a few hundred milliseconds.
//!
//! ## Runtime Selection
//!
//! This library is runtime-agnostic. Select your preferred runtime using
//! feature flags:
//!
//! ### Using tokio (default)
//!
//! ```toml
//! [dependencies]
//! limitless-lights-rs = "0.1"
//! tokio = { version = "1", features = ["rt-multi-thread", "macros"] }
//! ```
//!
//! ### Using async-std
//!
//! ```toml
//! [dependencies]
//! limitless-lights-rs = { version = "0.1", default-features = false, features = ["runtime-async-std"] }
//! async-std = { version = "1.12", features = ["attributes"] }
//! ```
//!
//! ### Using smol
//!
//! ```toml
//! [dependencies]
//! limitless-lights-rs = { version = "0.1", default-features = false, features = ["runtime-smol"] }
//! smol = "2"
//! ```
//!
//! ## Feature Flags
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime

mod command;
mod controller;
mod errors;
mod frame;
mod group;
pub mod runtime;
mod types;

// Re-export public API
pub use command::{Command, MAX_BRIGHTNESS};
pub use controller::Controller;
pub use errors::Error;
pub use frame::{Frame, SUFFIX};
pub use group::{GROUP_IDS, Group};
pub use types::Hsv;
