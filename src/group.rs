//! Group-scoped commands and command sequencing.

use std::time::Duration;

use serde::Serialize;

use crate::command::{Command, MAX_BRIGHTNESS};
use crate::controller::Controller;
use crate::errors::Error;
use crate::runtime;
use crate::types::Hsv;

type Result<T> = std::result::Result<T, Error>;

/// Group ids addressable on one bridge.
pub const GROUP_IDS: std::ops::RangeInclusive<u8> = 1..=4;

/// Settling delay the firmware needs between dependent frames. A hue or
/// brightness frame arriving sooner after its activate pulse is silently
/// dropped by the device.
const SETTLE: Duration = Duration::from_millis(100);

/// A logical set of bulbs addressed by id on one [`Controller`].
///
/// A `Group` borrows its controller and only uses it to route outgoing
/// frames; it carries no state of its own beyond the id. The device does
/// have an implicit state machine (off, activated, hued, bright), which
/// this API respects purely through command ordering and settling delays.
///
/// Obtain a group via [`Controller::group`]:
///
/// ```
/// use limitless_lights_rs::Controller;
///
/// let controller = Controller::new("192.168.2.141", None);
/// let group = controller.group(2).unwrap();
/// assert_eq!(group.id(), 2);
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Group<'a> {
    id: u8,
    #[serde(skip)]
    controller: &'a Controller,
}

impl<'a> Group<'a> {
    /// Returns `None` if the id is outside [`GROUP_IDS`].
    pub(crate) fn create(controller: &'a Controller, id: u8) -> Option<Self> {
        if GROUP_IDS.contains(&id) {
            Some(Group { id, controller })
        } else {
            None
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub async fn on(&self) -> Result<()> {
        self.send(Command::On, 0).await
    }

    pub async fn off(&self) -> Result<()> {
        self.send(Command::Off, 0).await
    }

    /// Switch the group to its dedicated white channel.
    pub async fn white(&self) -> Result<()> {
        self.send(Command::White, 0).await
    }

    /// Power-on pulse the device requires before it honors a hue or
    /// brightness frame.
    pub async fn activate(&self) -> Result<()> {
        self.on().await
    }

    /// Night mode.
    ///
    /// The firmware only accepts this transition from off, so an off frame
    /// goes out first and is given time to settle.
    pub async fn night(&self) -> Result<()> {
        self.off().await?;
        runtime::sleep(SETTLE).await;
        self.send(Command::Night, 0).await
    }

    /// Start the built-in disco program.
    pub async fn disco(&self) -> Result<()> {
        self.send(Command::Disco, 0).await
    }

    pub async fn disco_faster(&self) -> Result<()> {
        self.send(Command::DiscoFaster, 0).await
    }

    pub async fn disco_slower(&self) -> Result<()> {
        self.send(Command::DiscoSlower, 0).await
    }

    /// Set the device hue byte.
    ///
    /// Sends the activate pulse, settles, then the hue frame. A write
    /// failure aborts the rest of the sequence.
    pub async fn set_hue(&self, hue: u8) -> Result<()> {
        self.activate().await?;
        runtime::sleep(SETTLE).await;
        self.send(Command::SetHue, hue).await
    }

    /// Set the brightness level (`0..=0x1B`).
    ///
    /// The level is validated before any frame goes out; anything above
    /// [`MAX_BRIGHTNESS`] is rejected with [`Error::InvalidBrightness`].
    pub async fn set_brightness(&self, level: u8) -> Result<()> {
        if level > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness(level));
        }
        self.activate().await?;
        runtime::sleep(SETTLE).await;
        self.send(Command::SetBrightness, level).await
    }

    /// Apply a perceptual color to the group.
    ///
    /// Near-black turns the group off outright, since the device has no
    /// reliable near-zero brightness state. Desaturated colors render
    /// better on the dedicated white channel than as a washed-out hue;
    /// saturated ones get a hue frame. Brightness is reapplied last so the
    /// preceding pulses cannot clobber it.
    pub async fn apply_color(&self, color: &Hsv) -> Result<()> {
        let level = color.device_level();

        if level < 0x02 {
            return self.off().await;
        }

        if color.saturation() < 0.5 {
            self.white().await?;
        } else {
            self.activate().await?;
            runtime::sleep(SETTLE).await;
            self.set_hue(color.device_hue()).await?;
        }

        self.activate().await?;
        runtime::sleep(SETTLE).await;
        self.set_brightness(level).await
    }

    async fn send(&self, command: Command, value: u8) -> Result<()> {
        self.controller.send_frame(command.frame(self.id, value)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    async fn fake_bridge() -> (tokio::net::UdpSocket, Controller) {
        let device = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = device.local_addr().unwrap().port();
        let controller = Controller::with_port("127.0.0.1", port);
        controller.open().await.unwrap();
        (device, controller)
    }

    async fn recv_frames(device: &tokio::net::UdpSocket, count: usize) -> Vec<[u8; 3]> {
        let mut frames = Vec::new();
        for _ in 0..count {
            let mut buf = [0u8; 8];
            let (n, _) = tokio::time::timeout(Duration::from_secs(2), device.recv_from(&mut buf))
                .await
                .expect("timed out waiting for frame")
                .unwrap();
            assert_eq!(n, 3, "every frame is exactly 3 bytes");
            frames.push([buf[0], buf[1], buf[2]]);
        }
        frames
    }

    async fn assert_no_more_frames(device: &tokio::net::UdpSocket) {
        let mut buf = [0u8; 8];
        let result =
            tokio::time::timeout(Duration::from_millis(300), device.recv_from(&mut buf)).await;
        assert!(result.is_err(), "unexpected extra frame");
    }

    #[tokio::test]
    async fn test_group_id_range() {
        let controller = Controller::new("127.0.0.1", None);
        for id in GROUP_IDS {
            assert!(controller.group(id).is_some());
        }
        assert!(controller.group(0).is_none());
        assert!(controller.group(5).is_none());
    }

    #[tokio::test]
    async fn test_single_frame_commands_use_group_keys() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(3).unwrap();

        group.on().await.unwrap();
        group.off().await.unwrap();
        group.white().await.unwrap();
        group.disco().await.unwrap();

        // Group 3 offsets every base key by 4.
        let frames = recv_frames(&device, 4).await;
        assert_eq!(frames[0], [0x49, 0x00, 0x55]);
        assert_eq!(frames[1], [0x4A, 0x00, 0x55]);
        assert_eq!(frames[2], [0xC9, 0x00, 0x55]);
        assert_eq!(frames[3], [0x51, 0x00, 0x55]);
    }

    #[tokio::test]
    async fn test_night_sends_off_first_with_settle() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        let start = Instant::now();
        group.night().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));

        let frames = recv_frames(&device, 2).await;
        assert_eq!(frames[0], [0x46, 0x00, 0x55]);
        assert_eq!(frames[1], [0xC6, 0x00, 0x55]);
    }

    #[tokio::test]
    async fn test_set_hue_activates_first() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        let start = Instant::now();
        group.set_hue(0xAA).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));

        let frames = recv_frames(&device, 2).await;
        assert_eq!(frames[0], [0x45, 0x00, 0x55]);
        assert_eq!(frames[1], [0x40, 0xAA, 0x55]);
    }

    #[tokio::test]
    async fn test_brightness_ceiling() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        assert_eq!(
            group.set_brightness(0x1C).await.unwrap_err(),
            Error::InvalidBrightness(0x1C)
        );
        // The invalid request must not have produced any frame.
        assert_no_more_frames(&device).await;

        group.set_brightness(0x1B).await.unwrap();
        let frames = recv_frames(&device, 2).await;
        assert_eq!(frames[0], [0x45, 0x00, 0x55]);
        assert_eq!(frames[1], [0x4E, 0x1B, 0x55]);
    }

    #[tokio::test]
    async fn test_brightness_validated_before_transport() {
        let controller = Controller::new("127.0.0.1", None);
        let group = controller.group(1).unwrap();
        assert_eq!(
            group.set_brightness(0xFF).await.unwrap_err(),
            Error::InvalidBrightness(0xFF)
        );
    }

    #[tokio::test]
    async fn test_apply_color_near_black_turns_off() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        // round(0.03 * 27) == 1, below the on threshold.
        let color = Hsv::create(0.0, 1.0, 0.03).unwrap();
        group.apply_color(&color).await.unwrap();

        let frames = recv_frames(&device, 1).await;
        assert_eq!(frames[0], [0x46, 0x00, 0x55]);
        assert_no_more_frames(&device).await;
    }

    #[tokio::test]
    async fn test_apply_color_level_two_stays_on() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        // round(v * 27) == 2 is the inclusive lower bound for "on".
        let color = Hsv::create(0.0, 0.3, 2.0 / 27.0).unwrap();
        group.apply_color(&color).await.unwrap();

        let frames = recv_frames(&device, 4).await;
        assert_ne!(frames[0], [0x46, 0x00, 0x55]);
        assert_eq!(frames[3], [0x4E, 0x02, 0x55]);
    }

    #[tokio::test]
    async fn test_apply_color_desaturated_uses_white_channel() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        let color = Hsv::create(200.0, 0.3, 1.0).unwrap();
        group.apply_color(&color).await.unwrap();

        // White frame, activate pulses, brightness. No hue frame anywhere.
        let frames = recv_frames(&device, 4).await;
        assert_eq!(frames[0], [0xC5, 0x00, 0x55]);
        assert_eq!(frames[1], [0x45, 0x00, 0x55]);
        assert_eq!(frames[2], [0x45, 0x00, 0x55]);
        assert_eq!(frames[3], [0x4E, 0x1B, 0x55]);
        assert!(frames.iter().all(|f| f[0] != 0x40));
    }

    #[tokio::test]
    async fn test_apply_color_saturated_sends_hue() {
        let (device, controller) = fake_bridge().await;
        let group = controller.group(1).unwrap();

        // 240 - 300 wraps to 300 degrees, which scales to byte 213.
        let color = Hsv::create(300.0, 1.0, 1.0).unwrap();
        group.apply_color(&color).await.unwrap();

        let frames = recv_frames(&device, 6).await;
        assert_eq!(frames[2], [0x40, 213, 0x55]);
        assert_eq!(frames[5], [0x4E, 0x1B, 0x55]);
    }
}
