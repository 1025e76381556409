//! Bridge controller and global commands.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::errors::Error;
use crate::frame::Frame;
use crate::group::Group;
use crate::runtime::{AsyncUdpSocket, Mutex, UdpSocket};

type Result<T> = std::result::Result<T, Error>;

fn unconnected() -> Mutex<Option<UdpSocket>> {
    Mutex::new(None)
}

fn default_command_port() -> u16 {
    Controller::PORT
}

/// Represents one physical LimitLess/MiLight bridge.
///
/// A `Controller` owns the UDP transport toward the bridge and hands out
/// [`Group`] handles that route their frames through it. The transport is
/// opened once with [`Controller::open`] (or the [`Controller::connect`]
/// shortcut) and closed once with [`Controller::close`].
///
/// The socket sits behind an async mutex so that frames from concurrent
/// callers leave in issue order; the bridge applies frames strictly in
/// arrival order and has no concept of a "current operation".
///
/// # Example
///
/// ```
/// use limitless_lights_rs::Controller;
///
/// let controller = Controller::new("192.168.2.141", Some("Living Room"));
/// assert!(controller.group(1).is_some());
/// assert!(controller.group(5).is_none());
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
pub struct Controller {
    host: String,
    name: Option<String>,
    #[serde(default = "default_command_port")]
    port: u16,
    #[serde(skip, default = "unconnected")]
    socket: Mutex<Option<UdpSocket>>,
}

impl Controller {
    /// UDP port the bridge listens on for command frames.
    pub const PORT: u16 = 8899;

    /// Admin port the bridge uses for discovery. Reserved; this crate does
    /// not implement discovery.
    pub const ADMIN_PORT: u16 = 48899;

    /// Create a controller for the given host.
    ///
    /// The transport starts closed; call [`Controller::open`] before
    /// issuing commands.
    pub fn new(host: &str, name: Option<&str>) -> Self {
        Controller {
            host: String::from(host),
            name: name.map(String::from),
            port: Self::PORT,
            socket: unconnected(),
        }
    }

    /// Create a controller that sends to a non-standard command port.
    pub fn with_port(host: &str, port: u16) -> Self {
        Controller {
            port,
            ..Self::new(host, None)
        }
    }

    /// Create a controller and open its transport in one step.
    pub async fn connect(host: &str) -> Result<Self> {
        let controller = Self::new(host, None);
        controller.open().await?;
        Ok(controller)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Open the UDP transport toward the bridge.
    ///
    /// Opening an already-open controller replaces the previous socket.
    pub async fn open(&self) -> Result<()> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| Error::transport("bind", e))?;
        socket
            .connect(&format!("{}:{}", self.host, self.port))
            .await
            .map_err(|e| Error::transport("connect", e))?;
        *self.socket.lock().await = Some(socket);
        Ok(())
    }

    /// Close the transport.
    ///
    /// Commands fail with [`Error::ConnectionNotOpen`] until it is
    /// reopened.
    pub async fn close(&self) {
        *self.socket.lock().await = None;
    }

    /// Borrow a handle for one bulb group.
    ///
    /// Returns `None` for ids outside the bridge's addressing space
    /// ([`crate::GROUP_IDS`]).
    pub fn group(&self, id: u8) -> Option<Group<'_>> {
        Group::create(self, id)
    }

    /// Turn every group on this controller on.
    pub async fn all_on(&self) -> Result<()> {
        self.send_frame(Frame::new(Command::AllOn.base_key(), 0)).await
    }

    /// Turn every group on this controller off.
    pub async fn all_off(&self) -> Result<()> {
        self.send_frame(Frame::new(Command::AllOff.base_key(), 0)).await
    }

    /// Push one raw frame onto the wire.
    ///
    /// Fire-and-forget: a failed write is surfaced immediately, nothing is
    /// retried, and no response is awaited.
    pub(crate) async fn send_frame(&self, frame: Frame) -> Result<()> {
        let socket = self.socket.lock().await;
        let Some(socket) = socket.as_ref() else {
            return Err(Error::ConnectionNotOpen);
        };

        debug!("{} <- frame {:02x?}", self.host, frame.to_bytes());
        socket
            .send(&frame.to_bytes())
            .await
            .map_err(|e| Error::transport("send", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fake_bridge() -> (tokio::net::UdpSocket, Controller) {
        let device = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = device.local_addr().unwrap().port();
        let controller = Controller::with_port("127.0.0.1", port);
        controller.open().await.unwrap();
        (device, controller)
    }

    async fn recv_frame(device: &tokio::net::UdpSocket) -> [u8; 3] {
        let mut buf = [0u8; 8];
        let (n, _) = tokio::time::timeout(std::time::Duration::from_secs(2), device.recv_from(&mut buf))
            .await
            .expect("timed out waiting for frame")
            .unwrap();
        assert_eq!(n, 3, "every frame is exactly 3 bytes");
        [buf[0], buf[1], buf[2]]
    }

    #[tokio::test]
    async fn test_all_on_all_off_use_fixed_keys() {
        let (device, controller) = fake_bridge().await;

        controller.all_on().await.unwrap();
        assert_eq!(recv_frame(&device).await, [0x42, 0x00, 0x55]);

        controller.all_off().await.unwrap();
        assert_eq!(recv_frame(&device).await, [0x41, 0x00, 0x55]);
    }

    #[tokio::test]
    async fn test_send_before_open_fails() {
        let controller = Controller::new("127.0.0.1", None);
        assert_eq!(
            controller.all_on().await.unwrap_err(),
            Error::ConnectionNotOpen
        );
    }

    #[tokio::test]
    async fn test_close_drops_transport() {
        let (_device, controller) = fake_bridge().await;
        controller.close().await;
        assert_eq!(
            controller.all_off().await.unwrap_err(),
            Error::ConnectionNotOpen
        );
    }

    #[test]
    fn test_serialization_skips_socket() {
        let controller = Controller::new("192.168.2.141", Some("hallway"));
        let json = serde_json::to_value(&controller).unwrap();
        assert_eq!(json["host"], "192.168.2.141");
        assert_eq!(json["name"], "hallway");
        assert!(json.get("socket").is_none());
    }
}
