//! Send-only ports to the host process.
use crate::mcp::{Bytes, Message};

use futures::StreamExt;
use futures::channel::mpsc;

use std::io;
use std::sync::Arc;

/// A one-way channel to the host.
///
/// Posting hands a serialized [`Message`] off and returns right away.
/// There is no reply.
pub trait Transport {
    fn post(&self, message: Bytes) -> io::Result<()>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn post(&self, message: Bytes) -> io::Result<()> {
        T::post(self, message)
    }
}

impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    fn post(&self, message: Bytes) -> io::Result<()> {
        T::post(self, message)
    }
}

/// Creates an in-process [`Transport`] together with the host end.
pub fn channel() -> (Channel, Receiver) {
    let (sender, receiver) = mpsc::unbounded();

    (Channel { sender }, Receiver { raw: receiver })
}

#[derive(Debug, Clone)]
pub struct Channel {
    sender: mpsc::UnboundedSender<Bytes>,
}

impl Transport for Channel {
    fn post(&self, message: Bytes) -> io::Result<()> {
        self.sender
            .unbounded_send(message)
            .map_err(|_| closed())
    }
}

/// The host end of a [`channel`].
#[derive(Debug)]
pub struct Receiver {
    raw: mpsc::UnboundedReceiver<Bytes>,
}

impl Receiver {
    /// Waits for the next message, in the order they were posted.
    ///
    /// Returns `None` once every [`Channel`] has been dropped.
    pub async fn next(&mut self) -> Option<io::Result<Message>> {
        let bytes = self.raw.next().await?;

        Some(Message::deserialize(&bytes).map_err(|error| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid message: {error}"),
            )
        }))
    }
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::ConnectionReset, "host is no longer listening")
}
