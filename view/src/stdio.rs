use crate::mcp::Bytes;
use crate::transport::Transport;

use futures::StreamExt;
use futures::channel::mpsc;
use tokio::io::{self, AsyncWrite, AsyncWriteExt};
use tokio::task;

/// Posts messages as newline-delimited JSON.
///
/// Writing happens in a background task, so this must be created inside
/// a tokio runtime.
#[derive(Debug, Clone)]
pub struct Stdio {
    output: mpsc::UnboundedSender<Bytes>,
}

impl Stdio {
    pub fn current() -> Self {
        Stdio::custom(io::stdout())
    }

    pub fn custom(mut output: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        let (sender, mut receiver) = mpsc::unbounded::<Bytes>();

        drop(task::spawn(async move {
            while let Some(bytes) = receiver.next().await {
                if let Err(error) = write(&bytes, &mut output).await {
                    log::error!("{error}");
                    return;
                }
            }
        }));

        Self { output: sender }
    }
}

impl Transport for Stdio {
    fn post(&self, message: Bytes) -> io::Result<()> {
        self.output.unbounded_send(message).map_err(|_| {
            io::Error::new(io::ErrorKind::ConnectionReset, "output was closed")
        })
    }
}

async fn write(data: &[u8], writer: &mut (dyn AsyncWrite + Send + Unpin)) -> io::Result<()> {
    writer.write_all(data).await?;
    writer.write_u8(0xA).await?;
    writer.flush().await
}
