//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//!   FramedRead<LinesCodec> ──▶ Registry::dispatch ──▶ mpsc<Reply>
//!                                                        │
//!                               writer task ◀────────────┘
//!                                   │
//!                                   ▼
//!                         FramedWrite<LinesCodec>
//! ```
//!
//! Replies are queued so that a slow client never blocks command handling
//! for longer than the queue allows.

mod error_handling;

use error_handling::{ReadErrorAction, classify_read_error};

use crate::config::LimitsConfig;
use crate::error::HandlerError;
use crate::handlers::{Context, Registry};
use crate::reply::{Code, Reply};
use crate::state::{Matrix, Session};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, warn};

/// A client connection handler.
pub struct Connection {
    uid: String,
    addr: SocketAddr,
    stream: TcpStream,
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
    limits: LimitsConfig,
}

impl Connection {
    /// Create a new connection handler.
    pub fn new(
        uid: String,
        stream: TcpStream,
        addr: SocketAddr,
        matrix: Arc<Matrix>,
        registry: Arc<Registry>,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            uid,
            addr,
            stream,
            matrix,
            registry,
            limits,
        }
    }

    /// Run the connection until the client quits or disconnects.
    pub async fn run(self) -> anyhow::Result<()> {
        let (read_half, write_half) = self.stream.into_split();
        let mut reader = FramedRead::new(
            read_half,
            LinesCodec::new_with_max_length(self.limits.max_line_length),
        );
        let mut writer = FramedWrite::new(write_half, LinesCodec::new());

        let (tx, mut rx) = mpsc::channel::<Reply>(self.limits.outgoing_queue);

        let writer_task = tokio::spawn(async move {
            while let Some(reply) = rx.recv().await {
                writer.send(reply.to_string()).await?;
            }
            Ok::<_, LinesCodecError>(())
        });

        tx.send(Reply::ok(format!(
            "{} ready, you are {}",
            self.matrix.server_name, self.uid
        )))
        .await?;

        let mut session = Session::default();
        // FramedRead yields a single None after a decode error, then resumes
        let mut resume_after_error = false;
        let result: anyhow::Result<()> = loop {
            let line = match reader.next().await {
                None if resume_after_error => {
                    resume_after_error = false;
                    continue;
                }
                None => {
                    debug!(uid = %self.uid, "Client closed connection");
                    break Ok(());
                }
                Some(Ok(line)) => line,
                Some(Err(e)) => match classify_read_error(&e) {
                    ReadErrorAction::InputTooLong => {
                        debug!(uid = %self.uid, limit = self.limits.max_line_length, "Line too long");
                        let reply = Reply::new(Code::InputTooLong, "Input line too long");
                        if tx.send(reply).await.is_err() {
                            break Ok(());
                        }
                        resume_after_error = true;
                        continue;
                    }
                    ReadErrorAction::Disconnect => break Err(e.into()),
                },
            };

            if line.is_empty() {
                continue;
            }

            let mut ctx = Context {
                uid: &self.uid,
                matrix: &self.matrix,
                sender: &tx,
                session: &mut session,
                remote_addr: self.addr,
                registry: &self.registry,
            };

            match self.registry.dispatch(&mut ctx, &line).await {
                Ok(()) => {}
                Err(HandlerError::Quit(_)) => break Ok(()),
                Err(e) => break Err(e.into()),
            }
        };

        // Closing the queue lets the writer flush what is left and exit
        drop(tx);
        match writer_task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(uid = %self.uid, error = %e, "Writer stopped"),
            Err(e) => warn!(uid = %self.uid, error = %e, "Writer task failed"),
        }

        result
    }
}
