//! Test line client.
//!
//! Sends command lines and reads reply lines for assertions.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
    /// Connection ID announced in the greeting.
    pub uid: String,
}

impl TestClient {
    /// Connect to a test server and consume the greeting.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;

        let (read_half, write_half) = stream.into_split();
        let mut client = Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
            uid: String::new(),
        };

        let greeting = client.recv().await?;
        client.uid = greeting
            .rsplit(' ')
            .next()
            .filter(|_| greeting.starts_with("200 "))
            .ok_or_else(|| anyhow::anyhow!("Unexpected greeting: {greeting}"))?
            .to_string();

        Ok(client)
    }

    /// Send a raw line.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single reply line.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a reply line with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("Connection closed");
        }
        Ok(line.trim_end().to_string())
    }

    /// Send a line and receive exactly one reply.
    pub async fn command(&mut self, line: &str) -> anyhow::Result<String> {
        self.send(line).await?;
        self.recv().await
    }

    /// Receive replies until the predicate returns true.
    #[allow(dead_code)]
    pub async fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut lines = Vec::new();
        loop {
            let line = self.recv().await?;
            let done = predicate(&line);
            lines.push(line);
            if done {
                break;
            }
        }
        Ok(lines)
    }

    /// Send a line and receive replies until the predicate returns true.
    #[allow(dead_code)]
    pub async fn recv_until_after<F>(&mut self, line: &str, predicate: F) -> anyhow::Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        self.send(line).await?;
        self.recv_until(predicate).await
    }

    /// Assert nothing arrives within a short window.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self) -> anyhow::Result<()> {
        match self.recv_timeout(Duration::from_millis(200)).await {
            Ok(line) => anyhow::bail!("Unexpected reply: {line}"),
            Err(_) => Ok(()),
        }
    }

    /// Wait for the server to close the connection.
    #[allow(dead_code)]
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let n = timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await??;
            if n == 0 {
                return Ok(());
            }
        }
    }

    /// Log in as the configured test operator.
    #[allow(dead_code)]
    pub async fn oper_up(&mut self) -> anyhow::Result<()> {
        let reply = self.command(".oper testop testpass").await?;
        if !reply.starts_with("200 ") {
            anyhow::bail!("Operator login failed: {reply}");
        }
        Ok(())
    }
}
