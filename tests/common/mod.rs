#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

/// The server binary running on its own port; killed on drop.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_people-api"));
        cmd.env("PEOPLE_API_HOST", "127.0.0.1")
            .env("PEOPLE_API_PORT", port.to_string())
            .env("APP_ENV", "development")
            .env_remove("PEOPLE_API_RESOURCE_PATH")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        let url = format!("{}/health", self.base_url);
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn people_url(&self) -> String {
        format!("{}/people", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub async fn start_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
