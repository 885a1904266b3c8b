use std::env;
use std::fs;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use anyhow::{Context, Result};

use crate::http_client::http_client;
use crate::record::{MatchRecord, parse_batting_csv};
use crate::sample;
use crate::state::{Delta, ProviderCommand};

pub const DEFAULT_SOURCE: &str = "Sources/Source.csv";
pub const DEMO_SOURCE: &str = "demo";

pub fn configured_source() -> String {
    env::var("INNINGS_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.to_string())
}

/// Spawn the provider thread that owns all source I/O. It loads once on
/// startup and again for every `Reload` command; the dashboard thread only
/// ever sees whole record sets via `Delta::SetRecords`.
pub fn spawn_source_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        let source = configured_source();
        deliver(&tx, &source);

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::Reload => deliver(&tx, &source),
            }
        }
    });
}

fn deliver(tx: &Sender<Delta>, source: &str) {
    match load_records(source) {
        Ok(records) => {
            let _ = tx.send(Delta::SetRecords {
                source: source.to_string(),
                records,
            });
        }
        Err(err) => {
            // One warning, no retry; the dashboard stays unpopulated.
            let _ = tx.send(Delta::Log(format!(
                "[WARN] Failed to load innings data from {source}: {err:#}"
            )));
        }
    }
}

/// Load and parse the configured source. `demo` yields the built-in sample
/// career; `http(s)://` sources are fetched over the network; anything else
/// is read as a local path.
pub fn load_records(source: &str) -> Result<Vec<MatchRecord>> {
    if source == DEMO_SOURCE {
        return Ok(sample::sample_career());
    }
    let raw = load_raw(source)?;
    Ok(parse_batting_csv(&raw))
}

fn load_raw(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = http_client()?;
        let response = client
            .get(source)
            .send()
            .with_context(|| format!("fetch {source}"))?
            .error_for_status()
            .context("source responded with an error status")?;
        response.text().context("read source body")
    } else {
        fs::read_to_string(source).with_context(|| format!("read {source}"))
    }
}
