use std::env;

use anyhow::{Result, bail};

use innings_terminal::{feed, query};

/// One-shot query against the configured source, for scripting and quick
/// checks without the dashboard:
///
///   INNINGS_SOURCE=Sources/Source.csv cargo run --bin ask -- what are my total runs?
fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let question = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if question.trim().is_empty() {
        bail!("usage: ask <question>");
    }

    let source = feed::configured_source();
    let records = feed::load_records(&source)?;
    println!("{}", query::answer(&question, &records));
    Ok(())
}
