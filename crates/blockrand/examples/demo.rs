//! blockrand demo: generate, report, and export blocked randomizations.
//!
//! Demonstrates:
//!   1. An exact-fit request (24 subjects, blocks of 6, 3 treatments)
//!   2. A rejected request (block size 5 is not divisible by 3 treatments)
//!   3. A padded request (25 subjects rounded up to 30)
//!   4. A seeded run exported as JSON, with its fingerprint
//!
//! Run with:
//!   cargo run -p blockrand --example demo
//!
//! Set `RUST_LOG=debug` to see allocator tracing.

use blockrand::prelude::*;
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "--------------------";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ─── 1. Exact fit ───────────────────────────────────────────

    match generate_blocked_randomization(24, 6, 3) {
        Ok(allocation) => print!("{}", render_report(&allocation)),
        Err(e) => println!("Error: {e}"),
    }
    println!("{SEPARATOR}");

    // ─── 2. Rejected ────────────────────────────────────────────

    if let Err(e) = generate_blocked_randomization(20, 5, 3) {
        println!("Error Example: {e}");
    }
    println!("{SEPARATOR}");

    // ─── 3. Padded ──────────────────────────────────────────────

    let padded = generate_blocked_randomization(25, 6, 3)?;
    if let Some(w) = padded.warning() {
        println!("Warning Example: {w}");
    }
    println!("{SEPARATOR}");

    // ─── 4. Seeded JSON export ──────────────────────────────────

    let request = AllocationRequest::parse("8", "4", "2")?;
    let allocation = Allocator::seeded(2024).generate(&request)?;
    let fingerprint = sequence_fingerprint(allocation.sequence());
    let record = AllocationRecord::from(Ok::<_, AllocationError>(allocation));
    println!("{}", record.to_json_pretty()?);
    tracing::info!(fingerprint, "seeded allocation");
    println!("Fingerprint: {fingerprint:016x}");

    Ok(())
}
