//! The run command: apply all pending migrations.

use crate::cli::{GlobalArgs, OutputFormat, RunArgs};
use crate::commands::common;
use anyhow::Result;

pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let (options, logger) = common::prepare(global)?;
    let summary = preen_runner::run(&options, &logger).await?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            if summary.is_noop() {
                println!("Nothing to apply ({} already applied).", summary.skipped);
            } else {
                for version in &summary.applied {
                    println!("  \u{2713} V{version}");
                }
                println!(
                    "Applied {} migration(s), {} already applied.",
                    summary.applied.len(),
                    summary.skipped
                );
            }
        }
    }
    Ok(())
}
