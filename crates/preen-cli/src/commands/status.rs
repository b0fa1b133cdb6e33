//! The status command: show applied and pending migrations.

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::commands::common;
use anyhow::Result;

pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let (options, logger) = common::prepare(global)?;
    let report = preen_runner::status(&options, &logger).await?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("Applied ({}):", report.applied.len());
            for record in &report.applied {
                println!("  V{}  {}  [{}]", record.version, record.name, record.applied_at);
            }
            println!("Pending ({}):", report.pending.len());
            for script in &report.pending {
                println!("  V{}  {}", script.version, script.name);
            }
        }
    }
    Ok(())
}
