use super::*;

#[test]
fn test_parse_run_with_defaults() {
    let cli = Cli::try_parse_from(["preen", "run"]).unwrap();
    assert_eq!(cli.global.project_dir, ".");
    assert!(cli.global.config.is_none());
    assert!(!cli.global.quiet);
    match cli.command {
        Commands::Run(args) => assert_eq!(args.output, OutputFormat::Text),
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_parse_status_with_json_output() {
    let cli = Cli::try_parse_from(["preen", "status", "--output", "json"]).unwrap();
    match cli.command {
        Commands::Status(args) => assert_eq!(args.output, OutputFormat::Json),
        other => panic!("expected status, got {other:?}"),
    }
}

#[test]
fn test_global_flags_work_after_subcommand() {
    let cli = Cli::try_parse_from([
        "preen", "run", "--folder", "sql", "--database", ":memory:", "--quiet",
    ])
    .unwrap();
    assert_eq!(cli.global.folder.as_deref(), Some("sql"));
    assert_eq!(cli.global.database.as_deref(), Some(":memory:"));
    assert!(cli.global.quiet);
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["preen", "rollback"]).is_err());
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["preen"]).is_err());
}
