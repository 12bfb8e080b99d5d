// tests/cli_exit.rs - Exit code and argument tests
use clap::Parser;
use linkrank_core::cli::args::DEFAULT_INPUT;
use linkrank_core::cli::{handlers, Cli, Commands};
use linkrank_core::config::{OutputFormat, RelaxationMode};
use linkrank_core::exit::LinkRankExit;
use linkrank_core::RankError;
use std::fs;

fn rank_args(argv: &[&str]) -> linkrank_core::cli::RankArgs {
    let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
    match cli.command {
        Some(Commands::Rank(args)) => args,
        _ => panic!("expected rank subcommand"),
    }
}

#[test]
fn test_exit_codes_distinct() {
    let codes = [
        LinkRankExit::Success,
        LinkRankExit::Error,
        LinkRankExit::InvalidInput,
        LinkRankExit::InvalidConfig,
        LinkRankExit::NotConverged,
    ]
    .map(LinkRankExit::code);
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_errors_map_to_exit_codes() {
    let parse = RankError::parse(3, "bad");
    assert_eq!(LinkRankExit::from(&parse), LinkRankExit::InvalidInput);
    assert_eq!(
        LinkRankExit::from(&RankError::InvalidDamping(1.0)),
        LinkRankExit::InvalidConfig
    );
    let stalled = anyhow::Error::new(RankError::NotConverged {
        iterations: 5,
        error: 0.1,
    });
    assert_eq!(LinkRankExit::from(&stalled), LinkRankExit::NotConverged);
    assert_eq!(
        LinkRankExit::from(&anyhow::anyhow!("other")),
        LinkRankExit::Error
    );
}

#[test]
fn test_rank_defaults_to_hollins_file() {
    let args = rank_args(&["linkrank", "rank"]);
    assert_eq!(args.file, std::path::PathBuf::from("hollins.dat"));
    assert!(args.damping.is_none());
}

#[test]
fn test_bare_invocation_ranks_default_file() {
    let cli = Cli::try_parse_from(["linkrank"]).unwrap();
    assert!(cli.command.is_none());

    let Commands::Rank(args) = cli.command.unwrap_or_default() else {
        panic!("expected rank to be the default command");
    };
    assert_eq!(args.file, std::path::PathBuf::from(DEFAULT_INPUT));
    // same settings as an explicit `linkrank rank`
    let explicit = rank_args(&["linkrank", "rank"]);
    let mut from_default = linkrank_core::Config::new();
    let mut from_explicit = linkrank_core::Config::new();
    args.apply_to(&mut from_default);
    explicit.apply_to(&mut from_explicit);
    assert_eq!(from_default, from_explicit);
    assert_eq!(args.file, explicit.file);
}

#[test]
fn test_flags_override_config() {
    let args = rank_args(&[
        "linkrank", "rank", "links.dat", "-d", "0.85", "-t", "2", "-k", "5", "--mode", "chaotic",
        "--format", "json",
    ]);
    let mut config = linkrank_core::Config::new();
    args.apply_to(&mut config);
    assert!((config.solver.damping - 0.85).abs() < f64::EPSILON);
    assert_eq!(config.solver.threads, 2);
    assert_eq!(config.solver.mode, RelaxationMode::Chaotic);
    assert_eq!(config.report.top_k, 5);
    assert_eq!(config.report.format, OutputFormat::Json);
}

#[test]
fn test_negative_top_k_rejected_by_parser() {
    assert!(Cli::try_parse_from(["linkrank", "rank", "-k", "-1"]).is_err());
}

#[test]
fn test_resolve_config_reads_explicit_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("custom.toml");
    fs::write(&path, "[solver]\ntolerance = 1e-8\n").unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let args = rank_args(&["linkrank", "rank", "--config", &path_arg, "-d", "0.5"]);
    let config = handlers::resolve_config(&args).unwrap();
    assert!((config.solver.tolerance - 1e-8).abs() < f64::EPSILON);
    assert!((config.solver.damping - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_resolve_config_rejects_bad_damping_flag() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let args = rank_args(&["linkrank", "rank", "--config", &path_arg, "-d", "1.0"]);
    let err = handlers::resolve_config(&args).unwrap_err();
    assert_eq!(LinkRankExit::from(&err), LinkRankExit::InvalidConfig);
}
