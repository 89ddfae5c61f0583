use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::str::FromStr;

use matcalc_cli::input::{check_dimensions, load_matrix, load_run_config, RunConfig};
use matcalc_cli::operation::{Operation, Workspace};
use matcalc_cli::output::{render_outcome, render_outcome_json};
use matcalc_cli::selftest::run_self_tests;
use matcalc_engine::random_matrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATCALC_LOG", "error,matcalc=info"))
        .init();

    let matches = Command::new("matcalc")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("matcalc - dense matrix calculator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Apply a matrix operation to matrices loaded from files")
                .arg(
                    Arg::new("operation")
                        .help(format!(
                            "Operation to perform. One of: {}",
                            Operation::NAMES.join(", ")
                        ))
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("matrix_a")
                        .short('a')
                        .long("matrix-a")
                        .help("Path to matrix A (*.json, *.csv or *.tsv)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("matrix_b")
                        .short('b')
                        .long("matrix-b")
                        .help("Path to matrix B (*.json, *.csv or *.tsv)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("scalar")
                        .short('k')
                        .long("scalar")
                        .help("Scalar for scalar-a / scalar-b")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .help("Size of the identity matrix. Defaults to the row count of A.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON run configuration")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .help("Decimal places in the printed result. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the result as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Generate a random example matrix as JSON")
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .short('c')
                        .long("cols")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for reproducible output")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a JSON run configuration")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("File to write the matrix to. Defaults to stdout.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("selftest").about("Run the built-in arithmetic checks"))
        .subcommand(Command::new("config").about("Print the default run configuration as JSON"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("run", sub_m)) => handle_run(sub_m),
        Some(("random", sub_m)) => handle_random(sub_m),
        Some(("selftest", _)) => handle_selftest(),
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&RunConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = outcome {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn resolve_config(matches: &ArgMatches) -> Result<RunConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[matcalc] Using config: {:?}", path);
            load_run_config(path)
        }
        None => {
            log::debug!("[matcalc] No config provided; using defaults.");
            Ok(RunConfig::default())
        }
    }
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let op_name: &String = matches
        .get_one("operation")
        .ok_or_else(|| anyhow::anyhow!("operation is required"))?;
    let operation = Operation::from_str(op_name).map_err(anyhow::Error::msg)?;

    let mut config = resolve_config(matches)?;
    if let Some(&precision) = matches.get_one::<usize>("precision") {
        config.precision = precision;
    }

    let mut ws = Workspace {
        scalar: matches.get_one::<f64>("scalar").copied(),
        identity_size: matches.get_one::<usize>("size").copied(),
        ..Workspace::default()
    };
    if let Some(path) = matches.get_one::<PathBuf>("matrix_a") {
        let a = load_matrix(path)?;
        check_dimensions("A", &a, config.max_dimension)?;
        ws.a = Some(a);
    }
    if let Some(path) = matches.get_one::<PathBuf>("matrix_b") {
        let b = load_matrix(path)?;
        check_dimensions("B", &b, config.max_dimension)?;
        ws.b = Some(b);
    }
    if let Some(n) = ws.identity_size {
        if n == 0 || n > config.max_dimension {
            anyhow::bail!(
                "Identity size must be between 1 and {}, got {}",
                config.max_dimension,
                n
            );
        }
    }

    log::info!("[matcalc] Running {}", operation);
    let outcome = operation.apply(&ws, &config.tolerances)?;

    if matches.get_flag("json") {
        println!("{}", render_outcome_json(&operation, &outcome)?);
    } else {
        print!("{}", render_outcome(&operation, &outcome, config.precision));
    }
    Ok(())
}

fn handle_random(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let rows = *matches
        .get_one::<usize>("rows")
        .ok_or_else(|| anyhow::anyhow!("rows is required"))?;
    let cols = *matches
        .get_one::<usize>("cols")
        .ok_or_else(|| anyhow::anyhow!("cols is required"))?;
    if rows > config.max_dimension || cols > config.max_dimension {
        anyhow::bail!(
            "Dimensions must be between 1x1 and {}x{}",
            config.max_dimension,
            config.max_dimension
        );
    }

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let matrix = random_matrix(&mut rng, rows, cols, &config.random)?;
    let json = serde_json::to_string(&matrix)?;

    match matches.get_one::<PathBuf>("output_file") {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            log::info!("[matcalc] Wrote {}x{} matrix to {:?}", rows, cols, path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn handle_selftest() -> Result<()> {
    let results = run_self_tests();
    let mut failed = 0;
    for r in &results {
        let mark = if r.passed { "PASS" } else { "FAIL" };
        println!("[{}] {}: {}", mark, r.name, r.message);
        if !r.passed {
            failed += 1;
        }
    }
    println!(
        "Self-tests completed: {} passed, {} failed",
        results.len() - failed,
        failed
    );
    if failed > 0 {
        anyhow::bail!("{} self-test(s) failed", failed);
    }
    Ok(())
}
