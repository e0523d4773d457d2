mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use config::AppConfig;
use leaf_ingest_adapters::{
    present_category_report, present_preprocessed, present_sample_row, present_stats,
    present_stats_json, HeaderMetadataExtractor, ImageCrateAnalyzer, SqliteImageStore,
    TracingProgress, WalkdirImageDirectory,
};
use leaf_ingest_application::{
    AnalyzeImageCommand, ApplicationError, ImportService, PreprocessImageCommand, SampleQuery,
    SampleService, DEFAULT_SAMPLE_LIMIT,
};
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    let command = parse_command(&args);
    match run_command(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Import,
    Samples { limit: i64 },
    Analyze { path: Option<PathBuf>, json: bool },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Import);
    }

    match args[1].as_str() {
        "import" => Ok(Command::Import),
        "samples" => {
            let limit = match args.get(2) {
                None => DEFAULT_SAMPLE_LIMIT,
                Some(raw) => raw
                    .parse::<i64>()
                    .ok()
                    .filter(|limit| *limit > 0)
                    .ok_or_else(|| CommandError::Usage(format!("invalid sample limit: {raw}")))?,
            };
            Ok(Command::Samples { limit })
        }
        "analyze" => {
            let mut path = None;
            let mut json = false;
            for arg in &args[2..] {
                match arg.as_str() {
                    "--json" => json = true,
                    flag if flag.starts_with("--") => {
                        return Err(CommandError::Usage(format!("unknown option: {flag}")));
                    }
                    value if path.is_none() => path = Some(PathBuf::from(value)),
                    extra => {
                        return Err(CommandError::Usage(format!("unexpected argument: {extra}")));
                    }
                }
            }
            Ok(Command::Analyze { path, json })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Import => run_import(config),
        Command::Samples { limit } => {
            let rows = match build_sample_service(config) {
                Ok(service) => service
                    .read_samples(SampleQuery { limit })
                    .map_err(|error| CommandError::Runtime(format!("database error: {error}")))?,
                Err(CommandError::Runtime(msg)) => {
                    error!("{msg}");
                    Vec::new()
                }
                Err(usage) => return Err(usage),
            };
            if rows.is_empty() {
                println!("no images found in database");
                return Ok(());
            }
            for row in rows {
                println!("{}", present_sample_row(&row));
            }
            Ok(())
        }
        Command::Analyze { path, json } => {
            let service = build_sample_service(config)?;
            let path = match path {
                Some(path) => path,
                None => {
                    let sample = service
                        .first_sample()
                        .map_err(|error| CommandError::Runtime(error.to_string()))?;
                    println!("analysis for {} ({})", sample.file_name(), sample.label);
                    PathBuf::from(sample.file_path)
                }
            };

            let stats = service
                .analyze_image(AnalyzeImageCommand { path: path.clone() })
                .map_err(|error| runtime("analysis failed", error))?;
            if json {
                let rendered =
                    present_stats_json(&stats).map_err(|error| runtime("render failed", error))?;
                println!("{rendered}");
            } else {
                for line in present_stats(&stats) {
                    println!("{line}");
                }
            }

            let processed = service
                .preprocess_image(PreprocessImageCommand::square(path))
                .map_err(|error| runtime("preprocessing failed", error))?;
            for line in present_preprocessed(&processed) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Opens the shared connection, imports every category and closes the
/// connection again whether or not the run succeeded.
fn run_import(config: &AppConfig) -> Result<(), CommandError> {
    let store = SqliteImageStore::open(&config.database.path)
        .map_err(|error| runtime("database connection failed", error))?;
    info!("connected to database {}", config.database.path.display());

    let mut service = ImportService::new(
        config.import_settings(),
        Box::new(WalkdirImageDirectory),
        Box::new(HeaderMetadataExtractor),
        Box::new(store),
        Box::new(TracingProgress),
    );

    let outcome = service.run();
    if let Err(error) = service.close() {
        error!(%error, "failed to close database connection");
    }

    let summary = outcome.map_err(|error| runtime("import aborted", error))?;
    for report in &summary.categories {
        info!("{}", present_category_report(report));
    }
    Ok(())
}

fn build_sample_service(config: &AppConfig) -> Result<SampleService, CommandError> {
    let store = SqliteImageStore::open_existing(&config.database.path)
        .map_err(|error| runtime("database connection failed", error))?;
    Ok(SampleService::new(
        config.categories.clone(),
        Box::new(store),
        Box::new(ImageCrateAnalyzer),
    ))
}

fn runtime(context: &str, error: ApplicationError) -> CommandError {
    CommandError::Runtime(format!("{context}: {error}"))
}

fn print_usage() {
    println!("usage:");
    println!("  leaf-ingest [import]");
    println!("  leaf-ingest samples [limit]");
    println!("  leaf-ingest analyze [path] [--json]");
}
