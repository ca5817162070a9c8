use std::path::{Path, PathBuf};

use buildflow::{AppConfig, CoreError, ResolutionRequest};
use log::{debug, error};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Uso: buildflow resolve --strategy <JSON> --build <JSON> [--run <JSON>] \
                     [--service-account <NOMBRE>] [--fingerprint]";

/// Argumentos de `buildflow resolve`.
#[derive(Debug, Default, PartialEq)]
struct ResolveArgs {
    strategy: Option<PathBuf>,
    build: Option<PathBuf>,
    run: Option<PathBuf>,
    service_account: Option<String>,
    fingerprint_only: bool,
}

fn parse_resolve_args(args: &[String]) -> ResolveArgs {
    let mut out = ResolveArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => { i += 1; if i < args.len() { out.strategy = Some(PathBuf::from(&args[i])); } }
            "--build" => { i += 1; if i < args.len() { out.build = Some(PathBuf::from(&args[i])); } }
            "--run" => { i += 1; if i < args.len() { out.run = Some(PathBuf::from(&args[i])); } }
            "--service-account" => { i += 1; if i < args.len() { out.service_account = Some(args[i].clone()); } }
            "--fingerprint" => out.fingerprint_only = true,
            _ => {}
        }
        i += 1;
    }
    out
}

fn resolve(config: &AppConfig, args: &ResolveArgs, strategy: &Path, build: &Path) -> Result<String, CoreError> {
    debug!("[buildflow resolve] config={config:?}");
    let request = ResolutionRequest::load(strategy, build, args.run.as_deref())?
        .with_service_account(args.service_account.clone());
    let task = request.assemble(config)?;
    if args.fingerprint_only {
        Ok(task.fingerprint()?)
    } else {
        Ok(serde_json::to_string_pretty(&task)?)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // también captura los records de `log` emitidos por las librerías
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();
}

fn main() {
    buildflow::config::init_dotenv();
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] != "resolve" {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    let parsed = parse_resolve_args(&args[2..]);
    let (Some(strategy), Some(build)) = (parsed.strategy.clone(), parsed.build.clone()) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    match AppConfig::from_env().and_then(|config| resolve(&config, &parsed, &strategy, &build)) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            error!("[buildflow resolve] {e}");
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
