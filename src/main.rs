mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod shared;
mod version_recommendation;

use adapters::outbound::filesystem::{LocalRepository, ResolverAncestorSource};
use application::dto::RecommendationRequest;
use application::use_cases::RecommendVersionsUseCase;
use cli::Args;
use config::ConfigFile;
use shared::error::{AdvisorError, ExitCode};
use shared::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use version_recommendation::domain::{Coordinate, ModuleId};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration: explicit path wins over auto-discovery
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    // Validate repository root
    let repo_path = resolve_repository(&args, &config)?;

    // Declared dependencies: command line wins over config
    let declared = resolve_dependencies(&args, &config)?;

    // Build-level properties: command line entries override config entries
    let properties = resolve_properties(&args, &config)?;

    // Queries: command line wins over config
    let queries = resolve_queries(&args, &config)?;

    // Create adapters (Dependency Injection)
    let repository = LocalRepository::new(repo_path, declared);
    repository.validate()?;
    let ancestor_source = ResolverAncestorSource::new(repository.clone());

    // Create use case with injected dependencies
    let use_case = RecommendVersionsUseCase::new(repository, ancestor_source, properties);

    // Execute use case
    let request = RecommendationRequest::new(queries);
    let report = use_case.report(&request).await?;

    // Format and present output
    let formatter = args.format.create_formatter();
    let formatted_output = formatter.format(&report)?;

    match args.output {
        Some(output_path) => {
            let path = PathBuf::from(output_path);
            tokio::fs::write(&path, &formatted_output)
                .await
                .map_err(|e| AdvisorError::FileWriteError {
                    path,
                    details: e.to_string(),
                })?;
        }
        None => print!("{}", formatted_output),
    }

    if !request.is_full_report() && report.has_missing() {
        return Ok(ExitCode::NoRecommendation);
    }
    Ok(ExitCode::Success)
}

fn resolve_repository(args: &Args, config: &ConfigFile) -> Result<PathBuf> {
    args.repo
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.repository.clone())
        .ok_or_else(|| {
            AdvisorError::InvalidRepository {
                path: PathBuf::new(),
                reason: "No repository specified. Pass --repo or set 'repository' in bom-advisor.toml".to_string(),
            }
            .into()
        })
}

fn resolve_dependencies(args: &Args, config: &ConfigFile) -> Result<Vec<Coordinate>> {
    let notations: &[String] = if args.dependency.is_empty() {
        config.dependencies.as_deref().unwrap_or(&[])
    } else {
        &args.dependency
    };
    notations.iter().map(|n| Coordinate::parse(n)).collect()
}

fn resolve_properties(args: &Args, config: &ConfigFile) -> Result<HashMap<String, String>> {
    let mut properties = config.properties.clone();
    for assignment in &args.property {
        let Some((key, value)) = assignment.split_once('=') else {
            anyhow::bail!(
                "Invalid property: \"{}\"\n\n💡 Hint: Properties use key=value notation, e.g. -P spring.version=4.3.2.RELEASE",
                assignment
            );
        };
        properties.insert(key.trim().to_string(), value.to_string());
    }
    Ok(properties)
}

fn resolve_queries(args: &Args, config: &ConfigFile) -> Result<Vec<ModuleId>> {
    let notations: &[String] = if args.query.is_empty() {
        config.queries.as_deref().unwrap_or(&[])
    } else {
        &args.query
    };
    notations.iter().map(|n| ModuleId::parse(n)).collect()
}
