//! Command handlers

use std::path::PathBuf;

use chrono::Local;

use routeopt_app::export::export_assignment;
use routeopt_app::constants::DEFAULT_CENTERS;
use routeopt_app::{Config, Session};
use routeopt_domain::model::CenterCatalog;
use routeopt_domain::service::compute_assignment;
use routeopt_infra::{load_catalog, load_zones};
use routeopt_types::{Error, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_assignment, output_centers};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let catalog = resolve_catalog(&cli, &config)?;

    match &cli.command {
        Commands::Assign { zones } => {
            let zones_path = resolve_zones_path(zones.as_ref(), &config)?;
            let zones = load_zones(&zones_path)?;
            let mut session = Session::new(catalog, zones);
            session.optimize()?;
            output_assignment(output_format, &session.grid_rows(), session.catalog())
        }

        Commands::Centers => output_centers(output_format, &catalog),

        Commands::Export { zones, output } => {
            let zones_path = resolve_zones_path(zones.as_ref(), &config)?;
            let zones = load_zones(&zones_path)?;
            let table = compute_assignment(&zones, &catalog)?;
            export_assignment(&table, &catalog, Local::now(), output)?;
            println!("Exported {} zones to {}", table.len(), output.display());
            Ok(())
        }

        Commands::Config => {
            println!("{}", config);
            Ok(())
        }
    }
}

fn resolve_catalog(cli: &Cli, config: &Config) -> Result<CenterCatalog> {
    match cli.centers.as_ref().or(config.centers_file.as_ref()) {
        Some(path) => load_catalog(path),
        None => Ok(DEFAULT_CENTERS.clone()),
    }
}

fn resolve_zones_path(arg: Option<&PathBuf>, config: &Config) -> Result<PathBuf> {
    arg.cloned()
        .or_else(|| config.zones_csv.clone())
        .ok_or_else(|| {
            Error::ZoneCsv(
                "no zones CSV given (pass --zones or set zones_csv in config)".to_string(),
            )
        })
}
