//! Headless runners for `--headless` and `--list-countries`

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dialgen_app::services::{Exporter, FsExporter};
use dialgen_core::prelude::*;
use dialgen_core::{export_content, file_name_for, generate, validate_count, CountryDirectory};
use dialgen_core::{ResultSet, RngSource};

use super::{country_row, verify_shape, write_numbers, HeadlessOptions};
use crate::app::{init_logging, LaunchOptions};

/// Generate once for the selected country and print or export the numbers
pub async fn run_headless(launch: &LaunchOptions, options: &HeadlessOptions) -> Result<()> {
    init_logging();

    let state = launch.build_state()?;
    let country = state
        .selected_country()
        .cloned()
        .ok_or_else(|| Error::unknown_country(launch.country.clone().unwrap_or_default()))?;
    let count = validate_count(
        launch
            .count
            .unwrap_or(state.settings.generator.default_count),
    )?;

    info!(
        "Headless generation: {} x {} (seed: {:?})",
        count, country.id, state.settings.generator.seed
    );
    let mut rng = RngSource::from_seed_option(state.settings.generator.seed);
    let results = generate(&country, count, &mut rng)?;

    if options.check {
        verify_shape(&country, &results)?;
        eprintln!(
            "checked {} numbers: all match the {} shape",
            results.len(),
            country.dial_code
        );
    }

    match &options.output {
        Some(target) => {
            let path = export_to(target, &results).await?;
            eprintln!("exported {} numbers to {}", results.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_numbers(&mut stdout, &results, options.json)?;
        }
    }

    Ok(())
}

/// Write the export file; an existing directory gets the suggested file name
async fn export_to(target: &Path, results: &ResultSet) -> Result<PathBuf> {
    let (directory, file_name) = if target.is_dir() {
        (target.to_path_buf(), file_name_for(results))
    } else {
        let directory = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::export(format!("not a file path: {}", target.display())))?;
        (directory, file_name)
    };

    FsExporter::new()
        .export(&directory, &file_name, &export_content(results))
        .await
}

/// Print the countries matching `query` (all of them when absent)
pub fn list_countries<W: Write>(
    launch: &LaunchOptions,
    query: Option<&str>,
    out: &mut W,
) -> Result<usize> {
    let settings = launch.settings();
    let directory = CountryDirectory::with_custom(settings.countries);
    let matches = directory.search_entries(query.unwrap_or(""));

    for country in &matches {
        writeln!(out, "{}", country_row(country))?;
    }
    out.flush()?;
    Ok(matches.len())
}
