// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `inspect` subcommand: dataset sizes and boundary regions that fail to join.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use story_data::load_datasets;

use crate::session::Session;

/// Run the `inspect` subcommand.
pub async fn run(session: &Session, data: &Path) -> Result<()> {
    let prefs = &session.settings.data;
    let sources = prefs.sources(data);
    let datasets = load_datasets(&sources, &prefs.aggregate)
        .await
        .context("Data failed to load")?;

    let mut sizes = Table::new();
    sizes.load_preset(UTF8_FULL);
    sizes.set_header(vec!["source", "records", "file"]);
    let rows = [
        ("snapshot", datasets.snapshot().len(), &sources.snapshot),
        ("time series", datasets.series().len(), &sources.series),
        ("scatter", datasets.scatter().len(), &sources.scatter),
        ("boundaries", datasets.regions().len(), &sources.boundaries),
    ];
    for (name, count, path) in rows {
        sizes.add_row(vec![
            name.to_owned(),
            count.to_string(),
            path.display().to_string(),
        ]);
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{sizes}")?;
    match datasets.series_years() {
        Some(years) => writeln!(
            out,
            "aggregate `{}`: {}..={}",
            datasets.aggregate_name(),
            years.start(),
            years.end()
        )?,
        None => writeln!(out, "aggregate `{}`: no series", datasets.aggregate_name())?,
    }

    let names = prefs.reconciliation();
    let unresolved = names.unresolved(&datasets, prefs.join_key);
    if unresolved.is_empty() {
        writeln!(out, "all {} regions join to an entity", datasets.regions().len())?;
        return Ok(());
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["unresolved region", "id", "looked up as"]);
    for region in unresolved {
        table.add_row(vec![
            region.name.clone(),
            region.id.clone().unwrap_or_else(|| "-".to_owned()),
            names.canonical_name(&region.name).to_owned(),
        ]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}
