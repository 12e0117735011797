//! Implementation of the `sitewright list` command.
//!
//! Three topics, all registry-driven: industries come from the built-in
//! content catalog, features and pages from the core registries.  Machine
//! formats (json, csv, list) bypass styling so piped consumers can parse them.

use serde_json::json;

use sitewright_adapters::builtin_library;
use sitewright_core::domain::{FEATURE_REGISTRY, PAGE_REGISTRY, StyleSource};

use crate::{
    cli::{ListArgs, ListFormat, ListTopic, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let listing = match args.topic {
        ListTopic::Industries => industries()?,
        ListTopic::Features => features(),
        ListTopic::Pages => pages(),
    };
    render(&listing, args.format, &output)
}

// ── Topic data ────────────────────────────────────────────────────────────────

/// One topic's rows, shaped once and rendered in any format.  The column
/// names double as JSON keys and CSV headers.
struct Listing {
    title: &'static str,
    columns: [&'static str; 3],
    rows: Vec<[String; 3]>,
}

fn industries() -> CliResult<Listing> {
    let library = builtin_library().map_err(|e| CliError::Core(e.into()))?;
    let rows = library
        .profiles()
        .map(|p| {
            [
                p.tag.to_string(),
                p.display_name.to_string(),
                p.seeds.len().to_string(),
            ]
        })
        .collect();

    Ok(Listing {
        title: "Available industries:",
        columns: ["tag", "name", "seeded_pages"],
        rows,
    })
}

fn features() -> Listing {
    let rows = FEATURE_REGISTRY
        .iter()
        .map(|def| {
            let pages = def
                .pages
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            [def.feature.to_string(), pages, def.summary.to_string()]
        })
        .collect();

    Listing {
        title: "Available features:",
        columns: ["tag", "adds_pages", "summary"],
        rows,
    }
}

fn pages() -> Listing {
    let rows = PAGE_REGISTRY
        .iter()
        .map(|def| {
            let style = match def.style {
                StyleSource::Own => "own",
                StyleSource::Shared => "shared",
            };
            [
                def.page.as_str().to_string(),
                def.page.route_path().to_string(),
                style.to_string(),
            ]
        })
        .collect();

    Listing {
        title: "Known pages:",
        columns: ["page", "route", "stylesheet"],
        rows,
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render(listing: &Listing, format: ListFormat, output: &OutputManager) -> CliResult<()> {
    match format {
        ListFormat::Table => {
            output.header(listing.title)?;

            // Column widths from the widest cell, header included.
            let mut widths = listing.columns.map(str::len);
            for row in &listing.rows {
                for (w, cell) in widths.iter_mut().zip(row.iter()) {
                    *w = (*w).max(cell.len());
                }
            }

            for row in &listing.rows {
                output.print(&format!(
                    "  {:w0$}  {:w1$}  {}",
                    row[0],
                    row[1],
                    row[2],
                    w0 = widths[0],
                    w1 = widths[1],
                ))?;
            }
        }

        ListFormat::List => {
            for row in &listing.rows {
                output.machine(&row[0])?;
            }
        }

        ListFormat::Json => {
            let values: Vec<_> = listing
                .rows
                .iter()
                .map(|row| {
                    json!({
                        (listing.columns[0]): row[0],
                        (listing.columns[1]): row[1],
                        (listing.columns[2]): row[2],
                    })
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".into());
            output.machine(&json)?;
        }

        ListFormat::Csv => {
            output.machine(&listing.columns.join(","))?;
            for row in &listing.rows {
                let line = row
                    .iter()
                    .map(|cell| csv_field(cell))
                    .collect::<Vec<_>>()
                    .join(",");
                output.machine(&line)?;
            }
        }
    }

    Ok(())
}

/// Quote a CSV field when it contains a comma or a quote.
fn csv_field(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
