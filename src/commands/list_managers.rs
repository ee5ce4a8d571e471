//! `list-managers`: every registered manager, its availability, and the
//! auto-detected pick.

use crate::backends::ManagerDescriptor;
use crate::commands::Context;
use crate::error::Result;
use crate::ui as output;
use crate::utils::machine_output::{self, OutputFormat};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerRow {
    pub name: String,
    pub command: String,
    pub available: bool,
    pub auto_detected: bool,
}

#[derive(Debug, Serialize)]
struct ListManagersData {
    managers: Vec<ManagerRow>,
    auto_detected: Option<String>,
}

/// One row per registry entry, availability probed fresh.
pub fn collect_rows(ctx: &Context<'_>, detected: Option<&ManagerDescriptor>) -> Vec<ManagerRow> {
    ctx.registry
        .iter()
        .map(|m| ManagerRow {
            name: m.name.to_string(),
            command: m.command.to_string(),
            available: ctx.probe.is_available(m.command),
            auto_detected: detected.is_some_and(|d| d.name == m.name),
        })
        .collect()
}

/// Plain-text listing: `<name> - <command> <status>` per manager plus a
/// trailing detection line.
pub fn render_table(rows: &[ManagerRow]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);

    for row in rows {
        let status = if row.available {
            "available"
        } else {
            "not available"
        };
        let marker = if row.auto_detected {
            " (auto-detected)"
        } else {
            ""
        };
        lines.push(format!(
            "  {:12} - {:12} {}{}",
            row.name, row.command, status, marker
        ));
    }

    lines.push(String::new());
    match rows.iter().find(|r| r.auto_detected) {
        Some(row) => lines.push(format!("Auto-detected package manager: {}", row.name)),
        None => lines.push("No package manager auto-detected".to_string()),
    }

    lines
}

pub fn run(ctx: &Context<'_>, format: OutputFormat) -> Result<i32> {
    let detected = ctx.detector.detect(ctx.registry, ctx.platform, ctx.probe);
    let rows = collect_rows(ctx, detected);

    if format != OutputFormat::Table {
        let data = ListManagersData {
            auto_detected: detected.map(|m| m.name.to_string()),
            managers: rows,
        };
        machine_output::emit_v1("list-managers", data, vec![], vec![], format)?;
        return Ok(0);
    }

    output::header("Available package managers:");
    println!();
    for line in render_table(&rows) {
        println!("{}", line);
    }

    Ok(0)
}
