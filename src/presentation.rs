// src/presentation.rs
use std::{
    io::{self, Write},
    path::Path,
};

use comfy_table::{Cell, CellAlignment, Table, presets};
use serde::Serialize;
use toolchain_domain::{CountSummary, DirectoryReport, InputFile};
use toolchain_usecase::EmitOutcome;

use crate::config::OutputFormat;

/// Render a line count summary.
pub fn print_count(out: &mut dyn Write, summary: &CountSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => print_count_table(out, summary),
        OutputFormat::Json => print_json(out, summary),
        OutputFormat::Yaml => print_yaml(out, summary),
    }
}

fn print_count_table(out: &mut dyn Write, summary: &CountSummary) -> io::Result<()> {
    let names: Vec<_> = summary.directories.iter().map(|d| d.directory_name.as_str()).collect();
    let listed = format_list(&names);

    writeln!(out, "Counting lines of code in {listed} (excluding whitespace lines)")?;
    writeln!(out)?;
    for report in &summary.directories {
        writeln!(out, "{}", directory_table(report))?;
        writeln!(out)?;
    }
    writeln!(out, "Total {listed} lines: {}.", summary.total)
}

fn directory_table(report: &DirectoryReport) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_HORIZONTAL_ONLY).set_header(vec![
        Cell::new(format!("File (in {})", report.directory_name)),
        Cell::new(format!("Lines ({})", report.total)).set_alignment(CellAlignment::Right),
    ]);
    for file in &report.files {
        table.add_row(vec![
            Cell::new(file.file_name()),
            Cell::new(file.lines).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// `a`, `a and b`, `a, b and c`.
fn format_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Render a loaded case input.
pub fn print_input(out: &mut dyn Write, input: &InputFile, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => print_input_table(out, input),
        OutputFormat::Json => print_json(out, input),
        OutputFormat::Yaml => print_yaml(out, input),
    }
}

fn print_input_table(out: &mut dyn Write, input: &InputFile) -> io::Result<()> {
    writeln!(out, "Input file:     {}", input.filename().display())?;
    writeln!(out, "Case directory: {}", input.case_dirpath().display())?;
    writeln!(out)?;

    let mut table = Table::new();
    table.load_preset(presets::ASCII_HORIZONTAL_ONLY).set_header(vec!["Parameter", "Value"]);
    for (key, value) in input.case_dict() {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    writeln!(out, "{table}")
}

/// Report what happened to the case fragment.
pub fn print_emit(out: &mut dyn Write, outcome: EmitOutcome, path: &Path) -> io::Result<()> {
    match outcome {
        EmitOutcome::Written => writeln!(out, "Wrote case fragment {}", path.display()),
        EmitOutcome::Unchanged => writeln!(out, "Case fragment {} is up to date", path.display()),
    }
}

fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn print_yaml<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_yaml::to_writer(&mut *out, value).map_err(io::Error::other)
}
