use crate::strip::{BoundaryLine, StripReport};
use colored::Colorize;
use std::io::Write;

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Line Range Strip                      ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

fn print_boundary(
    writer: &mut impl Write,
    line: &BoundaryLine,
    removed: bool,
) -> std::io::Result<()> {
    let tag = if removed {
        "removed".red().to_string()
    } else {
        "kept".green().to_string()
    };
    writeln!(writer, "  Line {} [{}]: {}", line.number, tag, line.content)
}

/// Print the diagnostics of a strip run for manual verification.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report(writer: &mut impl Write, report: &StripReport) -> std::io::Result<()> {
    writeln!(writer, "File: {}", report.file)?;
    writeln!(writer, "Total lines before: {}", report.lines_before)?;
    writeln!(writer, "Removing lines {}", report.range)?;

    if let Some(line) = &report.line_before_range {
        print_boundary(writer, line, false)?;
    }
    print_boundary(writer, &report.first_removed, true)?;
    if report.last_removed.number != report.first_removed.number {
        print_boundary(writer, &report.last_removed, true)?;
    }
    if let Some(line) = &report.line_after_range {
        print_boundary(writer, line, false)?;
    }

    writeln!(writer, "Total lines after: {}", report.lines_after)?;
    writeln!(writer)?;

    if report.written {
        writeln!(
            writer,
            "{} {} ({} lines removed)",
            "Stripped:".green(),
            report.file,
            report.removed_count()
        )?;
    } else {
        writeln!(
            writer,
            "{} {} was not modified",
            "[DRY-RUN]".yellow(),
            report.file
        )?;
    }
    Ok(())
}
