//! Turning outcomes into terminal output.

use std::io::{self, Write};

use fundraiser_reports::{ItemRow, MemberRow, Report};

use crate::session::Outcome;

pub trait Renderer {
    fn render(&self, out: &mut dyn Write, outcome: &Outcome) -> io::Result<()>;
}

/// Fixed-width tables with a `TOTAL` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    fn items(out: &mut dyn Write, report: &Report<ItemRow>) -> io::Result<()> {
        writeln!(out, "{:<3} {:<30} {:>6} {:>6} {:>6}", "ID", "Name", "Cost", "Sold", "Total")?;
        for row in &report.rows {
            writeln!(
                out,
                "{:>3} {:<30} {:>6} {:>6} {:>6}",
                row.id.0,
                row.name.as_str(),
                row.cost,
                row.sold,
                row.revenue
            )?;
        }
        writeln!(
            out,
            "{:<41} {:>6} {:>6}",
            "TOTAL", report.totals.quantity, report.totals.revenue
        )?;
        writeln!(out)
    }

    fn members(out: &mut dyn Write, report: &Report<MemberRow>) -> io::Result<()> {
        writeln!(out, "{:<8} {:<30} {:>6} {:>6}", "ID", "Name", "Sold", "Total")?;
        for row in &report.rows {
            writeln!(
                out,
                "{:<8} {:<30} {:>6} {:>6}",
                row.id.as_str(),
                row.name.as_str(),
                row.sold,
                row.revenue
            )?;
        }
        writeln!(
            out,
            "{:<39} {:>6} {:>6}",
            "TOTAL", report.totals.quantity, report.totals.revenue
        )?;
        writeln!(out)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, out: &mut dyn Write, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Items(report) => Self::items(out, report),
            Outcome::Members(report) => Self::members(out, report),
            Outcome::SaleRecorded(_) => writeln!(out),
            Outcome::Invalid(_) => writeln!(out, "Invalid Command"),
            Outcome::Quit => Ok(()),
        }
    }
}

/// One JSON document per outcome, newline-terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, out: &mut dyn Write, outcome: &Outcome) -> io::Result<()> {
        serde_json::to_writer(&mut *out, outcome)?;
        writeln!(out)
    }
}
