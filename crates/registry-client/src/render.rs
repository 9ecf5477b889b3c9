//! Plain-text rendering for the command-line client.

use std::io::{self, Write};

use producer_rules::format_document;

use crate::dashboard::{DashboardSummary, PieChart};
use crate::dto::Producer;

/// Width of a full percentage bar, in cells.
pub const BAR_WIDTH: usize = 30;

/// Writes the dashboard: headline figures followed by each chart.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_dashboard(out: &mut impl Write, summary: &DashboardSummary) -> io::Result<()> {
    writeln!(out, "Total farms:    {}", summary.farm_count)?;
    writeln!(out, "Total hectares: {:.2}", summary.total_area)?;
    for chart in [
        &summary.farms_by_state,
        &summary.area_by_state,
        &summary.crops,
        &summary.land_use,
    ] {
        writeln!(out)?;
        write_chart(out, chart)?;
    }
    Ok(())
}

/// Writes one chart as labelled percentage bars.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_chart(out: &mut impl Write, chart: &PieChart) -> io::Result<()> {
    writeln!(out, "{}", chart.title)?;
    if chart.is_empty() {
        return writeln!(out, "  (no data)");
    }
    let label_width = chart
        .slices
        .iter()
        .map(|slice| slice.label.chars().count())
        .max()
        .unwrap_or(0);
    for slice in &chart.slices {
        let fraction = chart.fraction(slice);
        writeln!(
            out,
            "  {label:<label_width$} {bar:<bar_width$} {percent:>6.1}%  ({value:.2})",
            label = slice.label,
            bar = "#".repeat(bar_cells(fraction)),
            bar_width = BAR_WIDTH,
            percent = percentage(fraction),
            value = slice.value,
        )?;
    }
    Ok(())
}

/// Writes producers as a table, one row each.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_table(out: &mut impl Write, producers: &[Producer]) -> io::Result<()> {
    if producers.is_empty() {
        return writeln!(out, "No producers registered.");
    }
    writeln!(
        out,
        "{:>6}  {:<18}  {:<24}  {:<24}  {:<20}  {:>2}  {:>10}  {:>10}  {:>10}  Crops",
        "Id", "Document", "Producer", "Farm", "City", "UF", "Total", "Farmable", "Vegetation"
    )?;
    for producer in producers {
        let fields = &producer.fields;
        writeln!(
            out,
            "{:>6}  {:<18}  {:<24}  {:<24}  {:<20}  {:>2}  {:>10.2}  {:>10.2}  {:>10.2}  {}",
            producer.id,
            format_document(&fields.document_number),
            fields.producer_name,
            fields.farm_name,
            fields.city,
            fields.state,
            fields.total_area,
            fields.farmable_area,
            fields.vegetation_area,
            fields.crops.join(", "),
        )?;
    }
    Ok(())
}

/// Writes one producer as labelled lines.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_detail(out: &mut impl Write, producer: &Producer) -> io::Result<()> {
    let fields = &producer.fields;
    writeln!(out, "Id:          {}", producer.id)?;
    writeln!(
        out,
        "Document:    {}",
        format_document(&fields.document_number)
    )?;
    writeln!(out, "Producer:    {}", fields.producer_name)?;
    writeln!(out, "Farm:        {}", fields.farm_name)?;
    writeln!(out, "Location:    {} / {}", fields.city, fields.state)?;
    writeln!(out, "Total area:  {:.2} ha", fields.total_area)?;
    writeln!(out, "Farmable:    {:.2} ha", fields.farmable_area)?;
    writeln!(out, "Vegetation:  {:.2} ha", fields.vegetation_area)?;
    writeln!(out, "Crops:       {}", fields.crops.join(", "))
}

#[expect(clippy::float_arithmetic, reason = "percent of a ratio")]
fn percentage(fraction: f64) -> f64 {
    fraction * 100.0
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "the fraction is clamped to 0..=1 before scaling to the bar width"
)]
fn bar_cells(fraction: f64) -> usize {
    let clamped = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (clamped * BAR_WIDTH as f64).round() as usize
}
