use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;

use crate::adapters::map::DEFAULT_LEVEL;
use crate::adapters::{ChartData, MapView, RoadviewPanel};
use crate::api::AccidentSource;
use crate::app::report::summary_sentence;
use crate::app::{handle_input, App};
use crate::domain::{AccidentReport, YearSelection};
use crate::ui;

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Fetch one year and print it without touching the terminal.
pub async fn run_headless(
    source: &dyn AccidentSource,
    year: YearSelection,
    json: bool,
) -> Result<()> {
    log::info!("headless fetch for {year}");
    let report = source
        .fetch(year)
        .await
        .wrap_err_with(|| format!("failed to fetch the {year} report"))?;

    let summary = HeadlessReport::new(year, &report);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_headless_text(&summary);
    }

    Ok(())
}

fn render_headless_text(summary: &HeadlessReport) {
    println!("\nSilver Zone report");
    println!("==================");
    println!("{}", summary.summary);

    if summary.total_count == 0 {
        println!("No data for this year");
        return;
    }

    println!("\nHotspots:");
    for (point, marker) in summary.chart.points.iter().zip(&summary.map.markers) {
        println!(
            "- {} | occurrences {} | severe injuries {} | fatalities {} | {:.6}, {:.6}",
            point.name,
            point.occurrences,
            point.severe_injuries,
            point.fatalities,
            marker.position.lat,
            marker.position.lng
        );
    }

    if let Some(panel) = summary.roadview.first() {
        println!("\nRoad view of the first spot: {}", panel.link());
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    year: YearSelection,
    total_count: u64,
    summary: String,
    chart: ChartData,
    map: MapView,
    roadview: Vec<RoadviewPanel>,
}

impl HeadlessReport {
    fn new(year: YearSelection, report: &AccidentReport) -> Self {
        // Same rule as the screen: adapters only see non-empty reports.
        let records = if report.has_data() {
            report.records.as_slice()
        } else {
            &[]
        };

        Self {
            year,
            total_count: report.total_count,
            summary: summary_sentence(year, report.total_count),
            chart: ChartData::from_records(records),
            map: MapView::from_records(records, DEFAULT_LEVEL),
            roadview: RoadviewPanel::from_records(records),
        }
    }
}

/// Run the main application event loop
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        // Update animations
        app.update();

        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        if matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) => handle_input(app, key),
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        log::debug!("redraw after resize failed");
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_)) => {}
                Err(e) => log::debug!("event read failed: {e}"),
            }
        }

        app.apply_fetch_outcomes();
        // Let the fetch task make progress between frames.
        tokio::task::yield_now().await;
    }

    app.actions.cancel();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::report::tests::sample_report;

    #[test]
    fn headless_report_skips_adapters_for_empty_years() {
        let empty = HeadlessReport::new(YearSelection::new(2030), &sample_report(0));
        assert!(empty.chart.is_empty());
        assert!(empty.map.markers.is_empty());
        assert!(empty.summary.ends_with("0 accidents involving elderly pedestrians"));

        let full = HeadlessReport::new(YearSelection::new(2015), &sample_report(3));
        assert_eq!(full.chart.len(), 3);
        assert_eq!(full.roadview.len(), 3);
    }

    #[test]
    fn headless_json_has_the_summary_fields() -> color_eyre::Result<()> {
        let report = HeadlessReport::new(YearSelection::new(2015), &sample_report(1));
        let value = serde_json::to_value(&report)?;

        assert_eq!(value["year"], 2015);
        assert_eq!(value["total_count"], 1);
        assert_eq!(value["map"]["level"], 7);
        assert_eq!(value["roadview"][0]["radius_m"], 50);
        Ok(())
    }
}
