use crate::cli::Command;
use classifier::{
    ContactFilter, EventCategory, PaNumber, PitchRecord, PlateAppearance, group_plate_appearances,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct PlateAppearanceReport {
    contact: usize,
    non_contact: usize,
    total: usize,
    groups: Vec<PlateAppearanceRow>,
}

#[derive(Debug, Serialize)]
struct PlateAppearanceRow {
    inning: PaNumber,
    pa_of_inning: PaNumber,
    pitches: usize,
    has_contact: bool,
}

impl From<&PlateAppearance<'_>> for PlateAppearanceRow {
    fn from(group: &PlateAppearance<'_>) -> Self {
        Self {
            inning: group.key.inning,
            pa_of_inning: group.key.pa_of_inning,
            pitches: group.pitches.len(),
            has_contact: group.has_contact,
        }
    }
}

/// Read pitch records from a path, `-` meaning standard input.
pub fn read_pitches(input: &Path) -> Result<Vec<PitchRecord>, classifier::Error> {
    if input == Path::new("-") {
        classifier::load_pitches(io::stdin().lock())
    } else {
        classifier::load_pitches_from_path(input)
    }
}

/// Execute one subcommand, writing its output to `out`.
pub fn run<W: Write>(
    command: &Command,
    filter: &mut ContactFilter,
    pitches: &[PitchRecord],
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Report { .. } => filter.print_summary(pitches, out)?,
        Command::Summary { pretty, .. } => {
            let summary = filter.get_complete_summary(pitches);
            write_json(out, &summary, *pretty)?;
        }
        Command::Categorize { pretty, .. } => {
            let categorized = filter.categorize_pitches(pitches);
            write_json(out, &categorized, *pretty)?;
        }
        Command::PlateAppearances { pretty, .. } => {
            let groups = group_plate_appearances(pitches);
            let report = PlateAppearanceReport {
                contact: filter.count_contact_plate_appearances(pitches),
                non_contact: filter.count_non_contact_plate_appearances(pitches),
                total: groups.len(),
                groups: groups.iter().map(PlateAppearanceRow::from).collect(),
            };
            write_json(out, &report, *pretty)?;
        }
    }

    let stats = filter.get_stats();
    if stats.found(EventCategory::Unknown) > 0 {
        warn!(
            unknown = stats.found(EventCategory::Unknown),
            "pitches with an unrecognized pitch call"
        );
    }
    debug!(?stats, "running counters");
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
