#![forbid(unsafe_code)]

//! Fixed-width text rendering of a [`CompleteSummary`].

use crate::summary::CompleteSummary;
use config::Thresholds;
use std::io::{self, Write};

/// Write the report. Values come straight from `summary`; `thresholds` only
/// labels the weak/hard contact lines.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &CompleteSummary,
    thresholds: &Thresholds,
    rule_width: usize,
) -> io::Result<()> {
    let rule = "=".repeat(rule_width);
    let contact = &summary.contact;
    let non_contact = &summary.non_contact;

    writeln!(out, "{rule}")?;
    writeln!(out, "PITCH CATEGORIZATION SUMMARY")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total pitches analyzed: {}", summary.totals.pitches_analyzed)?;
    writeln!(out)?;

    writeln!(out, "CONTACT EVENTS:")?;
    writeln!(out, "  Total contacts: {}", contact.total_contacts)?;
    writeln!(out, "  ├─ Fouls: {} ({:.1}%)", contact.fouls, contact.foul_rate)?;
    writeln!(out, "  └─ In Play: {} ({:.1}%)", contact.in_play, contact.in_play_rate)?;
    writeln!(
        out,
        "     ├─ Weak (<{} mph): {}",
        mph(thresholds.weak_contact),
        contact.weak_contact
    )?;
    writeln!(
        out,
        "     ├─ Hard (≥{} mph): {}",
        mph(thresholds.hard_contact),
        contact.hard_contact
    )?;
    writeln!(out, "     └─ Avg Exit Velo: {:.1} mph", contact.avg_exit_velo)?;
    writeln!(out)?;

    writeln!(out, "NON-CONTACT EVENTS:")?;
    writeln!(out, "  Total non-contacts: {}", non_contact.total_non_contacts)?;
    writeln!(out, "  ├─ Whiffs: {} ({:.1}%)", non_contact.whiffs, non_contact.whiff_rate)?;
    writeln!(
        out,
        "  ├─ Called Strikes: {} ({:.1}%)",
        non_contact.called_strikes, non_contact.called_strike_rate
    )?;
    writeln!(out, "  ├─ Balls: {} ({:.1}%)", non_contact.balls, non_contact.ball_rate)?;
    writeln!(
        out,
        "  ├─ Hit By Pitch: {} ({:.1}%)",
        non_contact.hit_by_pitch, non_contact.hit_by_pitch_rate
    )?;
    writeln!(out, "  └─ Undefined: {}", non_contact.undefined)?;
    writeln!(out)?;

    writeln!(out, "SWING METRICS:")?;
    writeln!(out, "  Total Swings: {}", non_contact.swings)?;
    writeln!(out, "  Swing Rate: {:.1}%", non_contact.swing_rate)?;
    writeln!(out, "  Whiff per Swing: {:.1}%", non_contact.whiff_per_swing)?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Whole speeds print without a fractional part.
fn mph(speed: f64) -> String {
    if speed.fract() == 0.0 {
        format!("{speed:.0}")
    } else {
        speed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{ContactSummary, NonContactSummary, Totals};

    fn summary() -> CompleteSummary {
        CompleteSummary {
            contact: ContactSummary {
                total_contacts: 2,
                in_play: 2,
                weak_contact: 1,
                hard_contact: 1,
                contact_rate: 50.0,
                in_play_rate: 50.0,
                avg_exit_velo: 80.0,
                max_exit_velo: 100.0,
                ..Default::default()
            },
            non_contact: NonContactSummary {
                total_non_contacts: 2,
                whiffs: 1,
                balls: 1,
                whiff_rate: 25.0,
                ball_rate: 25.0,
                swings: 3,
                swing_rate: 75.0,
                whiff_per_swing: 33.3,
                ..Default::default()
            },
            totals: Totals {
                pitches_analyzed: 4,
                timestamp: "2024-04-12T19:05:00".to_owned(),
            },
        }
    }

    #[test]
    fn renders_every_section() {
        let mut out = Vec::new();
        write_report(&mut out, &summary(), &Thresholds::default(), 50).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(lines[1], "PITCH CATEGORIZATION SUMMARY");
        assert_eq!(lines[3], "Total pitches analyzed: 4");
        assert!(lines.contains(&"  └─ In Play: 2 (50.0%)"));
        assert!(lines.contains(&"     ├─ Weak (<70 mph): 1"));
        assert!(lines.contains(&"     ├─ Hard (≥95 mph): 1"));
        assert!(lines.contains(&"     └─ Avg Exit Velo: 80.0 mph"));
        assert!(lines.contains(&"  ├─ Whiffs: 1 (25.0%)"));
        assert!(lines.contains(&"  └─ Undefined: 0"));
        assert!(lines.contains(&"  Whiff per Swing: 33.3%"));
        assert_eq!(lines.last(), Some(&"=".repeat(50).as_str()));
    }

    #[test]
    fn labels_follow_thresholds_and_width() {
        let thresholds = Thresholds {
            weak_contact: 72.5,
            hard_contact: 100.0,
        };
        let mut out = Vec::new();
        write_report(&mut out, &summary(), &thresholds, 20).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(&format!("{}\n", "=".repeat(20))));
        assert!(text.contains("Weak (<72.5 mph)"));
        assert!(text.contains("Hard (≥100 mph)"));
    }
}
