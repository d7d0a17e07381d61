#![forbid(unsafe_code)]

use crate::categorize::CategorizedResult;
use crate::clock::{Clock, SystemClock, isoformat};
use crate::domain::{EventCategory, PitchRecord};
use crate::error::Error;
use crate::plate_appearance;
use crate::report::write_report;
use crate::stats::RunningStats;
use crate::summary::{CompleteSummary, ContactSummary, NonContactSummary, Totals};
use config::{Config, RoundingMode, Thresholds};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Classifies pitch events and reduces batches of them into summaries.
///
/// Classification and the summary reductions are pure. The one piece of
/// state is [`RunningStats`], advanced by every categorization pass. Every
/// operation that categorizes therefore takes `&mut self`; share an instance
/// across threads by wrapping it in a `Mutex`.
pub struct ContactFilter {
    thresholds: Thresholds,
    rounding: RoundingMode,
    rule_width: usize,
    stats: RunningStats,
    clock: Box<dyn Clock>,
}

impl ContactFilter {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Build from a configuration that is assumed valid.
    pub fn from_config(config: &Config) -> Self {
        Self {
            thresholds: config.thresholds,
            rounding: config.summary.rounding,
            rule_width: config.report.rule_width,
            stats: RunningStats::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Validate the configuration first.
    pub fn try_new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn is_contact(&self, pitch: &PitchRecord) -> bool {
        pitch.is_contact()
    }

    pub fn is_non_contact(&self, pitch: &PitchRecord) -> bool {
        pitch.is_non_contact()
    }

    pub fn get_event_category(&self, pitch: &PitchRecord) -> EventCategory {
        pitch.category()
    }

    /// Split pitches into contact, non-contact and unknown buckets in a
    /// single pass, advancing the running counters.
    pub fn categorize_pitches<'a>(&mut self, pitches: &'a [PitchRecord]) -> CategorizedResult<'a> {
        self.stats.begin_batch(pitches.len());

        let mut result = CategorizedResult::default();
        for pitch in pitches {
            let category = pitch.category();
            self.stats.record(category);
            if category == EventCategory::InPlay && pitch.exit_speed().is_some() {
                self.stats.record_exit_speed();
            }
            result.push(category, pitch);
        }

        debug!(
            pitches = pitches.len(),
            contact = result.contact.all.len(),
            non_contact = result.non_contact.all.len(),
            unknown = result.unknown.len(),
            "categorized pitch batch"
        );
        result
    }

    pub fn get_contact_summary(&mut self, pitches: &[PitchRecord]) -> ContactSummary {
        let categorized = self.categorize_pitches(pitches);
        ContactSummary::from_categorized(
            &categorized,
            pitches.len(),
            &self.thresholds,
            self.rounding,
        )
    }

    pub fn get_non_contact_summary(&mut self, pitches: &[PitchRecord]) -> NonContactSummary {
        let categorized = self.categorize_pitches(pitches);
        NonContactSummary::from_categorized(&categorized, pitches.len(), self.rounding)
    }

    /// Both summaries plus a timestamped totals block. Each summary runs its
    /// own categorization pass.
    pub fn get_complete_summary(&mut self, pitches: &[PitchRecord]) -> CompleteSummary {
        CompleteSummary {
            contact: self.get_contact_summary(pitches),
            non_contact: self.get_non_contact_summary(pitches),
            totals: Totals {
                pitches_analyzed: pitches.len(),
                timestamp: isoformat(self.clock.now()),
            },
        }
    }

    pub fn count_contact_plate_appearances(&self, pitches: &[PitchRecord]) -> usize {
        plate_appearance::count_contact_plate_appearances(pitches)
    }

    pub fn count_non_contact_plate_appearances(&self, pitches: &[PitchRecord]) -> usize {
        plate_appearance::count_non_contact_plate_appearances(pitches)
    }

    pub fn reset_stats(&mut self) {
        self.stats = RunningStats::default();
    }

    pub fn get_stats(&self) -> RunningStats {
        self.stats
    }

    /// Render the complete summary as a text report.
    pub fn print_summary<W: Write>(
        &mut self,
        pitches: &[PitchRecord],
        out: &mut W,
    ) -> Result<(), Error> {
        let summary = self.get_complete_summary(pitches);
        write_report(out, &summary, &self.thresholds, self.rule_width)?;
        Ok(())
    }
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContactFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactFilter")
            .field("thresholds", &self.thresholds)
            .field("rounding", &self.rounding)
            .field("rule_width", &self.rule_width)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn scenario() -> Vec<PitchRecord> {
        vec![
            PitchRecord::new("InPlay").with_exit_speed(60.0),
            PitchRecord::new("InPlay").with_exit_speed(100.0),
            PitchRecord::new("StrikeSwinging"),
            PitchRecord::new("BallCalled"),
        ]
    }

    #[test]
    fn categorize_keeps_input_order_and_references() {
        let pitches = vec![
            PitchRecord::new("FoulBall"),
            PitchRecord::new("BallCalled"),
            PitchRecord::new("FoulBallNotFieldable"),
            PitchRecord::new("Balk"),
            PitchRecord::new("InPlay"),
        ];
        let mut filter = ContactFilter::new();
        let result = filter.categorize_pitches(&pitches);

        assert_eq!(result.contact.foul.len(), 2);
        assert!(std::ptr::eq(result.contact.foul[0], &pitches[0]));
        assert!(std::ptr::eq(result.contact.foul[1], &pitches[2]));
        assert!(std::ptr::eq(result.contact.all[2], &pitches[4]));
        assert!(std::ptr::eq(result.unknown[0], &pitches[3]));
        assert_eq!(result.bucket(EventCategory::Ball).len(), 1);
        assert_eq!(result.len(), pitches.len());
    }

    #[test]
    fn counters_track_every_pass() {
        let pitches = scenario();
        let mut filter = ContactFilter::new();
        filter.categorize_pitches(&pitches);
        filter.categorize_pitches(&pitches[..1]);

        let stats = filter.get_stats();
        assert_eq!(stats.total_pitches_processed, 5);
        assert_eq!(stats.batches_processed, 2);
        assert_eq!(stats.contact_events_found, 3);
        assert_eq!(stats.in_play_found, 3);
        assert_eq!(stats.exit_speeds_recorded, 3);
        assert_eq!(stats.whiffs_found, 1);
        assert_eq!(stats.balls_found, 1);
        assert_eq!(stats.non_contact_events_found, 2);
    }

    #[test]
    fn stats_snapshot_is_independent() {
        let mut filter = ContactFilter::new();
        filter.categorize_pitches(&scenario());
        let mut snapshot = filter.get_stats();
        snapshot.total_pitches_processed = 999;
        assert_eq!(filter.get_stats().total_pitches_processed, 4);

        filter.reset_stats();
        assert!(filter.get_stats().is_zero());
    }

    #[test]
    fn contact_summary_scenario() {
        let mut filter = ContactFilter::new();
        let summary = filter.get_contact_summary(&scenario());

        assert_eq!(summary.total_contacts, 2);
        assert_eq!(summary.fouls, 0);
        assert_eq!(summary.in_play, 2);
        assert_eq!(summary.weak_contact, 1);
        assert_eq!(summary.hard_contact, 1);
        assert_eq!(summary.avg_exit_velo, 80.0);
        assert_eq!(summary.max_exit_velo, 100.0);
        assert_eq!(summary.contact_rate, 50.0);
        assert_eq!(summary.foul_rate, 0.0);
        assert_eq!(summary.in_play_rate, 50.0);

        let percentiles = summary.exit_velo_percentiles.unwrap();
        assert_eq!(percentiles.p25, 70.0);
        assert_eq!(percentiles.p50, 80.0);
        assert_eq!(percentiles.p75, 90.0);
    }

    #[test]
    fn hard_contact_bound_is_inclusive() {
        let pitches = vec![
            PitchRecord::new("InPlay").with_exit_speed(95.0),
            PitchRecord::new("InPlay").with_exit_speed(70.0),
            PitchRecord::new("InPlay").with_exit_speed(69.9),
        ];
        let summary = ContactFilter::new().get_contact_summary(&pitches);
        assert_eq!(summary.hard_contact, 1);
        assert_eq!(summary.weak_contact, 1);
    }

    #[test]
    fn contacts_without_exit_speed_have_no_percentiles() {
        let pitches = vec![
            PitchRecord::new("FoulBall"),
            PitchRecord::new("InPlay"),
            PitchRecord::new("InPlay").with_exit_speed(0.0),
        ];
        let summary = ContactFilter::new().get_contact_summary(&pitches);
        assert_eq!(summary.total_contacts, 3);
        assert_eq!(summary.avg_exit_velo, 0.0);
        assert_eq!(summary.max_exit_velo, 0.0);
        assert_eq!(summary.exit_velo_percentiles, None);
        assert_eq!(summary.contact_rate, 100.0);
        assert_eq!(summary.foul_rate, 33.3);
        assert_eq!(summary.in_play_rate, 66.7);
    }

    #[test]
    fn foul_exit_speeds_are_ignored() {
        let pitches = vec![
            PitchRecord::new("FoulBall").with_exit_speed(110.0),
            PitchRecord::new("InPlay").with_exit_speed(85.0),
        ];
        let summary = ContactFilter::new().get_contact_summary(&pitches);
        assert_eq!(summary.max_exit_velo, 85.0);
        assert_eq!(summary.hard_contact, 0);
    }

    #[test]
    fn non_contact_summary_scenario() {
        let mut filter = ContactFilter::new();
        let summary = filter.get_non_contact_summary(&scenario());

        assert_eq!(summary.total_non_contacts, 2);
        assert_eq!(summary.whiffs, 1);
        assert_eq!(summary.balls, 1);
        assert_eq!(summary.whiff_rate, 25.0);
        assert_eq!(summary.ball_rate, 25.0);
        assert_eq!(summary.swings, 3);
        assert_eq!(summary.swing_rate, 75.0);
        assert_eq!(summary.whiff_per_swing, 33.3);
    }

    #[test]
    fn no_swings_means_zero_swing_rates() {
        let pitches = vec![
            PitchRecord::new("BallCalled"),
            PitchRecord::new("StrikeCalled"),
            PitchRecord::new("Undefined"),
        ];
        let summary = ContactFilter::new().get_non_contact_summary(&pitches);
        assert_eq!(summary.swings, 0);
        assert_eq!(summary.swing_rate, 0.0);
        assert_eq!(summary.whiff_per_swing, 0.0);
        assert_eq!(summary.undefined, 1);
    }

    #[test]
    fn empty_input_is_well_formed() {
        let instant = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let mut filter = ContactFilter::new().with_clock(FixedClock(instant));
        let summary = filter.get_complete_summary(&[]);

        assert_eq!(summary.contact, ContactSummary::default());
        assert_eq!(summary.non_contact, NonContactSummary::default());
        assert_eq!(summary.totals.pitches_analyzed, 0);
        assert_eq!(summary.totals.timestamp, "2024-06-01T13:30:00");
        assert_eq!(filter.get_stats().batches_processed, 2);
        assert_eq!(filter.get_stats().total_pitches_processed, 0);
    }

    #[test]
    fn missing_pitch_call_lands_in_unknown() {
        let pitches = vec![PitchRecord::default(), PitchRecord::default().at(1, 1)];
        let mut filter = ContactFilter::new();
        let result = filter.categorize_pitches(&pitches);

        assert_eq!(result.unknown.len(), 2);
        assert!(result.contact.all.is_empty());
        assert!(result.non_contact.all.is_empty());
        assert_eq!(filter.get_stats().unknown_found, 2);
        assert_eq!(filter.get_stats().found(EventCategory::Unknown), 2);
        assert!(!filter.is_contact(&pitches[0]));
        assert!(!filter.is_non_contact(&pitches[0]));
        assert_eq!(filter.get_event_category(&pitches[0]), EventCategory::Unknown);
    }

    #[test]
    fn complete_summary_runs_two_passes() {
        let pitches = scenario();
        let mut filter = ContactFilter::new();
        filter.get_complete_summary(&pitches);
        assert_eq!(filter.get_stats().total_pitches_processed, 8);
    }

    #[test]
    fn try_new_rejects_inverted_thresholds() {
        let mut config = Config::default();
        config.thresholds.weak_contact = 99.0;
        config.thresholds.hard_contact = 90.0;
        assert!(matches!(
            ContactFilter::try_new(&config),
            Err(Error::Config(config::Error::InvalidThresholds { .. }))
        ));
    }

    #[test]
    fn custom_thresholds_and_rounding() {
        let mut config = Config::default();
        config.thresholds.weak_contact = 80.0;
        config.thresholds.hard_contact = 90.0;
        config.summary.rounding = RoundingMode::HalfUp;
        let mut filter = ContactFilter::try_new(&config).unwrap();
        assert_eq!(filter.thresholds().weak_contact, 80.0);
        assert_eq!(filter.thresholds().hard_contact, 90.0);

        let pitches = vec![
            PitchRecord::new("InPlay").with_exit_speed(75.0),
            PitchRecord::new("InPlay").with_exit_speed(90.0),
            PitchRecord::new("InPlay").with_exit_speed(85.25),
            PitchRecord::new("InPlay").with_exit_speed(85.25),
        ];
        let summary = filter.get_contact_summary(&pitches);
        assert_eq!(summary.weak_contact, 1);
        assert_eq!(summary.hard_contact, 1);
        // 335.5 / 4 = 83.875
        assert_eq!(summary.avg_exit_velo, 83.9);
    }

    #[test]
    fn print_summary_writes_report() {
        let mut out = Vec::new();
        ContactFilter::new()
            .print_summary(&scenario(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total pitches analyzed: 4"));
        assert!(text.contains("  Total contacts: 2"));
        assert!(text.contains("  Swing Rate: 75.0%"));
    }
}
