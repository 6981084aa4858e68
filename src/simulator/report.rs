//! Simulation report generation.

use serde::Serialize;

/// Outcome of one finished race.
#[derive(Debug, Clone, Serialize)]
pub struct RaceOutcome {
    pub round: u32,
    pub distance: u32,
    pub winner_condition: u8,
    pub field_avg_condition: f64,
    /// Pearson correlation between condition and finish rank for the field.
    /// Negative means fitter horses tend to finish earlier.
    pub condition_rank_correlation: f64,
    /// Race-clock seconds until the last horse crossed.
    pub last_finish_time: f64,
}

/// All races of one simulated tournament.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentStats {
    pub races: Vec<RaceOutcome>,
}

/// Per-round aggregate across tournaments.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    pub round: u32,
    pub distance: u32,
    pub avg_duration: f64,
    pub min_duration: f64,
    pub max_duration: f64,
}

/// Aggregated results from multiple simulated tournaments.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_tournaments: u32,
    pub races_played: u32,

    pub avg_winner_condition: f64,
    pub avg_field_condition: f64,
    pub avg_condition_rank_correlation: f64,

    /// Winner-condition histogram over the buckets 1-20, 21-40, ... 81-100.
    pub wins_by_condition_bucket: [u32; 5],

    pub rounds: Vec<RoundSummary>,
}

impl SimReport {
    /// Create a new report from completed tournament stats.
    pub fn from_runs(runs: Vec<TournamentStats>) -> Self {
        let outcomes: Vec<&RaceOutcome> = runs.iter().flat_map(|r| r.races.iter()).collect();
        let races_played = outcomes.len() as u32;
        let denom = races_played.max(1) as f64;

        let avg_winner_condition = outcomes
            .iter()
            .map(|o| o.winner_condition as f64)
            .sum::<f64>()
            / denom;
        let avg_field_condition =
            outcomes.iter().map(|o| o.field_avg_condition).sum::<f64>() / denom;
        let avg_condition_rank_correlation = outcomes
            .iter()
            .map(|o| o.condition_rank_correlation)
            .sum::<f64>()
            / denom;

        let mut wins_by_condition_bucket = [0u32; 5];
        for outcome in &outcomes {
            let bucket = ((outcome.winner_condition as usize).saturating_sub(1) / 20).min(4);
            wins_by_condition_bucket[bucket] += 1;
        }

        let max_round = outcomes.iter().map(|o| o.round).max().unwrap_or(0);
        let mut rounds = Vec::new();
        for round in 1..=max_round {
            let durations: Vec<f64> = outcomes
                .iter()
                .filter(|o| o.round == round)
                .map(|o| o.last_finish_time)
                .collect();
            if durations.is_empty() {
                continue;
            }
            let distance = outcomes
                .iter()
                .find(|o| o.round == round)
                .map(|o| o.distance)
                .unwrap_or(0);
            rounds.push(RoundSummary {
                round,
                distance,
                avg_duration: durations.iter().sum::<f64>() / durations.len() as f64,
                min_duration: durations.iter().copied().fold(f64::INFINITY, f64::min),
                max_duration: durations.iter().copied().fold(0.0, f64::max),
            });
        }

        Self {
            num_tournaments: runs.len() as u32,
            races_played,
            avg_winner_condition,
            avg_field_condition,
            avg_condition_rank_correlation,
            wins_by_condition_bucket,
            rounds,
        }
    }

    /// Human-readable summary table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══ SIMULATION RESULTS ═══\n\n");
        out.push_str(&format!("Tournaments:        {}\n", self.num_tournaments));
        out.push_str(&format!("Races played:       {}\n", self.races_played));
        out.push_str(&format!(
            "Avg winner cond.:   {:.1} (field avg {:.1})\n",
            self.avg_winner_condition, self.avg_field_condition
        ));
        out.push_str(&format!(
            "Cond/rank corr.:    {:.3} (negative = fitness matters)\n\n",
            self.avg_condition_rank_correlation
        ));

        out.push_str("Wins by winner condition:\n");
        let labels = ["  1-20", " 21-40", " 41-60", " 61-80", "81-100"];
        for (label, wins) in labels.iter().zip(self.wins_by_condition_bucket.iter()) {
            let pct = 100.0 * *wins as f64 / self.races_played.max(1) as f64;
            out.push_str(&format!("  {}: {:>6} ({:>5.1}%)\n", label, wins, pct));
        }

        out.push_str("\nRace durations (race-clock seconds):\n");
        for r in &self.rounds {
            out.push_str(&format!(
                "  Round {} ({:>4}m): avg {:>6.1}  min {:>6.1}  max {:>6.1}\n",
                r.round, r.distance, r.avg_duration, r.min_duration, r.max_duration
            ));
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(round: u32, winner_condition: u8, duration: f64) -> RaceOutcome {
        RaceOutcome {
            round,
            distance: 1200,
            winner_condition,
            field_avg_condition: 50.0,
            condition_rank_correlation: -0.5,
            last_finish_time: duration,
        }
    }

    #[test]
    fn buckets_cover_full_condition_range() {
        let runs = vec![TournamentStats {
            races: vec![outcome(1, 1, 30.0), outcome(2, 20, 30.0), outcome(3, 100, 30.0)],
        }];
        let report = SimReport::from_runs(runs);
        assert_eq!(report.wins_by_condition_bucket[0], 2);
        assert_eq!(report.wins_by_condition_bucket[4], 1);
        assert_eq!(report.races_played, 3);
    }

    #[test]
    fn round_summaries_aggregate_durations() {
        let runs = vec![
            TournamentStats {
                races: vec![outcome(1, 50, 40.0)],
            },
            TournamentStats {
                races: vec![outcome(1, 60, 60.0)],
            },
        ];
        let report = SimReport::from_runs(runs);
        assert_eq!(report.rounds.len(), 1);
        assert!((report.rounds[0].avg_duration - 50.0).abs() < 1e-9);
        assert!((report.rounds[0].min_duration - 40.0).abs() < 1e-9);
        assert!((report.rounds[0].max_duration - 60.0).abs() < 1e-9);
    }

    #[test]
    fn json_output_is_valid() {
        let report = SimReport::from_runs(vec![]);
        let parsed: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(parsed["num_tournaments"], 0);
    }
}
