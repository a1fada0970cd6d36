//! Simulation report generation.

use crate::game::{Difficulty, LossReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum RunOutcome {
    Won,
    Lost(LossReason),
    TimedOut,
}

/// Statistics for one simulated game.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunStats {
    pub outcome: RunOutcome,
    /// Turn number when the game stopped
    pub turns: u32,
    pub enemies_spawned: u32,
    pub enemies_captured: u32,
    /// Non-King player pieces taken by zombies
    pub pieces_lost: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub difficulty: Difficulty,
    pub num_runs: u32,
    pub wins: u32,
    pub losses_king_captured: u32,
    pub losses_all_pieces: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_turns: f64,
    pub avg_turns_to_win: f64,
    pub avg_enemies_spawned: f64,
    pub avg_enemies_captured: f64,
    pub avg_pieces_lost: f64,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, difficulty: Difficulty) -> Self {
        let num_runs = runs.len() as u32;
        let count =
            |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let wins = count(RunOutcome::Won);
        let losses_king_captured = count(RunOutcome::Lost(LossReason::KingCaptured));
        let losses_all_pieces = count(RunOutcome::Lost(LossReason::AllPiecesLost));
        let runs_timed_out = count(RunOutcome::TimedOut);

        let divisor = num_runs.max(1) as f64;
        let avg =
            |f: fn(&RunStats) -> u32| runs.iter().map(|r| f(r) as f64).sum::<f64>() / divisor;

        let avg_turns = avg(|r| r.turns);
        let avg_enemies_spawned = avg(|r| r.enemies_spawned);
        let avg_enemies_captured = avg(|r| r.enemies_captured);
        let avg_pieces_lost = avg(|r| r.pieces_lost);
        let avg_turns_to_win = runs
            .iter()
            .filter(|r| r.outcome == RunOutcome::Won)
            .map(|r| r.turns as f64)
            .sum::<f64>()
            / wins.max(1) as f64;

        Self {
            difficulty,
            num_runs,
            wins,
            losses_king_captured,
            losses_all_pieces,
            runs_timed_out,
            avg_turns,
            avg_turns_to_win,
            avg_enemies_spawned,
            avg_enemies_captured,
            avg_pieces_lost,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.wins as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 ZOMBIE CHESS SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Difficulty: {}   Runs: {} total, {} timed out\n\n",
            self.difficulty.name(),
            self.num_runs,
            self.runs_timed_out
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Wins:              {}\n", self.wins));
        report.push_str(&format!(
            "  King Captured:     {}\n",
            self.losses_king_captured
        ));
        report.push_str(&format!("  Army Wiped Out:    {}\n", self.losses_all_pieces));
        report.push_str(&format!("  Win Rate:          {:.1}%\n\n", self.win_rate()));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Turns:         {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "  Avg Turns to Win:  {:.1}\n",
            self.avg_turns_to_win
        ));
        report.push_str(&format!(
            "  Avg Zombies Spawned:  {:.1}\n",
            self.avg_enemies_spawned
        ));
        report.push_str(&format!(
            "  Avg Zombies Captured: {:.1}\n",
            self.avg_enemies_captured
        ));
        report.push_str(&format!(
            "  Avg Pieces Lost:      {:.1}\n\n",
            self.avg_pieces_lost
        ));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = match self.win_rate() {
            r if r >= 90.0 => "TOO EASY - The King walks through",
            r if r >= 50.0 => "GOOD - Winnable with care",
            r if r >= 15.0 => "HARD - Most runs are overrun",
            _ => "TOO HARD - Spawns overwhelm the board",
        };
        report.push_str(&format!("  Rating: {}\n", rating));
        if self.runs_timed_out * 10 > self.num_runs {
            report.push_str("  ⚠️  Many games stalled - bot or zombies stuck?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Per-run stats stay out of the JSON summary
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 12)?;
        state.serialize_field("difficulty", &self.difficulty)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("wins", &self.wins)?;
        state.serialize_field("losses_king_captured", &self.losses_king_captured)?;
        state.serialize_field("losses_all_pieces", &self.losses_all_pieces)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("avg_turns", &self.avg_turns)?;
        state.serialize_field("avg_turns_to_win", &self.avg_turns_to_win)?;
        state.serialize_field("avg_enemies_spawned", &self.avg_enemies_spawned)?;
        state.serialize_field("avg_enemies_captured", &self.avg_enemies_captured)?;
        state.serialize_field("avg_pieces_lost", &self.avg_pieces_lost)?;
        state.serialize_field("win_rate", &self.win_rate())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(outcome: RunOutcome, turns: u32) -> RunStats {
        RunStats {
            outcome,
            turns,
            enemies_spawned: 10,
            enemies_captured: 4,
            pieces_lost: 2,
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(RunOutcome::Won, 20),
            run(RunOutcome::Won, 30),
            run(RunOutcome::Lost(LossReason::KingCaptured), 12),
            run(RunOutcome::TimedOut, 200),
        ];

        let report = SimReport::from_runs(runs, Difficulty::Medium);
        assert_eq!(report.num_runs, 4);
        assert_eq!(report.wins, 2);
        assert_eq!(report.losses_king_captured, 1);
        assert_eq!(report.losses_all_pieces, 0);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_turns_to_win - 25.0).abs() < 0.01);
        assert!((report.avg_turns - 65.5).abs() < 0.01);
        assert!((report.win_rate() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_report_has_no_nans() {
        let report = SimReport::from_runs(Vec::new(), Difficulty::Easy);
        assert_eq!(report.win_rate(), 0.0);
        assert_eq!(report.avg_turns, 0.0);
        assert!(report.to_text().contains("TOO HARD"));
    }

    #[test]
    fn test_json_omits_run_stats() {
        let report = SimReport::from_runs(vec![run(RunOutcome::Won, 8)], Difficulty::Hard);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

        assert_eq!(json["wins"], 1);
        assert_eq!(json["difficulty"], "Hard");
        assert_eq!(json["win_rate"], 100.0);
        assert!(json.get("run_stats").is_none());
    }
}
