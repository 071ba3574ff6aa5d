//! Per-tournament win-rate results and reporting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::record::DRAW;

/// Tally of one tournament file from a single player's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRate {
    /// Tournament index the file was named after
    pub tournament: u32,
    /// Player whose wins are counted
    pub player: i32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Data lines that were tallied
    pub total: u32,
    /// Blank or malformed lines left out of the tally
    pub skipped: u32,
}

impl WinRate {
    pub fn new(tournament: u32, player: i32) -> Self {
        Self {
            tournament,
            player,
            ..Default::default()
        }
    }

    /// Count one match given its winner field
    pub fn record(&mut self, winner: i32) {
        self.total += 1;
        if winner == self.player {
            self.wins += 1;
        } else if winner == DRAW {
            self.draws += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Wins over total, or None when no matches were tallied
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.wins as f64 / self.total as f64)
    }

    /// One-line text report
    pub fn report_line(&self) -> String {
        match self.ratio() {
            Some(ratio) => format!(
                "Tournament #{} Win-Rate: {}/{} = {:.6}",
                self.tournament, self.wins, self.total, ratio
            ),
            None => format!("Tournament #{} Error total == 0", self.tournament),
        }
    }

    /// Save result to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl fmt::Display for WinRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_line())
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
