//! Single pass over a tournament results file

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::{MalformedPolicy, TallyConfig};
use crate::error::{Error, Result};
use crate::record::{parse_winner, RecordError};
use crate::results::WinRate;

/// Path of the results file for a tournament index
pub fn tournament_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("tnmt_{}.txt", index))
}

/// Tally the file for `index` under `config.dir`
pub fn tally_tournament(config: &TallyConfig, index: u32) -> Result<WinRate> {
    let path = tournament_path(&config.dir, index);
    tally_file(&path, index, config)
}

pub fn tally_file(path: &Path, tournament: u32, config: &TallyConfig) -> Result<WinRate> {
    debug!(path = %path.display(), tournament, "reading tournament file");
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tally_reader(BufReader::new(file), tournament, config)
}

/// Tally match lines from a reader.
///
/// The first line is a header and is never parsed. Blank lines are skipped;
/// other unreadable lines, including ones that are not valid UTF-8, are
/// handled per `config.malformed`.
pub fn tally_reader<R: BufRead>(
    reader: R,
    tournament: u32,
    config: &TallyConfig,
) -> Result<WinRate> {
    let mut rate = WinRate::new(tournament, config.player);
    let mut lines = reader.split(b'\n');

    if lines.next().transpose()?.is_none() {
        debug!(tournament, "file is empty");
        return Ok(rate);
    }

    for (i, line) in lines.enumerate() {
        let bytes = line?;
        // Header is line 1
        let line_no = i + 2;

        let parsed = std::str::from_utf8(&bytes)
            .map_err(|_| RecordError::InvalidUtf8)
            .and_then(parse_winner);

        let winner = match parsed {
            Ok(winner) => winner,
            Err(RecordError::Blank) => {
                rate.skipped += 1;
                continue;
            }
            Err(source) => match config.malformed {
                MalformedPolicy::Skip => {
                    warn!(tournament, line = line_no, error = %source, "skipping malformed line");
                    rate.skipped += 1;
                    continue;
                }
                MalformedPolicy::Zero => 0,
                MalformedPolicy::Error => {
                    return Err(Error::Malformed {
                        line: line_no,
                        source,
                    })
                }
            },
        };

        rate.record(winner);
    }

    debug!(
        tournament,
        wins = rate.wins,
        total = rate.total,
        skipped = rate.skipped,
        "tally complete"
    );
    Ok(rate)
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tally_tests;
