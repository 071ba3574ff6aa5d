//! Win-rate reporter for microRTS tournament results
//!
//! Reads `tnmt_<N>.txt` result files, counts how many matches a player won
//! and prints the ratio of wins to matches played.
//!
//! # Usage
//!
//! ```bash
//! # Report tournament 3 (the default) from the current directory
//! cargo run -p winrate
//!
//! # Report several tournaments for player 1, failing on bad lines
//! cargo run -p winrate -- 1 2 3 --dir results --player 1 --malformed error
//! ```

mod config;
mod error;
mod record;
mod results;
mod tally;

pub use config::*;
pub use error::*;
pub use record::*;
pub use results::*;
pub use tally::*;
