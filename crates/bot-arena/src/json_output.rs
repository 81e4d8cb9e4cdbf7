//! JSON export of match results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::arena::{ArenaError, MatchSummary};

/// Writes a match summary, including every game's moves, to `path`.
///
/// The file looks like:
/// ```json
/// {
///   "white_level": 5,
///   "black_level": 1,
///   "seed": 0,
///   "max_plies": 200,
///   "white_wins": 9,
///   "black_wins": 0,
///   "draws": 1,
///   "games": [
///     {
///       "game": 1,
///       "seed": 1,
///       "moves": ["d2d4", "g8f6"],
///       "result": "white",
///       "final_status": "checkmate"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns [`ArenaError::Io`] if the file cannot be created or written.
pub fn write_json<P: AsRef<Path>>(path: P, summary: &MatchSummary) -> Result<(), ArenaError> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, summary).map_err(std::io::Error::from)?;
    file.flush()?;
    Ok(())
}
