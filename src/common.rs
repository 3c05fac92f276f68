//! Shared pieces: the loader error type, the match/mismatch scoring scheme,
//! and minimal FASTA reading.
//!
//! ## FASTA
//! The loader follows the simplest useful contract: every line starting with
//! `>` is a header and is ignored; all remaining lines are stripped of
//! surrounding whitespace and concatenated into one sequence. Multi-record
//! files therefore collapse into a single sequence. No case folding and no
//! alphabet validation; symbols are only ever compared for equality.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors returned by the sequence loader.
#[derive(thiserror::Error, Debug)]
pub enum PairalignError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input file held no sequence data once headers were stripped.
    #[error("no sequence data in {}", path.display())]
    EmptySequence { path: PathBuf },
}

/// Match/mismatch scalar scoring.
///
/// Symbol pairs are scored by exact equality; there is no substitution table
/// and no ambiguity-code handling. Degenerate values (for example a
/// non-negative mismatch) are accepted as given; the caller owns the
/// biological sensibility of the scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoring {
    /// Reward for two equal symbols.
    pub match_score: i32,
    /// Penalty for two differing symbols (negative in sensible schemes).
    pub mismatch: i32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self { match_score: 1, mismatch: -2 }
    }
}

impl Scoring {
    /// Score one symbol pair by exact equality.
    pub fn score_pair(&self, x: char, y: char) -> i32 {
        if x == y { self.match_score } else { self.mismatch }
    }
}

/// Concatenate the sequence data of a FASTA-style text: `>` header lines are
/// ignored, all other lines are joined with terminators and surrounding
/// whitespace stripped.
pub fn parse_fasta(text: &str) -> String {
    let mut seq = String::new();
    for line in text.lines() {
        if line.starts_with('>') {
            continue;
        }
        seq.push_str(line.trim());
    }
    seq
}

/// Read one sequence from a FASTA-style file.
///
/// Fails if the file cannot be read, or if nothing remains once headers are
/// stripped. A zero-length sequence is legal for the aligners themselves;
/// only file input treats it as an error.
pub fn read_fasta(path: &Path) -> Result<String, PairalignError> {
    let text = fs::read_to_string(path).map_err(|source| PairalignError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let seq = parse_fasta(&text);
    if seq.is_empty() {
        return Err(PairalignError::EmptySequence { path: path.to_path_buf() });
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_fasta_strips_headers_and_joins_lines() {
        let text = ">id first record\nACGT\nacg\n>second record\nTT\n";
        assert_eq!(parse_fasta(text), "ACGTacgTT");
    }

    #[test]
    fn parse_fasta_keeps_symbols_verbatim() {
        assert_eq!(parse_fasta("N-X*\n"), "N-X*");
    }

    #[test]
    fn read_fasta_rejects_header_only_input() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, ">only a header").unwrap();
        let err = read_fasta(f.path()).unwrap_err();
        assert!(matches!(err, PairalignError::EmptySequence { .. }));
    }

    #[test]
    fn read_fasta_surfaces_io_errors() {
        let err = read_fasta(Path::new("/no/such/file.fasta")).unwrap_err();
        assert!(matches!(err, PairalignError::Read { .. }));
    }

    #[test]
    fn read_fasta_concatenates_wrapped_lines() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, ">seq\nGATT\nACA\n").unwrap();
        assert_eq!(read_fasta(f.path()).unwrap(), "GATTACA");
    }

    #[test]
    fn default_scoring_is_plus_one_minus_two() {
        let s = Scoring::default();
        assert_eq!(s.score_pair('A', 'A'), 1);
        assert_eq!(s.score_pair('A', 'C'), -2);
        // exact equality, no case folding
        assert_eq!(s.score_pair('a', 'A'), -2);
    }
}
