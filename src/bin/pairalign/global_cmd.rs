use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use pairalign::{align_global, read_fasta, GlobalParams, Scoring};

/// Options for the `global` subcommand.
#[derive(Debug, Args)]
pub struct GlobalCmd {
    /// First sequence file (FASTA; header lines are ignored).
    #[arg(value_name = "FILE")]
    pub asequence: PathBuf,
    /// Second sequence file.
    #[arg(value_name = "FILE")]
    pub bsequence: PathBuf,
    /// Match reward.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub match_score: i32,
    /// Mismatch penalty (negative).
    #[arg(long, default_value_t = -2, allow_hyphen_values = true)]
    pub mismatch: i32,
    /// Per-unit gap penalty (negative).
    #[arg(long, default_value_t = -3, allow_hyphen_values = true)]
    pub gap: i32,
}

pub fn run(cmd: GlobalCmd) -> Result<()> {
    let a = read_fasta(&cmd.asequence)
        .with_context(|| format!("loading {}", cmd.asequence.display()))?;
    let b = read_fasta(&cmd.bsequence)
        .with_context(|| format!("loading {}", cmd.bsequence.display()))?;
    debug!("global: {} x {} symbols, gap {}", a.len(), b.len(), cmd.gap);

    let params = GlobalParams {
        scoring: Scoring { match_score: cmd.match_score, mismatch: cmd.mismatch },
        gap: cmd.gap,
    };
    let aln = align_global(&a, &b, &params);

    println!("Score: {}", aln.score);
    println!(
        "Identity: {:.2}%   Gaps: {:.2}%",
        aln.pct_identity(),
        aln.pct_gaps()
    );
    println!("CIGAR: {}", aln.cigar);
    println!();
    // Blocked alignment printing (60 cols)
    let a_chars: Vec<char> = aln.aligned_a.chars().collect();
    let m_chars: Vec<char> = aln.midline.chars().collect();
    let b_chars: Vec<char> = aln.aligned_b.chars().collect();
    let mut i = 0usize;
    while i < a_chars.len() {
        let end = (i + 60).min(a_chars.len());
        let a_block: String = a_chars[i..end].iter().collect();
        let m_block: String = m_chars[i..end].iter().collect();
        let b_block: String = b_chars[i..end].iter().collect();
        println!("A {}", a_block);
        println!("  {}", m_block);
        println!("B {}", b_block);
        println!();
        i = end;
    }
    Ok(())
}
