//! Parallel generation runs and JSONL output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crazyhouse_core::GameResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{load_games, random_game, replay_game, DatagenConfig, DatagenError, GameRecord};

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub games: usize,
    pub samples: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub unfinished: usize,
    /// Games dropped because a move failed
    pub failed: usize,
}

impl RunSummary {
    pub fn from_records(records: &[GameRecord], failed: usize) -> Self {
        let mut summary = Self {
            games: records.len(),
            failed,
            ..Default::default()
        };
        for record in records {
            summary.samples += record.samples.len();
            match record.result {
                GameResult::WhiteWin => summary.white_wins += 1,
                GameResult::BlackWin => summary.black_wins += 1,
                GameResult::Draw => summary.draws += 1,
                GameResult::InProgress => summary.unfinished += 1,
            }
        }
        summary
    }

    pub fn print_report(&self) {
        println!("=== Data Generation ===");
        println!("Games:      {} ({} failed)", self.games, self.failed);
        println!("Samples:    {}", self.samples);
        println!(
            "Results:    +{} -{} ={} ({} unfinished)",
            self.white_wins, self.black_wins, self.draws, self.unfinished
        );
    }
}

/// Play every configured game. Recorded games come first and keep their file
/// order; random games are numbered after them.
///
/// A game whose move fails is logged and dropped; the rest of the run goes on.
pub fn generate(config: &DatagenConfig) -> Result<(Vec<GameRecord>, usize), DatagenError> {
    let recorded = match &config.games_file {
        Some(path) => load_games(path)?,
        None => Vec::new(),
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()?;

    info!(
        recorded = recorded.len(),
        random = config.random_games,
        threads = pool.current_num_threads(),
        "starting generation"
    );

    let outcomes: Vec<Result<GameRecord, DatagenError>> = pool.install(|| {
        let offset = recorded.len();
        let replays = recorded
            .par_iter()
            .enumerate()
            .map(|(index, tokens)| replay_game(index, tokens.as_slice()));
        let random = (0..config.random_games as usize)
            .into_par_iter()
            .map(|i| random_game(offset + i, config.seed, config.max_plies));
        replays.chain(random).collect()
    });

    let mut records = Vec::with_capacity(outcomes.len());
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(error = %e, "dropping game");
                failed += 1;
            }
        }
    }
    Ok((records, failed))
}

/// Write every sample as one JSON object per line.
pub fn write_jsonl(path: &Path, records: &[GameRecord]) -> Result<usize, DatagenError> {
    let io_err = |source: std::io::Error| DatagenError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    let mut written = 0;
    for sample in records.iter().flat_map(|r| &r.samples) {
        serde_json::to_writer(&mut out, sample)?;
        out.write_all(b"\n").map_err(io_err)?;
        written += 1;
    }
    out.flush().map_err(io_err)?;
    Ok(written)
}

/// Generate all games and write their samples to `config.output`.
pub fn run(config: &DatagenConfig) -> Result<RunSummary, DatagenError> {
    let (records, failed) = generate(config)?;
    let written = write_jsonl(&config.output, &records)?;
    let summary = RunSummary::from_records(&records, failed);

    info!(
        games = summary.games,
        samples = written,
        failed,
        output = %config.output.display(),
        "generation finished"
    );
    Ok(summary)
}
