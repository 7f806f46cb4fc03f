use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Date32Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, Days, NaiveDate};
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const TEAM: &str = "Los Angeles Lakers";
const GAMES_PER_SEASON: usize = 82;

/// One CSV row, in the column order the report documents.
#[derive(Debug, Serialize)]
struct GameRow {
    game_date: NaiveDate,
    team_name: &'static str,
    team_points: i64,
    team_fg_percentage: f64,
    team_win: i64,
    season: String,
    team_assists: i64,
    team_rebounds: i64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Whole days to the next game: 1 to 3.
    fn rest_days(&mut self) -> u64 {
        1 + (self.next_u64() % 3)
    }
}

fn generate_season(rng: &mut SimpleRng, opening_night: NaiveDate) -> Vec<GameRow> {
    let start_year = opening_night.year();
    let season = format!("{start_year}-{}", start_year + 1);

    let mut date = opening_night;
    let mut rows = Vec::with_capacity(GAMES_PER_SEASON);
    for _ in 0..GAMES_PER_SEASON {
        let fg = rng.gauss(0.47, 0.035).clamp(0.35, 0.60);
        // Better shooting nights score more and win more often.
        let points = (rng.gauss(112.0, 9.0) + (fg - 0.47) * 150.0).round();
        let opponent = rng.gauss(112.0, 10.0).round();

        rows.push(GameRow {
            game_date: date,
            team_name: TEAM,
            team_points: points as i64,
            team_fg_percentage: (fg * 1000.0).round() / 1000.0,
            team_win: i64::from(points > opponent),
            season: season.clone(),
            team_assists: rng.gauss(25.0, 4.0).round() as i64,
            team_rebounds: rng.gauss(44.0, 5.0).round() as i64,
        });

        date = date + Days::new(rng.rest_days());
    }
    rows
}

fn write_csv(rows: &[GameRow], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(rows: &[GameRow], path: &str) -> Result<()> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).context("epoch date")?;
    let dates: Vec<i32> = rows
        .iter()
        .map(|r| (r.game_date - epoch).num_days() as i32)
        .collect();

    let schema = Arc::new(Schema::new(vec![
        Field::new("game_date", DataType::Date32, false),
        Field::new("team_name", DataType::Utf8, false),
        Field::new("team_points", DataType::Int64, false),
        Field::new("team_fg_percentage", DataType::Float64, false),
        Field::new("team_win", DataType::Int64, false),
        Field::new("season", DataType::Utf8, false),
        Field::new("team_assists", DataType::Int64, false),
        Field::new("team_rebounds", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Date32Array::from(dates)),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.team_name).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                rows.iter().map(|r| r.team_points).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.team_fg_percentage).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                rows.iter().map(|r| r.team_win).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.season.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                rows.iter().map(|r| r.team_assists).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                rows.iter().map(|r| r.team_rebounds).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let openers = [(2020, 12, 22), (2021, 10, 19), (2022, 10, 18)];
    let mut rows = Vec::new();
    for (y, m, d) in openers {
        let opening_night = NaiveDate::from_ymd_opt(y, m, d).context("invalid opening night")?;
        rows.extend(generate_season(&mut rng, opening_night));
    }

    write_csv(&rows, "nba_games.csv")?;
    write_parquet(&rows, "nba_games.parquet")?;

    println!(
        "Wrote {} games over {} seasons to nba_games.csv and nba_games.parquet",
        rows.len(),
        openers.len()
    );
    Ok(())
}
