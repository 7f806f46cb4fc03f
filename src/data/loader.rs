use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, AsArray, StringArray};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    GameRecord, GameTable, GAME_DATE, SEASON, TEAM_FG_PERCENTAGE, TEAM_NAME, TEAM_POINTS,
    TEAM_WIN,
};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// The source table could not be turned into a [`GameTable`].
#[derive(Debug, thiserror::Error)]
pub enum DataFormatError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("expected {0}")]
    Layout(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot parse {column} value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

type Result<T> = std::result::Result<T, DataFormatError>;

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Memoizes loaded tables by path for the lifetime of the process.
///
/// Entries are never invalidated: a second `load` of the same path returns the
/// table read the first time, even if the file changed or disappeared since.
#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: HashMap<PathBuf, Arc<GameTable>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: &Path) -> Result<Arc<GameTable>> {
        if let Some(table) = self.tables.get(path) {
            log::debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load_file(path)?);
        log::info!(
            "Loaded {} from {} with columns {:?}",
            table,
            path.display(),
            table.column_names
        );
        self.tables.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a game table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one game per row
/// * `.json`    – `[{ "game_date": "...", "season": "...", ... }, ...]`
/// * `.parquet` – any column types Arrow can render as text
pub fn load_file(path: &Path) -> Result<GameTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv_from_reader(open(path)?),
        "json" => {
            let mut text = String::new();
            open(path)?
                .read_to_string(&mut text)
                .map_err(|source| io_error(path, source))?;
            load_json_from_str(&text)
        }
        "parquet" | "pq" => load_parquet(open(path)?),
        other => Err(DataFormatError::UnsupportedFormat(other.to_string())),
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> DataFormatError {
    DataFormatError::Io {
        path: path.display().to_string(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Raw text table shared by all formats
// ---------------------------------------------------------------------------

/// Every format is first reduced to header names plus rows of cell text.
/// Blank text stands for a missing value.
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Positions of the named columns inside a [`RawTable`] row.
struct ColumnIndex {
    game_date: usize,
    team_name: Option<usize>,
    team_points: usize,
    team_fg_percentage: usize,
    team_win: usize,
    season: usize,
    extra: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn locate(headers: &[String]) -> Result<Self> {
        let find = |name: &'static str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(DataFormatError::MissingColumn(name));

        let index = ColumnIndex {
            game_date: require(GAME_DATE)?,
            team_name: find(TEAM_NAME),
            team_points: require(TEAM_POINTS)?,
            team_fg_percentage: require(TEAM_FG_PERCENTAGE)?,
            team_win: require(TEAM_WIN)?,
            season: require(SEASON)?,
            extra: Vec::new(),
        };

        let named = [
            Some(index.game_date),
            index.team_name,
            Some(index.team_points),
            Some(index.team_fg_percentage),
            Some(index.team_win),
            Some(index.season),
        ];
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !named.contains(&Some(*i)))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        Ok(ColumnIndex { extra, ..index })
    }
}

fn build_table(raw: RawTable) -> Result<GameTable> {
    let index = ColumnIndex::locate(&raw.headers)?;

    let games = raw
        .rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| parse_row(&index, row, row_no))
        .collect::<Result<Vec<_>>>()?;

    Ok(GameTable::from_games(games, raw.headers))
}

fn parse_row(index: &ColumnIndex, row: &[String], row_no: usize) -> Result<GameRecord> {
    let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");
    let invalid = |column: &'static str, value: &str| DataFormatError::InvalidValue {
        row: row_no,
        column,
        value: value.to_string(),
    };

    let date_text = cell(index.game_date);
    let game_date = parse_game_date(date_text).ok_or_else(|| invalid(GAME_DATE, date_text))?;

    let points_text = cell(index.team_points);
    let team_points = parse_number(points_text).ok_or_else(|| invalid(TEAM_POINTS, points_text))?;

    let fg_text = cell(index.team_fg_percentage);
    let team_fg_percentage =
        parse_number(fg_text).ok_or_else(|| invalid(TEAM_FG_PERCENTAGE, fg_text))?;

    let win_text = cell(index.team_win);
    let team_win = parse_win(win_text).ok_or_else(|| invalid(TEAM_WIN, win_text))?;

    let season = cell(index.season);
    if season.is_empty() {
        return Err(invalid(SEASON, season));
    }

    let team_name = index
        .team_name
        .map(cell)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let extra: BTreeMap<String, String> = index
        .extra
        .iter()
        .map(|(i, name)| (name.clone(), cell(*i).to_string()))
        .collect();

    Ok(GameRecord {
        game_date,
        team_name,
        team_points,
        team_fg_percentage,
        team_win,
        season: season.to_string(),
        extra,
    })
}

// -- Cell parsers --

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse the text of a game date cell.
///
/// Digit strings are compact `YYYYMMDD` dates, never epoch offsets; numeric
/// JSON dates are converted before they reach this point.
pub fn parse_game_date(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Blank cells become NaN; anything else must be a number.
fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

/// `Some(None)` for a blank cell or a number other than 0/1, which matches
/// neither wins nor losses. `None` when the text is not a number or boolean.
fn parse_win(s: &str) -> Option<Option<bool>> {
    if s.is_empty() {
        return Some(None);
    }
    if let Ok(v) = s.parse::<f64>() {
        return Some(match v {
            v if v == 1.0 => Some(true),
            v if v == 0.0 => Some(false),
            _ => None,
        });
    }
    match s.to_ascii_lowercase().as_str() {
        "true" => Some(Some(true)),
        "false" => Some(Some(false)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one game per row.
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<GameTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let rows = reader
        .records()
        .map(|record| -> Result<Vec<String>> {
            Ok(record?.iter().map(|c| c.to_string()).collect())
        })
        .collect::<Result<Vec<_>>>()?;

    build_table(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "game_date": "2021-10-19", "team_points": 106, "team_win": 0, ... },
///   ...
/// ]
/// ```
pub fn load_json_from_str(text: &str) -> Result<GameTable> {
    let root: JsonValue = serde_json::from_str(text)?;
    let records = root
        .as_array()
        .ok_or_else(|| DataFormatError::Layout("top-level JSON array".to_string()))?;

    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataFormatError::Layout(format!("row {i} to be a JSON object")))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(|v| json_cell(h, v)).unwrap_or_default())
                .collect()
        })
        .collect();

    build_table(RawTable { headers, rows })
}

/// Cell text for one JSON value. Integer game dates are epoch milliseconds,
/// the pandas `to_json` default, and are rendered as ISO text here.
fn json_cell(column: &str, val: &JsonValue) -> String {
    match val {
        JsonValue::Number(n) if column == GAME_DATE => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.naive_utc().format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            .unwrap_or_else(|| n.to_string()),
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of games.
///
/// Each column is cast to text with Arrow's cast kernel, so dates,
/// timestamps, integers, floats and booleans written by Pandas or Polars all
/// go through the same cell parsers as CSV.
fn load_parquet(file: File) -> Result<GameTable> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let columns = batch
            .columns()
            .iter()
            .map(|col| cast(col, &DataType::Utf8))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let columns: Vec<&StringArray> = columns.iter().map(|c| c.as_string::<i32>()).collect();

        for row in 0..batch.num_rows() {
            let cells = columns
                .iter()
                .map(|col| {
                    if col.is_null(row) {
                        String::new()
                    } else {
                        col.value(row).to_string()
                    }
                })
                .collect();
            rows.push(cells);
        }
    }

    build_table(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TeamColumn;

    const GAMES_CSV: &str = "\
game_date,team_name,team_points,team_fg_percentage,team_win,season,team_assists
2021-10-19,Los Angeles Lakers,106,0.461,0,2021-2022,20
2021-10-22 00:00:00,Los Angeles Lakers,115,0.479,1,2021-2022,25
2022-10-18,Los Angeles Lakers,,0.413,1.0,2022-2023,";

    // -- CSV loading --

    #[test]
    fn csv_loads_games() {
        let table = load_csv_from_reader(GAMES_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.seasons, vec!["2021-2022", "2022-2023"]);

        let first = &table.games[0];
        assert_eq!(first.game_date.date(), NaiveDate::from_ymd_opt(2021, 10, 19).unwrap());
        assert_eq!(first.team_name.as_deref(), Some("Los Angeles Lakers"));
        assert!((first.team_points - 106.0).abs() < f64::EPSILON);
        assert!((first.team_fg_percentage - 0.461).abs() < f64::EPSILON);
        assert_eq!(first.team_win, Some(false));
        assert_eq!(first.extra.get("team_assists").map(String::as_str), Some("20"));

        assert_eq!(table.games[1].team_win, Some(true));
        assert!(table.games[2].team_points.is_nan());
        assert_eq!(table.games[2].team_win, Some(true));
    }

    #[test]
    fn csv_without_team_column() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n\
                   2021-10-19,106,0.46,0,2021-2022\n";
        let table = load_csv_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.team_column(), TeamColumn::Absent);
        assert_eq!(table.games[0].team_name, None);
    }

    #[test]
    fn csv_missing_date_column_fails() {
        let csv = "team_points,team_fg_percentage,team_win,season\n106,0.46,0,2021-2022\n";
        let err = load_csv_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataFormatError::MissingColumn(GAME_DATE)));
    }

    #[test]
    fn csv_bad_date_fails() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n\
                   2021-10-19,106,0.46,0,2021-2022\n\
                   not a date,99,0.40,1,2021-2022\n";
        let err = load_csv_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataFormatError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, GAME_DATE);
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_other_win_numbers_are_unknown() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n\
                   2021-10-19,106,0.46,2,2021-2022\n\
                   2021-10-22,115,0.48,0.5,2021-2022\n\
                   2021-10-24,121,0.50,1,2021-2022\n";
        let table = load_csv_from_reader(csv.as_bytes()).unwrap();
        let wins: Vec<_> = table.games.iter().map(|g| g.team_win).collect();
        assert_eq!(wins, vec![None, None, Some(true)]);
    }

    #[test]
    fn csv_non_numeric_win_flag_fails() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n\
                   2021-10-19,106,0.46,maybe,2021-2022\n";
        let err = load_csv_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataFormatError::InvalidValue { column: TEAM_WIN, .. }));
    }

    #[test]
    fn csv_compact_dates_are_calendar_dates() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n\
                   20211019,106,0.46,0,2021-2022\n\
                   20211026,115,0.48,1,2021-2022\n";
        let table = load_csv_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            table.games[0].game_date,
            NaiveDate::from_ymd_opt(2021, 10, 19).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            table.games[1].game_date.date(),
            NaiveDate::from_ymd_opt(2021, 10, 26).unwrap()
        );
    }

    #[test]
    fn csv_epoch_millis_text_is_not_a_date() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n\
                   1634671800000,106,0.46,0,2021-2022\n";
        let err = load_csv_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataFormatError::InvalidValue { column: GAME_DATE, .. }));
    }

    #[test]
    fn csv_ragged_rows_fail() {
        let csv = "game_date,team_points,team_fg_percentage,team_win,season\n2021-10-19,106\n";
        assert!(matches!(
            load_csv_from_reader(csv.as_bytes()),
            Err(DataFormatError::Csv(_))
        ));
    }

    // -- Date formats --

    #[test]
    fn date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 10, 19).unwrap();
        for text in [
            "2021-10-19",
            "10/19/2021",
            "2021/10/19",
            "2021-10-19 19:30:00",
            "2021-10-19T19:30:00",
            "2021-10-19T19:30:00.000",
            "2021-10-19T19:30:00Z",
            "2021-10-19T12:30:00-07:00",
            "20211019",
        ] {
            let parsed = parse_game_date(text).unwrap_or_else(|| panic!("{text} should parse"));
            assert_eq!(parsed.date(), expected, "{text}");
        }
        assert_eq!(parse_game_date(""), None);
        assert_eq!(parse_game_date("Tuesday"), None);
        assert_eq!(parse_game_date("1634671800000"), None);
    }

    // -- JSON loading --

    #[test]
    fn json_records() {
        let json = r#"[
            {"game_date": "2021-10-19", "team_points": 106, "team_fg_percentage": 0.461,
             "team_win": 0, "season": "2021-2022", "team_name": null},
            {"game_date": 1634860800000, "team_points": 115.0, "team_fg_percentage": 0.479,
             "team_win": true, "season": "2021-2022", "team_name": "Los Angeles Lakers"}
        ]"#;
        let table = load_json_from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.games[0].team_name, None);
        assert_eq!(table.games[1].team_win, Some(true));
        assert_eq!(
            table.games[1].game_date.date(),
            NaiveDate::from_ymd_opt(2021, 10, 22).unwrap()
        );
    }

    #[test]
    fn json_numbers_outside_game_date_are_plain_text() {
        let json = r#"[
            {"game_date": 1634671800000, "team_points": 106, "team_fg_percentage": 0.461,
             "team_win": 0, "season": "2021-2022", "team_assists": 20}
        ]"#;
        let table = load_json_from_str(json).unwrap();
        let game = &table.games[0];
        assert_eq!(
            game.game_date,
            NaiveDate::from_ymd_opt(2021, 10, 19).unwrap().and_hms_opt(19, 30, 0).unwrap()
        );
        assert_eq!(game.extra.get("team_assists").map(String::as_str), Some("20"));
    }

    #[test]
    fn json_must_be_array() {
        let err = load_json_from_str(r#"{"game_date": "2021-10-19"}"#).unwrap_err();
        assert!(matches!(err, DataFormatError::Layout(_)));
    }

    // -- Files and cache --

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("games.xlsx")).unwrap_err();
        assert!(matches!(err, DataFormatError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nba_games.csv")).unwrap_err();
        assert!(matches!(err, DataFormatError::Io { .. }));
    }

    #[test]
    fn cache_returns_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nba_games.csv");
        std::fs::write(&path, GAMES_CSV).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();

        std::fs::remove_file(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn cache_does_not_keep_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nba_games.csv");

        let mut cache = DatasetCache::new();
        assert!(cache.load(&path).is_err());

        std::fs::write(&path, GAMES_CSV).unwrap();
        assert_eq!(cache.load(&path).unwrap().len(), 3);
    }

    // -- Parquet --

    fn write_parquet(
        dir: &tempfile::TempDir,
        schema: arrow::datatypes::Schema,
        columns: Vec<arrow::array::ArrayRef>,
    ) -> PathBuf {
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(schema);
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
        let path = dir.path().join("nba_games.parquet");
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        path
    }

    #[test]
    fn parquet_with_date_column() {
        use arrow::array::{Date32Array, Float64Array, Int64Array};
        use arrow::datatypes::{Field, Schema};

        let schema = Schema::new(vec![
            Field::new(GAME_DATE, DataType::Date32, false),
            Field::new(TEAM_POINTS, DataType::Int64, false),
            Field::new(TEAM_FG_PERCENTAGE, DataType::Float64, true),
            Field::new(TEAM_WIN, DataType::Int64, false),
            Field::new(SEASON, DataType::Utf8, false),
        ]);
        // 18919 days after the epoch is 2021-10-19.
        let dir = tempfile::tempdir().unwrap();
        let path = write_parquet(
            &dir,
            schema,
            vec![
                Arc::new(Date32Array::from(vec![18919, 18922])),
                Arc::new(Int64Array::from(vec![106, 115])),
                Arc::new(Float64Array::from(vec![Some(0.461), None])),
                Arc::new(Int64Array::from(vec![0, 1])),
                Arc::new(StringArray::from(vec!["2021-2022", "2021-2022"])),
            ],
        );

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.games[0].game_date.date(),
            NaiveDate::from_ymd_opt(2021, 10, 19).unwrap()
        );
        assert!((table.games[1].team_points - 115.0).abs() < f64::EPSILON);
        assert!(table.games[1].team_fg_percentage.is_nan());
        assert_eq!(table.games[1].team_win, Some(true));
        assert_eq!(table.team_column(), TeamColumn::Absent);
    }

    #[test]
    fn parquet_with_zoned_timestamps() {
        use arrow::array::{Float64Array, Int64Array, TimestampNanosecondArray};
        use arrow::datatypes::{Field, Schema, TimeUnit};

        // 2021-10-19T23:30:00Z
        let instant_ns: i64 = 1_634_686_200_000_000_000;
        let expected = NaiveDate::from_ymd_opt(2021, 10, 19)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();

        for tz in ["UTC", "America/New_York"] {
            let schema = Schema::new(vec![
                Field::new(
                    GAME_DATE,
                    DataType::Timestamp(TimeUnit::Nanosecond, Some(tz.into())),
                    false,
                ),
                Field::new(TEAM_POINTS, DataType::Int64, false),
                Field::new(TEAM_FG_PERCENTAGE, DataType::Float64, false),
                Field::new(TEAM_WIN, DataType::Int64, false),
                Field::new(SEASON, DataType::Utf8, false),
            ]);
            let dir = tempfile::tempdir().unwrap();
            let path = write_parquet(
                &dir,
                schema,
                vec![
                    Arc::new(TimestampNanosecondArray::from(vec![instant_ns]).with_timezone(tz)),
                    Arc::new(Int64Array::from(vec![106])),
                    Arc::new(Float64Array::from(vec![0.461])),
                    Arc::new(Int64Array::from(vec![0])),
                    Arc::new(StringArray::from(vec!["2021-2022"])),
                ],
            );

            let table = load_file(&path).unwrap_or_else(|e| panic!("{tz}: {e}"));
            assert_eq!(table.games[0].game_date, expected, "{tz}");
        }
    }
}
