/// Data layer: core types, loading, filtering and statistics.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → GameTable (memoized per path)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ GameTable  │  Vec<GameRecord>, season / team index
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  season / outcome / team → FilteredView + day offsets
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  metrics, histogram, density, trend line
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
