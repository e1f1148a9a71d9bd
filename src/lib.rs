pub mod ingest;
pub mod leaderboard;
pub mod matrix;

pub type ExtMatrixResult<T> = anyhow::Result<T>;
