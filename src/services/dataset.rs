use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Dataset, MovieRecord},
};

const TITLE_COLUMN: &str = "title";
const GENRES_COLUMN: &str = "genres";

/// One CSV row; any other columns (movieId, year, ...) are ignored
#[derive(Debug, Deserialize)]
struct CsvMovie {
    title: String,
    #[serde(default)]
    genres: Option<String>,
}

/// Loads the movie dataset from a CSV file on disk.
///
/// A missing file, a header without `title`/`genres`, or a malformed row
/// is returned as an error; callers treat that as fatal.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> AppResult<Dataset> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading movies from CSV");

    let file = File::open(path)?;
    let dataset = read_dataset(file)?;

    tracing::info!(movies = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

/// Parses a movie dataset from any CSV source with a header row
pub fn read_dataset<R: Read>(source: R) -> AppResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in [TITLE_COLUMN, GENRES_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn(column.to_string()));
        }
    }

    let mut movies = Vec::new();
    for result in reader.deserialize() {
        let row: CsvMovie = result?;
        movies.push(MovieRecord::new(row.title, row.genres.unwrap_or_default()));
    }

    Ok(Dataset::new(movies))
}
