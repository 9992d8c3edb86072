use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A single movie row from the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    /// Display title, usually with the release year (e.g. "Toy Story (1995)")
    pub title: String,
    /// Genre tags as they appear in the source file, empty when absent
    pub genres: String,
}

impl MovieRecord {
    /// Creates a new movie record
    pub fn new(title: impl Into<String>, genres: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genres: genres.into(),
        }
    }
}

/// Ordered, immutable collection of movies.
///
/// The position of a movie is its row key in every derived structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    movies: Vec<MovieRecord>,
}

impl Dataset {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&MovieRecord> {
        self.movies.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }

    /// Genre strings in row order, the corpus fed to the vectorizer
    pub fn genres(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.genres.as_str()).collect()
    }

    /// Titles in row order
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    /// Up to `count` distinct rows picked at random, returned as titles
    pub fn sample_titles(&self, count: usize) -> Vec<&str> {
        let mut rng = rand::thread_rng();
        self.movies
            .choose_multiple(&mut rng, count)
            .map(|m| m.title.as_str())
            .collect()
    }
}

impl From<Vec<MovieRecord>> for Dataset {
    fn from(movies: Vec<MovieRecord>) -> Self {
        Self::new(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::from(vec![
            MovieRecord::new("Heat (1995)", "Action|Crime|Thriller"),
            MovieRecord::new("Toy Story (1995)", "Adventure|Animation|Children"),
            MovieRecord::new("Nixon (1995)", ""),
        ])
    }

    #[test]
    fn test_positions_follow_input_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(1).unwrap().title, "Toy Story (1995)");
        assert!(dataset.get(3).is_none());
        assert_eq!(dataset.genres()[2], "");
    }

    #[test]
    fn test_sample_titles_is_bounded_and_distinct() {
        let dataset = sample_dataset();

        let sample = dataset.sample_titles(2);
        assert_eq!(sample.len(), 2);
        assert_ne!(sample[0], sample[1]);

        let everything = dataset.sample_titles(50);
        assert_eq!(everything.len(), 3);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.sample_titles(5).is_empty());
    }
}
