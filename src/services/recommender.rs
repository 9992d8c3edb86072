use std::path::Path;

use serde::Serialize;

use crate::{error::AppResult, models::Dataset};

use super::{
    dataset::load_dataset, similarity::SimilarityMatrix, tfidf::TfidfVectorizer,
    title_index::TitleIndex,
};

/// A recommended movie together with its similarity to the queried title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub genres: String,
    pub score: f64,
}

/// Genre-based recommender.
///
/// Built once from a dataset, then queried read-only: the similarity matrix
/// and title index are never modified after construction.
#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Dataset,
    similarity: SimilarityMatrix,
    index: TitleIndex,
    vocabulary_size: usize,
}

impl Recommender {
    /// Vectorizes genres, computes all pairwise similarities and indexes titles
    pub fn build(dataset: Dataset) -> Self {
        let mut vectorizer = TfidfVectorizer::english();
        let features = vectorizer.fit_transform(&dataset.genres());
        let similarity = SimilarityMatrix::from_features(&features);
        let index = TitleIndex::build(&dataset);

        tracing::info!(
            movies = dataset.len(),
            vocabulary = vectorizer.vocabulary_size(),
            distinct_titles = index.len(),
            shadowed_titles = index.shadowed(),
            "Recommender ready"
        );

        Self {
            dataset,
            similarity,
            index,
            vocabulary_size: vectorizer.vocabulary_size(),
        }
    }

    /// Loads the CSV at `path` and builds the recommender from it
    pub fn from_csv<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let dataset = load_dataset(path)?;
        Ok(Self::build(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains(title)
    }

    /// All titles in dataset order
    pub fn titles(&self) -> Vec<&str> {
        self.dataset.titles()
    }

    pub fn sample_titles(&self, count: usize) -> Vec<&str> {
        self.dataset.sample_titles(count)
    }

    /// Up to `k` titles most similar to `title`, best first.
    ///
    /// Returns an empty list when `title` is not in the dataset.
    pub fn recommend(&self, title: &str, k: usize) -> Vec<String> {
        self.recommend_scored(title, k)
            .into_iter()
            .map(|r| r.title)
            .collect()
    }

    /// Same ranking as [`Recommender::recommend`], with genres and scores.
    ///
    /// Rows are ordered by descending score; equal scores keep dataset order.
    /// Every row carrying the queried title is left out of the result.
    pub fn recommend_scored(&self, title: &str, k: usize) -> Vec<Recommendation> {
        let Some(idx) = self.index.get(title) else {
            tracing::debug!(title, "Title not in dataset");
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f64)> = self
            .similarity
            .row(idx)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(position, _)| {
                position != idx
                    && self
                        .dataset
                        .get(position)
                        .is_some_and(|movie| movie.title != title)
            })
            .collect();

        // stable: ties stay in row order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .take(k)
            .filter_map(|(position, score)| {
                self.dataset.get(position).map(|movie| Recommendation {
                    title: movie.title.clone(),
                    genres: movie.genres.clone(),
                    score,
                })
            })
            .collect()
    }
}
