use super::tfidf::{FeatureMatrix, SparseVector};

/// Cosine similarity of two sparse vectors.
///
/// A zero vector has no direction, so it scores 0.0 against everything,
/// itself included.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Dense, symmetric `n x n` matrix of pairwise cosine similarities
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Computes every pairwise score of `features` up front.
    ///
    /// Only the upper triangle is computed and mirrored. Non-zero rows get an
    /// exact 1.0 on the diagonal.
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let n = features.n_rows();
        let mut scores = vec![0.0; n * n];

        for i in 0..n {
            let row_i = features.row(i);
            if row_i.is_zero() {
                continue;
            }
            scores[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let score = cosine_similarity(row_i, features.row(j));
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        tracing::debug!(rows = n, "Similarity matrix computed");
        Self { n, scores }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between rows `i` and `j`
    pub fn score(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.n + j]
    }

    /// All scores of row `i`, indexed by row position
    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.n..(i + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tfidf::TfidfVectorizer;

    fn matrix_for(genres: &[&str]) -> SimilarityMatrix {
        let features = TfidfVectorizer::english().fit_transform(genres);
        SimilarityMatrix::from_features(&features)
    }

    #[test]
    fn test_diagonal_is_one() {
        let sim = matrix_for(&["Action", "Comedy|Romance", "Action|Comedy|Drama"]);
        for i in 0..sim.len() {
            assert_eq!(sim.score(i, i), 1.0);
        }
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let sim = matrix_for(&[
            "Action|Crime|Thriller",
            "Comedy|Romance",
            "Action|Comedy|Drama",
            "Crime|Drama",
            "",
        ]);
        for i in 0..sim.len() {
            for j in 0..sim.len() {
                assert_eq!(sim.score(i, j), sim.score(j, i));
                assert!((0.0..=1.0).contains(&sim.score(i, j)));
            }
        }
    }

    #[test]
    fn test_shared_genre_scores_higher() {
        let sim = matrix_for(&["Action", "Action", "Comedy"]);
        assert!((sim.score(0, 1) - 1.0).abs() < 1e-9);
        assert_eq!(sim.score(0, 2), 0.0);
        assert_eq!(sim.row(0).len(), 3);
    }

    #[test]
    fn test_zero_vector_scores_zero_everywhere() {
        let sim = matrix_for(&["", "Action", "the"]);
        assert_eq!(sim.row(0), &[0.0, 0.0, 0.0]);
        assert_eq!(sim.row(2), &[0.0, 0.0, 0.0]);
        assert_eq!(sim.score(1, 1), 1.0);
    }

    #[test]
    fn test_empty_corpus() {
        let sim = SimilarityMatrix::from_features(&FeatureMatrix::default());
        assert!(sim.is_empty());
    }

    #[test]
    fn test_cosine_of_zero_vector() {
        let zero = SparseVector::default();
        let v = SparseVector::from_entries(vec![(0, 1.0)]);
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }
}
