pub mod dataset;
pub mod recommender;
pub mod similarity;
pub mod stopwords;
pub mod tfidf;
pub mod title_index;

pub use dataset::{load_dataset, read_dataset};
pub use recommender::{Recommendation, Recommender};
pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use stopwords::StopWords;
pub use tfidf::{FeatureMatrix, SparseVector, TfidfVectorizer};
pub use title_index::TitleIndex;
