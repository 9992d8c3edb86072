use std::collections::HashMap;

use crate::models::Dataset;

/// Maps each distinct title to a row position.
///
/// When a title appears more than once the earliest row wins and later rows
/// are shadowed.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    positions: HashMap<String, usize>,
    shadowed: usize,
}

impl TitleIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let mut positions = HashMap::with_capacity(dataset.len());
        let mut shadowed = 0;

        for (position, movie) in dataset.iter().enumerate() {
            if positions.contains_key(&movie.title) {
                shadowed += 1;
            } else {
                positions.insert(movie.title.clone(), position);
            }
        }

        let index = Self { positions, shadowed };
        if index.shadowed() > 0 {
            tracing::debug!(
                shadowed = index.shadowed(),
                "Duplicate titles resolved to their first row"
            );
        }
        index
    }

    pub fn get(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.positions.contains_key(title)
    }

    /// Number of distinct titles
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rows hidden behind an earlier row with the same title
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieRecord;

    #[test]
    fn test_first_occurrence_wins() {
        let dataset = Dataset::from(vec![
            MovieRecord::new("X", "Action"),
            MovieRecord::new("Y", "Comedy"),
            MovieRecord::new("X", "Drama"),
        ]);
        let index = TitleIndex::build(&dataset);

        assert_eq!(index.get("X"), Some(0));
        assert_eq!(index.get("Y"), Some(1));
        assert_eq!(index.len(), 2);
        assert_eq!(index.shadowed(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let dataset = Dataset::from(vec![MovieRecord::new("Heat (1995)", "Action")]);
        let index = TitleIndex::build(&dataset);

        assert!(index.contains("Heat (1995)"));
        assert!(!index.contains("heat (1995)"));
        assert!(!index.contains("Heat"));
        assert_eq!(index.get("Nonexistent Movie"), None);
    }

    #[test]
    fn test_positions_are_valid_rows() {
        let dataset = Dataset::from(vec![
            MovieRecord::new("A", "Action"),
            MovieRecord::new("B", "Action"),
            MovieRecord::new("A", "Comedy"),
        ]);
        let index = TitleIndex::build(&dataset);
        for title in dataset.titles() {
            let position = index.get(title).unwrap();
            assert!(position < dataset.len());
            assert_eq!(dataset.get(position).unwrap().title, title);
        }
    }
}
