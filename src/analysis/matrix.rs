use serde::Serialize;

use crate::core::base::Named;
use crate::core::collection::Collection;

/// Pairwise dictionary distances between the documents of a collection.
///
/// `values[i][j]` is document `i` scored towards document `j`, which is not
/// the same as `values[j][i]`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistanceMatrix {
    pub names: Vec<String>,
    pub values: Vec<Vec<f32>>,
}

impl DistanceMatrix {
    pub fn compute(collection: &Collection) -> Self {
        let documents = collection.documents();
        let names = documents.iter().map(|d| d.name().to_string()).collect();
        let values = documents
            .iter()
            .map(|row| {
                documents
                    .iter()
                    .map(|col| row.dictionary_distance(col))
                    .collect()
            })
            .collect();

        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Most similar other document for `row`, skipping pairs that are not
    /// comparable. Ties keep the earliest document.
    pub fn nearest(&self, row: usize) -> Option<(usize, f32)> {
        let scores = self.values.get(row)?;
        let mut best: Option<(usize, f32)> = None;

        for (col, &score) in scores.iter().enumerate() {
            if col == row || score < 0.0 {
                continue;
            }
            match best {
                Some((_, s)) if s >= score => {}
                _ => best = Some((col, score)),
            }
        }

        best
    }
}
