//! Projection onto the model feature set
//!
//! Builds the numeric matrix the models consume: one row per table row,
//! one column per configured feature name, in configuration order.

use ndarray::Array2;

use crate::app::models::FeatureTable;
use crate::{Error, Result};

/// Project a feature table onto an ordered feature list.
///
/// Fails with [`Error::UnknownFeature`] when a configured name is absent
/// from the table or names a non-numeric column.
pub fn select_features(table: &FeatureTable, features: &[String]) -> Result<Array2<f64>> {
    let rows = table.row_count();
    let mut matrix = Array2::zeros((rows, features.len()));

    for (j, feature) in features.iter().enumerate() {
        let column = table
            .numeric_column(feature)
            .ok_or_else(|| Error::unknown_feature(feature))?;
        for (i, value) in column.iter().enumerate() {
            matrix[[i, j]] = *value;
        }
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{FeatureColumn, FeatureData, FeatureTable};

    fn table() -> FeatureTable {
        FeatureTable {
            columns: vec![
                FeatureColumn {
                    name: "a".to_string(),
                    data: FeatureData::Numeric(vec![0.1, 0.2]),
                },
                FeatureColumn {
                    name: "b".to_string(),
                    data: FeatureData::Numeric(vec![0.9, 0.8]),
                },
                FeatureColumn {
                    name: "label".to_string(),
                    data: FeatureData::Text(vec!["x".to_string(), "y".to_string()]),
                },
            ],
        }
    }

    #[test]
    fn test_selection_respects_configured_order() {
        let features = vec!["b".to_string(), "a".to_string()];
        let matrix = select_features(&table(), &features).unwrap();

        assert_eq!(matrix.shape(), &[2, 2]);
        assert_eq!(matrix[[0, 0]], 0.9);
        assert_eq!(matrix[[0, 1]], 0.1);
        assert_eq!(matrix[[1, 0]], 0.8);
    }

    #[test]
    fn test_unknown_feature_is_rejected() {
        let features = vec!["a".to_string(), "missing".to_string()];
        let err = select_features(&table(), &features).unwrap_err();
        assert!(matches!(err, Error::UnknownFeature { feature } if feature == "missing"));
    }

    #[test]
    fn test_text_column_is_not_selectable() {
        let features = vec!["label".to_string()];
        let err = select_features(&table(), &features).unwrap_err();
        assert!(matches!(err, Error::UnknownFeature { .. }));
    }

    #[test]
    fn test_empty_table_projects_to_zero_rows() {
        let empty = FeatureTable {
            columns: vec![FeatureColumn {
                name: "a".to_string(),
                data: FeatureData::Numeric(vec![]),
            }],
        };
        let matrix = select_features(&empty, &["a".to_string()]).unwrap();
        assert_eq!(matrix.shape(), &[0, 1]);
    }
}
