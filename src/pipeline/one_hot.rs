//! One indicator feature per category

use ndarray::{ArrayBase, ArrayViewMut2, Data, Ix1, Zip};
use serde::{Deserialize, Serialize};

/// Categories of a nominal column, learned from the training data
///
/// Categories are kept in ascending order, so the indicator layout only depends on the set of
/// values seen during fitting and not on the order of the rows. With `drop_first` the smallest
/// category gets no indicator and is encoded as all zeros.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OneHotEncoder {
    categories: Vec<f64>,
    drop_first: bool,
}

impl OneHotEncoder {
    /// Collect the distinct non-missing values of `column`
    pub fn fit<D: Data<Elem = f64>>(column: &ArrayBase<D, Ix1>, drop_first: bool) -> Self {
        let mut categories: Vec<f64> = column.iter().copied().filter(|v| !v.is_nan()).collect();
        categories.sort_by(f64::total_cmp);
        categories.dedup();

        OneHotEncoder {
            categories,
            drop_first,
        }
    }

    pub fn categories(&self) -> &[f64] {
        &self.categories
    }

    /// Categories which own an indicator feature, in output order
    pub fn indicators(&self) -> &[f64] {
        match self.categories.split_first() {
            Some((_, rest)) if self.drop_first => rest,
            _ => &self.categories,
        }
    }

    /// Number of indicator features produced
    pub fn width(&self) -> usize {
        self.indicators().len()
    }

    /// Position of the indicator for `value`, `None` for values without one
    pub fn index(&self, value: f64) -> Option<usize> {
        self.indicators()
            .binary_search_by(|c| c.total_cmp(&value))
            .ok()
    }

    /// Write the indicators of `column` into `out`, which has one column per category
    ///
    /// Rows with an unseen, missing or dropped value are left all zero.
    pub fn encode_into<D: Data<Elem = f64>>(
        &self,
        column: &ArrayBase<D, Ix1>,
        mut out: ArrayViewMut2<'_, f64>,
    ) {
        Zip::from(out.rows_mut())
            .and(column)
            .for_each(|mut row, &value| {
                row.fill(0.0);
                if let Some(idx) = self.index(value) {
                    row[idx] = 1.0;
                }
            });
    }
}
