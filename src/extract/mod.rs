pub mod rows;
pub mod sections;

pub use rows::ANSWER_MARKER;

use crate::grid::Grid;
use crate::model::FaqData;

/// Single linear pass over one sheet: classify each row, then attribute
/// numbered Q&A rows to the most recently opened section.
pub fn extract(grid: &Grid, marker: &str) -> FaqData {
    sections::scan(grid, marker)
}
