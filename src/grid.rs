use calamine::Data;

/// Rectangular table of optional text cells, addressed by (row, column).
/// Column indices are relative to the sheet's used range.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// Render one spreadsheet cell as text. xlsx stores every number as f64, so
/// whole-valued floats print without the fractional part ("1", not "1.0").
/// Blank cells are None.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}
