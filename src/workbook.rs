use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Reader};
use tracing::info;

use crate::grid::{cell_text, Grid};

/// Sheet name plus used-range dimensions, for workbook inspection.
pub struct SheetInfo {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
}

/// List every sheet in the workbook with its used-range size.
pub fn list_sheets(path: &Path) -> Result<Vec<SheetInfo>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let names = workbook.sheet_names();
    let mut infos = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .with_context(|| format!("Failed to read sheet '{}'", name))?;
        let (rows, cols) = range.get_size();
        infos.push(SheetInfo { name, rows, cols });
    }
    Ok(infos)
}

/// Load one sheet's used range as a cell grid. Defaults to the first sheet
/// when no name is given.
pub fn load_grid(path: &Path, sheet: Option<&str>) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let name = match sheet {
        Some(s) => s.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .context("Workbook has no sheets")?,
    };

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("Failed to read sheet '{}'", name))?;

    let (height, width) = range.get_size();
    info!("Loaded sheet '{}' ({} rows x {} cols)", name, height, width);

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok(Grid::from_rows(rows))
}
