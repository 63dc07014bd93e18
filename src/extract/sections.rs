use tracing::debug;

use super::rows::{self, RowKind};
use crate::grid::Grid;
use crate::model::{FaqData, FaqEntry};

/// Keyword → canonical section name, checked by case-insensitive containment
/// in priority order. A label matching nothing is used verbatim, so data is
/// never lost to an unknown category.
const SECTION_KEYWORDS: &[(&str, &str)] = &[
    ("coverage", "Benefit Coverage"),
    ("letter of guarantee", "Letter of Guarantee (LOG)"),
    ("system", "Portal Matters"),
    ("portal", "Portal Matters"),
    ("status", "Claims Status"),
    ("claims", "Claims Status"),
];

pub fn resolve_section(label: &str) -> String {
    let lower = label.to_lowercase();
    for (keyword, canonical) in SECTION_KEYWORDS {
        if lower.contains(keyword) {
            return (*canonical).to_string();
        }
    }
    label.to_string()
}

/// Single top-to-bottom pass: header rows open (or reset) a section, entry
/// rows attach to whichever section is currently open. Entries before any
/// header, and entries with an empty question, are dropped.
pub fn scan(grid: &Grid, marker: &str) -> FaqData {
    let mut faq = FaqData::new();
    let mut current: Option<usize> = None;

    for row in grid.rows() {
        match rows::classify(row, marker) {
            RowKind::Header { label } => {
                let name = resolve_section(&label);
                debug!("section: {}", name);
                current = Some(faq.open_section(name));
            }
            RowKind::Entry {
                number,
                question,
                answer,
            } => {
                let Some(section) = current else {
                    debug!("dropping Q{}: no open section", number);
                    continue;
                };
                if question.is_empty() {
                    debug!("dropping Q{}: empty question", number);
                    continue;
                }
                faq.push_entry(
                    section,
                    FaqEntry {
                        number,
                        question,
                        answer,
                    },
                );
            }
            RowKind::Skip => {}
        }
    }

    faq
}
