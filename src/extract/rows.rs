use std::sync::LazyLock;

use regex::Regex;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Literal marker in the answer column that identifies a section-header row.
pub const ANSWER_MARKER: &str = "Answer";

const NUMBER_COL: usize = 0;
const LABEL_COL: usize = 1;
const ANSWER_COL: usize = 2;

/// Classification of one grid row under the positional layout: column 0
/// holds an optional item number, column 1 a label (section name or
/// question text), column 2 the header marker or answer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Opens a section; the raw label still needs name resolution.
    Header { label: String },
    /// Candidate Q&A record. The question may be empty; whether the entry
    /// is kept is the scanner's call.
    Entry {
        number: i64,
        question: String,
        answer: String,
    },
    /// No effect on the output.
    Skip,
}

pub fn classify(row: &[Option<String>], marker: &str) -> RowKind {
    // Header row: the marker literal sits in the answer column and the
    // label cell is populated. Marker comparison is exact (case-sensitive).
    if cell(row, ANSWER_COL) == marker {
        let label = cell(row, LABEL_COL);
        if !label.is_empty() {
            return RowKind::Header {
                label: label.to_string(),
            };
        }
        return RowKind::Skip;
    }

    // Data row: digit-only item number in column 0.
    let number = cell(row, NUMBER_COL);
    if DIGITS_RE.is_match(number) {
        if let Ok(number) = number.parse::<i64>() {
            return RowKind::Entry {
                number,
                question: cell(row, LABEL_COL).to_string(),
                answer: cell(row, ANSWER_COL).to_string(),
            };
        }
    }

    RowKind::Skip
}

fn cell(row: &[Option<String>], col: usize) -> &str {
    row.get(col)
        .and_then(|c| c.as_deref())
        .map(str::trim)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    #[test]
    fn header_row() {
        let r = row(&[None, Some("  Coverage  "), Some("Answer")]);
        assert_eq!(
            classify(&r, ANSWER_MARKER),
            RowKind::Header {
                label: "Coverage".into()
            }
        );
    }

    #[test]
    fn header_marker_is_trimmed() {
        let r = row(&[None, Some("Coverage"), Some(" Answer ")]);
        assert!(matches!(classify(&r, ANSWER_MARKER), RowKind::Header { .. }));
    }

    #[test]
    fn header_marker_is_case_sensitive() {
        let r = row(&[None, Some("Coverage"), Some("answer")]);
        assert_eq!(classify(&r, ANSWER_MARKER), RowKind::Skip);
    }

    #[test]
    fn header_without_label_is_skipped() {
        let r = row(&[None, None, Some("Answer")]);
        assert_eq!(classify(&r, ANSWER_MARKER), RowKind::Skip);
        let r = row(&[None, Some("   "), Some("Answer")]);
        assert_eq!(classify(&r, ANSWER_MARKER), RowKind::Skip);
    }

    #[test]
    fn custom_marker() {
        let r = row(&[None, Some("Coverage"), Some("Antwort")]);
        assert!(matches!(classify(&r, "Antwort"), RowKind::Header { .. }));
        assert_eq!(classify(&r, ANSWER_MARKER), RowKind::Skip);
    }

    #[test]
    fn entry_row() {
        let r = row(&[Some(" 7 "), Some("What is covered?"), Some("Everything.")]);
        assert_eq!(
            classify(&r, ANSWER_MARKER),
            RowKind::Entry {
                number: 7,
                question: "What is covered?".into(),
                answer: "Everything.".into(),
            }
        );
    }

    #[test]
    fn entry_with_absent_cells() {
        let r = row(&[Some("2")]);
        assert_eq!(
            classify(&r, ANSWER_MARKER),
            RowKind::Entry {
                number: 2,
                question: String::new(),
                answer: String::new(),
            }
        );
    }

    #[test]
    fn non_digit_number_is_skipped() {
        for bad in ["12a", "1.0", "-3", "", "Q1"] {
            let r = row(&[Some(bad), Some("question"), Some("answer")]);
            assert_eq!(classify(&r, ANSWER_MARKER), RowKind::Skip, "col 0 = {:?}", bad);
        }
    }

    #[test]
    fn overlong_digit_run_is_skipped() {
        let r = row(&[Some("99999999999999999999"), Some("q"), None]);
        assert_eq!(classify(&r, ANSWER_MARKER), RowKind::Skip);
    }

    #[test]
    fn blank_row_is_skipped() {
        assert_eq!(classify(&row(&[]), ANSWER_MARKER), RowKind::Skip);
        assert_eq!(classify(&row(&[None, None, None]), ANSWER_MARKER), RowKind::Skip);
    }

    #[test]
    fn internal_whitespace_preserved() {
        let r = row(&[Some("1"), Some("multi  word"), Some("line one\nline two")]);
        if let RowKind::Entry { answer, question, .. } = classify(&r, ANSWER_MARKER) {
            assert_eq!(question, "multi  word");
            assert_eq!(answer, "line one\nline two");
        } else {
            panic!("expected entry");
        }
    }
}
