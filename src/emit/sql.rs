use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde_json::json;

use crate::model::FaqData;

/// Section name → (category, subcategory) for the knowledge-base columns.
/// Unmapped sections file under general/faq.
const CATEGORY_MAP: &[(&str, &str, &str)] = &[
    ("Benefit Coverage", "benefits", "coverage"),
    ("Letter of Guarantee (LOG)", "log", "requests"),
    ("Portal Matters", "portal", "access"),
    ("Claims Status", "claims", "status"),
];

const FALLBACK_CATEGORY: (&str, &str) = ("general", "faq");

const SOURCE_LABEL: &str = "Helpdesk FAQ Excel";

/// Answers longer than this are flagged as detailed in the row metadata.
const DETAILED_ANSWER_LEN: usize = 100;

pub struct SqlOutput {
    pub full: String,
    pub safe: String,
    pub inserts: usize,
    pub skipped: usize,
}

/// Double single quotes for embedding in a SQL string literal.
fn escape_sql(text: &str) -> String {
    text.replace('\'', "''")
}

fn category_for(name: &str) -> (&'static str, &'static str) {
    CATEGORY_MAP
        .iter()
        .find(|(section, _, _)| *section == name)
        .map(|(_, category, subcategory)| (*category, *subcategory))
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Render INSERT statements for every record with a non-empty answer.
/// `source` names the workbook or JSON the data came from; it only appears
/// in the header comment. The safe variant drops every element mentioning
/// DELETE FROM.
pub fn generate(faq: &FaqData, source: &str) -> SqlOutput {
    let mut statements: Vec<String> = vec![
        "-- FAQ Knowledge Base Insert Statements".to_string(),
        format!("-- Generated from {}", source),
        format!("-- Generated at {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        format!("-- Total Questions: {}", faq.total_entries()),
        String::new(),
        "-- Clear existing FAQ data (optional - remove if you want to keep existing data)"
            .to_string(),
        format!("-- DELETE FROM knowledge_base WHERE source = '{}';", SOURCE_LABEL),
        String::new(),
    ];

    let mut inserts = 0;
    let mut skipped = 0;

    for (name, entries) in faq.iter() {
        statements.push(format!("-- {} ({} questions)", name, entries.len()));
        statements.push(String::new());

        let (category, subcategory) = category_for(name);

        for entry in entries {
            // Empty-answer records are the SQL generator's to skip, not the
            // extractor's to drop.
            if entry.answer.trim().is_empty() {
                statements.push(format!("-- Skipping Q{}: No answer provided", entry.number));
                skipped += 1;
                continue;
            }

            let question = escape_sql(&entry.question);
            let answer = escape_sql(&entry.answer);

            let metadata = json!({
                "section": name,
                "question_number": entry.number,
                "has_detailed_answer": answer.chars().count() > DETAILED_ANSWER_LEN,
            });
            let metadata = escape_sql(&metadata.to_string());

            let stmt = [
                "INSERT INTO knowledge_base (title, content, category, subcategory, metadata, source, confidence_score, is_active)".to_string(),
                "VALUES (".to_string(),
                format!("  '{}',", question),
                format!("  '{}',", answer),
                format!("  '{}',", category),
                format!("  '{}',", subcategory),
                format!("  '{}'::jsonb,", metadata),
                format!("  '{}',", SOURCE_LABEL),
                "  1.0,".to_string(),
                "  true".to_string(),
                ");".to_string(),
            ]
            .join("\n");

            statements.push(stmt);
            statements.push(String::new());
            inserts += 1;
        }
    }

    let full = statements.join("\n");
    let safe = statements
        .iter()
        .filter(|s| !s.contains("DELETE FROM"))
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    SqlOutput {
        full,
        safe,
        inserts,
        skipped,
    }
}

/// Path for the safe variant next to the main output:
/// `insert_faq_knowledge.sql` → `insert_faq_knowledge_safe.sql`.
pub fn safe_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("insert_faq_knowledge");
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => path.with_file_name(format!("{}_safe.{}", stem, ext)),
        None => path.with_file_name(format!("{}_safe", stem)),
    }
}

/// Write both variants; returns the generation summary.
pub fn write(path: &Path, faq: &FaqData, source: &str) -> Result<SqlOutput> {
    let output = generate(faq, source);
    fs::write(path, &output.full)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    let safe = safe_path(path);
    fs::write(&safe, &output.safe)
        .with_context(|| format!("Failed to write {}", safe.display()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaqEntry;

    fn entry(number: i64, question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            number,
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn sample() -> FaqData {
        let mut faq = FaqData::new();
        let a = faq.open_section("Benefit Coverage".into());
        faq.push_entry(a, entry(1, "What's covered?", "Everything in the member's plan."));
        faq.push_entry(a, entry(2, "Unanswered?", ""));
        let b = faq.open_section("Miscellaneous".into());
        faq.push_entry(b, entry(3, "Where to ask?", "Email the helpdesk."));
        faq
    }

    #[test]
    fn quotes_doubled() {
        assert_eq!(escape_sql("it's"), "it''s");
        assert_eq!(escape_sql("none"), "none");
    }

    #[test]
    fn known_and_fallback_categories() {
        assert_eq!(category_for("Claims Status"), ("claims", "status"));
        assert_eq!(category_for("Miscellaneous"), FALLBACK_CATEGORY);
    }

    #[test]
    fn insert_per_answered_record() {
        let out = generate(&sample(), "test.json");
        assert_eq!(out.inserts, 2);
        assert_eq!(out.skipped, 1);
        assert_eq!(out.full.matches("INSERT INTO knowledge_base").count(), 2);
        assert!(out.full.contains("-- Skipping Q2: No answer provided"));
    }

    #[test]
    fn escaped_text_embedded() {
        let out = generate(&sample(), "test.json");
        assert!(out.full.contains("  'What''s covered?',"));
        assert!(out.full.contains("  'Everything in the member''s plan.',"));
    }

    #[test]
    fn metadata_payload() {
        let out = generate(&sample(), "test.json");
        assert!(out.full.contains(r#""question_number":1"#));
        assert!(out.full.contains(r#""has_detailed_answer":false"#));
        assert!(out.full.contains("'::jsonb,"));
    }

    #[test]
    fn fallback_category_in_output() {
        let out = generate(&sample(), "test.json");
        assert!(out.full.contains("  'general',\n  'faq',"));
    }

    #[test]
    fn safe_variant_has_no_delete() {
        let out = generate(&sample(), "test.json");
        assert!(out.full.contains("DELETE FROM"));
        assert!(!out.safe.contains("DELETE FROM"));
        // only the delete comment goes away
        assert_eq!(out.safe.matches("INSERT INTO knowledge_base").count(), 2);
    }

    #[test]
    fn header_names_source() {
        let out = generate(&sample(), "Helpdesk FAQ for Chatbot.xlsx");
        assert!(out
            .full
            .contains("-- Generated from Helpdesk FAQ for Chatbot.xlsx"));
        assert!(out.full.contains("-- Total Questions: 3"));
    }

    #[test]
    fn safe_path_naming() {
        assert_eq!(
            safe_path(Path::new("out/insert_faq_knowledge.sql")),
            PathBuf::from("out/insert_faq_knowledge_safe.sql")
        );
        assert_eq!(safe_path(Path::new("dump")), PathBuf::from("dump_safe"));
    }

    #[test]
    fn writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert_faq_knowledge.sql");
        let out = write(&path, &sample(), "test.json").unwrap();
        assert_eq!(out.inserts, 2);
        assert!(path.exists());
        assert!(dir.path().join("insert_faq_knowledge_safe.sql").exists());
    }
}
