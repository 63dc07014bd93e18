//! Helpdesk FAQ workbook converter.
//!
//! Reads an unstructured FAQ spreadsheet, reconstructs section → Q&A records
//! from its positional layout, and turns the result into a JSON mapping, a
//! chat-widget component source file, and knowledge-base INSERT statements.

pub mod emit;
pub mod extract;
pub mod grid;
pub mod model;
pub mod workbook;

pub use extract::ANSWER_MARKER;
pub use model::{FaqData, FaqEntry};
