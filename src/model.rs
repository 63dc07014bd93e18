use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One numbered question/answer row, as printed in the sheet. Numbers are
/// not required to be unique or contiguous, and an empty answer is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub number: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqSection {
    pub name: String,
    pub entries: Vec<FaqEntry>,
}

/// Ordered section-name → entries mapping. Backed by a Vec so sections keep
/// their first-appearance order; serializes as a JSON object keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqData {
    sections: Vec<FaqSection>,
}

impl FaqData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `name`, resetting its entry list if it already exists (last
    /// header wins). An existing section keeps its position. Returns the
    /// section index for subsequent appends.
    pub fn open_section(&mut self, name: String) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            self.sections[idx].entries.clear();
            idx
        } else {
            self.sections.push(FaqSection {
                name,
                entries: Vec::new(),
            });
            self.sections.len() - 1
        }
    }

    pub fn push_entry(&mut self, section: usize, entry: FaqEntry) {
        self.sections[section].entries.push(entry);
    }

    pub fn get(&self, name: &str) -> Option<&[FaqEntry]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.entries.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FaqEntry])> {
        self.sections
            .iter()
            .map(|s| (s.name.as_str(), s.entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

impl Serialize for FaqData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, &section.entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FaqData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FaqVisitor;

        impl<'de> Visitor<'de> for FaqVisitor {
            type Value = FaqData;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section name to entry list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<FaqData, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut data = FaqData::new();
                // Duplicate keys: last occurrence wins, same as a re-opened section
                while let Some((name, entries)) = map.next_entry::<String, Vec<FaqEntry>>()? {
                    let idx = data.open_section(name);
                    data.sections[idx].entries = entries;
                }
                Ok(data)
            }
        }

        deserializer.deserialize_map(FaqVisitor)
    }
}
