use super::domain::{ExamSlot, ProgramDraft, MAX_ELECTIVE_SLOTS, MAX_MANDATORY_SLOTS};
use super::normalizer::{normalize_exam_name, parse_count, parse_decimal, parse_minimum};
use super::CatalogError;
use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;
use tracing::warn;

pub(crate) const REQUIRED_COLUMNS: &[&str] = &[
    "program_code",
    "university_code",
    "program_name",
    "teaching_language",
    "annual_tuition",
    "total_places",
    "credits",
];

pub(crate) fn parse_programs<R: Read>(reader: R) -> Result<Vec<ProgramDraft>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(csv_reader.headers()?)?;
    let mut drafts = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let row = Row {
            record: &record,
            columns: &columns,
            line: record.position().map(|position| position.line()).unwrap_or_default(),
        };
        drafts.push(row.into_draft());
    }

    Ok(drafts)
}

struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let positions: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (normalize_exam_name(header).to_ascii_lowercase(), index))
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !positions.contains_key(**column))
        {
            return Err(CatalogError::MissingColumn {
                column: (*missing).to_string(),
            });
        }

        Ok(Self { positions })
    }

    fn get(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a ColumnIndex,
    line: u64,
}

impl Row<'_> {
    fn text(&self, column: &str) -> &str {
        self.columns
            .get(column)
            .and_then(|index| self.record.get(index))
            .unwrap_or_default()
    }

    fn decimal(&self, column: &str) -> f64 {
        let raw = self.text(column);
        if raw.is_empty() {
            return 0.0;
        }
        parse_decimal(raw).unwrap_or_else(|| self.degrade(column, raw))
    }

    fn count(&self, column: &str) -> u32 {
        let raw = self.text(column);
        if raw.is_empty() {
            return 0;
        }
        parse_count(raw).unwrap_or_else(|| {
            self.degrade(column, raw);
            0
        })
    }

    fn minimum(&self, column: &str) -> f64 {
        let raw = self.text(column);
        if raw.is_empty() {
            return 0.0;
        }
        parse_minimum(raw).unwrap_or_else(|| self.degrade(column, raw))
    }

    fn degrade(&self, column: &str, raw: &str) -> f64 {
        warn!(line = self.line, column, value = raw, "unparseable catalog cell, using 0");
        0.0
    }

    fn slot(&self, name_column: &str, prefix: &str) -> ExamSlot {
        ExamSlot::new(
            self.text(name_column),
            self.decimal(&format!("{prefix}_coef")),
            self.minimum(&format!("{prefix}_min")),
        )
    }

    fn into_draft(self) -> ProgramDraft {
        let mandatory_exams = (1..=MAX_MANDATORY_SLOTS)
            .map(|slot| {
                let prefix = format!("mandatory_exam_{slot}");
                self.slot(&prefix, &prefix)
            })
            .collect();
        let elective_exams = (1..=MAX_ELECTIVE_SLOTS)
            .map(|slot| {
                let prefix = format!("elective_exam_{slot}");
                self.slot(&format!("{prefix}_name"), &prefix)
            })
            .collect();
        let special_note = Some(self.text("special_note").to_string());

        ProgramDraft {
            program_code: self.text("program_code").to_string(),
            university_code: self.count("university_code"),
            program_name: self.text("program_name").to_string(),
            teaching_language: self.text("teaching_language").to_string(),
            annual_tuition: self.decimal("annual_tuition"),
            total_places: self.count("total_places"),
            credits: self.count("credits"),
            accreditation_status: self.text("accreditation_status").to_string(),
            special_note,
            mandatory_exams,
            elective_exams,
        }
    }
}
