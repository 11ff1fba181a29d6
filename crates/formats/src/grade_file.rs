//! The delimited grade-file grammar.
//!
//! First line: `<record_count>,<assignment_count>`. Then one line per
//! record: `<given>,<family>` followed by `,<name>,<score>` repeated
//! `<assignment_count>` times. Scores render with six decimal places.
//!
//! The document types here are the serialization boundary; they are
//! distinct from the roster's record types and carry no ordering.

use std::fmt::Write as _;

use roster::bounded_name;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum GradeFileError {
    MissingHeader,
    InvalidHeader { reason: String },
}

impl std::fmt::Display for GradeFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeFileError::MissingHeader => write!(f, "grade file is empty"),
            GradeFileError::InvalidHeader { reason } => {
                write!(f, "invalid grade file header: {reason}")
            }
        }
    }
}

impl std::error::Error for GradeFileError {}

/// One named score as it appears in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
}

/// One student line: both names plus the parsed score pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub given: String,
    pub family: String,
    pub scores: Vec<ScoreEntry>,
}

/// A parsed grade file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeFile {
    pub assignment_count: usize,
    pub records: Vec<StudentRecord>,
    /// Records dropped during parsing because their name fields could not
    /// be read. Parse artifact, not document content.
    #[serde(skip)]
    pub skipped_records: usize,
}

impl GradeFile {
    /// Parses the delimited text format.
    ///
    /// A bad header is fatal. Per-record problems are not: a record whose
    /// name fields cannot be read is skipped and counted, a score pair
    /// whose value does not parse is dropped from its record, and parsing
    /// continues either way. At most `record_count` records are read;
    /// trailing lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GradeFileError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(GradeFileError::MissingHeader)?;
        let (record_count, assignment_count) = parse_header(header)?;

        let mut records = Vec::with_capacity(record_count);
        let mut skipped = 0;
        for line in lines {
            if records.len() == record_count {
                break;
            }
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            match parse_record(line, assignment_count) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        Ok(Self {
            assignment_count,
            records,
            skipped_records: skipped,
        })
    }

    /// Renders the delimited text format. An empty document renders as
    /// `0,0` with no record lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{},{}", self.records.len(), self.assignment_count);
        for record in &self.records {
            out.push_str(&record.given);
            out.push(',');
            out.push_str(&record.family);
            for entry in &record.scores {
                let _ = write!(out, ",{},{:.6}", entry.name, entry.score);
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), GradeFileError> {
    let line = line.trim_end_matches('\r');
    let Some((records, assignments)) = line.split_once(',') else {
        return Err(GradeFileError::InvalidHeader {
            reason: format!("expected `records,assignments`, got {line:?}"),
        });
    };
    let record_count = records
        .trim()
        .parse::<usize>()
        .map_err(|e| GradeFileError::InvalidHeader {
            reason: format!("record count {records:?}: {e}"),
        })?;
    let assignment_count =
        assignments
            .trim()
            .parse::<usize>()
            .map_err(|e| GradeFileError::InvalidHeader {
                reason: format!("assignment count {assignments:?}: {e}"),
            })?;
    Ok((record_count, assignment_count))
}

fn parse_record(line: &str, assignment_count: usize) -> Option<StudentRecord> {
    let mut fields = line.split(',');
    let given = fields.next()?;
    let family = fields.next()?;
    if given.is_empty() || family.is_empty() {
        return None;
    }

    let mut scores = Vec::with_capacity(assignment_count);
    for _ in 0..assignment_count {
        let (Some(name), Some(raw)) = (fields.next(), fields.next()) else {
            break;
        };
        // A pair whose score does not parse is dropped; the record stays.
        let Ok(score) = raw.trim().parse::<f64>() else {
            continue;
        };
        scores.push(ScoreEntry {
            name: bounded_name(name).to_string(),
            score,
        });
    }

    Some(StudentRecord {
        given: bounded_name(given).to_string(),
        family: bounded_name(family).to_string(),
        scores,
    })
}
