use roster::Roster;
use serde::Serialize;

use crate::analysis::statistics::Statistics;

/// Descriptive statistics over one score sequence. Ephemeral query result,
/// never stored on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    StudentNotFound { given: String, family: String },
    NotEnoughSamples { needed: usize, got: usize },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::StudentNotFound { given, family } => {
                write!(f, "no student named {given} {family}")
            }
            AnalysisError::NotEnoughSamples { needed, got } => {
                write!(f, "need at least {needed} score(s), got {got}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Statistics over one student's assignment scores.
///
/// The record is located through the roster's active sort key, then matched
/// on both names; a missing student is an error, not an empty result.
pub fn student_statistics(
    roster: &Roster,
    given: &str,
    family: &str,
) -> Result<Stats, AnalysisError> {
    let student =
        roster
            .find_student(given, family)
            .ok_or_else(|| AnalysisError::StudentNotFound {
                given: given.to_string(),
                family: family.to_string(),
            })?;
    let values: Vec<f64> = student.assignments().iter().map(|a| a.score()).collect();
    describe(&values)
}

/// Statistics for one assignment across every student, in traversal order.
///
/// Each record contributes exactly one value: the first assignment with a
/// matching name, or 0.0 when the record has none (missing means zero
/// credit).
pub fn class_statistics(roster: &Roster, assignment_name: &str) -> Result<Stats, AnalysisError> {
    let values: Vec<f64> = roster
        .iter()
        .map(|s| s.score_for(assignment_name).unwrap_or(0.0))
        .collect();
    describe(&values)
}

/// The full triple needs the sample standard deviation, so fewer than two
/// values is degenerate.
fn describe(values: &[f64]) -> Result<Stats, AnalysisError> {
    let (Some(mean), Some(median), Some(std_dev)) = (
        Statistics::mean(values),
        Statistics::median(values),
        Statistics::sample_std_dev(values),
    ) else {
        return Err(AnalysisError::NotEnoughSamples {
            needed: 2,
            got: values.len(),
        });
    };
    Ok(Stats {
        mean,
        median,
        std_dev,
    })
}
