use crate::order::SortKey;

/// Upper bound, in bytes, for any stored name.
pub const MAX_NAME_LEN: usize = 100;

/// Clips a name to `MAX_NAME_LEN` bytes on a character boundary.
pub fn bounded_name(name: &str) -> &str {
    if name.len() <= MAX_NAME_LEN {
        return name;
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// A named score. Immutable once created; owned by its containing student.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    name: String,
    score: f64,
}

impl Assignment {
    pub fn new(name: &str, score: f64) -> Self {
        Self {
            name: bounded_name(name).to_string(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// One student: both names plus a fixed-length assignment sequence.
///
/// The assignment sequence is set at creation and cannot grow; replacing it
/// means building a new student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    given: String,
    family: String,
    assignments: Box<[Assignment]>,
}

impl Student {
    /// Builds a student from borrowed input, deep-copying every string.
    /// The caller keeps ownership of its buffers.
    pub fn new(given: &str, family: &str, assignments: &[Assignment]) -> Self {
        Self {
            given: bounded_name(given).to_string(),
            family: bounded_name(family).to_string(),
            assignments: assignments.to_vec().into_boxed_slice(),
        }
    }

    pub fn given(&self) -> &str {
        &self.given
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// The name field the given sort key orders by.
    pub fn key_field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Given => &self.given,
            SortKey::Family => &self.family,
        }
    }

    /// Score of the first assignment with a matching name.
    pub fn score_for(&self, assignment_name: &str) -> Option<f64> {
        self.assignments
            .iter()
            .find(|a| a.name() == assignment_name)
            .map(|a| a.score())
    }
}
