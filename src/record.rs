//! The record value type.

use std::fmt;

/// A single person record: identifier, name, age and school.
///
/// Records are plain values. The store hands out copies, so nothing a
/// consumer does to its own `Record` is visible to anyone else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub school: String,
}

impl Record {
    /// Create a record from its four fields.
    pub fn new(id: u64, name: &str, age: u32, school: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            school: school.to_string(),
        }
    }

    /// Exact, case-sensitive school match with no trimming.
    pub fn is_from(&self, school: &str) -> bool {
        self.school == school
    }

    pub fn has_even_age(&self) -> bool {
        self.age % 2 == 0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({}, {})", self.id, self.name, self.age, self.school)
    }
}
