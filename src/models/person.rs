use std::fmt;

use serde::{Deserialize, Serialize};

use super::{InstructorId, StudentId};

/// Attributes shared by every person on record.
///
/// Never registered on its own; it is embedded in [`Student`] and
/// [`Instructor`]. Both fields are expected to be non-empty, but this is
/// not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Institutional ID number, e.g. `S001` or `I004`.
    pub id_number: String,
}

impl Person {
    pub fn new(name: impl Into<String>, id_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_number: id_number.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, ID: {}", self.name, self.id_number)
    }
}

/// A student who can be enrolled in courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(flatten)]
    pub person: Person,
    pub major: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<String>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            id: StudentId::new(),
            person: Person::new(name, id_number),
            major: major.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn id_number(&self) -> &str {
        &self.person.id_number
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Major: {}", self.person, self.major)
    }
}

/// An instructor attached to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    #[serde(flatten)]
    pub person: Person,
    pub department: String,
}

impl Instructor {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: InstructorId::new(),
            person: Person::new(name, id_number),
            department: department.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn id_number(&self) -> &str {
        &self.person.id_number
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Department: {}", self.person, self.department)
    }
}

/// Input for updating a registered student. All fields are optional for partial updates.
///
/// Empty strings count as "not supplied" and leave the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentInput {
    pub name: Option<String>,
    pub major: Option<String>,
}

/// Input for updating a registered instructor. All fields are optional for partial updates.
///
/// Empty strings count as "not supplied" and leave the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInstructorInput {
    pub name: Option<String>,
    pub department: Option<String>,
}
