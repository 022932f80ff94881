use serde::{Deserialize, Serialize};

use super::{CourseId, StudentId};

/// A course students can enroll in.
///
/// The roster keeps enrollment order and holds each student at most once.
/// Rendering needs student names, so `Display` lives on
/// [`CourseView`](crate::report::CourseView) rather than here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub course_name: String,
    /// Catalogue code, e.g. `C001`.
    pub course_id: String,
    pub enrolled_students: Vec<StudentId>,
}

impl Course {
    pub fn new(course_name: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(),
            course_name: course_name.into(),
            course_id: course_id.into(),
            enrolled_students: Vec::new(),
        }
    }

    /// Append `student` to the roster unless already on it.
    ///
    /// Returns `false` for a student already enrolled; this is not an error.
    pub fn add_student(&mut self, student: StudentId) -> bool {
        if self.has_student(student) {
            return false;
        }
        self.enrolled_students.push(student);
        true
    }

    /// Drop `student` from the roster. Returns `false` if they were not on it.
    pub fn remove_student(&mut self, student: StudentId) -> bool {
        let before = self.enrolled_students.len();
        self.enrolled_students.retain(|s| *s != student);
        self.enrolled_students.len() != before
    }

    pub fn has_student(&self, student: StudentId) -> bool {
        self.enrolled_students.contains(&student)
    }
}

/// Input for updating a registered course. All fields are optional for partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseInput {
    pub course_name: Option<String>,
}
