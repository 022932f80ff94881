use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseId, StudentId};

/// A student's enrollment in one course.
///
/// The grade starts unset and is overwritten by every
/// [`assign_grade`](Self::assign_grade) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student: StudentId,
    pub course: CourseId,
    pub grade: Option<String>,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(student: StudentId, course: CourseId) -> Self {
        Self {
            student,
            course,
            grade: None,
            enrolled_at: Utc::now(),
        }
    }

    pub fn assign_grade(&mut self, grade: impl Into<String>) {
        self.grade = Some(grade.into());
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Whether this enrollment links exactly `student` and `course`.
    pub fn matches(&self, student: StudentId, course: CourseId) -> bool {
        self.student == student && self.course == course
    }
}
