//! Error types for registry operations.

use thiserror::Error;

use crate::models::{CourseId, StudentId};

/// Result type alias
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Rejected registry operations.
///
/// None of these are fatal: the registry is left unchanged and the caller
/// decides whether to report, log or ignore the condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Student not in system: {0}")]
    StudentNotFound(StudentId),

    #[error("Course not in system: {0}")]
    CourseNotFound(CourseId),

    #[error("No enrollment for student {student} in course {course}")]
    EnrollmentNotFound { student: StudentId, course: CourseId },

    #[error("Student {student} is already enrolled in course {course}")]
    DuplicateEnrollment { student: StudentId, course: CourseId },
}

impl RegistryError {
    /// Whether the operation referenced something the registry does not hold.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound(_) | Self::CourseNotFound(_) | Self::EnrollmentNotFound { .. }
        )
    }
}
