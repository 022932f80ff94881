//! Text and JSON rendering for registry contents.
//!
//! Courses and enrollments only hold handles, so their human-readable form
//! is built from borrowed views that carry the resolved names.

use std::fmt;

use serde::Serialize;

use crate::models::{Course, Enrollment, Instructor, Student};

/// A course together with the names on its roster.
///
/// Example output:
/// ```text
/// Course Name: Python Programming, ID: C009, Enrolled Students: Meredith Grey, Jackson Booman
/// ```
#[derive(Debug, Clone)]
pub struct CourseView<'a> {
    pub course: &'a Course,
    pub students: Vec<&'a str>,
}

impl<'a> CourseView<'a> {
    pub fn new(course: &'a Course, students: Vec<&'a str>) -> Self {
        Self { course, students }
    }
}

impl fmt::Display for CourseView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course Name: {}, ID: {}, Enrolled Students: {}",
            self.course.course_name,
            self.course.course_id,
            self.students.join(", ")
        )
    }
}

/// An enrollment with student and course names resolved.
///
/// An unset grade renders as `ungraded_marker` (`None` unless configured).
#[derive(Debug, Clone)]
pub struct EnrollmentView<'a> {
    pub enrollment: &'a Enrollment,
    pub student_name: &'a str,
    pub course_name: &'a str,
    ungraded_marker: &'a str,
}

impl<'a> EnrollmentView<'a> {
    pub fn new(
        enrollment: &'a Enrollment,
        student_name: &'a str,
        course_name: &'a str,
        ungraded_marker: &'a str,
    ) -> Self {
        Self {
            enrollment,
            student_name,
            course_name,
            ungraded_marker,
        }
    }

    pub fn grade(&self) -> &str {
        self.enrollment
            .grade
            .as_deref()
            .unwrap_or(self.ungraded_marker)
    }
}

impl fmt::Display for EnrollmentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, Course: {}, Grade: {}",
            self.student_name,
            self.course_name,
            self.grade()
        )
    }
}

/// Current registry membership, borrowed for serialization.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub students: Vec<&'a Student>,
    pub instructors: Vec<&'a Instructor>,
    pub courses: Vec<&'a Course>,
    pub enrollments: Vec<&'a Enrollment>,
}
