//! The in-memory registry.
//!
//! # Membership
//!
//! The registry keeps four ordered membership lists (students, instructors,
//! courses, enrollments). Records handed over with `add_*` are also kept in a
//! handle-keyed store that outlives membership, so a removed student's name
//! still resolves for the course rosters and enrollments that mention them.
//!
//! Removal does not cascade unless [`RegistryConfig::cascade_removals`] is set.

use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::models::*;
use crate::report::{CourseView, EnrollmentView, Snapshot};

#[derive(Debug, Default)]
pub struct Registry {
    config: RegistryConfig,
    students: Vec<StudentId>,
    instructors: Vec<InstructorId>,
    courses: Vec<CourseId>,
    enrollments: Vec<Enrollment>,
    student_records: HashMap<StudentId, Student>,
    instructor_records: HashMap<InstructorId, Instructor>,
    course_records: HashMap<CourseId, Course>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ============================================================
    // Student operations
    // ============================================================

    /// Register a student. No duplicate check: adding the same record twice
    /// lists it twice. A handle already on record keeps its stored state; the
    /// passed-in copy is only used the first time.
    pub fn add_student(&mut self, student: Student) -> StudentId {
        let id = student.id;
        tracing::debug!(student = %id, name = %student.name(), "Adding student");
        self.students.push(id);
        self.student_records.entry(id).or_insert(student);
        id
    }

    /// Remove one membership entry for `student`.
    pub fn remove_student(&mut self, student: StudentId) -> Result<()> {
        let Some(pos) = self.students.iter().position(|s| *s == student) else {
            tracing::warn!(student = %student, "Cannot remove student: not in system");
            return Err(RegistryError::StudentNotFound(student));
        };
        self.students.remove(pos);
        tracing::debug!(student = %student, "Removed student");

        if self.config.cascade_removals && !self.students.contains(&student) {
            for course in self.course_records.values_mut() {
                course.remove_student(student);
            }
            let before = self.enrollments.len();
            self.enrollments.retain(|e| e.student != student);
            tracing::debug!(
                student = %student,
                dropped = before - self.enrollments.len(),
                "Cascaded student removal"
            );
        }
        Ok(())
    }

    /// Apply the supplied, non-empty fields of `input` to a registered student.
    ///
    /// Returns `None` without touching anything if `student` is not registered.
    pub fn update_student(
        &mut self,
        student: StudentId,
        input: UpdateStudentInput,
    ) -> Option<&Student> {
        if !self.students.contains(&student) {
            return None;
        }
        let record = self.student_records.get_mut(&student)?;
        if let Some(name) = supplied(input.name) {
            record.person.name = name;
        }
        if let Some(major) = supplied(input.major) {
            record.major = major;
        }
        tracing::debug!(student = %student, "Updated student");
        Some(&*record)
    }

    pub fn contains_student(&self, student: StudentId) -> bool {
        self.students.contains(&student)
    }

    /// A currently registered student.
    pub fn student(&self, student: StudentId) -> Option<&Student> {
        self.contains_student(student)
            .then(|| self.student_records.get(&student))
            .flatten()
    }

    /// Registered students in insertion order.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students
            .iter()
            .filter_map(move |id| self.student_records.get(id))
    }

    // ============================================================
    // Instructor operations
    // ============================================================

    pub fn add_instructor(&mut self, instructor: Instructor) -> InstructorId {
        let id = instructor.id;
        tracing::debug!(instructor = %id, name = %instructor.name(), "Adding instructor");
        self.instructors.push(id);
        self.instructor_records.entry(id).or_insert(instructor);
        id
    }

    /// Remove one membership entry for `instructor`. Returns `false` if absent.
    pub fn remove_instructor(&mut self, instructor: InstructorId) -> bool {
        match self.instructors.iter().position(|i| *i == instructor) {
            Some(pos) => {
                self.instructors.remove(pos);
                tracing::debug!(instructor = %instructor, "Removed instructor");
                true
            }
            None => false,
        }
    }

    /// Apply the supplied, non-empty fields of `input` to a registered instructor.
    pub fn update_instructor(
        &mut self,
        instructor: InstructorId,
        input: UpdateInstructorInput,
    ) -> Option<&Instructor> {
        if !self.instructors.contains(&instructor) {
            return None;
        }
        let record = self.instructor_records.get_mut(&instructor)?;
        if let Some(name) = supplied(input.name) {
            record.person.name = name;
        }
        if let Some(department) = supplied(input.department) {
            record.department = department;
        }
        tracing::debug!(instructor = %instructor, "Updated instructor");
        Some(&*record)
    }

    pub fn contains_instructor(&self, instructor: InstructorId) -> bool {
        self.instructors.contains(&instructor)
    }

    pub fn instructor(&self, instructor: InstructorId) -> Option<&Instructor> {
        self.contains_instructor(instructor)
            .then(|| self.instructor_records.get(&instructor))
            .flatten()
    }

    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> + '_ {
        self.instructors
            .iter()
            .filter_map(move |id| self.instructor_records.get(id))
    }

    // ============================================================
    // Course operations
    // ============================================================

    /// Register a course. Re-adding a known handle keeps the stored roster.
    pub fn add_course(&mut self, course: Course) -> CourseId {
        let id = course.id;
        tracing::debug!(course = %id, name = %course.course_name, "Adding course");
        self.courses.push(id);
        self.course_records.entry(id).or_insert(course);
        id
    }

    /// Remove one membership entry for `course`. Returns `false` if absent.
    pub fn remove_course(&mut self, course: CourseId) -> bool {
        let Some(pos) = self.courses.iter().position(|c| *c == course) else {
            return false;
        };
        self.courses.remove(pos);
        tracing::debug!(course = %course, "Removed course");

        if self.config.cascade_removals && !self.courses.contains(&course) {
            if let Some(record) = self.course_records.get_mut(&course) {
                record.enrolled_students.clear();
            }
            self.enrollments.retain(|e| e.course != course);
        }
        true
    }

    pub fn update_course(&mut self, course: CourseId, input: UpdateCourseInput) -> Option<&Course> {
        if !self.courses.contains(&course) {
            return None;
        }
        let record = self.course_records.get_mut(&course)?;
        if let Some(name) = supplied(input.course_name) {
            record.course_name = name;
        }
        tracing::debug!(course = %course, "Updated course");
        Some(&*record)
    }

    pub fn contains_course(&self, course: CourseId) -> bool {
        self.courses.contains(&course)
    }

    pub fn course(&self, course: CourseId) -> Option<&Course> {
        self.contains_course(course)
            .then(|| self.course_records.get(&course))
            .flatten()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses
            .iter()
            .filter_map(move |id| self.course_records.get(id))
    }

    // ============================================================
    // Enrollment operations
    // ============================================================

    /// Enroll a registered student in a registered course.
    ///
    /// Fails with [`RegistryError::StudentNotFound`] or
    /// [`RegistryError::CourseNotFound`] when either side is not registered
    /// (the student is checked first), and with
    /// [`RegistryError::DuplicateEnrollment`] when the student is already on
    /// the course roster. On failure nothing changes.
    pub fn enroll_student(&mut self, student: StudentId, course: CourseId) -> Result<()> {
        if !self.contains_student(student) {
            tracing::warn!(student = %student, course = %course, "Cannot enroll: student not in system");
            return Err(RegistryError::StudentNotFound(student));
        }
        if !self.contains_course(course) {
            tracing::warn!(student = %student, course = %course, "Cannot enroll: course not in system");
            return Err(RegistryError::CourseNotFound(course));
        }

        let record = self
            .course_records
            .get_mut(&course)
            .ok_or(RegistryError::CourseNotFound(course))?;
        if !record.add_student(student) {
            tracing::warn!(student = %student, course = %course, "Cannot enroll: already enrolled");
            return Err(RegistryError::DuplicateEnrollment { student, course });
        }

        self.enrollments.push(Enrollment::new(student, course));
        tracing::debug!(student = %student, course = %course, "Enrolled student");
        Ok(())
    }

    /// Set the grade on the first enrollment linking `student` and `course`.
    pub fn assign_grade(
        &mut self,
        student: StudentId,
        course: CourseId,
        grade: impl Into<String>,
    ) -> Result<()> {
        let Some(enrollment) = self
            .enrollments
            .iter_mut()
            .find(|e| e.matches(student, course))
        else {
            tracing::warn!(student = %student, course = %course, "Cannot grade: no enrollment");
            return Err(RegistryError::EnrollmentNotFound { student, course });
        };
        enrollment.assign_grade(grade);
        tracing::debug!(
            student = %student,
            course = %course,
            grade = ?enrollment.grade,
            "Assigned grade"
        );
        Ok(())
    }

    /// First enrollment linking `student` and `course`, if any.
    pub fn enrollment(&self, student: StudentId, course: CourseId) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.matches(student, course))
    }

    /// All enrollments in creation order.
    pub fn enrollments(&self) -> impl Iterator<Item = &Enrollment> + '_ {
        self.enrollments.iter()
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Names of the students on `course`'s roster, in enrollment order.
    ///
    /// Reads the roster even after the course has been removed; an unknown
    /// handle yields nothing.
    pub fn get_students_in_course(&self, course: CourseId) -> impl Iterator<Item = &str> + '_ {
        self.course_records
            .get(&course)
            .into_iter()
            .flat_map(|c| c.enrolled_students.iter())
            .filter_map(move |id| self.student_records.get(id))
            .map(Student::name)
    }

    /// Names of the courses `student` is enrolled in, one per enrollment.
    pub fn get_courses_for_student(
        &self,
        student: StudentId,
    ) -> impl Iterator<Item = &str> + '_ {
        self.enrollments
            .iter()
            .filter(move |e| e.student == student)
            .filter_map(move |e| self.course_records.get(&e.course))
            .map(|c| c.course_name.as_str())
    }

    // ============================================================
    // Views
    // ============================================================

    /// Renderable view of a course with its roster names resolved.
    pub fn course_view(&self, course: CourseId) -> Option<CourseView<'_>> {
        let record = self.course_records.get(&course)?;
        Some(CourseView::new(
            record,
            self.get_students_in_course(course).collect(),
        ))
    }

    /// Renderable views of every enrollment, in creation order.
    pub fn enrollment_views(&self) -> impl Iterator<Item = EnrollmentView<'_>> + '_ {
        self.enrollments
            .iter()
            .filter_map(move |e| self.enrollment_view(e))
    }

    fn enrollment_view<'a>(&'a self, enrollment: &'a Enrollment) -> Option<EnrollmentView<'a>> {
        let student = self.student_records.get(&enrollment.student)?;
        let course = self.course_records.get(&enrollment.course)?;
        Some(EnrollmentView::new(
            enrollment,
            student.name(),
            &course.course_name,
            &self.config.ungraded_marker,
        ))
    }

    /// Serializable copy of current membership.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            students: self.students().collect(),
            instructors: self.instructors().collect(),
            courses: self.courses().collect(),
            enrollments: self.enrollments().collect(),
        }
    }
}

/// Treat missing and empty values alike.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
