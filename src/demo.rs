//! Demonstration scenario.
//!
//! Replays a small semester against a [`Registry`]: registering people and
//! courses, updating and removing them, enrolling, grading, querying, and
//! finally four rejected operations. Output is plain text meant for a
//! terminal; errors coming back from the registry are reported, not
//! propagated.

use std::io::Write;

use anyhow::Result;

use crate::error::RegistryError;
use crate::models::*;
use crate::registry::Registry;

/// Run the full scenario, writing a transcript to `out`.
pub fn run<W: Write>(registry: &mut Registry, out: &mut W) -> Result<()> {
    // Warm-up: one student, one instructor, one course
    let john = registry.add_student(Student::new("John Doe", "S001", "Computer Science"));
    registry.add_instructor(Instructor::new("Dr. Smith", "I001", "Computer Science"));
    let intro = registry.add_course(Course::new("Python Programming", "C001"));

    registry.enroll_student(john, intro)?;
    registry.assign_grade(john, intro, "A")?;

    writeln!(out, "Students enrolled in Python Programming:")?;
    writeln!(out, "{:?}", names(registry.get_students_in_course(intro)))?;
    writeln!(out, "Courses John Doe is enrolled in:")?;
    writeln!(out, "{:?}", names(registry.get_courses_for_student(john)))?;

    // Students
    let meredith = registry.add_student(Student::new("Meredith Grey", "S004", "Computer Science"));
    let jackson = registry.add_student(Student::new(
        "Jackson Booman",
        "S006",
        "Mechanical Engineering",
    ));
    let alice = registry.add_student(Student::new(
        "Alice Dakota",
        "S003",
        "Electrical Engineering",
    ));
    let bob = registry.add_student(Student::new("Bob Brown", "S009", "Civil Engineering"));
    let anita = Student::new("Anita Baker", "S019", "Medicine");
    print_students(registry, out, "Students after adding:")?;

    registry.remove_student(bob)?;
    print_students(registry, out, "\nStudents after removing Bob Brown:")?;

    registry.update_student(
        alice,
        UpdateStudentInput {
            name: Some("Alice Davis".to_string()),
            major: Some("Software Engineering".to_string()),
        },
    );
    print_students(registry, out, "\nStudents after updating Alice Dakota to Alice Davis:")?;

    // Instructors
    let gorge = registry.add_instructor(Instructor::new("Dr. Gorge", "I004", "Computer Science"));
    let williams = registry.add_instructor(Instructor::new(
        "Dr. Williams",
        "I006",
        "Mechanical Engineering",
    ));
    print_instructors(registry, out, "\nInstructors after adding:")?;

    registry.remove_instructor(williams);
    print_instructors(registry, out, "\nInstructors after removing Dr. Williams:")?;

    registry.update_instructor(
        gorge,
        UpdateInstructorInput {
            name: Some("Dr. John Smith".to_string()),
            department: Some("Data Science".to_string()),
        },
    );
    print_instructors(
        registry,
        out,
        "\nInstructors after updating Dr. Gorge to Dr. John Smith:",
    )?;

    // Courses
    let python = registry.add_course(Course::new("Python Programming", "C009"));
    let thermo = registry.add_course(Course::new("Thermodynamics", "C008"));
    let structures = registry.add_course(Course::new("Data Structures", "C007"));
    print_courses(registry, out, "\nCourses after adding:")?;

    registry.remove_course(thermo);
    print_courses(registry, out, "\nCourses after removing Thermodynamics:")?;

    registry.update_course(
        structures,
        UpdateCourseInput {
            course_name: Some("Advanced Data Structures".to_string()),
        },
    );
    print_courses(
        registry,
        out,
        "\nCourses after updating Data Structures to Advanced Data Structures:",
    )?;

    // Enrollments and grades
    registry.enroll_student(meredith, python)?;
    registry.enroll_student(jackson, python)?;
    registry.enroll_student(alice, structures)?;
    print_enrollments(registry, out, "\nEnrollments after enrolling students in courses:")?;

    registry.assign_grade(meredith, python, "A")?;
    registry.assign_grade(jackson, python, "B")?;
    registry.assign_grade(alice, structures, "A-")?;
    print_enrollments(registry, out, "\nEnrollments after assigning grades:")?;

    writeln!(out, "\nStudents enrolled in Python Programming:")?;
    writeln!(out, "{:?}", names(registry.get_students_in_course(python)))?;
    writeln!(out, "\nStudents enrolled in Advanced Data Structures:")?;
    writeln!(out, "{:?}", names(registry.get_students_in_course(structures)))?;
    writeln!(out, "\nCourses Meredith Grey is enrolled in:")?;
    writeln!(out, "{:?}", names(registry.get_courses_for_student(meredith)))?;
    writeln!(out, "\nCourses Alice Davis is enrolled in:")?;
    writeln!(out, "{:?}", names(registry.get_courses_for_student(alice)))?;

    // Rejected operations
    writeln!(out, "\nAttempting to remove a student who is not in the system:")?;
    if registry.remove_student(anita.id).is_err() {
        writeln!(out, "Error: {} is not in the student list.", anita.name())?;
    }

    writeln!(out, "\nAttempting to enroll the same student again in the same course:")?;
    enroll_or_report(registry, out, meredith, "Meredith Grey", python, "Python Programming")?;

    writeln!(out, "\nAttempting to enroll a student in a course that is not in the system:")?;
    let algorithms = Course::new("Advanced Algorithms", "C010");
    enroll_or_report(registry, out, jackson, "Jackson Booman", algorithms.id, &algorithms.course_name)?;

    writeln!(out, "\nAttempting to enroll a student who is not in the system:")?;
    enroll_or_report(registry, out, anita.id, anita.name(), python, "Python Programming")?;

    Ok(())
}

fn names<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    iter.collect()
}

fn enroll_or_report<W: Write>(
    registry: &mut Registry,
    out: &mut W,
    student: StudentId,
    student_name: &str,
    course: CourseId,
    course_name: &str,
) -> Result<()> {
    match registry.enroll_student(student, course) {
        Ok(()) => writeln!(out, "Enrolled {} in {}.", student_name, course_name)?,
        Err(RegistryError::DuplicateEnrollment { .. }) => writeln!(
            out,
            "Error: {} is already enrolled in {}.",
            student_name, course_name
        )?,
        Err(_) => writeln!(
            out,
            "Error: Either the student or the course is not in the system."
        )?,
    }
    Ok(())
}

fn print_students<W: Write>(registry: &Registry, out: &mut W, heading: &str) -> Result<()> {
    writeln!(out, "{}", heading)?;
    for student in registry.students() {
        writeln!(out, "{}", student)?;
    }
    Ok(())
}

fn print_instructors<W: Write>(registry: &Registry, out: &mut W, heading: &str) -> Result<()> {
    writeln!(out, "{}", heading)?;
    for instructor in registry.instructors() {
        writeln!(out, "{}", instructor)?;
    }
    Ok(())
}

fn print_courses<W: Write>(registry: &Registry, out: &mut W, heading: &str) -> Result<()> {
    writeln!(out, "{}", heading)?;
    for view in registry.courses().filter_map(|c| registry.course_view(c.id)) {
        writeln!(out, "{}", view)?;
    }
    Ok(())
}

fn print_enrollments<W: Write>(registry: &Registry, out: &mut W, heading: &str) -> Result<()> {
    writeln!(out, "{}", heading)?;
    for view in registry.enrollment_views() {
        writeln!(out, "{}", view)?;
    }
    Ok(())
}
