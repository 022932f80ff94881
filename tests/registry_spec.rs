use roster::models::*;
use roster::{Registry, RegistryConfig, RegistryError};
use speculate2::speculate;

fn seeded(registry: &mut Registry) -> (StudentId, CourseId) {
    let student = registry.add_student(Student::new("John Doe", "S001", "Computer Science"));
    let course = registry.add_course(Course::new("Python Programming", "C001"));
    (student, course)
}

fn names<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    iter.collect()
}

speculate! {
    before {
        let mut registry = Registry::new();
    }

    describe "students" {
        describe "add_student" {
            it "lists a new student exactly once" {
                let id = registry.add_student(Student::new("John Doe", "S001", "CS"));

                let matches = registry.students().filter(|s| s.id == id).count();
                assert_eq!(matches, 1);
                assert!(registry.contains_student(id));
            }

            it "keeps insertion order" {
                registry.add_student(Student::new("Meredith Grey", "S004", "CS"));
                registry.add_student(Student::new("Jackson Booman", "S006", "ME"));

                let listed: Vec<&str> = registry.students().map(|s| s.name()).collect();
                assert_eq!(listed, vec!["Meredith Grey", "Jackson Booman"]);
            }

            it "treats equal field values as different students" {
                let a = registry.add_student(Student::new("Same", "S100", "CS"));
                let b = registry.add_student(Student::new("Same", "S100", "CS"));

                assert_ne!(a, b);
                assert_eq!(registry.students().count(), 2);
            }

            it "lists a re-added record twice and removes one entry at a time" {
                let student = Student::new("Twice", "S200", "CS");
                let id = registry.add_student(student.clone());
                registry.add_student(student);
                assert_eq!(registry.students().filter(|s| s.id == id).count(), 2);

                registry.remove_student(id).expect("Failed to remove");
                assert_eq!(registry.students().filter(|s| s.id == id).count(), 1);
                assert!(registry.contains_student(id));
            }

            it "keeps updates when a stale copy is re-added" {
                let student = Student::new("Alice Dakota", "S003", "EE");
                let stale = student.clone();
                let id = registry.add_student(student);
                registry.update_student(id, UpdateStudentInput {
                    name: Some("Alice Davis".to_string()),
                    major: None,
                });

                registry.add_student(stale);

                let names: Vec<&str> = registry.students().map(|s| s.name()).collect();
                assert_eq!(names, vec!["Alice Davis", "Alice Davis"]);
            }
        }

        describe "remove_student" {
            it "removes a registered student" {
                let id = registry.add_student(Student::new("Bob Brown", "S009", "Civil"));

                registry.remove_student(id).expect("Failed to remove");

                assert!(!registry.contains_student(id));
                assert!(registry.student(id).is_none());
            }

            it "fails for a student never added" {
                let stranger = Student::new("Anita Baker", "S019", "Medicine");

                let result = registry.remove_student(stranger.id);

                assert_eq!(result, Err(RegistryError::StudentNotFound(stranger.id)));
                assert!(result.unwrap_err().is_not_found());
            }

            it "fails on the second removal" {
                let id = registry.add_student(Student::new("Bob Brown", "S009", "Civil"));
                registry.remove_student(id).expect("Failed to remove");

                assert!(registry.remove_student(id).is_err());
            }

            it "does not cascade into enrollments or rosters" {
                let (student, course) = seeded(&mut registry);
                registry.enroll_student(student, course).expect("Failed to enroll");

                registry.remove_student(student).expect("Failed to remove");

                assert!(!registry.contains_student(student));
                assert_eq!(names(registry.get_courses_for_student(student)), vec!["Python Programming"]);
                assert_eq!(names(registry.get_students_in_course(course)), vec!["John Doe"]);
                assert!(registry.enrollment(student, course).is_some());
            }
        }

        describe "update_student" {
            it "changes only the major when only the major is supplied" {
                let id = registry.add_student(Student::new("Alice Dakota", "S003", "EE"));

                let updated = registry.update_student(id, UpdateStudentInput {
                    name: None,
                    major: Some("Software Engineering".to_string()),
                }).expect("Student should be registered");

                assert_eq!(updated.major, "Software Engineering");
                assert_eq!(updated.name(), "Alice Dakota");
                assert_eq!(updated.id_number(), "S003");
            }

            it "changes both fields when both are supplied" {
                let id = registry.add_student(Student::new("Alice Dakota", "S003", "EE"));

                registry.update_student(id, UpdateStudentInput {
                    name: Some("Alice Davis".to_string()),
                    major: Some("Software Engineering".to_string()),
                });

                let student = registry.student(id).expect("Student should be registered");
                assert_eq!(student.name(), "Alice Davis");
                assert_eq!(student.major, "Software Engineering");
            }

            it "ignores empty strings" {
                let id = registry.add_student(Student::new("Alice Dakota", "S003", "EE"));

                registry.update_student(id, UpdateStudentInput {
                    name: Some(String::new()),
                    major: Some(String::new()),
                });

                let student = registry.student(id).expect("Student should be registered");
                assert_eq!(student.name(), "Alice Dakota");
                assert_eq!(student.major, "EE");
            }

            it "does nothing for an unregistered student" {
                let stranger = Student::new("Anita Baker", "S019", "Medicine");

                let result = registry.update_student(stranger.id, UpdateStudentInput {
                    name: Some("Renamed".to_string()),
                    major: None,
                });

                assert!(result.is_none());
            }

            it "does nothing once the student has been removed" {
                let id = registry.add_student(Student::new("Bob Brown", "S009", "Civil"));
                registry.remove_student(id).expect("Failed to remove");

                let result = registry.update_student(id, UpdateStudentInput {
                    name: Some("Robert Brown".to_string()),
                    major: None,
                });

                assert!(result.is_none());
            }

            it "shows the new name in course rosters" {
                let (student, course) = seeded(&mut registry);
                registry.enroll_student(student, course).expect("Failed to enroll");

                registry.update_student(student, UpdateStudentInput {
                    name: Some("Johnny Doe".to_string()),
                    major: None,
                });

                assert_eq!(names(registry.get_students_in_course(course)), vec!["Johnny Doe"]);
            }
        }
    }

    describe "instructors" {
        it "adds and lists instructors" {
            let id = registry.add_instructor(Instructor::new("Dr. Gorge", "I004", "Computer Science"));

            assert!(registry.contains_instructor(id));
            assert_eq!(registry.instructors().count(), 1);
        }

        it "removes a registered instructor" {
            let id = registry.add_instructor(Instructor::new("Dr. Williams", "I006", "ME"));

            assert!(registry.remove_instructor(id));
            assert!(!registry.contains_instructor(id));
        }

        it "silently ignores removing an unknown instructor" {
            let stranger = Instructor::new("Dr. Nobody", "I999", "None");

            assert!(!registry.remove_instructor(stranger.id));
        }

        it "updates name and department independently" {
            let id = registry.add_instructor(Instructor::new("Dr. Gorge", "I004", "Computer Science"));

            registry.update_instructor(id, UpdateInstructorInput {
                name: None,
                department: Some("Data Science".to_string()),
            });

            let instructor = registry.instructor(id).expect("Instructor should be registered");
            assert_eq!(instructor.name(), "Dr. Gorge");
            assert_eq!(instructor.department, "Data Science");
        }

        it "does not update an unregistered instructor" {
            let stranger = Instructor::new("Dr. Nobody", "I999", "None");

            let result = registry.update_instructor(stranger.id, UpdateInstructorInput {
                name: Some("Dr. Somebody".to_string()),
                department: None,
            });

            assert!(result.is_none());
        }
    }

    describe "courses" {
        it "removes a registered course" {
            let id = registry.add_course(Course::new("Thermodynamics", "C008"));

            assert!(registry.remove_course(id));
            assert!(!registry.contains_course(id));
        }

        it "silently ignores removing an unknown course" {
            let stranger = Course::new("Advanced Algorithms", "C010");

            assert!(!registry.remove_course(stranger.id));
        }

        it "renames a registered course" {
            let id = registry.add_course(Course::new("Data Structures", "C007"));

            let updated = registry.update_course(id, UpdateCourseInput {
                course_name: Some("Advanced Data Structures".to_string()),
            }).expect("Course should be registered");

            assert_eq!(updated.course_name, "Advanced Data Structures");
            assert_eq!(updated.course_id, "C007");
        }

        it "keeps enrollments of a removed course" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");

            registry.remove_course(course);

            assert_eq!(names(registry.get_courses_for_student(student)), vec!["Python Programming"]);
        }
    }

    describe "enroll_student" {
        it "adds the student to the roster and records an ungraded enrollment" {
            let (student, course) = seeded(&mut registry);

            registry.enroll_student(student, course).expect("Failed to enroll");

            let roster = &registry.course(course).expect("Course should exist").enrolled_students;
            assert_eq!(roster, &vec![student]);
            let enrollment = registry.enrollment(student, course).expect("Enrollment should exist");
            assert!(enrollment.grade.is_none());
        }

        it "rejects a duplicate and keeps a single enrollment" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");

            let result = registry.enroll_student(student, course);

            assert_eq!(result, Err(RegistryError::DuplicateEnrollment { student, course }));
            assert_eq!(registry.enrollments().filter(|e| e.matches(student, course)).count(), 1);
            assert_eq!(names(registry.get_students_in_course(course)), vec!["John Doe"]);
        }

        it "keeps the roster when a stale copy of the course is re-added" {
            let student = registry.add_student(Student::new("John Doe", "S001", "Computer Science"));
            let course = Course::new("Python Programming", "C001");
            let stale = course.clone();
            let course = registry.add_course(course);
            registry.enroll_student(student, course).expect("Failed to enroll");

            registry.add_course(stale);
            let result = registry.enroll_student(student, course);

            assert_eq!(result, Err(RegistryError::DuplicateEnrollment { student, course }));
            assert_eq!(registry.enrollments().filter(|e| e.matches(student, course)).count(), 1);
            assert_eq!(names(registry.get_students_in_course(course)), vec!["John Doe"]);
        }

        it "rejects a course never added" {
            let (student, _) = seeded(&mut registry);
            let stray = Course::new("Advanced Algorithms", "C010");

            let result = registry.enroll_student(student, stray.id);

            assert_eq!(result, Err(RegistryError::CourseNotFound(stray.id)));
            assert_eq!(registry.enrollments().count(), 0);
        }

        it "rejects a student never added" {
            let (_, course) = seeded(&mut registry);
            let stranger = Student::new("Anita Baker", "S019", "Medicine");

            let result = registry.enroll_student(stranger.id, course);

            assert_eq!(result, Err(RegistryError::StudentNotFound(stranger.id)));
            assert!(registry.get_students_in_course(course).next().is_none());
        }

        it "checks the student before the course" {
            let stranger = Student::new("Anita Baker", "S019", "Medicine");
            let stray = Course::new("Advanced Algorithms", "C010");

            let result = registry.enroll_student(stranger.id, stray.id);

            assert_eq!(result, Err(RegistryError::StudentNotFound(stranger.id)));
        }

        it "rejects a removed student" {
            let (student, course) = seeded(&mut registry);
            registry.remove_student(student).expect("Failed to remove");

            assert!(registry.enroll_student(student, course).unwrap_err().is_not_found());
        }
    }

    describe "assign_grade" {
        it "grades an existing enrollment" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");

            registry.assign_grade(student, course, "A").expect("Failed to grade");

            assert_eq!(names(registry.get_courses_for_student(student)), vec!["Python Programming"]);
            let enrollment = registry.enrollment(student, course).expect("Enrollment should exist");
            assert_eq!(enrollment.grade.as_deref(), Some("A"));
        }

        it "overwrites an earlier grade" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");
            registry.assign_grade(student, course, "B").expect("Failed to grade");

            registry.assign_grade(student, course, "A-").expect("Failed to grade");

            let enrollment = registry.enrollment(student, course).expect("Enrollment should exist");
            assert_eq!(enrollment.grade.as_deref(), Some("A-"));
        }

        it "fails without an enrollment" {
            let (student, course) = seeded(&mut registry);

            let result = registry.assign_grade(student, course, "A");

            assert_eq!(result, Err(RegistryError::EnrollmentNotFound { student, course }));
        }

        it "only touches the matching pair" {
            let (student, course) = seeded(&mut registry);
            let other = registry.add_course(Course::new("Thermodynamics", "C008"));
            registry.enroll_student(student, course).expect("Failed to enroll");
            registry.enroll_student(student, other).expect("Failed to enroll");

            registry.assign_grade(student, other, "C").expect("Failed to grade");

            assert!(registry.enrollment(student, course).expect("exists").grade.is_none());
            assert_eq!(registry.enrollment(student, other).expect("exists").grade.as_deref(), Some("C"));
        }
    }

    describe "queries" {
        it "runs the basic enrollment scenario" {
            let (student, course) = seeded(&mut registry);

            registry.enroll_student(student, course).expect("Failed to enroll");
            assert_eq!(names(registry.get_students_in_course(course)), vec!["John Doe"]);

            registry.assign_grade(student, course, "A").expect("Failed to grade");
            assert_eq!(names(registry.get_courses_for_student(student)), vec!["Python Programming"]);
        }

        it "lists course students in enrollment order and can be read again" {
            let course = registry.add_course(Course::new("Python Programming", "C009"));
            let meredith = registry.add_student(Student::new("Meredith Grey", "S004", "CS"));
            let jackson = registry.add_student(Student::new("Jackson Booman", "S006", "ME"));
            registry.enroll_student(jackson, course).expect("Failed to enroll");
            registry.enroll_student(meredith, course).expect("Failed to enroll");

            let first = names(registry.get_students_in_course(course));
            let second = names(registry.get_students_in_course(course));

            assert_eq!(first, vec!["Jackson Booman", "Meredith Grey"]);
            assert_eq!(first, second);
        }

        it "lists the courses of a student in enrollment order" {
            let (student, python) = seeded(&mut registry);
            let thermo = registry.add_course(Course::new("Thermodynamics", "C008"));
            registry.enroll_student(student, thermo).expect("Failed to enroll");
            registry.enroll_student(student, python).expect("Failed to enroll");

            assert_eq!(
                names(registry.get_courses_for_student(student)),
                vec!["Thermodynamics", "Python Programming"]
            );
        }

        it "returns nothing for unknown handles" {
            assert!(registry.get_students_in_course(CourseId::new()).next().is_none());
            assert!(registry.get_courses_for_student(StudentId::new()).next().is_none());
        }
    }

    describe "views" {
        it "renders a course with its roster" {
            let (student, course) = seeded(&mut registry);
            let other = registry.add_student(Student::new("Meredith Grey", "S004", "CS"));
            registry.enroll_student(student, course).expect("Failed to enroll");
            registry.enroll_student(other, course).expect("Failed to enroll");

            let view = registry.course_view(course).expect("Course should exist");

            assert_eq!(
                view.to_string(),
                "Course Name: Python Programming, ID: C001, Enrolled Students: John Doe, Meredith Grey"
            );
        }

        it "renders ungraded enrollments as None by default" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");

            let lines: Vec<String> = registry.enrollment_views().map(|v| v.to_string()).collect();

            assert_eq!(lines, vec!["Student: John Doe, Course: Python Programming, Grade: None"]);
        }

        it "serializes current membership" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");
            registry.assign_grade(student, course, "A").expect("Failed to grade");

            let json = serde_json::to_value(registry.snapshot()).expect("Failed to serialize");

            assert_eq!(json["students"][0]["name"], "John Doe");
            assert_eq!(json["students"][0]["id_number"], "S001");
            assert_eq!(json["courses"][0]["course_id"], "C001");
            assert_eq!(json["enrollments"][0]["grade"], "A");
            assert_eq!(json["instructors"].as_array().map(Vec::len), Some(0));
        }
    }

    describe "with custom configuration" {
        before {
            let mut registry = Registry::with_config(RegistryConfig {
                cascade_removals: true,
                ..RegistryConfig::default()
            });
        }

        it "drops a removed student from rosters and enrollments" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");

            registry.remove_student(student).expect("Failed to remove");

            assert!(registry.get_students_in_course(course).next().is_none());
            assert!(registry.get_courses_for_student(student).next().is_none());
            assert_eq!(registry.enrollments().count(), 0);
        }

        it "drops enrollments of a removed course" {
            let (student, course) = seeded(&mut registry);
            let other = registry.add_course(Course::new("Thermodynamics", "C008"));
            registry.enroll_student(student, course).expect("Failed to enroll");
            registry.enroll_student(student, other).expect("Failed to enroll");

            registry.remove_course(course);

            assert_eq!(names(registry.get_courses_for_student(student)), vec!["Thermodynamics"]);
        }

        it "empties the roster of a removed course" {
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");
            let copy = registry.course(course).expect("Course should exist").clone();

            registry.remove_course(course);

            assert!(registry.get_students_in_course(course).next().is_none());
            assert_eq!(registry.enrollments().count(), 0);

            registry.add_course(copy);
            registry.enroll_student(student, course).expect("Failed to re-enroll");
            assert_eq!(registry.enrollments().filter(|e| e.matches(student, course)).count(), 1);
        }

        it "renders the configured ungraded marker" {
            let mut registry = Registry::with_config(RegistryConfig {
                ungraded_marker: "ungraded".to_string(),
                ..RegistryConfig::default()
            });
            let (student, course) = seeded(&mut registry);
            registry.enroll_student(student, course).expect("Failed to enroll");

            let view = registry.enrollment_views().next().expect("Enrollment view");

            assert_eq!(view.grade(), "ungraded");
        }
    }
}
