//! Domain models for the roster registry.
//!
//! # Core Concepts
//!
//! - [`Person`]: name and institutional ID number shared by everyone on record.
//! - [`Student`] and [`Instructor`]: a [`Person`] plus a major or department.
//! - [`Course`]: a named course with an ordered roster of enrolled students.
//! - [`Enrollment`]: one student in one course, optionally graded.
//!
//! Every student, instructor and course carries an opaque handle generated at
//! construction. Handles, not field values, decide identity: two students with
//! the same name and ID number are still two different students.

mod course;
mod enrollment;
mod person;

pub use course::*;
pub use enrollment::*;
pub use person::*;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a fresh, never-reused handle.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identity handle of a [`Student`].
    StudentId
);
entity_id!(
    /// Identity handle of an [`Instructor`].
    InstructorId
);
entity_id!(
    /// Identity handle of a [`Course`].
    CourseId
);
