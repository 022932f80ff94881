//! In-memory registry of students, instructors, courses and the enrollments
//! that link students to courses.
//!
//! Records are built by the caller, handed to a [`Registry`] and addressed
//! afterwards through the handle returned on insertion. See [`models`] for
//! the record shapes and [`registry`] for the operations.

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::Registry;
