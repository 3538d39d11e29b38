//! Data models for `Gradebook`

pub mod semester;
pub mod student;
pub mod subject;

pub use semester::Semester;
pub use student::Student;
pub use subject::Subject;
