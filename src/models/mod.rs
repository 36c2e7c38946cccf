pub mod grades;
pub mod groups;
pub mod reports;
pub mod seed;
pub mod students;
pub mod subjects;
pub mod teachers;
