pub mod dashboard;
pub mod justifications;
pub mod login;
pub mod parent_justification;
pub mod reports;
pub mod schools;
pub mod students;
