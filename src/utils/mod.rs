pub mod constants;
pub mod file;
pub mod tools;
