pub mod access;
pub mod health;
pub mod index;
pub mod students;
