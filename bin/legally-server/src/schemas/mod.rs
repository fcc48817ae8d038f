pub mod admin;
pub mod advice;
pub mod laws;
