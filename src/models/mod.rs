//! Data models for the LMS server

pub mod admin;
pub mod book;
pub mod issue;
pub mod student;
