pub mod a001_professor;
pub mod common;
