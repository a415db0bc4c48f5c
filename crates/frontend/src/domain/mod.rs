pub mod a001_professor;
