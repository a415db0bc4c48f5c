pub mod envelope;
pub mod lenient;
