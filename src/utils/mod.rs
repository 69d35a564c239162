pub mod error;
pub mod logger;
pub mod pattern;
pub mod validation;
pub mod walk;
