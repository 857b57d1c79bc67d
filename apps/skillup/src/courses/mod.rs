//! Locally generated course recommendations, used when the course API is
//! unavailable or returns nothing.

pub mod catalog;
pub mod fallback;

pub use fallback::{generate_fallback_courses, MAX_FALLBACK_COURSES};
