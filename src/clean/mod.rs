//! Clean module - field normalization for raw listing values

mod days;
mod hours;
mod location;
mod schedule;
mod text;

pub use days::opening_days;
pub use location::{build_location, parse_coordinates, Coordinates};
pub use schedule::schedule_from_json;
pub use text::title_case_with_exceptions;
