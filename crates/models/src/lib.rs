pub mod course_data;
pub mod course_key;
pub mod quarter;
pub mod requirement_data;
pub mod validate;
