pub mod course;
pub mod major;
pub mod quarter;
pub mod requirement;
