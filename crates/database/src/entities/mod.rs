pub mod courses;
pub mod majors;
pub mod quarters;
pub mod requirements;
