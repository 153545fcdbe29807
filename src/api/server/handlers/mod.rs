pub mod map;
pub mod place;
