pub mod estimate;
pub mod extract;
