pub mod compare;
pub mod generate;
