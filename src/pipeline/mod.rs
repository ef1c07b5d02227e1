pub mod classify;
pub mod contrast;
pub mod generate;
