pub mod export;
pub mod shape;
