pub mod check;
pub mod dump;
pub mod generate;
pub mod loader;
pub mod tree;
