pub mod check;
pub mod gen;
pub mod manifest;
pub mod print;
