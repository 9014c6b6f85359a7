pub mod colors;
pub mod table;
