pub mod research;

pub use research::*;
