pub mod table;
pub mod wrapper;

pub use table::*;
pub use wrapper::*;
