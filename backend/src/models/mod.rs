pub mod macros;
pub mod order;
pub mod restaurant;
pub mod time;

pub use order::*;
pub use restaurant::*;
pub use time::*;
