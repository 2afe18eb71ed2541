pub mod child;
pub mod monitor;
pub mod util;
