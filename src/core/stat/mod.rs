/// The `stat` mod implements the shared counter store and its basic data
/// structures, such as the per-counter two-level minute window
mod counter;
mod minute_window;
mod store;

pub use counter::*;
pub use minute_window::*;
pub use store::*;
