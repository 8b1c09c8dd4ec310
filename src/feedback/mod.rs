mod account;
mod record;
mod session;
mod sort;
mod stats;

pub use account::*;
pub use record::*;
pub use session::*;
pub use sort::*;
pub use stats::*;
