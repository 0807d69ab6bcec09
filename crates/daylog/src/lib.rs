mod command;
mod progress;
mod query;
mod rotation;
mod types;

pub use command::*;
pub use progress::*;
pub use query::*;
pub use rotation::*;
pub use types::*;
