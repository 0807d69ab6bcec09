mod session;
mod template;

pub use session::*;
pub use template::*;
