mod relay_message;
mod send_message;

pub use relay_message::*;
pub use send_message::*;
