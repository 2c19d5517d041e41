mod completion;
mod conversation;
mod message;
mod suggestion;

pub use completion::*;
pub use conversation::*;
pub use message::*;
pub use suggestion::*;
