pub mod command;
pub mod dispatcher;
pub mod reply;

pub use command::{BotCommand, CommandKind, Invoker};
pub use dispatcher::Dispatcher;
pub use reply::{EmbedReply, Reply};
