use anyhow::Result;

use crate::domain::{Conversation, Message};

use super::super::Container;

/// One-shot question from the command line, answered through the relay.
pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, question: String) -> Result<String> {
        let use_case = self.container.send_message_use_case();
        let mut conversation = Conversation::new();
        let reply = use_case.execute(&mut conversation, &question).await?;

        Ok(self.format_reply(reply))
    }

    fn format_reply(&self, reply: &Message) -> String {
        format!(
            "[{}] {}",
            reply.timestamp().format("%H:%M:%S"),
            reply.content()
        )
    }
}
