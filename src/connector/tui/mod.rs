//! Terminal conversation UI.
//!
//! Key handling and conversation state live in [`app::ChatApp`]; drawing in
//! [`view`]. [`run`] owns the terminal and the event loop: relay requests run
//! on spawned tasks and report back over a channel so the screen keeps
//! redrawing (and the typing indicator keeps moving) while a reply is pending.

pub mod app;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::debug;

use crate::application::SendMessageUseCase;
use crate::domain::DomainError;

pub use app::{AppAction, ChatApp};

const TICK_RATE: Duration = Duration::from_millis(300);

pub async fn run(use_case: Arc<SendMessageUseCase>) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, use_case).await;
    ratatui::restore();
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, use_case: Arc<SendMessageUseCase>) -> Result<()> {
    let mut app = ChatApp::new();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);
    let (reply_tx, mut reply_rx) = mpsc::channel::<Result<String, DomainError>>(1);

    loop {
        terminal.draw(|frame| view::render(frame, &app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match app.handle_key(key) {
                    AppAction::Quit => break,
                    AppAction::Submit(content) => {
                        let use_case = Arc::clone(&use_case);
                        let reply_tx = reply_tx.clone();
                        tokio::spawn(async move {
                            let reply = use_case.fetch_reply(&content).await;
                            if reply_tx.send(reply).await.is_err() {
                                debug!("UI closed before the relay replied");
                            }
                        });
                    }
                    AppAction::None => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(reply) = reply_rx.recv() => app.on_reply(reply),
            _ = ticker.tick(), if app.shows_typing_indicator() => app.tick(),
        }
    }

    Ok(())
}
