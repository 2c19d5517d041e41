use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::{Message, Role, SUGGESTIONS};

use super::app::ChatApp;

pub const TITLE: &str = "TaxChatbot";
pub const TAGLINE: &str = "Your Tax Advisor";
pub const WELCOME_HEADLINE: &str = "What's on the agenda today?";
pub const PLACEHOLDER: &str = "Ask anything about taxes...";

pub fn render(frame: &mut Frame, app: &ChatApp) {
    let [header, body, composer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(frame, header);
    if app.shows_welcome() {
        render_welcome(frame, app, body);
    } else {
        render_history(frame, app, body);
    }
    render_composer(frame, app, composer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_welcome(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            WELCOME_HEADLINE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Indices run across groups in the same order as `ChatApp::suggestions`.
    let mut index = 0;
    for group in SUGGESTIONS {
        lines.push(Line::from(Span::styled(
            group.category,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        for prompt in group.prompts {
            let style = if index == app.selected_suggestion() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(*prompt, style)));
            index += 1;
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ pick a suggestion, Enter to send, Esc to quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_history(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for message in app.conversation().messages() {
        lines.extend(message_lines(message, width));
        lines.push(Line::from(""));
    }

    if app.shows_typing_indicator() {
        lines.push(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            app.typing_frame(),
            Style::default().fg(Color::Gray),
        )));
    }

    // Keep the newest lines in view.
    let height = area.height as usize;
    let start = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(start).collect();

    frame.render_widget(Paragraph::new(visible), area);
}

fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let (label, alignment, style) = match message.role() {
        Role::User => ("You", Alignment::Right, Style::default().fg(Color::White)),
        Role::Assistant => (TITLE, Alignment::Left, Style::default().fg(Color::Green)),
    };

    let header = format!("{} · {}", label, message.timestamp().format("%H:%M:%S"));
    let mut lines = vec![Line::from(Span::styled(header, Style::default().fg(Color::DarkGray)))
        .alignment(alignment)];

    for content_line in wrap_text(message.content(), width) {
        lines.push(Line::from(Span::styled(content_line, style)).alignment(alignment));
    }

    lines
}

fn render_composer(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let (title, border_style) = if app.input_enabled() {
        ("Message", Style::default().fg(Color::Gray))
    } else {
        ("Waiting for reply…", Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let content = if app.draft().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else if app.input_enabled() {
        Line::from(vec![Span::raw(app.draft().to_string()), Span::raw("▌")])
    } else {
        Line::from(Span::styled(
            app.draft().to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Word-wrap `text` to `width` columns, keeping explicit line breaks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }

        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &ChatApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn welcome_screen_lists_suggestions() {
        let app = ChatApp::new();
        let text = screen(&app);

        assert!(text.contains(WELCOME_HEADLINE));
        assert!(text.contains("What is income tax?"));
        assert!(text.contains(PLACEHOLDER));
    }

    #[test]
    fn welcome_screen_labels_every_group() {
        let app = ChatApp::new();
        let text = screen(&app);

        for group in SUGGESTIONS {
            assert!(text.contains(group.category), "missing label {}", group.category);
        }
        assert!(text.contains("What should I do if I receive tax refund?"));
    }

    #[test]
    fn typing_indicator_rendered_only_while_loading() {
        let mut app = ChatApp::new();
        app.submit_suggestion(0);

        let loading = screen(&app);
        assert!(loading.contains("Waiting for reply"));
        assert!(loading.contains('●'));

        app.on_reply(Ok("Income tax is levied on earnings.".to_string()));
        let idle = screen(&app);
        assert!(!idle.contains("Waiting for reply"));
        assert!(!idle.contains('●'));
        assert!(idle.contains("Income tax is levied on earnings."));
    }

    #[test]
    fn wrap_text_respects_width() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_text_keeps_line_breaks() {
        let lines = wrap_text("first\nsecond", 40);
        assert_eq!(lines, vec!["first", "second"]);
    }
}
