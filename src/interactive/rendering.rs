//! Game screen layout and widgets
//!
//! Score header across the top, found words on the left, root word,
//! statistics, and messages on the right, input box and key help below.

use super::app::{App, MessageStyle};
use crate::game::points_for;
use crate::output::formatters::{score_line, word_entry};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap};

/// Render one frame of the game screen
pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, input, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let [words, side] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);
    let [root, stats, messages] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(4),
    ])
    .areas(side);

    draw_header(frame, app, header);
    draw_found_words(frame, app, words);
    draw_root(frame, app, root);
    draw_statistics(frame, app, stats);
    draw_messages(frame, app, messages);
    draw_input(frame, app, input);
    draw_footer(frame, footer);
}

/// Rounded bordered block with a title
fn panel(title: &str) -> Block<'_> {
    frame_block().title(title)
}

/// Rounded bordered block without a title
fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn title_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let banner = Line::from(vec![
        Span::styled(
            "🔤 WORD SCRAMBLE  ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(score_line(session.root(), session.score()), title_style()),
    ]);

    let header = Paragraph::new(banner)
        .alignment(Alignment::Center)
        .block(frame_block().style(Style::default().fg(Color::Cyan)));
    frame.render_widget(header, area);
}

fn draw_found_words(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();

    let entries: Vec<ListItem> = session
        .used_words()
        .iter()
        .map(|word| ListItem::new(word_entry(word, points_for(word))))
        .collect();

    let title = format!(" Found Words ({}) ", session.used_words().len());
    let list = List::new(entries)
        .style(Style::default().fg(Color::White))
        .block(panel(&title));
    frame.render_widget(list, area);
}

fn draw_root(frame: &mut Frame, app: &App, area: Rect) {
    let root = app.session().root();
    let letters = root.chars().count();

    let body = vec![
        Line::styled(root.to_uppercase(), title_style()),
        Line::styled(
            format!("spell words from these {letters} letters"),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let widget = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(panel(" Root Word "));
    frame.render_widget(widget, area);
}

fn draw_statistics(frame: &mut Frame, app: &App, area: Rect) {
    let body = vec![
        Line::from(format!("Games played: {}", app.stats.games_played)),
        Line::from(format!("Words found:  {}", app.stats.words_found)),
        Line::from(format!("Best score:   {}", app.stats.best_score)),
    ];

    frame.render_widget(Paragraph::new(body).block(panel(" Statistics ")), area);
}

fn draw_messages(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|message| Line::styled(message.text.clone(), message_style(message.style)))
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" Messages "));
    frame.render_widget(widget, area);
}

fn message_style(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::default().fg(Color::Cyan),
        MessageStyle::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    }
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let prompt = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.input_buffer.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(prompt).block(panel(" Your Word (Enter to submit) "));
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter submit  •  Ctrl+N new word  •  Esc quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(frame_block());
    frame.render_widget(help, area);
}
