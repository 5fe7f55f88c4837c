//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{GuessRecord, LetterFeedback, WORD_SIZE};
use crate::game::{GuessBuffer, Outcome};
use crate::output::formatters::{KEYBOARD_ROWS, key_feedback};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Stats and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    // Confetti flies over everything else
    f.render_widget(app.session.celebration(), f.area());
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn feedback_style(feedback: Option<LetterFeedback>) -> Style {
    let (fg, bg) = match feedback {
        Some(LetterFeedback::Correct) => (Color::Black, Color::Green),
        Some(LetterFeedback::Almost) => (Color::Black, Color::Yellow),
        Some(LetterFeedback::Incorrect) => (Color::White, Color::DarkGray),
        None => (Color::White, Color::Reset),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, feedback: Option<LetterFeedback>) -> Span<'static> {
    Span::styled(format!(" {letter} "), feedback_style(feedback))
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_SIZE * 2);
    for (letter, feedback) in record.letters() {
        spans.push(tile(char::from(letter), Some(feedback)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_line(buffer: &GuessBuffer) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_SIZE * 2);
    let typed = buffer.as_str().chars().map(Some);
    for letter in typed.chain(std::iter::repeat(None)).take(WORD_SIZE) {
        let span = match letter {
            Some(c) => Span::styled(
                format!(" {c} "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_line() -> Line<'static> {
    let spans: Vec<Span> = (0..WORD_SIZE)
        .flat_map(|_| {
            [
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let mut lines: Vec<Line> = Vec::with_capacity(state.max_guesses() * 2);

    for row in 0..state.max_guesses() {
        let line = if let Some(record) = state.history().get(row) {
            guess_line(record)
        } else if row == state.history().len() && !state.is_over() {
            input_line(app.session.buffer())
        } else {
            empty_line()
        };
        lines.push(line);
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board ({} left) ",
                state.guesses_remaining()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(4),    // Guess distribution
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(app.stats.win_rate().round() as u16)
        .label(format!(
            "{}/{} games won",
            app.stats.games_won, app.stats.total_games
        ));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let max_guesses = app.session.config().max_guesses;
    let distribution = &app.stats.guess_distribution;
    let most = distribution.iter().copied().max().unwrap_or(0).max(1);
    let bar_width = usize::from(area.width.saturating_sub(12)).max(1);

    let lines: Vec<Line> = (1..=max_guesses)
        .map(|guesses| {
            let wins = distribution.get(guesses).copied().unwrap_or(0);
            let bar = "█".repeat(wins * bar_width / most);
            Line::from(vec![
                Span::raw(format!("{guesses:>2} ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {wins}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| tile(letter, key_feedback(&keys, letter)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let (status_text, color) = match app.session.state().outcome() {
        Outcome::InProgress => ("Playing".to_string(), Color::White),
        Outcome::Victory => ("🎉 Solved!".to_string(), Color::Green),
        Outcome::Defeat => (
            format!("The word was {}", app.session.state().answer()),
            Color::Red,
        ),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.state().is_over() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::{AnswerSource, WordList};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(
            GameConfig::default(),
            WordList::new(["TESTS", "STARS"]),
            AnswerSource::Fixed("TESTS".to_string()),
        )
    }

    #[test]
    fn draws_board_and_keyboard() {
        let mut app = app();
        app.session.set_input("STARS");
        app.submit();
        app.session.set_input("TE");

        let text = screen(&app);
        assert!(text.contains("Board (5 left)"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains(" S "));
        assert!(text.contains(" T  E "));
    }

    #[test]
    fn shows_answer_after_defeat() {
        let mut app = app();
        for _ in 0..6 {
            app.session.set_input("STARS");
            app.submit();
        }
        assert!(screen(&app).contains("The word was TESTS"));
    }
}
