//! TUI rendering with ratatui
//!
//! Draws the board, keyboard and session statistics for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Alphabet, Letter, Status};
use crate::output::formatters::KEYBOARD_ROWS;
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
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colors for a letter status
#[must_use]
pub fn status_style(status: Status) -> Style {
    match status {
        Status::InPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Status::InWord => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Status::NotInWord => Style::default().fg(Color::White).bg(Color::DarkGray),
        Status::NotGuessed => Style::default().fg(Color::Gray),
    }
}

fn tile(letter: &Letter) -> Span<'static> {
    Span::styled(format!(" {} ", letter.character()), status_style(letter.status()))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐺 WOLFLE")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Grid
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app.game.alphabet(), chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .game
        .grid()
        .iter_rows()
        .enumerate()
        .map(|(r, row)| {
            // Echo the typed guess into the row about to be played
            if r == app.row && app.input_mode == InputMode::Guessing {
                let mut typed = app.input_buffer.chars();
                Line::from(
                    row.iter()
                        .map(|_| match typed.next() {
                            Some(c) => Span::styled(
                                format!(" {c} "),
                                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                            ),
                            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                        })
                        .collect::<Vec<_>>(),
                )
            } else {
                Line::from(row.iter().map(tile).collect::<Vec<_>>())
            }
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, alphabet: &Alphabet, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .filter_map(|c| Alphabet::index_of(c).ok())
                    .map(|i| tile(&alphabet.letters()[i]))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Length(9), // Guess distribution
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let rate = app.stats.win_rate();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(rate.clamp(0.0, 100.0) as u16)
        .label(format!(
            "{rate:.0}% of {} games",
            app.stats.total_games
        ));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let max = distribution.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, &count)| {
            let width = if max == 0 { 0 } else { count * 16 / max };
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver if app.game.is_won() => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            app.game.secret_word(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let guess_text = format!("Guess: {}/{}", (app.row + 1).min(app.game.rows()), app.game.rows());
    f.render_widget(Paragraph::new(guess_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_style(Status::InPosition).bg, Some(Color::Green));
        assert_eq!(status_style(Status::InWord).bg, Some(Color::Yellow));
        assert_eq!(status_style(Status::NotInWord).bg, Some(Color::DarkGray));
        assert_eq!(status_style(Status::NotGuessed).bg, None);
    }

    #[test]
    fn draws_board_and_stats() {
        let dictionary = Dictionary::new(["crane", "slate"], ["crane"]).unwrap();
        let mut app = App::new(&dictionary, Some("CRANE"), StdRng::seed_from_u64(1)).unwrap();
        for c in "slate".chars() {
            app.push_char(c);
        }
        app.submit_guess();

        let text = screen(&app);
        assert!(text.contains("WOLFLE"));
        assert!(text.contains(" S  L  A  T  E "));
        assert!(text.contains("Guess: 2/6"));
        assert!(text.contains("Games: 0 | Won: 0"));
    }
}
