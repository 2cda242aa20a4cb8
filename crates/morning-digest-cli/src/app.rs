use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use morning_digest_engine::render_markdown;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::render::block_lines;

pub struct App {
    title: String,
    tickers: Vec<String>,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    pub fn new(title: impl Into<String>, tickers: Vec<String>, analysis: &str) -> Self {
        let blocks = render_markdown(analysis);
        log::debug!("Rendered {} blocks for display", blocks.len());
        Self {
            title: title.into(),
            tickers,
            lines: block_lines(&blocks),
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}

/// Takes over the terminal until the user quits.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
                KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(rows[0]);

    // Watchlist panel
    let ticker_items: Vec<ListItem> = if app.tickers.is_empty() {
        vec![ListItem::new(Line::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.tickers
            .iter()
            .map(|t| ListItem::new(Line::from(vec![Span::raw(t.clone())])))
            .collect()
    };
    let watchlist = List::new(ticker_items)
        .block(Block::default().borders(Borders::ALL).title("Watchlist"));
    f.render_widget(watchlist, chunks[0]);

    // Digest panel
    let content_text = if app.lines.is_empty() {
        vec![Line::from("No analysis to display")]
    } else {
        app.lines.clone()
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
