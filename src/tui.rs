use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;

use placement::chat;
use placement::filter::ALL;
use placement::interview::{self, ScoreBand};
use placement::models::{Chat, Company, Course, Event, InterviewSession, Job, Question};
use placement::{Catalog, Collection, ListView, Record};

use crate::table::truncate;

/// How a record shows up in the browser panes.
pub trait Listing: Record {
    fn list_line(&self) -> String;
    fn detail(&self) -> Vec<Line<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Navigate,
    Search,
}

struct Browser<R> {
    title: &'static str,
    view: ListView<R>,
    mode: Mode,
    facet: usize,
    scroll_offset: u16,
}

impl<R: Listing> Browser<R> {
    fn new(title: &'static str, view: ListView<R>) -> Self {
        Self {
            title,
            view,
            mode: Mode::Navigate,
            facet: 0,
            scroll_offset: 0,
        }
    }

    fn current_facet(&self) -> Option<&'static str> {
        R::FACETS.get(self.facet).copied()
    }

    fn next(&mut self) {
        self.view.select_next();
        self.scroll_offset = 0;
    }

    fn prev(&mut self) {
        self.view.select_prev();
        self.scroll_offset = 0;
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }

    fn switch_facet(&mut self) {
        if !R::FACETS.is_empty() {
            self.facet = (self.facet + 1) % R::FACETS.len();
        }
    }

    /// Advances the current facet to its next option, wrapping to "all".
    fn cycle_facet_value(&mut self) {
        let Some(name) = self.current_facet() else { return };
        let options = self.view.facet_options(name);
        let current = self.view.filter().facet(name);
        let index = options.iter().position(|o| o == current).unwrap_or(0);
        let next = options[(index + 1) % options.len()].clone();
        self.view.set_facet(name, next);
    }

    fn reset_filters(&mut self) {
        self.view.set_query("");
        for name in R::FACETS {
            self.view.set_facet(*name, ALL);
        }
    }

    fn push_query(&mut self, c: char) {
        let mut query = self.view.filter().query().to_string();
        query.push(c);
        self.view.set_query(query);
    }

    fn pop_query(&mut self) {
        let mut query = self.view.filter().query().to_string();
        query.pop();
        self.view.set_query(query);
    }

    /// Returns false when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Search => match code {
                KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Navigate,
                KeyCode::Backspace => self.pop_query(),
                KeyCode::Char(c) => self.push_query(c),
                _ => {}
            },
            Mode::Navigate => match code {
                KeyCode::Char('q') => return false,
                KeyCode::Esc => {
                    if self.view.selection().id().is_some() {
                        self.view.clear();
                    } else {
                        return false;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.prev(),
                KeyCode::Char('J') | KeyCode::PageDown => self.scroll_down(),
                KeyCode::Char('K') | KeyCode::PageUp => self.scroll_up(),
                KeyCode::Char('/') => self.mode = Mode::Search,
                KeyCode::Char('f') => self.cycle_facet_value(),
                KeyCode::Char('F') => self.switch_facet(),
                KeyCode::Char('r') => self.reset_filters(),
                _ => {}
            },
        }
        true
    }
}

pub fn run_browse(collection: Collection, catalog: &Catalog, query: Option<&str>) -> Result<()> {
    match collection {
        Collection::Jobs => browse(collection, catalog.jobs.clone(), query),
        Collection::Companies => browse(collection, catalog.companies.clone(), query),
        Collection::Courses => browse(collection, catalog.courses.clone(), query),
        Collection::Chats => browse(collection, catalog.chats.clone(), query),
        Collection::Events => browse(collection, catalog.events.clone(), query),
        Collection::Interviews => browse(collection, catalog.sessions.clone(), query),
        Collection::Questions => browse(collection, catalog.questions.clone(), query),
    }
}

fn browse<R: Listing>(collection: Collection, records: Vec<R>, query: Option<&str>) -> Result<()> {
    let mut view = ListView::new(records);
    if view.catalog().is_empty() {
        println!("No {} found.", collection);
        return Ok(());
    }
    if let Some(q) = query {
        view.set_query(q);
    }

    let mut browser = Browser::new(collection.title(), view);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut browser);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop<R: Listing>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    browser: &mut Browser<R>,
) -> Result<()> {
    let mut list_state = ListState::default();

    loop {
        list_state.select(browser.view.selected_index());
        terminal.draw(|frame| draw(frame, browser, &mut list_state))?;

        if let TermEvent::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !browser.handle_key(key.code) {
                break;
            }
        }
    }
    Ok(())
}

fn draw<R: Listing>(frame: &mut Frame, browser: &Browser<R>, list_state: &mut ListState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(frame.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    // Left panel: filtered list
    let snapshot = browser.view.snapshot();
    let items: Vec<ListItem> = snapshot
        .filtered
        .iter()
        .map(|r| ListItem::new(r.list_line()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " {} ({}/{}) ",
            browser.title,
            snapshot.shown(),
            snapshot.total
        )))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[0], list_state);

    // Right panel: detail of the selection, even if filtered out
    let detail = match snapshot.selected {
        Some(record) => Text::from(record.detail()),
        None if snapshot.selection.id().is_some() => Text::raw("No detail available"),
        None => Text::raw("Nothing selected"),
    };
    let detail_widget = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: false })
        .scroll((browser.scroll_offset, 0));

    frame.render_widget(detail_widget, chunks[1]);

    // Filter status
    let mut status = vec![Span::styled(
        format!(" search: {}", snapshot.filter.query()),
        if browser.mode == Mode::Search {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        },
    )];
    for (i, name) in R::FACETS.iter().enumerate() {
        let style = if i == browser.facet {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        status.push(Span::styled(
            format!("  {}={}", name, snapshot.filter.facet(name)),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), rows[1]);

    // Footer help
    let help = match browser.mode {
        Mode::Search => " type to search  backspace:delete  enter/esc:done",
        Mode::Navigate => {
            " j/k:navigate  J/K:scroll  /:search  f:cycle facet  F:next facet  r:reset  esc:clear  q:quit"
        }
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
}

fn wrapped(text: &str) -> Vec<Line<'static>> {
    textwrap::fill(text, 70)
        .lines()
        .map(|l| Line::from(format!("  {}", l)))
        .collect()
}

impl Listing for Job {
    fn list_line(&self) -> String {
        let applied = if self.applied { "+" } else { " " };
        format!("{} {} | {}", applied, truncate(&self.title, 30), self.company)
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            heading(&self.title),
            Line::from(format!("at {} ({})", self.company, self.location)),
            Line::from(Span::styled(
                format!("{} · {}", self.kind, self.salary),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(format!("Posted {}", self.posted)),
        ];
        if self.applied {
            lines.push(Line::from(Span::styled("Applied", Style::default().fg(Color::Green))));
        }
        lines.push(Line::from(""));
        lines.extend(wrapped(&self.description));
        if !self.requirements.is_empty() {
            lines.push(Line::from(""));
            lines.push(heading("Requirements"));
            for req in &self.requirements {
                lines.push(Line::from(format!("  - {}", req)));
            }
        }
        lines
    }
}

impl Listing for Company {
    fn list_line(&self) -> String {
        format!("{} | {} ★{:.1}", truncate(&self.name, 24), self.industry, self.rating)
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            heading(&self.name),
            Line::from(format!(
                "{} · {} employees · {}",
                self.industry, self.size, self.location
            )),
            Line::from(format!("Rating: {:.1}", self.rating)),
            Line::from(Span::styled(
                format!("{} open positions", self.open_positions),
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
        ];
        lines.extend(wrapped(&self.description));
        lines
    }
}

impl Listing for Course {
    fn list_line(&self) -> String {
        let progress = match self.progress {
            Some(p) if self.enrolled => format!(" [{}%]", p),
            _ => String::new(),
        };
        format!("{}{} | {}", truncate(&self.title, 30), progress, self.difficulty)
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            heading(&self.title),
            Line::from(format!("by {}", self.instructor)),
            Line::from(Span::styled(
                format!("{} · {} · {}", self.topic, self.difficulty, self.duration),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(format!(
                "★{:.1} · {} students · {} lessons",
                self.rating, self.students, self.lessons
            )),
            Line::from(format!("Schedule: {}", self.schedule)),
        ];
        if self.enrolled {
            let progress = self.progress.unwrap_or(0);
            let done = progress as usize / 5;
            lines.push(Line::from(Span::styled(
                format!(
                    "Progress [{}{}] {}%",
                    "#".repeat(done),
                    ".".repeat(20 - done.min(20)),
                    progress
                ),
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
        lines.extend(wrapped(&self.description));

        if !self.syllabus.is_empty() {
            lines.push(Line::from(""));
            lines.push(heading("Lessons"));
            lines.push(Line::from(format!(
                "  {} of {} done ({}%)",
                self.completed_lessons(),
                self.syllabus.len(),
                self.lesson_progress()
            )));
            for lesson in &self.syllabus {
                let style = if lesson.completed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {} {} {} ({})",
                        if lesson.completed { '✓' } else { ' ' },
                        lesson.kind.glyph(),
                        lesson.title,
                        lesson.duration
                    ),
                    style,
                )));
            }
        }
        if !self.discussions.is_empty() {
            lines.push(Line::from(""));
            lines.push(heading("Discussions"));
            for d in &self.discussions {
                lines.push(Line::from(format!(
                    "  {} · {} · {} replies · {}",
                    d.title, d.author, d.replies, d.time
                )));
            }
        }
        lines
    }
}

impl Listing for Chat {
    fn list_line(&self) -> String {
        let unread = if self.unread_count > 0 {
            format!(" ({})", self.unread_count)
        } else {
            String::new()
        };
        let online = if self.online == Some(true) { "●" } else { " " };
        format!("{} {}{}", online, truncate(&self.name, 34), unread)
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            heading(&self.name),
            Line::from(format!("{} chat · {} participants", self.kind, self.participants.len())),
        ];
        if let Some(msg) = &self.last_message {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} · {}", msg.sender_name, msg.timestamp.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            )));
            lines.extend(wrapped(&msg.content));
        }
        lines
    }
}

impl Listing for Event {
    fn list_line(&self) -> String {
        let live = if self.live { " LIVE" } else { "" };
        format!(
            "{} {}{} | {}",
            self.kind.glyph(),
            truncate(&self.title, 30),
            live,
            self.date.format("%b %d")
        )
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let seats = match self.max_participants {
            Some(max) => format!(
                "{}/{} registered ({}% full)",
                self.participants,
                max,
                chat::fill_percentage(self)
            ),
            None => format!("{} registered", self.participants),
        };
        let mut lines = vec![
            heading(&self.title),
            Line::from(Span::styled(self.kind.label(), Style::default().fg(Color::Cyan))),
            Line::from(format!("Hosted by {}", self.host)),
            Line::from(format!(
                "{} · {} min",
                self.date.format("%Y-%m-%d %H:%M UTC"),
                self.duration
            )),
            Line::from(seats),
            Line::from(""),
        ];
        lines.extend(wrapped(&self.description));
        lines
    }
}

impl Listing for InterviewSession {
    fn list_line(&self) -> String {
        let score = self.score.map(|s| format!(" {}", s)).unwrap_or_default();
        format!("{} interview | {}{}", self.kind.label(), self.status, score)
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            heading(self.kind.label()),
            Line::from(format!("{} · {} minutes", self.status, self.duration)),
        ];
        if let Some(date) = self.scheduled_date {
            lines.push(Line::from(format!("Scheduled {}", date.format("%Y-%m-%d %H:%M UTC"))));
        }
        if let Some(score) = self.score {
            let color = match ScoreBand::of(score) {
                ScoreBand::Strong => Color::Green,
                ScoreBand::Fair => Color::Yellow,
                ScoreBand::Weak => Color::Red,
            };
            lines.push(Line::from(Span::styled(
                format!("Overall score: {} ({})", score, ScoreBand::of(score).label()),
                Style::default().fg(color),
            )));
        }
        if let Some(feedback) = &self.feedback {
            lines.push(Line::from(""));
            lines.extend(wrapped(&feedback.overall));
            lines.push(Line::from(""));
            lines.push(heading("Breakdown"));
            for (label, value) in interview::breakdown(&feedback.detailed_scores) {
                lines.push(Line::from(format!("  {:<16} {:>3}%", label, value)));
            }
            lines.push(Line::from(""));
            lines.push(heading("Strengths"));
            for s in &feedback.strengths {
                lines.push(Line::from(format!("  + {}", s)));
            }
            lines.push(heading("Improvements"));
            for s in &feedback.improvements {
                lines.push(Line::from(format!("  - {}", s)));
            }
        }
        lines
    }
}

impl Listing for Question {
    fn list_line(&self) -> String {
        format!("[{}] {}", self.difficulty, truncate(&self.text, 40))
    }

    fn detail(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            heading(&self.category),
            Line::from(format!(
                "{} · {} · {} to answer",
                self.kind,
                self.difficulty,
                interview::format_time(self.time_limit)
            )),
            Line::from(""),
        ];
        lines.extend(wrapped(&self.text));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement::{BundledCatalog, CatalogSource};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn course_detail_lists_lessons_and_discussions() {
        let courses = BundledCatalog.load().unwrap().courses;
        let text: Vec<String> = courses[0].detail().iter().map(line_text).collect();
        assert!(text.contains(&"  3 of 6 done (50%)".to_string()));
        assert!(text.iter().any(|l| l.contains("Performance Optimization Quiz (10 min)")));
        assert!(text.iter().any(|l| l.starts_with("  Sharing my custom hook implementation")));

        let text: Vec<String> = courses[5].detail().iter().map(line_text).collect();
        assert!(!text.iter().any(|l| l == "Lessons"));
    }

    fn job_browser() -> Browser<Job> {
        let catalog = BundledCatalog.load().unwrap();
        Browser::new("Jobs", ListView::new(catalog.jobs))
    }

    #[test]
    fn search_mode_edits_query() {
        let mut browser = job_browser();
        assert!(browser.handle_key(KeyCode::Char('/')));
        for c in "backx".chars() {
            browser.handle_key(KeyCode::Char(c));
        }
        browser.handle_key(KeyCode::Backspace);
        browser.handle_key(KeyCode::Enter);
        assert_eq!(browser.mode, Mode::Navigate);
        assert_eq!(browser.view.filter().query(), "back");
        assert_eq!(browser.view.filtered().len(), 1);
        // 'q' typed while searching is text, not quit.
        browser.handle_key(KeyCode::Char('/'));
        assert!(browser.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn facet_cycles_through_options_and_back_to_all() {
        let mut browser = job_browser();
        browser.handle_key(KeyCode::Char('f'));
        assert_eq!(browser.view.filter().facet("type"), "Full-time");
        browser.handle_key(KeyCode::Char('f'));
        browser.handle_key(KeyCode::Char('f'));
        assert_eq!(browser.view.filter().facet("type"), "Contract");
        browser.handle_key(KeyCode::Char('f'));
        assert_eq!(browser.view.filter().facet("type"), ALL);
    }

    #[test]
    fn esc_clears_before_quitting() {
        let mut browser = job_browser();
        assert!(browser.handle_key(KeyCode::Esc));
        assert!(browser.view.selection().id().is_none());
        assert!(!browser.handle_key(KeyCode::Esc));
    }

    #[test]
    fn reset_restores_full_catalog() {
        let mut browser = job_browser();
        browser.view.set_query("designer");
        browser.handle_key(KeyCode::Char('f'));
        browser.handle_key(KeyCode::Char('r'));
        assert!(browser.view.filter().is_unconstrained());
        assert_eq!(browser.view.filtered().len(), 4);
    }
}
