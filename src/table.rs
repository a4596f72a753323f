use placement::interview::ScoreBand;
use placement::models::{Chat, Company, Course, Event, InterviewSession, Job, Question};
use placement::{Presenter, ViewSnapshot};

/// Renders a list view as a fixed-width table, one string per line.
#[derive(Debug, Default)]
pub struct TablePrinter {
    pub lines: Vec<String>,
}

impl TablePrinter {
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn header(&mut self, header: String) {
        let width = header.len();
        self.lines.push(header);
        self.lines.push("-".repeat(width));
    }

    fn footer<R>(&mut self, what: &str, snapshot: &ViewSnapshot<'_, R>) {
        if snapshot.shown() < snapshot.total {
            self.lines.push(format!(
                "\n{} of {} {} shown",
                snapshot.shown(),
                snapshot.total,
                what
            ));
        }
    }

    fn empty<R>(&mut self, what: &str, snapshot: &ViewSnapshot<'_, R>) -> bool {
        if snapshot.filtered.is_empty() {
            self.lines.push(format!("No {} found.", what));
            return true;
        }
        false
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

impl Presenter<Job> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, Job>) {
        if self.empty("jobs", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<11} {:<28} {:<18} {:<20} {:>7}",
            "ID", "TYPE", "TITLE", "COMPANY", "SALARY", "APPLIED"
        ));
        for job in &snapshot.filtered {
            self.lines.push(format!(
                "{:<4} {:<11} {:<28} {:<18} {:<20} {:>7}",
                job.id,
                job.kind,
                truncate(&job.title, 26),
                truncate(&job.company, 16),
                truncate(&job.salary, 18),
                if job.applied { "yes" } else { "" }
            ));
        }
        self.footer("jobs", snapshot);
    }
}

impl Presenter<Company> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, Company>) {
        if self.empty("companies", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<20} {:<16} {:<10} {:>6} {:>5}",
            "ID", "NAME", "INDUSTRY", "SIZE", "RATING", "OPEN"
        ));
        for company in &snapshot.filtered {
            self.lines.push(format!(
                "{:<4} {:<20} {:<16} {:<10} {:>6.1} {:>5}",
                company.id,
                truncate(&company.name, 18),
                truncate(&company.industry, 14),
                company.size,
                company.rating,
                company.open_positions
            ));
        }
        self.footer("companies", snapshot);
    }
}

impl Presenter<Course> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, Course>) {
        if self.empty("courses", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<30} {:<20} {:<12} {:>6} {:>8}",
            "ID", "TITLE", "INSTRUCTOR", "DIFFICULTY", "RATING", "PROGRESS"
        ));
        for course in &snapshot.filtered {
            let progress = match course.progress {
                Some(p) if course.enrolled => format!("{}%", p),
                _ => "-".to_string(),
            };
            self.lines.push(format!(
                "{:<4} {:<30} {:<20} {:<12} {:>6.1} {:>8}",
                course.id,
                truncate(&course.title, 28),
                truncate(&course.instructor, 18),
                course.difficulty,
                course.rating,
                progress
            ));
        }
        self.footer("courses", snapshot);
    }
}

impl Presenter<Chat> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, Chat>) {
        if self.empty("chats", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<34} {:<7} {:>6}  {}",
            "ID", "NAME", "TYPE", "UNREAD", "LAST MESSAGE"
        ));
        for chat in &snapshot.filtered {
            let last = chat
                .last_message
                .as_ref()
                .map(|m| truncate(&m.content, 40))
                .unwrap_or_default();
            self.lines.push(format!(
                "{:<4} {:<34} {:<7} {:>6}  {}",
                chat.id,
                truncate(&chat.name, 32),
                chat.kind,
                chat.unread_count,
                last
            ));
        }
        self.footer("chats", snapshot);
    }
}

impl Presenter<Event> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, Event>) {
        if self.empty("events", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<12} {:<28} {:<17} {:>5} {:>9}",
            "ID", "TYPE", "TITLE", "DATE", "MIN", "SEATS"
        ));
        for event in &snapshot.filtered {
            let seats = match event.max_participants {
                Some(max) => format!("{}/{}", event.participants, max),
                None => event.participants.to_string(),
            };
            self.lines.push(format!(
                "{:<4} {:<12} {:<28} {:<17} {:>5} {:>9}",
                event.id,
                event.kind.label(),
                truncate(&event.title, 26),
                event.date.format("%Y-%m-%d %H:%M"),
                event.duration,
                seats
            ));
        }
        self.footer("events", snapshot);
    }
}

impl Presenter<InterviewSession> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, InterviewSession>) {
        if self.empty("interview sessions", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<12} {:<12} {:>5} {:>6}  {}",
            "ID", "TYPE", "STATUS", "MIN", "SCORE", "BAND"
        ));
        for session in &snapshot.filtered {
            let (score, band) = match session.score {
                Some(s) => (s.to_string(), ScoreBand::of(s).label()),
                None => ("-".to_string(), ""),
            };
            self.lines.push(format!(
                "{:<4} {:<12} {:<12} {:>5} {:>6}  {}",
                session.id,
                session.kind.label(),
                session.status,
                session.duration,
                score,
                band
            ));
        }
        self.footer("interview sessions", snapshot);
    }
}

impl Presenter<Question> for TablePrinter {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, Question>) {
        if self.empty("questions", snapshot) {
            return;
        }
        self.header(format!(
            "{:<4} {:<11} {:<7} {:<16} {}",
            "ID", "TYPE", "LEVEL", "CATEGORY", "QUESTION"
        ));
        for question in &snapshot.filtered {
            self.lines.push(format!(
                "{:<4} {:<11} {:<7} {:<16} {}",
                question.id,
                question.kind,
                question.difficulty,
                truncate(&question.category, 14),
                truncate(&question.text, 50)
            ));
        }
        self.footer("questions", snapshot);
    }
}
