use crate::metrics;
use crate::models::{DetailedScores, InterviewSession, Question, SessionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Fair => "fair",
            ScoreBand::Weak => "needs work",
        }
    }
}

pub fn with_status(sessions: &[InterviewSession], status: SessionStatus) -> Vec<&InterviewSession> {
    sessions.iter().filter(|s| s.status == status).collect()
}

pub fn completed(sessions: &[InterviewSession]) -> Vec<&InterviewSession> {
    with_status(sessions, SessionStatus::Completed)
}

pub fn scheduled(sessions: &[InterviewSession]) -> Vec<&InterviewSession> {
    with_status(sessions, SessionStatus::Scheduled)
}

/// Mean score of completed sessions, 0 when there are none.
pub fn average_score(sessions: &[InterviewSession]) -> f64 {
    let done = completed(sessions);
    metrics::average(&done, |s| s.score.unwrap_or(0) as f64)
}

/// Breakdown rows in display order.
pub fn breakdown(scores: &DetailedScores) -> [(&'static str, u32); 4] {
    [
        ("Communication", scores.communication),
        ("Technical", scores.technical),
        ("Problem Solving", scores.problem_solving),
        ("Confidence", scores.confidence),
    ]
}

/// `m:ss`, as shown on the practice timer.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Cursor over the practice questions. Moving past either end stays put.
#[derive(Debug, Clone)]
pub struct QuestionDeck {
    questions: Vec<Question>,
    current: usize,
}

impl QuestionDeck {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// 1-based position and total, for "Question n of m".
    pub fn position(&self) -> (usize, usize) {
        if self.questions.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.questions.len())
        }
    }

    pub fn progress(&self) -> u32 {
        let (n, total) = self.position();
        metrics::percentage(n as f64, total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledCatalog, CatalogSource};

    #[test]
    fn session_subsets_and_average() {
        let sessions = BundledCatalog.load().unwrap().sessions;
        assert_eq!(completed(&sessions).len(), 2);
        assert_eq!(scheduled(&sessions).len(), 1);
        assert_eq!(average_score(&sessions), 78.5);
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::of(85), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(72), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59), ScoreBand::Weak);
    }

    #[test]
    fn breakdown_labels() {
        let sessions = BundledCatalog.load().unwrap().sessions;
        let feedback = sessions[1].feedback.as_ref().unwrap();
        let rows = breakdown(&feedback.detailed_scores);
        assert_eq!(rows[2], ("Problem Solving", 70));
    }

    #[test]
    fn timer_format() {
        assert_eq!(format_time(180), "3:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn deck_clamps_at_both_ends() {
        let mut deck = QuestionDeck::new(BundledCatalog.load().unwrap().questions);
        assert_eq!(deck.position(), (1, 3));
        deck.prev();
        assert_eq!(deck.position(), (1, 3));
        deck.next();
        deck.next();
        deck.next();
        assert_eq!(deck.position(), (3, 3));
        assert!(deck.is_last());
        assert_eq!(deck.current().unwrap().category, "System Design");
        assert_eq!(deck.progress(), 100);

        let empty = QuestionDeck::new(Vec::new());
        assert!(empty.current().is_none());
        assert_eq!(empty.position(), (0, 0));
        assert_eq!(empty.progress(), 0);
    }
}
