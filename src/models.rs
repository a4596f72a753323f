use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filter::Record;
use crate::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Direct,
    Group,
}

impl ChatKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatKind::Direct => "direct",
            ChatKind::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Webinar,
    JobFair,
    QaSession,
    Networking,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Webinar => "webinar",
            EventKind::JobFair => "job-fair",
            EventKind::QaSession => "qa-session",
            EventKind::Networking => "networking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Webinar => "Webinar",
            EventKind::JobFair => "Job Fair",
            EventKind::QaSession => "Q&A Session",
            EventKind::Networking => "Networking",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            EventKind::Webinar => '▶',
            EventKind::JobFair => '◆',
            EventKind::QaSession => '?',
            EventKind::Networking => '↔',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionKind {
    Behavioral,
    Technical,
    CaseStudy,
    General,
}

impl SessionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Behavioral => "behavioral",
            SessionKind::Technical => "technical",
            SessionKind::CaseStudy => "case-study",
            SessionKind::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Behavioral => "Behavioral",
            SessionKind::Technical => "Technical",
            SessionKind::CaseStudy => "Case Study",
            SessionKind::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    InProgress,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Completed => "completed",
            SessionStatus::InProgress => "in-progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Behavioral,
    Technical,
    CaseStudy,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Behavioral => "behavioral",
            QuestionKind::Technical => "technical",
            QuestionKind::CaseStudy => "case-study",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuestionDifficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionDifficulty::Easy => "easy",
            QuestionDifficulty::Medium => "medium",
            QuestionDifficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Quiz,
}

impl LessonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LessonKind::Video => "video",
            LessonKind::Quiz => "quiz",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            LessonKind::Video => '▶',
            LessonKind::Quiz => '?',
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        })*
    };
}

display_as_str!(
    JobType,
    Difficulty,
    ChatKind,
    EventKind,
    SessionKind,
    SessionStatus,
    QuestionKind,
    QuestionDifficulty,
    LessonKind
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: JobType,
    pub salary: String,
    pub posted: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub rating: f64,
    pub description: String,
    pub open_positions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub rating: f64,
    pub students: u32,
    pub progress: Option<u32>, // percent, enrolled courses only
    pub schedule: String,
    pub lessons: u32,
    #[serde(default)]
    pub enrolled: bool,
    /// Lessons published so far, in course order.
    #[serde(default)]
    pub syllabus: Vec<Lesson>,
    #[serde(default)]
    pub discussions: Vec<Discussion>,
}

impl Course {
    pub fn completed_lessons(&self) -> usize {
        self.syllabus.iter().filter(|l| l.completed).count()
    }

    /// Share of the published lessons marked complete, 0 without a syllabus.
    pub fn lesson_progress(&self) -> u32 {
        metrics::percentage(self.completed_lessons() as f64, self.syllabus.len() as f64)
    }

    /// The first lesson not yet completed.
    pub fn next_lesson(&self) -> Option<&Lesson> {
        self.syllabus.iter().find(|l| !l.completed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: LessonKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub author: String,
    pub replies: u32,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    #[serde(default)]
    pub participants: Vec<String>,
    pub last_message: Option<Message>,
    #[serde(default)]
    pub unread_count: u32,
    pub online: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub date: DateTime<Utc>,
    pub duration: u32, // minutes
    pub participants: u32,
    pub max_participants: Option<u32>,
    pub host: String,
    pub description: String,
    #[serde(default)]
    pub live: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedScores {
    pub communication: u32,
    pub technical: u32,
    pub problem_solving: u32,
    pub confidence: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub overall: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    pub detailed_scores: DetailedScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub duration: u32, // minutes
    pub scheduled_date: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    pub score: Option<u32>,
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: QuestionDifficulty,
    pub time_limit: u32, // seconds
    pub category: String,
}

// --- Record impls ---

impl Record for Job {
    const FACETS: &'static [&'static str] = &["type"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            _ => None,
        }
    }
}

impl Record for Company {
    const FACETS: &'static [&'static str] = &["industry"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.industry.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "industry" => Some(self.industry.as_str()),
            _ => None,
        }
    }
}

impl Record for Course {
    const FACETS: &'static [&'static str] = &["topic", "difficulty"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.instructor.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "topic" => Some(self.topic.as_str()),
            "difficulty" => Some(self.difficulty.as_str()),
            _ => None,
        }
    }
}

impl Record for Chat {
    const FACETS: &'static [&'static str] = &["type"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(msg) = &self.last_message {
            fields.push(msg.content.as_str());
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            _ => None,
        }
    }
}

impl Record for Event {
    const FACETS: &'static [&'static str] = &["type"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.host.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            _ => None,
        }
    }
}

impl Record for InterviewSession {
    const FACETS: &'static [&'static str] = &["type", "status"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.kind.label()];
        if let Some(feedback) = &self.feedback {
            fields.push(feedback.overall.as_str());
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Record for Question {
    const FACETS: &'static [&'static str] = &["type", "difficulty"];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.text.as_str(), self.category.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            "difficulty" => Some(self.difficulty.as_str()),
            _ => None,
        }
    }
}
