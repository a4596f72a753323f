//! Resume scan: a fixed-delay analysis that moves `Idle -> Running ->
//! Complete` and never touches state after it has been cancelled.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Priority::High => '✗',
            Priority::Medium => '!',
            Priority::Low => '·',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScores {
    pub format: u32,
    pub content: u32,
    pub keywords: u32,
    pub experience: u32,
    pub skills: u32,
}

impl AreaScores {
    pub fn entries(&self) -> [(&'static str, u32); 5] {
        [
            ("Format", self.format),
            ("Content", self.content),
            ("Keywords", self.keywords),
            ("Experience", self.experience),
            ("Skills", self.skills),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub issue: String,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub scores: AreaScores,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<Improvement>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    pub ats_compatibility: u32,
}

impl AnalysisReport {
    pub fn improvements_by_priority(&self, priority: Priority) -> Vec<&Improvement> {
        self.improvements
            .iter()
            .filter(|i| i.priority == priority)
            .collect()
    }
}

/// What the scanner extracted from the uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal: ContactInfo,
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ResumeData {
    /// Skills followed by project technologies, deduplicated ignoring case.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let listed = self.projects.iter().flat_map(|p| p.technologies.iter());
        for tech in self.skills.iter().chain(listed) {
            if !seen.iter().any(|s| s.eq_ignore_ascii_case(tech)) {
                seen.push(tech);
            }
        }
        seen
    }

    /// Keywords that appear in neither the skills nor any project stack.
    pub fn lacks<'a>(&self, keywords: &'a [String]) -> Vec<&'a str> {
        let known = self.technologies();
        keywords
            .iter()
            .map(String::as_str)
            .filter(|k| !known.iter().any(|t| t.eq_ignore_ascii_case(k)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Running { file_name: String },
    Complete {
        file_name: String,
        report: Box<AnalysisReport>,
    },
}

/// Owns the analysis timer. Dropping the scan aborts a pending timer.
#[derive(Debug)]
pub struct ResumeScan {
    state: Arc<watch::Sender<ScanState>>,
    task: Option<JoinHandle<()>>,
}

impl Default for ResumeScan {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeScan {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ScanState::Idle);
        Self {
            state: Arc::new(tx),
            task: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScanState> {
        self.state.subscribe()
    }

    /// Starts a scan that completes with `report` after `delay`. Any scan
    /// already running is cancelled first. Must be called inside a tokio
    /// runtime.
    pub fn start(&mut self, file_name: impl Into<String>, delay: Duration, report: AnalysisReport) {
        self.cancel();
        let file_name = file_name.into();
        info!(file = %file_name, delay_ms = delay.as_millis() as u64, "resume scan started");
        self.state.send_replace(ScanState::Running {
            file_name: file_name.clone(),
        });

        let state = Arc::clone(&self.state);
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(file = %file_name, "resume scan complete");
            state.send_replace(ScanState::Complete {
                file_name,
                report: Box::new(report),
            });
        }));
    }

    /// Aborts a pending scan. A running scan falls back to `Idle`; a
    /// completed one keeps its report.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state.send_if_modified(|state| {
            if matches!(state, ScanState::Running { .. }) {
                debug!("resume scan cancelled");
                *state = ScanState::Idle;
                true
            } else {
                false
            }
        });
    }

    /// Waits until the scan leaves `Running`. Returns the final state.
    pub async fn wait(&self) -> ScanState {
        let mut rx = self.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            if !matches!(current, ScanState::Running { .. }) {
                return current;
            }
            if rx.changed().await.is_err() {
                return self.state();
            }
        }
    }
}

impl Drop for ResumeScan {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
