use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{PlacementError, Result};
use crate::filter::{self, Record};
use crate::models::{Chat, Company, Course, Event, InterviewSession, Job, Message, Question};
use crate::profile::Profile;
use crate::scanner::{AnalysisReport, ResumeData};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Every record the portal browses, loaded once per session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Day the seed dates were written for. When set, `rebase` moves them
    /// forward so the data stays current.
    pub seeded_at: Option<DateTime<Utc>>,
    pub jobs: Vec<Job>,
    pub companies: Vec<Company>,
    pub courses: Vec<Course>,
    pub chats: Vec<Chat>,
    /// Message history keyed by chat id.
    pub messages: BTreeMap<String, Vec<Message>>,
    pub events: Vec<Event>,
    pub sessions: Vec<InterviewSession>,
    pub questions: Vec<Question>,
    pub resume: Option<ResumeData>,
    pub resume_report: Option<AnalysisReport>,
    pub profile: Option<Profile>,
}

impl Catalog {
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| PlacementError::CatalogFormat {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Jobs => self.jobs.len(),
            Collection::Companies => self.companies.len(),
            Collection::Courses => self.courses.len(),
            Collection::Chats => self.chats.len(),
            Collection::Events => self.events.len(),
            Collection::Interviews => self.sessions.len(),
            Collection::Questions => self.questions.len(),
        }
    }

    /// Filter options for one facet of a collection, "all" first.
    pub fn facet_options(&self, collection: Collection, facet: &str) -> Vec<String> {
        match collection {
            Collection::Jobs => filter::distinct_values(&self.jobs, facet),
            Collection::Companies => filter::distinct_values(&self.companies, facet),
            Collection::Courses => filter::distinct_values(&self.courses, facet),
            Collection::Chats => filter::distinct_values(&self.chats, facet),
            Collection::Events => filter::distinct_values(&self.events, facet),
            Collection::Interviews => filter::distinct_values(&self.sessions, facet),
            Collection::Questions => filter::distinct_values(&self.questions, facet),
        }
    }

    /// Shifts every dated record by the whole days between `seeded_at` and
    /// `now`. Catalogs without `seeded_at`, or seeded in the future, keep
    /// their dates.
    pub fn rebase(&mut self, now: DateTime<Utc>) {
        let Some(seeded) = self.seeded_at else {
            return;
        };
        let days = (now.date_naive() - seeded.date_naive()).num_days();
        if days <= 0 {
            return;
        }
        let shift = chrono::Duration::days(days);
        for event in &mut self.events {
            event.date += shift;
        }
        for session in &mut self.sessions {
            if let Some(date) = &mut session.scheduled_date {
                *date += shift;
            }
        }
        for message in self.messages.values_mut().flatten() {
            message.timestamp += shift;
        }
        for chat in &mut self.chats {
            if let Some(message) = &mut chat.last_message {
                message.timestamp += shift;
            }
        }
        self.seeded_at = Some(seeded + shift);
        debug!(days, "catalog dates rebased");
    }
}

/// Supplies the catalog at startup.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;
    fn describe(&self) -> String;
}

/// Seed data compiled into the binary.
#[derive(Debug, Default)]
pub struct BundledCatalog;

impl CatalogSource for BundledCatalog {
    fn load(&self) -> Result<Catalog> {
        let catalog = Catalog::from_json(BUNDLED_CATALOG, "bundled")?;
        info!(
            jobs = catalog.jobs.len(),
            courses = catalog.courses.len(),
            chats = catalog.chats.len(),
            "bundled catalog loaded"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}

#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<data_dir>/catalog.json`, or `catalog.json` in the working directory
    /// when no data directory can be determined.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "placement") {
            proj_dirs.data_dir().join("catalog.json")
        } else {
            PathBuf::from("catalog.json")
        }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| PlacementError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&json, &self.path.display().to_string())?;
        info!(
            path = %self.path.display(),
            jobs = catalog.jobs.len(),
            courses = catalog.courses.len(),
            chats = catalog.chats.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The browsable collections, one list view each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    #[default]
    Jobs,
    Companies,
    Courses,
    Chats,
    Events,
    Interviews,
    Questions,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Jobs,
        Collection::Companies,
        Collection::Courses,
        Collection::Chats,
        Collection::Events,
        Collection::Interviews,
        Collection::Questions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Jobs => "jobs",
            Collection::Companies => "companies",
            Collection::Courses => "courses",
            Collection::Chats => "chats",
            Collection::Events => "events",
            Collection::Interviews => "interviews",
            Collection::Questions => "questions",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Collection::Jobs => "Jobs",
            Collection::Companies => "Companies",
            Collection::Courses => "Courses",
            Collection::Chats => "Chats",
            Collection::Events => "Events",
            Collection::Interviews => "Interview Sessions",
            Collection::Questions => "Practice Questions",
        }
    }

    /// Facets offered as selectors for this collection.
    pub fn facets(self) -> &'static [&'static str] {
        match self {
            Collection::Jobs => Job::FACETS,
            Collection::Companies => Company::FACETS,
            Collection::Courses => Course::FACETS,
            Collection::Chats => Chat::FACETS,
            Collection::Events => Event::FACETS,
            Collection::Interviews => InterviewSession::FACETS,
            Collection::Questions => Question::FACETS,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| PlacementError::UnknownCollection(s.to_string()))
    }
}
