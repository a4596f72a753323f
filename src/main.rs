mod table;
mod tui;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use placement::chat::{self, ChatHub};
use placement::config::Config;
use placement::dashboard::QuickStats;
use placement::filter;
use placement::models::{Course, Event, Job};
use placement::profile::Profile;
use placement::interview::{self, QuestionDeck};
use placement::nav::NAVIGATION;
use placement::scanner::{Priority, ResumeData, ResumeScan, ScanState};
use placement::{
    BundledCatalog, Catalog, CatalogSource, Collection, JsonFileCatalog, ListView, Presenter,
    Record, ViewEvent,
};
use table::{TablePrinter, truncate};

#[derive(Parser)]
#[command(name = "placement")]
#[command(
    about = "Student placement portal - browse jobs, companies, courses, chats and interview practice"
)]
struct Cli {
    /// Catalog JSON file (overrides config and PLACEMENT_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config and a copy of the bundled catalog
    Init,

    /// List jobs
    Jobs {
        /// Search title and company
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by type (Full-time, Part-time, Internship, Contract)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// List companies
    Companies {
        /// Search name and industry
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by industry
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// List training courses
    Courses {
        /// Search title and instructor
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by topic
        #[arg(long)]
        topic: Option<String>,

        /// Filter by difficulty (Beginner, Intermediate, Advanced)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Show one course with its lessons and discussions
    Course {
        /// Course ID
        id: String,
    },

    /// List chats
    Chats {
        /// Search chat name and last message
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by type (direct, group)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Show a chat's messages
    Messages {
        /// Chat ID
        chat_id: String,

        /// Append a message before showing the conversation (not saved)
        #[arg(long)]
        send: Option<String>,
    },

    /// List events
    Events {
        /// Search title and host
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by type (webinar, job-fair, qa-session, networking)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Only events that have not started yet
        #[arg(long)]
        upcoming: bool,
    },

    /// Interview practice history and schedule
    Interviews {
        /// Filter by status (scheduled, completed, in-progress)
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by type (behavioral, technical, case-study, general)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// List practice questions
    Questions {
        /// Search question text and category
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by type (behavioral, technical, case-study)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Filter by difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Walk through the matching questions one by one
        #[arg(long)]
        practice: bool,
    },

    /// Show filter options for a collection
    Facets {
        /// jobs, companies, courses, chats, events, interviews, questions
        collection: Collection,
    },

    /// Show headline numbers
    Dashboard,

    /// Show the student profile and settings
    Profile,

    /// Show the navigation table
    Nav,

    /// Analyze a resume
    Scan {
        /// Resume file
        file: PathBuf,

        /// Analysis delay in milliseconds (defaults to config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Browse a collection interactively
    Browse {
        /// Collection to browse (defaults to config)
        collection: Option<Collection>,

        /// Initial search
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print the filtered collection as JSON
    Export {
        collection: Collection,

        #[arg(short, long)]
        query: Option<String>,

        /// Facet constraint as name=value, repeatable
        #[arg(short, long = "facet")]
        facets: Vec<String>,
    },
}

fn init_logging(level: &str, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if quiet { "off" } else { level };
        EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(cli_path: Option<&Path>, config: &Config) -> Result<Catalog> {
    if let Some(path) = cli_path {
        return JsonFileCatalog::new(path)
            .load()
            .with_context(|| format!("Failed to load catalog {}", path.display()));
    }

    if let Some(path) = &config.catalog_path {
        if path.exists() {
            return JsonFileCatalog::new(path)
                .load()
                .with_context(|| format!("Failed to load catalog {}", path.display()));
        }
        warn!(path = %path.display(), "configured catalog not found, falling back");
    }

    let default = JsonFileCatalog::default_path();
    let source: Box<dyn CatalogSource> = if default.exists() {
        Box::new(JsonFileCatalog::new(default))
    } else {
        Box::new(BundledCatalog)
    };
    debug!(source = %source.describe(), "loading catalog");
    source
        .load()
        .with_context(|| format!("Failed to load {}", source.describe()))
}

/// Builds a view and applies the query and facet constraints given on the
/// command line.
fn build_view<R: Record>(
    records: Vec<R>,
    query: Option<String>,
    facets: Vec<(&str, Option<String>)>,
) -> ListView<R> {
    let mut view = ListView::new(records);
    if let Some(q) = query {
        view.apply(ViewEvent::SetQuery(q));
    }
    for (name, value) in facets {
        if let Some(value) = value {
            view.apply(ViewEvent::SetFacet {
                name: name.to_string(),
                value,
            });
        }
    }
    view
}

fn show<R: Record>(view: &ListView<R>)
where
    TablePrinter: Presenter<R>,
{
    let mut printer = TablePrinter::default();
    printer.present(&view.snapshot());
    printer.print();

    if view.filtered().is_empty() {
        for (name, value) in view.filter().facets() {
            let options = view.facet_options(name);
            if options.iter().any(|o| o == value) {
                continue;
            }
            match filter::closest_option(value, &options) {
                Some(hint) => println!("No {} '{}'. Did you mean '{}'?", name, value, hint),
                None => println!("No {} '{}'. Options: {}", name, value, options[1..].join(", ")),
            }
        }
    }
}

fn parse_facet(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => bail!("Facet must look like name=value, got '{}'", arg),
    }
}

fn export<R: Record + serde::Serialize>(
    records: Vec<R>,
    query: Option<String>,
    facets: &[(String, String)],
) -> Result<String> {
    let view = build_view(
        records,
        query,
        facets.iter().map(|(n, v)| (n.as_str(), Some(v.clone()))).collect(),
    );
    serde_json::to_string_pretty(&view.filtered()).context("Failed to serialize view")
}

fn print_resume(resume: &ResumeData, missing_keywords: &[String]) {
    let contact = &resume.personal;
    println!("\n{}", contact.name);
    println!("{} · {} · {}", contact.email, contact.phone, contact.location);
    for link in [&contact.linkedin, &contact.github].into_iter().flatten() {
        println!("{}", link);
    }

    println!("\nExperience:");
    for job in &resume.experience {
        println!("  {} at {} ({})", job.title, job.company, job.duration);
        for highlight in &job.highlights {
            println!("    - {}", highlight);
        }
    }

    println!("\nEducation:");
    for school in &resume.education {
        let gpa = school
            .gpa
            .as_ref()
            .map(|g| format!(", GPA {}", g))
            .unwrap_or_default();
        println!("  {}, {} ({}{})", school.degree, school.school, school.year, gpa);
    }

    println!("\nTechnologies: {}", resume.technologies().join(", "));
    if !resume.certifications.is_empty() {
        println!("Certifications: {}", resume.certifications.join(", "));
    }
    let lacking = resume.lacks(missing_keywords);
    if !lacking.is_empty() {
        println!("Not yet in your skills: {}", lacking.join(", "));
    }
}

fn run_scan(file: &Path, delay: Duration, catalog: &Catalog) -> Result<()> {
    if !file.exists() {
        bail!("Resume file not found: {}", file.display());
    }
    let report = catalog
        .resume_report
        .clone()
        .context("Catalog has no resume analysis to show")?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let runtime = tokio::runtime::Runtime::new()?;
    let state = runtime.block_on(async {
        let mut scan = ResumeScan::new();
        scan.start(file_name.as_str(), delay, report);
        println!("Analyzing {}...", file_name);
        let finished = tokio::select! {
            state = scan.wait() => Some(state),
            _ = tokio::signal::ctrl_c() => None,
        };
        match finished {
            Some(state) => state,
            None => {
                scan.cancel();
                scan.state()
            }
        }
    });

    let ScanState::Complete { report, .. } = state else {
        println!("Analysis cancelled.");
        return Ok(());
    };

    println!(
        "\nOverall score: {}/100   ATS compatibility: {}%",
        report.overall_score, report.ats_compatibility
    );
    println!("\n{:<12} {:>5}", "AREA", "SCORE");
    println!("{}", "-".repeat(18));
    for (area, score) in report.scores.entries() {
        println!("{:<12} {:>5}", area, score);
    }

    println!("\nStrengths:");
    for s in &report.strengths {
        println!("  + {}", s);
    }

    println!("\nImprovements:");
    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        for item in report.improvements_by_priority(priority) {
            println!(
                "  {} [{}] {}: {}",
                priority.glyph(),
                priority.label(),
                item.category,
                item.issue
            );
            for line in textwrap::fill(&item.suggestion, 66).lines() {
                println!("      {}", line);
            }
        }
    }

    if !report.missing_keywords.is_empty() {
        println!("\nMissing keywords: {}", report.missing_keywords.join(", "));
    }

    if let Some(resume) = &catalog.resume {
        print_resume(resume, &report.missing_keywords);
    }
    Ok(())
}

fn practice_questions(questions: Vec<placement::models::Question>) {
    let mut deck = QuestionDeck::new(questions);
    if deck.current().is_none() {
        println!("No questions found.");
        return;
    }
    loop {
        let (n, total) = deck.position();
        if let Some(q) = deck.current() {
            println!(
                "Question {} of {} ({}%)  [{} · {} · {}]",
                n,
                total,
                deck.progress(),
                q.kind,
                q.difficulty,
                interview::format_time(q.time_limit)
            );
            for line in textwrap::fill(&q.text, 72).lines() {
                println!("  {}", line);
            }
        }
        if deck.is_last() {
            break;
        }
        println!();
        deck.next();
    }
}

/// Events to list, plus how many events are live right now. Live events
/// have started, so they are counted before the upcoming window applies.
fn event_listing(
    events: Vec<Event>,
    upcoming: bool,
    now: DateTime<Utc>,
) -> (Vec<Event>, usize) {
    let live = chat::live(&events).len();
    if !upcoming {
        return (events, live);
    }
    let upcoming = chat::upcoming(&events, now).into_iter().cloned().collect();
    (upcoming, live)
}

fn print_course(course: &Course) {
    println!("{} ({})", course.title, course.id);
    println!("by {} · {} · {}", course.instructor, course.difficulty, course.duration);
    println!("{}", "-".repeat(60));
    for line in textwrap::fill(&course.description, 72).lines() {
        println!("{}", line);
    }

    if course.syllabus.is_empty() {
        println!("\n{} lessons, none published yet.", course.lessons);
    } else {
        println!(
            "\nLessons ({} of {} done, {}%):",
            course.completed_lessons(),
            course.syllabus.len(),
            course.lesson_progress()
        );
        for lesson in &course.syllabus {
            let mark = if lesson.completed { 'x' } else { ' ' };
            println!(
                "  [{}] {} {:<40} {}",
                mark,
                lesson.kind.glyph(),
                truncate(&lesson.title, 38),
                lesson.duration
            );
        }
        if let Some(next) = course.next_lesson() {
            println!("Next up: {}", next.title);
        }
    }

    if !course.discussions.is_empty() {
        println!("\nDiscussions:");
        for d in &course.discussions {
            println!("  {} (by {}, {} replies, {})", d.title, d.author, d.replies, d.time);
        }
    }
}

fn print_profile(profile: &Profile, jobs: &[Job], config: &Config) {
    let personal = &profile.personal;
    println!("{} [{}]", profile.full_name(), profile.initials());
    println!("{}", profile.professional.title);
    println!("{} · {} · {}", personal.email, personal.phone, personal.location);
    if !personal.bio.is_empty() {
        for line in textwrap::fill(&personal.bio, 72).lines() {
            println!("  {}", line);
        }
    }

    let edu = &profile.education;
    println!("\n{} in {}, {} ({})", edu.degree, edu.major, edu.school, edu.graduation_year);
    println!("Skills: {}", profile.professional.skills.join(", "));

    let prefs = &profile.job_preferences;
    let kinds: Vec<&str> = prefs.job_types.iter().map(|k| k.as_str()).collect();
    println!("\nLooking for: {}", kinds.join(", "));
    println!(
        "Locations: {}{}",
        prefs.locations.join(", "),
        if prefs.remote_work { " (remote ok)" } else { "" }
    );
    println!("Salary: {}", prefs.salary_range.label());
    println!("Matching jobs: {}", profile.preferred_jobs(jobs).len());

    let notify = &config.preferences.notifications;
    let security = &config.preferences.security;
    let access = &config.preferences.accessibility;
    println!("\nSettings");
    println!(
        "  notifications: email={} push={} job_alerts={} messages={}",
        notify.email, notify.push, notify.job_alerts, notify.messages
    );
    println!(
        "  security: two_factor={} login_alerts={} session_timeout={}m",
        security.two_factor, security.login_alerts, security.session_timeout_minutes
    );
    println!(
        "  accessibility: high_contrast={} large_text={} reduced_motion={}",
        access.high_contrast, access.large_text, access.reduced_motion
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;
    init_logging(&config.log_level, matches!(cli.command, Commands::Browse { .. }));

    if let Commands::Init = cli.command {
        return init(&config);
    }

    let mut catalog = load_catalog(cli.catalog.as_deref(), &config)?;
    catalog.rebase(Utc::now());

    match cli.command {
        // Handled before the catalog loads.
        Commands::Init => {}

        Commands::Jobs { query, kind } => {
            let view = build_view(catalog.jobs, query, vec![("type", kind)]);
            show(&view);
        }

        Commands::Companies { query, industry } => {
            let view = build_view(catalog.companies, query, vec![("industry", industry)]);
            show(&view);
        }

        Commands::Courses {
            query,
            topic,
            difficulty,
        } => {
            let view = build_view(
                catalog.courses,
                query,
                vec![("topic", topic), ("difficulty", difficulty)],
            );
            show(&view);
        }

        Commands::Course { id } => {
            let mut view = ListView::unselected(catalog.courses);
            view.select(id.as_str());
            let Some(course) = view.selected() else {
                bail!("Course '{}' not found", id);
            };
            print_course(course);
        }

        Commands::Chats { query, kind } => {
            let hub = ChatHub::new(catalog.chats.clone(), catalog.messages);
            let unread = hub.unread_total();
            let view = build_view(catalog.chats, query, vec![("type", kind)]);
            show(&view);
            if unread > 0 {
                println!("\n{} unread message(s)", unread);
            }
        }

        Commands::Messages { chat_id, send } => {
            let mut hub = ChatHub::new(catalog.chats, catalog.messages);
            if let Some(content) = send {
                hub.append(&chat_id, &content)?;
            }
            hub.view_mut().select(chat_id.as_str());
            let Some(chat) = hub.view().selected() else {
                bail!("Chat '{}' not found", chat_id);
            };
            println!("{} ({})", chat.name, chat.kind);
            println!("{}", "-".repeat(60));
            let messages = hub.active_messages();
            if messages.is_empty() {
                println!("No messages yet.");
            }
            for msg in messages {
                println!(
                    "[{}] {}:",
                    msg.timestamp.format("%Y-%m-%d %H:%M"),
                    msg.sender_name
                );
                for line in textwrap::fill(&msg.content, 72).lines() {
                    println!("  {}", line);
                }
            }
        }

        Commands::Events {
            query,
            kind,
            upcoming,
        } => {
            let (events, live) = event_listing(catalog.events, upcoming, Utc::now());
            let view = build_view(events, query, vec![("type", kind)]);
            show(&view);
            if live > 0 {
                println!("\n{} event(s) live now", live);
            }
        }

        Commands::Interviews { status, kind } => {
            let sessions = catalog.sessions;
            let average = interview::average_score(&sessions);
            let scheduled = interview::scheduled(&sessions).len();
            let view = build_view(sessions, None, vec![("status", status), ("type", kind)]);
            show(&view);
            println!("\nAverage score: {:.1}   Scheduled: {}", average, scheduled);
        }

        Commands::Questions {
            query,
            kind,
            difficulty,
            practice,
        } => {
            let view = build_view(
                catalog.questions,
                query,
                vec![("type", kind), ("difficulty", difficulty)],
            );
            if practice {
                practice_questions(view.filtered().into_iter().cloned().collect());
            } else {
                show(&view);
            }
        }

        Commands::Facets { collection } => {
            for name in collection.facets() {
                let options = catalog.facet_options(collection, name);
                println!("{}: {}", name, options.join(", "));
            }
        }

        Commands::Dashboard => {
            let stats = QuickStats::compute(&catalog, Utc::now());
            println!(
                "Courses enrolled:     {} ({}% average progress)",
                stats.enrolled_courses, stats.average_progress
            );
            println!("Courses available:    {}", stats.available_courses);
            println!("Job applications:     {} ({} open)", stats.applied_jobs, stats.open_jobs);
            println!("Interviews scheduled: {}", stats.scheduled_interviews);
            println!("Interview average:    {:.1}", stats.average_interview_score);
            println!("Unread messages:      {}", stats.unread_messages);
            println!("Upcoming events:      {}", stats.upcoming_events);
        }

        Commands::Profile => {
            let Some(profile) = &catalog.profile else {
                bail!("Catalog has no profile");
            };
            print_profile(profile, &catalog.jobs, &config);
        }

        Commands::Nav => {
            let stats = QuickStats::compute(&catalog, Utc::now());
            for item in &NAVIGATION {
                let badge = item
                    .badge_text(&stats)
                    .map(|b| format!(" [{}]", b))
                    .unwrap_or_default();
                println!("{} {}{}", item.icon.glyph(), item.label, badge);
            }
        }

        Commands::Scan { file, delay_ms } => {
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.scan_delay());
            run_scan(&file, delay, &catalog)?;
        }

        Commands::Browse { collection, query } => {
            let collection = collection.unwrap_or(config.default_collection);
            tui::run_browse(collection, &catalog, query.as_deref())?;
        }

        Commands::Export {
            collection,
            query,
            facets,
        } => {
            let facets = facets
                .iter()
                .map(|f| parse_facet(f))
                .collect::<Result<Vec<_>>>()?;
            let json = match collection {
                Collection::Jobs => export(catalog.jobs, query, &facets)?,
                Collection::Companies => export(catalog.companies, query, &facets)?,
                Collection::Courses => export(catalog.courses, query, &facets)?,
                Collection::Chats => export(catalog.chats, query, &facets)?,
                Collection::Events => export(catalog.events, query, &facets)?,
                Collection::Interviews => export(catalog.sessions, query, &facets)?,
                Collection::Questions => export(catalog.questions, query, &facets)?,
            };
            println!("{}", json);
        }
    }

    Ok(())
}

fn init(config: &Config) -> Result<()> {
    let config_path = Config::default_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
    } else {
        write_json(&config_path, config)?;
        println!("Config written to {}", config_path.display());
    }

    let catalog_path = JsonFileCatalog::default_path();
    if catalog_path.exists() {
        println!("Catalog already exists at {}", catalog_path.display());
    } else {
        let catalog = BundledCatalog.load()?;
        write_json(&catalog_path, &catalog)?;
        println!("Catalog written to {}", catalog_path.display());
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use placement::ALL;

    #[test]
    fn facet_argument_parsing() {
        assert_eq!(
            parse_facet("type = Internship").unwrap(),
            ("type".to_string(), "Internship".to_string())
        );
        assert!(parse_facet("Internship").is_err());
        assert!(parse_facet("=x").is_err());
    }

    #[test]
    fn export_honours_query_and_facets() {
        let catalog = BundledCatalog.load().unwrap();
        let json = export(
            catalog.courses,
            Some("dr.".to_string()),
            &[("difficulty".to_string(), "Beginner".to_string())],
        )
        .unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Machine Learning Basics");
    }

    #[test]
    fn missing_catalog_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("catalog.json");

        let err = load_catalog(Some(&missing), &Config::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("catalog.json"));

        let config = Config {
            catalog_path: Some(missing),
            ..Config::default()
        };
        let catalog = load_catalog(None, &config).unwrap();
        assert!(!catalog.jobs.is_empty());
    }

    #[test]
    fn chats_filter_on_type() {
        let catalog = BundledCatalog.load().unwrap();
        let json = export(
            catalog.chats,
            None,
            &[("type".to_string(), "group".to_string())],
        )
        .unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "CS Students Group");

        let cli = Cli::try_parse_from(["placement", "chats", "-t", "group"]).unwrap();
        assert!(matches!(cli.command, Commands::Chats { kind: Some(k), .. } if k == "group"));
    }

    #[test]
    fn build_view_skips_absent_facets() {
        let catalog = BundledCatalog.load().unwrap();
        let view = build_view(catalog.jobs, None, vec![("type", None)]);
        assert_eq!(view.filter().facet("type"), ALL);
        assert_eq!(view.filtered().len(), 4);
    }

    #[test]
    fn live_events_are_counted_before_the_upcoming_window() {
        let mut events = BundledCatalog.load().unwrap().events;
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 18, 0, 0).unwrap();
        events[0].live = true;

        let (shown, live) = event_listing(events.clone(), true, now);
        assert_eq!(live, 1);
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|e| !e.live));

        let (shown, live) = event_listing(events, false, now);
        assert_eq!((shown.len(), live), (4, 1));
    }

    #[test]
    fn cli_parses_collections() {
        let cli = Cli::try_parse_from(["placement", "browse", "courses", "-q", "react"]).unwrap();
        match cli.command {
            Commands::Browse { collection, query } => {
                assert_eq!(collection, Some(Collection::Courses));
                assert_eq!(query.as_deref(), Some("react"));
            }
            _ => panic!("expected browse"),
        }
        assert!(Cli::try_parse_from(["placement", "facets", "resumes"]).is_err());
    }
}
