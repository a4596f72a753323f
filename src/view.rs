use tracing::debug;

use crate::filter::{self, FilterState, Record};
use crate::selection::Selection;

/// User input a list view accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetQuery(String),
    SetFacet { name: String, value: String },
    Select(String),
    Clear,
}

/// Everything a presenter needs to draw one frame of a list view.
#[derive(Debug)]
pub struct ViewSnapshot<'a, R> {
    pub filtered: Vec<&'a R>,
    pub selection: &'a Selection,
    /// The selected record if it exists in the catalog, whether or not it is
    /// in the filtered view.
    pub selected: Option<&'a R>,
    pub filter: &'a FilterState,
    pub total: usize,
}

impl<R> ViewSnapshot<'_, R> {
    pub fn shown(&self) -> usize {
        self.filtered.len()
    }
}

pub trait Presenter<R> {
    fn present(&mut self, snapshot: &ViewSnapshot<'_, R>);
}

/// List-filter-select controller over one immutable catalog.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    catalog: Vec<R>,
    filter: FilterState,
    selection: Selection,
}

impl<R: Record> ListView<R> {
    pub fn new(catalog: Vec<R>) -> Self {
        let selection = Selection::first_of(&catalog);
        Self {
            catalog,
            filter: FilterState::new(),
            selection,
        }
    }

    /// A view that starts with nothing selected, for screens whose detail
    /// pane is hidden until the user picks a record.
    pub fn unselected(catalog: Vec<R>) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            selection: Selection::NoSelection,
        }
    }

    pub fn catalog(&self) -> &[R] {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        debug!(query = self.filter.query(), "query changed");
    }

    pub fn set_facet(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.filter.set_facet(name.as_str(), value);
        debug!(facet = %name, value = self.filter.facet(&name), "facet changed");
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selection.select(id);
        debug!(selection = ?self.selection, "selection changed");
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        debug!("selection cleared");
    }

    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SetQuery(query) => self.set_query(query),
            ViewEvent::SetFacet { name, value } => self.set_facet(name, value),
            ViewEvent::Select(id) => self.select(id),
            ViewEvent::Clear => self.clear(),
        }
    }

    /// Applies `event` and hands the resulting state to `presenter`.
    pub fn dispatch(&mut self, event: ViewEvent, presenter: &mut impl Presenter<R>) {
        self.apply(event);
        presenter.present(&self.snapshot());
    }

    pub fn filtered(&self) -> Vec<&R> {
        filter::filtered_view(&self.catalog, &self.filter)
    }

    pub fn selected(&self) -> Option<&R> {
        self.selection.resolve(&self.catalog)
    }

    pub fn facet_options(&self, facet: &str) -> Vec<String> {
        filter::distinct_values(&self.catalog, facet)
    }

    pub fn snapshot(&self) -> ViewSnapshot<'_, R> {
        ViewSnapshot {
            filtered: self.filtered(),
            selection: &self.selection,
            selected: self.selected(),
            filter: &self.filter,
            total: self.catalog.len(),
        }
    }

    /// Moves the selection to the next record of the filtered view. A
    /// selection outside the view jumps to its first record.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let next_id = {
            let view = self.filtered();
            if view.is_empty() {
                return;
            }
            let position = self
                .selection
                .id()
                .and_then(|id| view.iter().position(|r| r.id() == id));
            let index = match position {
                Some(i) => i.saturating_add_signed(delta).min(view.len() - 1),
                None => 0,
            };
            view[index].id().to_string()
        };
        if !self.selection.is_selected(&next_id) {
            self.select(next_id);
        }
    }

    /// Position of the selection within the filtered view, if it is there.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selection.id()?;
        self.filtered().iter().position(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Job};
    use pretty_assertions::assert_eq;

    fn job(id: &str, title: &str, company: &str, kind: &str) -> Job {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "company": company,
            "location": "Remote",
            "type": kind,
            "salary": "-",
            "posted": "today",
            "description": "",
        }))
        .unwrap()
    }

    fn jobs() -> Vec<Job> {
        vec![
            job("1", "Frontend Developer", "TechCorp Inc.", "Full-time"),
            job("2", "Software Engineer Intern", "StartupXYZ", "Internship"),
            job("3", "Backend Developer", "DataFlow Systems", "Full-time"),
            job("4", "Data Intern", "DesignStudio Pro", "Internship"),
        ]
    }

    fn course(id: &str, title: &str, instructor: &str) -> Course {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "instructor": instructor,
            "description": "",
            "duration": "4 weeks",
            "difficulty": "Beginner",
            "topic": "General",
            "rating": 4.5,
            "students": 10,
            "schedule": "Mon",
            "lessons": 4,
        }))
        .unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, usize, Option<String>)>,
    }

    impl<R: Record> Presenter<R> for Recorder {
        fn present(&mut self, snapshot: &ViewSnapshot<'_, R>) {
            self.frames.push((
                snapshot.shown(),
                snapshot.total,
                snapshot.selection.id().map(str::to_string),
            ));
        }
    }

    #[test]
    fn internship_facet_keeps_two_of_four() {
        let mut view = ListView::new(jobs());
        view.set_facet("type", "Internship");
        let filtered = view.filtered();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|j| j.kind.as_str() == "Internship"));
    }

    #[test]
    fn react_query_matches_one_course() {
        let courses = vec![
            course("1", "React Advanced Patterns", "Dr. Sarah Smith"),
            course("2", "System Design Fundamentals", "Prof. Michael Chen"),
            course("3", "Data Structures & Algorithms", "Dr. Emily Johnson"),
            course("4", "Behavioral Interview Mastery", "Jane Williams"),
            course("5", "Full-Stack Web Development", "Alex Rodriguez"),
            course("6", "Machine Learning Basics", "Dr. Lisa Park"),
        ];
        let mut view = ListView::new(courses);
        view.set_query("react");
        let titles: Vec<&str> = view.filtered().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["React Advanced Patterns"]);
    }

    #[test]
    fn starts_with_first_record_selected() {
        let view = ListView::new(jobs());
        assert_eq!(view.selection().id(), Some("1"));
        assert_eq!(view.selected().map(|j| j.title.as_str()), Some("Frontend Developer"));

        let hidden = ListView::unselected(jobs());
        assert_eq!(hidden.selection(), &Selection::NoSelection);
    }

    #[test]
    fn filter_change_keeps_selection() {
        let mut view = ListView::new(jobs());
        view.select("3");
        view.set_facet("type", "Internship");
        assert_eq!(view.selection().id(), Some("3"));
        assert_eq!(view.selected_index(), None);
        // Still resolvable from the catalog for the detail pane.
        assert!(view.selected().is_some());
    }

    #[test]
    fn step_walks_the_filtered_view() {
        let mut view = ListView::new(jobs());
        view.set_query("intern");
        // "1" is outside the view, so the first step lands on its first record.
        view.select_next();
        assert_eq!(view.selection().id(), Some("2"));
        view.select_next();
        assert_eq!(view.selection().id(), Some("4"));
        view.select_next();
        assert_eq!(view.selection().id(), Some("4"));
        view.select_prev();
        view.select_prev();
        assert_eq!(view.selection().id(), Some("2"));
        assert_eq!(view.selected_index(), Some(0));
    }

    #[test]
    fn dispatch_presents_each_change() {
        let mut view = ListView::new(jobs());
        let mut recorder = Recorder::default();
        view.dispatch(ViewEvent::SetQuery("developer".into()), &mut recorder);
        view.dispatch(
            ViewEvent::SetFacet { name: "type".into(), value: "Full-time".into() },
            &mut recorder,
        );
        view.dispatch(ViewEvent::Select("chat-2".into()), &mut recorder);
        view.dispatch(ViewEvent::Clear, &mut recorder);
        assert_eq!(
            recorder.frames,
            vec![
                (2, 4, Some("1".to_string())),
                (2, 4, Some("1".to_string())),
                (2, 4, Some("chat-2".to_string())),
                (2, 4, None),
            ]
        );
    }

    #[test]
    fn facet_options_come_from_catalog() {
        let view = ListView::new(jobs());
        assert_eq!(view.facet_options("type"), vec!["all", "Full-time", "Internship"]);
    }
}
