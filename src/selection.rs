use crate::filter::Record;

/// The single active record of a master-detail view.
///
/// Filter changes never touch the selection: a record that drops out of the
/// filtered view stays selected until the user picks another one or clears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(String),
}

impl Selection {
    /// Initial selection for a freshly mounted view: the first record, or
    /// nothing for an empty catalog.
    pub fn first_of<R: Record>(catalog: &[R]) -> Self {
        catalog
            .first()
            .map(|r| Selection::Selected(r.id().to_string()))
            .unwrap_or_default()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        *self = Selection::Selected(id.into());
    }

    pub fn clear(&mut self) {
        *self = Selection::NoSelection;
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(id) => Some(id.as_str()),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// Looks the selected id up in `records`. An id that is not there
    /// resolves to `None`, which callers render as "no detail available".
    pub fn resolve<'a, R: Record>(&self, records: &'a [R]) -> Option<&'a R> {
        let id = self.id()?;
        records.iter().find(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn questions() -> Vec<Question> {
        serde_json::from_str(
            r#"[
                {"id":"q1","text":"Why us?","type":"behavioral","difficulty":"easy","time_limit":60,"category":"Motivation"},
                {"id":"q2","text":"Reverse a list","type":"technical","difficulty":"medium","time_limit":300,"category":"Data Structures"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_first_record() {
        let catalog = questions();
        assert_eq!(Selection::first_of(&catalog), Selection::Selected("q1".into()));
        assert_eq!(Selection::first_of::<Question>(&[]), Selection::NoSelection);
    }

    #[test]
    fn select_then_clear_yields_no_selection() {
        let mut selection = Selection::default();
        selection.select("chat-2");
        assert!(selection.is_selected("chat-2"));
        selection.clear();
        assert_eq!(selection, Selection::NoSelection);
        assert_eq!(selection.id(), None);
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut selection = Selection::Selected("q1".into());
        selection.select("q2");
        assert_eq!(selection.id(), Some("q2"));
    }

    #[test]
    fn unknown_id_resolves_to_nothing() {
        let catalog = questions();
        let mut selection = Selection::default();
        selection.select("missing");
        assert!(selection.resolve(&catalog).is_none());

        selection.select("q2");
        assert_eq!(selection.resolve(&catalog).map(|q| q.text.as_str()), Some("Reverse a list"));
    }
}
