//! Entry screen state - the only owner of dish data

use super::dish::{DishEntry, DishForm, IdGenerator};
use super::navigation::MenuParams;

/// State owned by the entry screen for its whole lifetime
#[derive(Debug, Default)]
pub struct EntryState {
    /// In-progress form values
    pub form: DishForm,

    /// Added dishes, most recent first
    entries: Vec<DishEntry>,

    ids: IdGenerator,
}

impl EntryState {
    pub fn new() -> Self {
        Self {
            form: DishForm::default(),
            entries: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn entries(&self) -> &[DishEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a dish from the current form values.
    ///
    /// A blank name leaves both the list and the form untouched and returns
    /// `false`. Otherwise the new entry is prepended, the form is cleared and
    /// `true` is returned.
    pub fn submit(&mut self) -> bool {
        if self.form.dish_name.trim().is_empty() {
            tracing::debug!("submit ignored: dish name is blank");
            return false;
        }

        let id = self.ids.next_id();
        let Some(entry) = self.form.to_entry(id) else {
            return false;
        };

        tracing::info!(
            id = %entry.id,
            dish = %entry.dish_name,
            course = %entry.course,
            total = self.entries.len() + 1,
            "dish added"
        );
        self.entries.insert(0, entry);
        self.form.clear();
        true
    }

    /// Point-in-time copy of the entries for the Menu route
    pub fn snapshot(&self) -> MenuParams {
        MenuParams {
            menu_items: self.entries.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dish::FormField;

    fn fill(state: &mut EntryState, name: &str, description: &str, course: &str, price: &str) {
        *state.form.value_mut(FormField::DishName) = name.to_string();
        *state.form.value_mut(FormField::Description) = description.to_string();
        *state.form.value_mut(FormField::Course) = course.to_string();
        *state.form.value_mut(FormField::Price) = price.to_string();
    }

    #[test]
    fn test_blank_name_is_silently_rejected() {
        for name in ["", " ", "\t  \n"] {
            let mut state = EntryState::new();
            fill(&mut state, name, "desc", "Starter", "12.00");

            assert!(!state.submit());
            assert_eq!(state.len(), 0);
            // form is left as typed
            assert_eq!(state.form.description, "desc");
            assert_eq!(state.form.course, "Starter");
            assert_eq!(state.form.price, "12.00");
            assert_eq!(state.form.dish_name, name);
        }
    }

    #[test]
    fn test_submit_prepends_and_clears_form() {
        let mut state = EntryState::new();
        fill(&mut state, "Soup", "", "", "");
        assert!(state.submit());
        fill(&mut state, "Bread", "Fresh", "Starter", "15");
        assert!(state.submit());

        assert_eq!(state.len(), 2);
        assert_eq!(state.entries()[0].dish_name, "Bread");
        assert_eq!(state.entries()[1].dish_name, "Soup");
        assert!(state.form.is_empty());
    }

    #[test]
    fn test_submit_trims_and_defaults() {
        let mut state = EntryState::new();
        fill(&mut state, "  Bobotie  ", "", "", "");
        assert!(state.submit());

        let entry = &state.entries()[0];
        assert_eq!(entry.dish_name, "Bobotie");
        assert_eq!(entry.course, "Main");
        assert_eq!(entry.price, "0.00");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = EntryState::new();
        for name in ["a", "b", "c"] {
            fill(&mut state, name, "", "", "");
            state.submit();
        }
        let ids: Vec<&str> = state.entries().iter().map(|e| e.id.as_str()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_submits() {
        let mut state = EntryState::new();
        fill(&mut state, "Soup", "", "", "");
        state.submit();

        let snapshot = state.snapshot();
        fill(&mut state, "Bread", "", "", "");
        state.submit();

        assert_eq!(snapshot.menu_items.len(), 1);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_snapshot_does_not_touch_state() {
        let mut state = EntryState::new();
        fill(&mut state, "Soup", "", "", "");
        state.submit();
        fill(&mut state, "Half typed", "", "", "");

        let _ = state.snapshot();
        assert_eq!(state.len(), 1);
        assert_eq!(state.form.dish_name, "Half typed");
    }
}
