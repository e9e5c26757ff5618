//! Dish records and the in-progress form that produces them

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Course used when the course field is left blank
pub const DEFAULT_COURSE: &str = "Main";

/// Price used when the price field is left blank
pub const DEFAULT_PRICE: &str = "0.00";

/// A single dish on the menu
///
/// Entries are immutable once created. `id` is only a rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishEntry {
    pub id: String,
    pub dish_name: String,
    pub description: String,
    pub course: String,
    /// Free text, never parsed as a number
    pub price: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Form
// ═══════════════════════════════════════════════════════════════════════════════

/// One of the four text inputs on the entry screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    DishName,
    Description,
    Course,
    Price,
}

impl FormField {
    pub fn all() -> [FormField; 4] {
        [
            FormField::DishName,
            FormField::Description,
            FormField::Course,
            FormField::Price,
        ]
    }

    pub fn placeholder(&self) -> &str {
        match self {
            FormField::DishName => "Dish name",
            FormField::Description => "Description",
            FormField::Course => "Course (e.g. Starter/Main/Dessert)",
            FormField::Price => "Price (e.g. 49.99)",
        }
    }

    /// Whether the input should be presented with a numeric keyboard hint.
    /// Purely advisory: every character is still accepted.
    pub fn numeric_hint(&self) -> bool {
        matches!(self, FormField::Price)
    }
}

/// Current values of the four entry-screen inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishForm {
    pub dish_name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

impl DishForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::DishName => &self.dish_name,
            FormField::Description => &self.description,
            FormField::Course => &self.course,
            FormField::Price => &self.price,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::DishName => &mut self.dish_name,
            FormField::Description => &mut self.description,
            FormField::Course => &mut self.course,
            FormField::Price => &mut self.price,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|f| self.value(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = DishForm::default();
    }

    /// Build an entry from the trimmed field values.
    ///
    /// Returns `None` when the trimmed name is empty. Blank course and price
    /// fall back to [`DEFAULT_COURSE`] and [`DEFAULT_PRICE`].
    pub fn to_entry(&self, id: String) -> Option<DishEntry> {
        let dish_name = self.dish_name.trim();
        if dish_name.is_empty() {
            return None;
        }

        Some(DishEntry {
            id,
            dish_name: dish_name.to_string(),
            description: self.description.trim().to_string(),
            course: or_default(&self.course, DEFAULT_COURSE),
            price: or_default(&self.price, DEFAULT_PRICE),
        })
    }
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Id Generation
// ═══════════════════════════════════════════════════════════════════════════════

/// Time-based id source that never repeats or goes backwards
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Next id based on the current wall clock in epoch milliseconds
    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Next id for a given clock reading.
    /// Bumps past the previous id when the clock has not advanced.
    pub fn next_id_at(&mut self, now_millis: i64) -> String {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        id.to_string()
    }
}
