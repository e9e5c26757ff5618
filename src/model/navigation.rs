//! Route stack for moving between the entry and menu screens
//!
//! Parameters travel with the route as owned values. A pushed route keeps the
//! snapshot it was created with regardless of what happens to the source.

use super::dish::DishEntry;
use serde::{Deserialize, Serialize};

/// Parameters carried by the Menu route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuParams {
    #[serde(default)]
    pub menu_items: Vec<DishEntry>,
}

/// A named screen on the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Menu(MenuParams),
}

impl Route {
    pub fn name(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::Menu(_) => "Menu",
        }
    }

    /// Title shown in the screen header
    pub fn title(&self) -> &str {
        match self {
            Route::Home => "Add Dishes",
            Route::Menu(_) => "Menu",
        }
    }

    pub fn menu_params(&self) -> Option<&MenuParams> {
        match self {
            Route::Menu(params) => Some(params),
            Route::Home => None,
        }
    }
}

/// Ordered stack of active routes. Never empty.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator positioned on the Home route
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        // The root route is never popped
        &self.stack[self.stack.len() - 1]
    }

    /// Route below the current one, if any
    pub fn previous(&self) -> Option<&Route> {
        self.stack.iter().rev().nth(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        tracing::info!(from = self.current().name(), to = route.name(), "push route");
        self.stack.push(route);
    }

    /// Pop the current route.
    ///
    /// At the root route there is nowhere to go back to; the call is a no-op
    /// and returns `None`.
    pub fn pop(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            tracing::debug!("pop ignored at root route");
            return None;
        }
        let route = self.stack.pop();
        tracing::info!(to = self.current().name(), "pop route");
        route
    }
}
