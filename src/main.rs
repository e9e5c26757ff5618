//! dish-menu - build a menu of dishes in the terminal
//!
//! Two screens on a navigation stack: an entry form that collects dishes and
//! a read-only menu of cards. It uses the Component Architecture pattern from
//! ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    // Logging must be up before anything worth logging happens
    let log_path = match logging::init() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let config = Config::load();
    tracing::info!(log = ?log_path, "starting dish-menu");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(config);
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        if let Some(action) = action {
            app.dispatch(action)?;
        }
    }

    Ok(())
}
