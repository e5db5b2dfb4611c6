use campus_nav::prelude::{MenuAction, MenuRow, Role, Session, View};
use dioxus::prelude::*;

use crate::route_book::RouteBook;
use crate::screen::Screen;

/// Navigation session of the mounted role shell.
///
/// Created when the shell mounts and dropped with it, so logging out or
/// switching role always starts from a clean state.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub session: Signal<Session<Screen>>,
    pub sidebar_expanded: Signal<bool>,
}

pub fn use_session(role: Role, book: &RouteBook) -> SessionHandle {
    let session = use_signal(|| book.session(role));
    let sidebar_expanded = use_signal(|| true);

    SessionHandle {
        session,
        sidebar_expanded,
    }
}

impl SessionHandle {
    pub fn role(&self) -> Role {
        self.session.read().role()
    }

    pub fn menu(&self) -> Vec<MenuRow> {
        self.session.read().menu()
    }

    pub fn view(&self) -> View<Screen> {
        self.session.read().view().clone()
    }

    pub fn breadcrumbs(&self) -> Vec<String> {
        self.session.read().breadcrumbs()
    }

    /// Apply a menu press; route misses are already reflected in the view
    pub fn press(&mut self, action: &MenuAction) {
        if let Err(err) = self.session.write().press(action) {
            tracing::debug!("{err}");
        }
    }

    /// Jump to `key` from outside the menu (dashboard shortcuts, breadcrumbs)
    pub fn open(&mut self, key: &str) {
        let mut session = self.session.write();
        session.reveal(key);
        if let Err(err) = session.select(key) {
            tracing::debug!("{err}");
        }
    }

    pub fn toggle_sidebar(&mut self) {
        let expanded = *self.sidebar_expanded.read();
        self.sidebar_expanded.set(!expanded);
    }
}
