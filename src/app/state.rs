use crate::app::action::Action;
use crate::catalog::{Anime, Publisher, ResourceKind, Studio};
use crate::config::AppConfig;
use crate::screen::{ResourceScreen, Screen};
use ratatui::layout::Rect;
use std::time::Duration;

pub struct AppState {
    pub config: AppConfig,
    /// One screen per resource, in tab order.
    pub screens: Vec<Box<dyn Screen>>,
    pub active: usize,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

fn build_screen(kind: ResourceKind, notice_ttl: Duration) -> Box<dyn Screen> {
    match kind {
        ResourceKind::Anime => Box::new(ResourceScreen::<Anime>::new(notice_ttl)),
        ResourceKind::Studio => Box::new(ResourceScreen::<Studio>::new(notice_ttl)),
        ResourceKind::Publisher => Box::new(ResourceScreen::<Publisher>::new(notice_ttl)),
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let notice_ttl = Duration::from_secs(config.ui.notice_secs);
        let screens = ResourceKind::ALL
            .into_iter()
            .map(|kind| build_screen(kind, notice_ttl))
            .collect();
        Self {
            config,
            screens,
            active: 0,
            viewport: Rect::default(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Loads every screen's table once at start-up.
    pub fn initial_requests(&mut self) -> Vec<Action> {
        self.screens
            .iter_mut()
            .map(|s| Action::Request(s.list()))
            .collect()
    }

    pub fn active_screen(&self) -> &dyn Screen {
        self.screens[self.active].as_ref()
    }

    pub fn active_screen_mut(&mut self) -> &mut dyn Screen {
        self.screens[self.active].as_mut()
    }

    pub fn screen_mut(&mut self, kind: ResourceKind) -> Option<&mut (dyn Screen + 'static)> {
        self.screens
            .iter_mut()
            .find(|s| s.kind() == kind)
            .map(|s| s.as_mut())
    }

    pub fn select_screen(&mut self, index: usize) {
        if index < self.screens.len() {
            self.active = index;
            self.dirty = true;
        }
    }

    pub fn next_screen(&mut self) {
        self.select_screen((self.active + 1) % self.screens.len());
    }

    pub fn prev_screen(&mut self) {
        self.select_screen((self.active + self.screens.len() - 1) % self.screens.len());
    }

    pub fn any_loading(&self) -> bool {
        self.screens.iter().any(|s| s.state().is_loading())
    }

    pub fn status_line(&self) -> String {
        let screen = self.active_screen();
        let state = screen.state();
        let mut s = format!(
            "{}: {} {}",
            screen.kind().title(),
            state.rows.len(),
            if state.rows.len() == 1 {
                screen.kind().noun()
            } else {
                screen.kind().plural()
            }
        );
        if let Some(at) = state.loaded_at {
            s.push_str(&format!(
                " | loaded {}",
                at.format(&self.config.ui.timestamp_format)
            ));
        }
        s.push_str(&format!(" | {}", self.config.api.base_url));
        s
    }
}
