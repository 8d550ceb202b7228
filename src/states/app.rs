//! Application State
//!
//! Global application state: routing, theme, locale and window bounds, plus
//! the global store that hands out every state entity.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::ServiceHub;
use crate::states::{LogState, LoginState, SeatsState, SessionState};
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Application routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Login form
    #[default]
    Login,
    /// Seat icon gallery
    Seats,
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    Es,
    En,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::Es => "es",
            LocaleAction::En => "en",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: &[&str] = &["es", "en"];
const DEFAULT_LOCALE: &str = "es";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("aula-gui.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AulaAppState {
    route: Route,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
}

impl AulaAppState {
    /// Load state from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Parse persisted TOML, filling in the system locale and resetting the route
    pub fn from_toml(value: &str) -> Result<Self> {
        let mut state: Self = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str(value)?
        };

        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = Some(detect_system_locale());
        }

        // Always start at the login screen
        state.route = Route::Login;

        Ok(state)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            self.route = route;
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: &str) {
        if SUPPORTED_LOCALES.contains(&locale) {
            self.locale = Some(locale.to_string());
        }
    }
}

/// First supported language of the system locale, falling back to Spanish
fn detect_system_locale() -> String {
    let current = Locale::current().to_string();
    let lang = current
        .split(['-', '_', ','])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if SUPPORTED_LOCALES.contains(&lang.as_str()) {
        lang
    } else {
        DEFAULT_LOCALE.to_string()
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<AulaGlobalStore>()`
#[derive(Clone)]
pub struct AulaGlobalStore {
    app_state: Entity<AulaAppState>,
    login_state: Entity<LoginState>,
    session_state: Entity<SessionState>,
    seats_state: Entity<SeatsState>,
    log_state: Entity<LogState>,
    services: ServiceHub,
}

impl AulaGlobalStore {
    /// Create every state entity around the loaded app state
    pub fn new(
        app_state: AulaAppState,
        services: ServiceHub,
        log_capacity: usize,
        cx: &mut App,
    ) -> Self {
        Self {
            app_state: cx.new(|_| app_state),
            login_state: cx.new(|_| LoginState::new()),
            session_state: cx.new(|_| SessionState::new()),
            seats_state: cx.new(|_| SeatsState::new()),
            log_state: cx.new(|_| LogState::new(log_capacity)),
            services,
        }
    }

    pub fn app_state(&self) -> Entity<AulaAppState> {
        self.app_state.clone()
    }

    pub fn login_state(&self) -> Entity<LoginState> {
        self.login_state.clone()
    }

    pub fn session_state(&self) -> Entity<SessionState> {
        self.session_state.clone()
    }

    pub fn seats_state(&self) -> Entity<SeatsState> {
        self.seats_state.clone()
    }

    pub fn log_state(&self) -> Entity<LogState> {
        self.log_state.clone()
    }

    pub fn services(&self) -> &ServiceHub {
        &self.services
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a AulaAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AulaAppState, &mut Context<AulaAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for AulaGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &AulaAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AulaAppState, &App) + Send + 'static,
{
    let store = cx.global::<AulaGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let state = AulaAppState::from_toml("").expect("empty config parses");
        assert_eq!(state.route(), Route::Login);
        assert!(SUPPORTED_LOCALES.contains(&state.locale()));
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn test_round_trip_and_route_reset() {
        let mut state = AulaAppState::new();
        state.route = Route::Seats;
        state.set_locale("en");
        state.set_theme(Some(ThemeMode::Dark));

        let text = toml::to_string(&state).expect("serializes");
        let loaded = AulaAppState::from_toml(&text).expect("parses");

        assert_eq!(loaded.route(), Route::Login);
        assert_eq!(loaded.locale(), "en");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_unsupported_locale_ignored() {
        let mut state = AulaAppState::new();
        state.set_locale("es");
        state.set_locale("fr");
        assert_eq!(state.locale(), "es");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(AulaAppState::from_toml("route = [").is_err());
    }
}
