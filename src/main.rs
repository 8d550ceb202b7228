//! Aula GUI - Main Entry Point
//!
//! Course-management demo: RUT login form and seat icon gallery.

use aula_gui::assets::Assets;
use aula_gui::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, LOG_CAPACITY, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use aula_gui::helpers::{
    MenuAction, NavAction, get_or_create_log_dir, is_development, new_key_bindings,
};
use aula_gui::services::ServiceHub;
use aula_gui::states::{
    AulaAppState, AulaGlobalStore, LocaleAction, Route, ThemeAction, update_app_state_and_save,
};
use aula_gui::views::AulaRoot;
use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_component::{Root, Theme, ThemeMode, TitleBar};
use serde_json::json;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Stdout plus a daily rolling file; the guard must outlive the app
fn init_tracing() -> Option<WorkerGuard> {
    let default_level = if is_development() { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::LocalTime::rfc_3339());

    match get_or_create_log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, "aula-gui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            info!(dir = ?dir, "File logging enabled");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
            warn!(error = %e, "Log directory unavailable, logging to stdout only");
            None
        }
    }
}

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
    cx.refresh_windows();
}

/// Application-level action handlers
fn bind_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
        MenuAction::Logout => {
            let store = cx.global::<AulaGlobalStore>().clone();
            let username = store
                .session_state()
                .read(cx)
                .user()
                .map(|user| user.username.clone());
            store.session_state().update(cx, |session, cx| session.end(cx));
            store.update(cx, |state, cx| state.go_to(Route::Login, cx));
            if let Some(username) = username {
                store
                    .services()
                    .logger()
                    .info("session", "Logged out", Some(json!({ "username": username })));
            }
        }
    });

    cx.on_action(|action: &NavAction, cx: &mut App| {
        let route = match action {
            NavAction::Login => Route::Login,
            NavAction::Seats => Route::Seats,
        };
        let store = cx.global::<AulaGlobalStore>().clone();
        store.update(cx, |state, cx| state.go_to(route, cx));
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "theme", move |state, _cx| {
            state.set_theme(mode);
        });
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = action.code();
        update_app_state_and_save(cx, "locale", move |state, _cx| {
            state.set_locale(locale);
        });
    });
}

fn main() {
    let _guard = init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Aula GUI");

    let app_state = AulaAppState::try_load().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default settings");
        AulaAppState::new()
    });

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        bind_actions(cx);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let theme = app_state.theme();
        let bounds = app_state.bounds().copied().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        let (services, log_rx) = ServiceHub::with_mock_store();
        services
            .logger()
            .info("app", "Application started", Some(json!({ "locale": app_state.locale() })));

        let store = AulaGlobalStore::new(app_state, services, LOG_CAPACITY, cx);
        store
            .log_state()
            .update(cx, |state, cx| state.start_drain(log_rx, cx));
        cx.set_global(store);

        apply_theme(theme, cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| AulaRoot::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
