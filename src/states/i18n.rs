//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::AulaGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AulaGlobalStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).into()
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AulaGlobalStore>().read(cx).locale();
    t!(format!("sidebar.{key}"), locale = locale).into()
}

/// Get translated string from "login" namespace
pub fn i18n_login(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AulaGlobalStore>().read(cx).locale();
    t!(format!("login.{key}"), locale = locale).into()
}

/// Get translated string from "seats" namespace
pub fn i18n_seats(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AulaGlobalStore>().read(cx).locale();
    t!(format!("seats.{key}"), locale = locale).into()
}

/// Translate a fully qualified key such as `login.rut_required`
pub fn i18n_key(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<AulaGlobalStore>().read(cx).locale();
    t!(key, locale = locale).to_string().into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `last_clicked = "Last clicked seat: {seat}"`
/// i18n_format(cx, "seats.last_clicked", &[("seat", "21")])
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<AulaGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
