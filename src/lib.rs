//! Aula GUI Library
//!
//! Course-management demo front end: a login form with Chilean RUT
//! validation against a mock authentication store, and a seat icon gallery.

rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
