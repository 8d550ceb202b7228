//! Title Bar Component
//!
//! Custom title bar with branding, the session badge and the settings menu.

use crate::assets::CustomIconName;
use crate::domain::format_rut;
use crate::helpers::MenuAction;
use crate::states::{AulaGlobalStore, LocaleAction, SessionState, ThemeAction, i18n_sidebar};
use gpui::{App, Context, Corner, Entity, Subscription, Window, prelude::*};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct AulaTitleBar {
    session_state: Entity<SessionState>,
    _subscriptions: Vec<Subscription>,
}

impl AulaTitleBar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let session_state = cx.global::<AulaGlobalStore>().session_state();
        let subscriptions = vec![cx.observe(&session_state, |_this, _model, cx| cx.notify())];

        Self {
            session_state,
            _subscriptions: subscriptions,
        }
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<AulaGlobalStore>();
        let (locale, theme) = {
            let state = store.read(cx);
            (state.locale().to_string(), state.theme())
        };
        let logged_in = store.session_state().read(cx).is_logged_in();

        let menu = menu
            // Language section
            .label(i18n_sidebar(cx, "language"))
            .menu_with_check("Español", locale == "es", Box::new(LocaleAction::Es))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_sidebar(cx, "theme"))
            .menu_with_check(
                i18n_sidebar(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_sidebar(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_sidebar(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
            .separator();

        let menu = if logged_in {
            menu.menu_with_icon(
                i18n_sidebar(cx, "logout"),
                IconName::ArrowLeft,
                Box::new(MenuAction::Logout),
            )
        } else {
            menu
        };

        menu.menu_with_icon(
            i18n_sidebar(cx, "quit"),
            IconName::Close,
            Box::new(MenuAction::Quit),
        )
    }
}

impl Render for AulaTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session_label = self
            .session_state
            .read(cx)
            .user()
            .map(|user| format_rut(&user.username).unwrap_or_else(|| user.username.clone()));

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new("Aula").text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .when_some(session_label, |this, label| {
                        this.child(
                            h_flex()
                                .gap_1()
                                .items_center()
                                .text_xs()
                                .text_color(cx.theme().muted_foreground)
                                .child(Icon::from(CustomIconName::UserRound).xsmall())
                                .child(label),
                        )
                    })
                    .child(
                        Button::new("settings")
                            .tooltip(i18n_sidebar(cx, "settings"))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| {
                                Self::render_settings_menu(menu, window, cx)
                            })
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
