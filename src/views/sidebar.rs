//! Sidebar Navigation Component
//!
//! Fixed-width navigation sidebar with route switching and the session badge.

use crate::assets::CustomIconName;
use crate::constants::SIDEBAR_WIDTH;
use crate::domain::format_rut;
use crate::helpers::{MenuAction, NavAction, humanize_keystroke};
use crate::states::{AulaGlobalStore, Route, SessionState, i18n_sidebar};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

/// Sidebar navigation component
pub struct AulaSidebar {
    /// Current route for highlighting
    current_route: Route,
    session_state: Entity<SessionState>,
    _subscriptions: Vec<Subscription>,
}

impl AulaSidebar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AulaGlobalStore>();
        let app_state = store.app_state();
        let session_state = store.session_state();
        let current_route = store.read(cx).route();

        let subscriptions = vec![
            cx.observe(&app_state, |this, model, cx| {
                let route = model.read(cx).route();
                if this.current_route != route {
                    this.current_route = route;
                    cx.notify();
                }
            }),
            cx.observe(&session_state, |_this, _model, cx| cx.notify()),
        ];

        Self {
            current_route,
            session_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_nav_button(
        &self,
        id: &'static str,
        route: Route,
        action: NavAction,
        icon: Icon,
        label_key: &'static str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let is_active = self.current_route == route;
        let label = i18n_sidebar(cx, label_key);
        let tooltip_label = format!("{label} ({})", humanize_keystroke(action.keystroke()));
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        let btn = Button::new(id)
            .ghost()
            .w_full()
            .h(px(56.0))
            .child(
                v_flex()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(icon)
                    .child(Label::new(label).text_xs()),
            )
            .on_click(move |_, window, cx| {
                window.dispatch_action(Box::new(action), cx);
            });

        div()
            .id(id)
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }

    /// Logged-in user and logout button at the bottom
    fn render_session(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(user) = self.session_state.read(cx).user() else {
            return div().into_any_element();
        };
        let display_name = format_rut(&user.username).unwrap_or_else(|| user.username.clone());
        let logout_label = i18n_sidebar(cx, "logout");

        v_flex()
            .id("sidebar-session")
            .items_center()
            .gap_1()
            .py_2()
            .border_t_1()
            .border_color(cx.theme().border)
            .tooltip(move |window, cx| Tooltip::new(display_name.clone()).build(window, cx))
            .child(Icon::from(CustomIconName::UserRound))
            .child(
                Button::new("sidebar-logout")
                    .ghost()
                    .icon(IconName::ArrowLeft)
                    .tooltip(logout_label)
                    .on_click(|_, window, cx| {
                        window.dispatch_action(Box::new(MenuAction::Logout), cx);
                    }),
            )
            .into_any_element()
    }
}

impl Render for AulaSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .child(
                v_flex()
                    .flex_1()
                    .pt_2()
                    .child(self.render_nav_button(
                        "nav-login",
                        Route::Login,
                        NavAction::Login,
                        Icon::from(CustomIconName::UserRound),
                        "login",
                        cx,
                    ))
                    .child(self.render_nav_button(
                        "nav-seats",
                        Route::Seats,
                        NavAction::Seats,
                        Icon::from(CustomIconName::Seat),
                        "seats",
                        cx,
                    )),
            )
            .child(self.render_session(cx))
    }
}
