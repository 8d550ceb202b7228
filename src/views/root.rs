//! Root View
//!
//! Window layout: title bar, sidebar, routed content and the log panel.

use crate::states::{AulaGlobalStore, update_app_state_and_save};
use crate::views::{AulaContent, AulaSidebar, AulaTitleBar, LogPanel};
use gpui::{Context, Entity, Subscription, Window, prelude::*};
use gpui_component::{ActiveTheme, h_flex, v_flex};

/// Top-level window view
pub struct AulaRoot {
    title_bar: Entity<AulaTitleBar>,
    sidebar: Entity<AulaSidebar>,
    content: Entity<AulaContent>,
    log_panel: Entity<LogPanel>,
    _subscriptions: Vec<Subscription>,
}

impl AulaRoot {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| AulaTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| AulaSidebar::new(window, cx));
        let content = cx.new(|cx| AulaContent::new(window, cx));
        let log_panel = cx.new(|cx| LogPanel::new(window, cx));

        let app_state = cx.global::<AulaGlobalStore>().app_state();

        // Re-render everything when locale or theme change
        let mut subscriptions = vec![cx.observe(&app_state, |_this, _model, cx| cx.notify())];

        // Remember window bounds for the next launch
        subscriptions.push(cx.observe_window_bounds(window, |_this, window, cx| {
            let bounds = window.bounds();
            update_app_state_and_save(cx, "window_bounds", move |state, _cx| {
                state.set_bounds(bounds);
            });
        }));

        Self {
            title_bar,
            sidebar,
            content,
            log_panel,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for AulaRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("aula-root")
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .w_full()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
            .child(self.log_panel.clone())
    }
}
