//! Main Content Area
//!
//! Routes to the login form or the seat gallery based on the current route.

use crate::states::{AulaGlobalStore, Route};
use crate::views::{LoginView, SeatsView};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::ActiveTheme;

/// Main content container component
pub struct AulaContent {
    current_route: Route,
    login_view: Entity<LoginView>,
    seats_view: Entity<SeatsView>,
    _subscriptions: Vec<Subscription>,
}

impl AulaContent {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AulaGlobalStore>();
        let current_route = store.read(cx).route();
        let app_state = store.app_state();

        // Subscribe to route changes
        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let route = model.read(cx).route();
            if this.current_route != route {
                this.current_route = route;
                cx.notify();
            }
        })];

        let login_view = cx.new(|cx| LoginView::new(window, cx));
        let seats_view = cx.new(|cx| SeatsView::new(window, cx));

        Self {
            current_route,
            login_view,
            seats_view,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for AulaContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.current_route {
            Route::Login => self.login_view.clone().into_any_element(),
            Route::Seats => self.seats_view.clone().into_any_element(),
        };

        div()
            .id("content")
            .flex_1()
            .h_full()
            .overflow_hidden()
            .bg(cx.theme().background)
            .child(content)
    }
}
