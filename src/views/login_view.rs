//! Login View
//!
//! Username (RUT) and password form. Validation, the authenticator call and
//! the cosmetic toggles all live in [`LoginState`]; this view only forwards
//! input events and renders the resulting form model.

use crate::assets::CustomIconName;
use crate::components::Banner;
use crate::constants::{DEMO_PASSWORD, DEMO_USERNAME, LOGIN_CARD_WIDTH};
use crate::domain::{LoginField, format_rut};
use crate::helpers::MenuAction;
use crate::states::{
    AulaGlobalStore, LoginEvent, LoginState, Route, SessionState, i18n_format, i18n_key, i18n_login,
};
use gpui::{Context, Entity, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Login form view
pub struct LoginView {
    login_state: Entity<LoginState>,
    session_state: Entity<SessionState>,
    username_input: Entity<InputState>,
    password_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl LoginView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AulaGlobalStore>();
        let login_state = store.login_state();
        let session_state = store.session_state();

        let username_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(DEMO_USERNAME)
                .clean_on_escape()
        });
        let password_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("••••••••")
                .masked(true)
        });

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.subscribe(&username_input, |this, state, event, cx| {
            this.on_input_event(LoginField::Username, state.read(cx).value(), event, cx);
        }));
        subscriptions.push(cx.subscribe(&password_input, |this, state, event, cx| {
            this.on_input_event(LoginField::Password, state.read(cx).value(), event, cx);
        }));

        subscriptions.push(cx.observe(&login_state, |_this, _model, cx| {
            cx.notify();
        }));
        subscriptions.push(cx.observe(&session_state, |_this, _model, cx| {
            cx.notify();
        }));

        // Successful login: clear the inputs and open the session
        subscriptions.push(cx.subscribe_in(
            &login_state,
            window,
            |this, _state, event: &LoginEvent, window, cx| match event {
                LoginEvent::LoggedIn { username } => {
                    this.reset_inputs(window, cx);
                    let username = username.clone();
                    this.session_state.update(cx, |session, cx| {
                        session.start(username, cx);
                    });
                }
            },
        ));

        Self {
            login_state,
            session_state,
            username_input,
            password_input,
            _subscriptions: subscriptions,
        }
    }

    fn on_input_event(
        &mut self,
        field: LoginField,
        value: SharedString,
        event: &InputEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::Change => {
                self.login_state.update(cx, |state, cx| {
                    state.set_field(field, value.to_string(), cx);
                });
            }
            InputEvent::PressEnter { .. } => self.submit(cx),
            _ => {}
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        self.login_state.update(cx, |state, cx| {
            state.submit(cx);
        });
    }

    fn reset_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.username_input.update(cx, |input, cx| {
            input.set_value("", window, cx);
        });
        self.password_input.update(cx, |input, cx| {
            input.set_value("", window, cx);
            input.set_masked(true, window, cx);
        });
    }

    fn toggle_password_visibility(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.login_state.update(cx, |state, cx| {
            state.toggle_password_visibility(cx);
        });
        let visible = self.login_state.read(cx).form().password_visible();
        self.password_input.update(cx, |input, cx| {
            input.set_masked(!visible, window, cx);
        });
    }

    /// Field label, input and its inline error
    fn render_field(
        &self,
        field: LoginField,
        input: impl IntoElement,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let label_key = match field {
            LoginField::Username => "username",
            LoginField::Password => "password",
        };
        let error = self
            .login_state
            .read(cx)
            .form()
            .field_error(field)
            .map(|key| i18n_key(cx, key));

        v_flex()
            .w_full()
            .gap_1()
            .child(Label::new(i18n_login(cx, label_key)).text_sm())
            .child(input)
            .when_some(error, |this, error| {
                this.child(div().text_xs().text_color(cx.theme().danger).child(error))
            })
    }

    fn render_forgot_password(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let tooltip_visible = self.login_state.read(cx).form().tooltip_visible();
        let link_color = cx.theme().link;

        v_flex()
            .items_end()
            .gap_1()
            .child(
                div()
                    .id("forgot-password")
                    .text_xs()
                    .text_color(link_color)
                    .cursor_pointer()
                    .hover(|s| s.underline())
                    .on_hover(cx.listener(|this, hovered: &bool, _window, cx| {
                        if *hovered {
                            this.login_state.update(cx, |state, cx| {
                                state.show_forgot_password_tooltip(cx);
                            });
                        }
                    }))
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.login_state.update(cx, |state, cx| {
                            state.show_forgot_password_tooltip(cx);
                        });
                    }))
                    .child(i18n_login(cx, "forgot_password")),
            )
            .when(tooltip_visible, |this| {
                this.child(
                    div()
                        .px_2()
                        .py_1()
                        .rounded_md()
                        .border_1()
                        .border_color(cx.theme().border)
                        .bg(cx.theme().popover)
                        .text_color(cx.theme().popover_foreground)
                        .text_xs()
                        .child(i18n_login(cx, "forgot_password_tooltip")),
                )
            })
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let form = self.login_state.read(cx).form();
        let submitting = form.is_submitting();
        let password_visible = form.password_visible();
        let banner = form.banner().map(|failure| i18n_key(cx, failure.message_key()));

        let (eye_icon, eye_tooltip) = if password_visible {
            (IconName::EyeOff, i18n_login(cx, "hide_password"))
        } else {
            (IconName::Eye, i18n_login(cx, "show_password"))
        };

        let username = Input::new(&self.username_input).disabled(submitting);
        let password = Input::new(&self.password_input)
            .disabled(submitting)
            .suffix(
                Button::new("toggle-password")
                    .ghost()
                    .xsmall()
                    .icon(eye_icon)
                    .tooltip(eye_tooltip)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.toggle_password_visibility(window, cx);
                    })),
            );

        let submit_label = if submitting {
            i18n_login(cx, "submitting")
        } else {
            i18n_login(cx, "submit")
        };

        v_flex()
            .gap_4()
            .child(Label::new(i18n_login(cx, "title")).text_xl())
            .when_some(banner, |this, message| this.child(Banner::error(message)))
            .child(self.render_field(LoginField::Username, username, cx))
            .child(self.render_field(LoginField::Password, password, cx))
            .child(self.render_forgot_password(cx))
            .child(
                Button::new("login-submit")
                    .primary()
                    .w_full()
                    .label(submit_label)
                    .loading(submitting)
                    .disabled(submitting)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.submit(cx);
                    })),
            )
            .child(
                v_flex()
                    .gap_0p5()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n_login(cx, "demo_credentials"))
                    .child(format!("{DEMO_USERNAME} / {DEMO_PASSWORD}")),
            )
    }

    fn render_welcome(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(user) = self.session_state.read(cx).user() else {
            return div().into_any_element();
        };
        let display_name = format_rut(&user.username).unwrap_or_else(|| user.username.clone());
        let since = user.logged_in_at.format("%H:%M:%S").to_string();

        v_flex()
            .gap_4()
            .items_center()
            .child(Icon::from(CustomIconName::UserRound).size(px(48.0)))
            .child(
                Label::new(i18n_format(cx, "login.welcome", &[("user", display_name.as_str())]))
                    .text_lg(),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n_format(cx, "login.logged_in_at", &[("time", since.as_str())])),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        Button::new("go-to-seats")
                            .primary()
                            .label(i18n_login(cx, "open_seats"))
                            .on_click(|_, _, cx| {
                                cx.update_global::<AulaGlobalStore, ()>(|store, cx| {
                                    store.update(cx, |state, cx| {
                                        state.go_to(Route::Seats, cx);
                                    });
                                });
                            }),
                    )
                    .child(
                        Button::new("logout")
                            .outline()
                            .label(i18n_login(cx, "logout"))
                            .on_click(|_, window, cx| {
                                window.dispatch_action(Box::new(MenuAction::Logout), cx);
                            }),
                    ),
            )
            .into_any_element()
    }
}

impl Render for LoginView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logged_in = self.session_state.read(cx).is_logged_in();

        let card = if logged_in {
            self.render_welcome(cx).into_any_element()
        } else {
            self.render_form(cx).into_any_element()
        };

        div()
            .id("login-view")
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .overflow_y_scroll()
            .child(
                div()
                    .w(px(LOGIN_CARD_WIDTH))
                    .p_6()
                    .rounded_lg()
                    .border_1()
                    .border_color(cx.theme().border)
                    .bg(cx.theme().secondary)
                    .child(card),
            )
    }
}
