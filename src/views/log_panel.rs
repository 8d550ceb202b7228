//! Log Panel
//!
//! Collapsible strip at the bottom of the window showing the newest records
//! produced by the logging collaborator.

use crate::constants::{
    LOG_PANEL_COLLAPSED_HEIGHT, LOG_PANEL_EXPANDED_HEIGHT, LOG_PANEL_VISIBLE_ENTRIES,
};
use crate::services::LogLevel;
use crate::states::{AulaGlobalStore, LogEntry, LogState, i18n_common};
use gpui::{App, Context, Entity, FontWeight, Hsla, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

/// Log panel view
pub struct LogPanel {
    log_state: Entity<LogState>,
    _subscriptions: Vec<Subscription>,
}

impl LogPanel {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let log_state = cx.global::<AulaGlobalStore>().log_state();
        let subscriptions = vec![cx.observe(&log_state, |_this, _model, cx| cx.notify())];

        Self {
            log_state,
            _subscriptions: subscriptions,
        }
    }

    fn level_color(level: LogLevel, cx: &App) -> Hsla {
        match level {
            LogLevel::Debug => cx.theme().muted_foreground,
            LogLevel::Info => cx.theme().info,
            LogLevel::Warn => cx.theme().warning,
            LogLevel::Error => cx.theme().danger,
        }
    }

    fn render_entry(entry: &LogEntry, cx: &App) -> impl IntoElement {
        let record = &entry.record;
        let time = record.timestamp.format("%H:%M:%S%.3f").to_string();
        let muted = cx.theme().muted_foreground;

        h_flex()
            .id(("log-entry", entry.id as usize))
            .w_full()
            .gap_2()
            .py_px()
            .child(div().text_size(px(11.0)).min_w(px(85.0)).text_color(muted).child(time))
            .child(
                div()
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .text_color(Self::level_color(record.level, cx))
                    .child(record.level.label()),
            )
            .child(
                div()
                    .text_size(px(11.0))
                    .min_w(px(50.0))
                    .text_color(muted)
                    .child(format!("[{}]", record.scope)),
            )
            .child(
                div()
                    .flex_1()
                    .text_size(px(12.0))
                    .text_color(cx.theme().foreground)
                    .child(record.message.clone()),
            )
            .when_some(record.payload.as_ref(), |this, payload| {
                this.child(
                    div()
                        .text_size(px(11.0))
                        .text_color(muted)
                        .text_ellipsis()
                        .child(payload.to_string()),
                )
            })
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.log_state.read(cx);
        let expanded = logs.is_expanded();
        let count = logs.len();
        let entries: Vec<_> = logs
            .latest(LOG_PANEL_VISIBLE_ENTRIES)
            .map(|entry| Self::render_entry(entry, cx).into_any_element())
            .collect();

        let height = if expanded {
            LOG_PANEL_EXPANDED_HEIGHT
        } else {
            LOG_PANEL_COLLAPSED_HEIGHT
        };

        v_flex()
            .h(px(height))
            .w_full()
            .flex_none()
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().secondary)
            // Header
            .child(
                h_flex()
                    .h(px(LOG_PANEL_COLLAPSED_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex_none()
                    .items_center()
                    .justify_between()
                    .child(
                        h_flex()
                            .gap_2()
                            .items_center()
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .child(i18n_common(cx, "logs")),
                            )
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        h_flex()
                            .gap_1()
                            .child(
                                Button::new("clear-logs")
                                    .ghost()
                                    .xsmall()
                                    .label(i18n_common(cx, "clear"))
                                    .on_click(cx.listener(|this, _, _window, cx| {
                                        this.log_state.update(cx, |state, cx| state.clear(cx));
                                    })),
                            )
                            .child(
                                Button::new("toggle-logs")
                                    .ghost()
                                    .xsmall()
                                    .icon(if expanded {
                                        IconName::ChevronDown
                                    } else {
                                        IconName::ChevronUp
                                    })
                                    .on_click(cx.listener(|this, _, _window, cx| {
                                        this.log_state
                                            .update(cx, |state, cx| state.toggle_expanded(cx));
                                    })),
                            ),
                    ),
            )
            .when(expanded, |this| {
                this.child(
                    div()
                        .id("log-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(entries),
                )
            })
    }
}
