//! Banner Component
//!
//! A full-width message strip used for form-level errors.

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px};
use gpui_component::{ActiveTheme, Colorize, Icon, IconName, h_flex};

/// Error banner
#[derive(IntoElement)]
pub struct Banner {
    message: SharedString,
}

impl Banner {
    pub fn error(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RenderOnce for Banner {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = cx.theme().danger;

        h_flex()
            .w_full()
            .gap_2()
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(color.opacity(0.4))
            .bg(color.opacity(0.1))
            .text_color(color)
            .child(Icon::new(IconName::CircleX).size(px(16.0)))
            .child(div().text_sm().child(self.message))
    }
}
