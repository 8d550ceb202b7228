//! Seat Icon Component
//!
//! A single seat drawn from the embedded SVG, tinted by status and scaled by
//! size. The number is only drawn when the descriptor asks for it.

use crate::assets::CustomIconName;
use crate::domain::{SeatSize, SeatSpec, SeatStatus};
use gpui::{
    App, ClickEvent, ElementId, Hsla, IntoElement, ParentElement, RenderOnce, Styled, Window, div,
    prelude::*, px, svg,
};
use gpui_component::{ActiveTheme, Colorize, v_flex};

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Seat icon widget
#[derive(IntoElement)]
pub struct SeatIcon {
    id: ElementId,
    spec: SeatSpec,
    selected: bool,
    on_click: Option<ClickHandler>,
}

impl SeatIcon {
    pub fn new(id: impl Into<ElementId>, spec: SeatSpec) -> Self {
        Self {
            id: id.into(),
            spec,
            selected: false,
            on_click: None,
        }
    }

    /// Highlight as the currently selected seat
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the click handler; seats without one are not interactive
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn status_color(status: SeatStatus, cx: &App) -> Hsla {
        match status {
            SeatStatus::Available => cx.theme().success,
            SeatStatus::Occupied => cx.theme().danger,
            SeatStatus::Total => cx.theme().info,
        }
    }

    fn icon_path(status: SeatStatus) -> CustomIconName {
        match status {
            SeatStatus::Total => CustomIconName::SeatGroup,
            SeatStatus::Available | SeatStatus::Occupied => CustomIconName::Seat,
        }
    }
}

impl RenderOnce for SeatIcon {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = Self::status_color(self.spec.status, cx);
        let size: SeatSize = self.spec.size;
        let label = self.spec.label();
        let clickable = self.on_click.is_some();

        let border = if self.selected {
            cx.theme().primary
        } else {
            gpui::transparent_black()
        };

        let mut seat = div()
            .id(self.id)
            .p_1()
            .rounded_md()
            .border_2()
            .border_color(border)
            .child(
                v_flex()
                    .items_center()
                    .gap_0p5()
                    .child(
                        svg()
                            .path(Self::icon_path(self.spec.status).path())
                            .size(px(size.icon_px()))
                            .text_color(color),
                    )
                    .when_some(label, |this, label| {
                        this.child(
                            div()
                                .text_size(px(size.label_px()))
                                .text_color(cx.theme().foreground)
                                .child(label),
                        )
                    }),
            );

        if clickable {
            let hover_bg = color.opacity(0.15);
            seat = seat.cursor_pointer().hover(move |s| s.bg(hover_bg));
        }
        if let Some(handler) = self.on_click {
            seat = seat.on_click(handler);
        }

        seat
    }
}
