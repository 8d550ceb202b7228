//! Seats View
//!
//! Demo gallery for the seat icon: every status, every size, with and
//! without a number, plus the classroom and online course arrangements.

use crate::components::SeatIcon;
use crate::constants::{
    CLASSROOM_COLS, CLASSROOM_OCCUPIED_THRESHOLD, CLASSROOM_ROWS, ONLINE_COURSE_CAPACITY,
    ONLINE_COURSE_ENROLLED, ONLINE_COURSE_PER_ROW,
};
use crate::domain::{
    GridSummary, SeatSize, SeatSpec, SeatStatus, classroom_grid, online_course_grid, summarize,
};
use crate::states::{
    AulaGlobalStore, SeatGrid, SeatsState, i18n_format, i18n_key, i18n_seats,
};
use gpui::{AnyElement, Context, Entity, SharedString, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

/// Seat gallery view
pub struct SeatsView {
    seats_state: Entity<SeatsState>,
    classroom: Vec<Vec<SeatSpec>>,
    online_badge: SeatSpec,
    online_rows: Vec<Vec<SeatSpec>>,
    _subscriptions: Vec<Subscription>,
}

impl SeatsView {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let seats_state = cx.global::<AulaGlobalStore>().seats_state();

        let subscriptions = vec![cx.observe(&seats_state, |_this, _model, cx| {
            cx.notify();
        })];

        let classroom = classroom_grid(CLASSROOM_ROWS, CLASSROOM_COLS, CLASSROOM_OCCUPIED_THRESHOLD);
        let (online_badge, online_rows) = online_course_grid(
            ONLINE_COURSE_CAPACITY,
            ONLINE_COURSE_ENROLLED,
            ONLINE_COURSE_PER_ROW,
        );

        Self {
            seats_state,
            classroom,
            online_badge,
            online_rows,
            _subscriptions: subscriptions,
        }
    }

    /// A titled block
    fn section(
        title: SharedString,
        body: impl IntoElement,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_3()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(Label::new(title).text_base())
            .child(body)
    }

    /// Seat with a caption underneath
    fn captioned(seat: SeatIcon, caption: SharedString, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .items_center()
            .gap_1()
            .child(seat)
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(caption),
            )
    }

    fn render_by_status(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut items: Vec<AnyElement> = Vec::new();
        for (index, status) in SeatStatus::all().iter().copied().enumerate() {
            let spec = SeatSpec::new(Some(index as u32 + 1), status).size(SeatSize::Medium);
            let caption = i18n_key(cx, status.label_key());
            items.push(
                Self::captioned(SeatIcon::new(("by-status", index), spec), caption, cx)
                    .into_any_element(),
            );
        }

        Self::section(
            i18n_seats(cx, "by_status"),
            h_flex().gap_6().items_end().children(items),
            cx,
        )
    }

    fn render_by_size(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut items: Vec<AnyElement> = Vec::new();
        for (index, size) in SeatSize::all().iter().copied().enumerate() {
            let spec = SeatSpec::new(Some(7), SeatStatus::Available).size(size);
            let caption = i18n_key(cx, size.label_key());
            items.push(
                Self::captioned(SeatIcon::new(("by-size", index), spec), caption, cx)
                    .into_any_element(),
            );
        }

        Self::section(
            i18n_seats(cx, "by_size"),
            h_flex().gap_6().items_end().children(items),
            cx,
        )
    }

    fn render_numbering(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let with_number = SeatSpec::new(Some(12), SeatStatus::Occupied).size(SeatSize::Medium);
        let without_number = with_number.show_number(false);

        let with_caption = i18n_seats(cx, "with_number");
        let without_caption = i18n_seats(cx, "without_number");

        Self::section(
            i18n_seats(cx, "numbering"),
            h_flex()
                .gap_6()
                .items_end()
                .child(Self::captioned(
                    SeatIcon::new("with-number", with_number),
                    with_caption,
                    cx,
                ))
                .child(Self::captioned(
                    SeatIcon::new("without-number", without_number),
                    without_caption,
                    cx,
                )),
            cx,
        )
    }

    /// Rows of seats; available ones select themselves on click
    fn render_rows(
        &self,
        grid: SeatGrid,
        rows: &[Vec<SeatSpec>],
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let seats_state = self.seats_state.read(cx);

        let rows = rows.iter().enumerate().map(|(row_index, row)| {
            let seats = row.iter().enumerate().map(|(col_index, spec)| {
                let number = spec.number;
                let selected = number.is_some_and(|n| seats_state.is_selected(grid, n));
                let mut seat =
                    SeatIcon::new((grid.id_prefix(), row_index * 100 + col_index), *spec)
                        .selected(selected);

                if let Some(number) = number.filter(|_| spec.is_clickable()) {
                    let handle = self.seats_state.clone();
                    seat = seat.on_click(move |_, _, cx| {
                        handle.update(cx, |state, cx| {
                            state.select(grid, number, cx);
                        });
                    });
                }
                seat
            });

            h_flex().gap_2().children(seats)
        });

        v_flex().gap_2().children(rows.collect::<Vec<_>>())
    }

    fn render_legend(&self, summary: GridSummary, cx: &mut Context<Self>) -> impl IntoElement {
        let occupied = summary.occupied.to_string();
        let available = summary.available.to_string();
        let text = i18n_format(
            cx,
            "seats.summary",
            &[("occupied", occupied.as_str()), ("available", available.as_str())],
        );

        div()
            .text_xs()
            .text_color(cx.theme().muted_foreground)
            .child(text)
    }

    fn render_classroom(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let summary = summarize(&self.classroom);

        Self::section(
            i18n_seats(cx, "classroom"),
            v_flex()
                .gap_3()
                .child(self.render_rows(SeatGrid::Classroom, &self.classroom, cx))
                .child(self.render_legend(summary, cx)),
            cx,
        )
    }

    fn render_online_course(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let summary = summarize(&self.online_rows);
        let capacity_caption = i18n_seats(cx, "capacity");

        Self::section(
            i18n_seats(cx, "online_course"),
            h_flex()
                .gap_6()
                .items_start()
                .child(Self::captioned(
                    SeatIcon::new("online-capacity", self.online_badge),
                    capacity_caption,
                    cx,
                ))
                .child(
                    v_flex()
                        .gap_3()
                        .child(self.render_rows(SeatGrid::OnlineCourse, &self.online_rows, cx))
                        .child(self.render_legend(summary, cx)),
                ),
            cx,
        )
    }

    fn render_selection(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let last_clicked = self.seats_state.read(cx).last_clicked();

        let text = match last_clicked {
            Some(seat) => {
                let number = seat.number.to_string();
                i18n_format(cx, "seats.last_clicked", &[("seat", number.as_str())])
            }
            None => i18n_seats(cx, "none_clicked"),
        };

        h_flex()
            .gap_3()
            .items_center()
            .child(Label::new(text).text_sm())
            .when(last_clicked.is_some(), |this| {
                this.child(
                    Button::new("clear-selection")
                        .ghost()
                        .label(i18n_seats(cx, "clear_selection"))
                        .on_click(cx.listener(|this, _, _window, cx| {
                            this.seats_state.update(cx, |state, cx| {
                                state.clear(cx);
                            });
                        })),
                )
            })
    }
}

impl Render for SeatsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("seats-view")
            .size_full()
            .overflow_y_scroll()
            .child(
                v_flex()
                    .p_4()
                    .gap_4()
                    .child(Label::new(i18n_seats(cx, "title")).text_xl())
                    .child(self.render_selection(cx))
                    .child(
                        h_flex()
                            .gap_4()
                            .flex_wrap()
                            .items_start()
                            .child(self.render_by_status(cx))
                            .child(self.render_by_size(cx))
                            .child(self.render_numbering(cx)),
                    )
                    .child(self.render_classroom(cx))
                    .child(self.render_online_course(cx)),
            )
    }
}
