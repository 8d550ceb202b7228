//! Seats Demo State
//!
//! Remembers which numbered seat was clicked last on the demo screen.
//! Both arrangements number their seats from 1, so a selection names its grid.

use crate::states::AulaGlobalStore;
use gpui::Context;
use serde_json::json;

/// Clickable seat arrangements on the demo screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatGrid {
    Classroom,
    OnlineCourse,
}

impl SeatGrid {
    /// Element id prefix for the grid's seats
    pub fn id_prefix(self) -> &'static str {
        match self {
            SeatGrid::Classroom => "classroom",
            SeatGrid::OnlineCourse => "online",
        }
    }
}

/// A seat within a specific grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedSeat {
    pub grid: SeatGrid,
    pub number: u32,
}

/// Seat demo state entity
#[derive(Debug, Default)]
pub struct SeatsState {
    last_clicked: Option<SelectedSeat>,
    click_count: u32,
}

impl SeatsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_clicked(&self) -> Option<SelectedSeat> {
        self.last_clicked
    }

    /// Whether `number` in `grid` is the current selection
    pub fn is_selected(&self, grid: SeatGrid, number: u32) -> bool {
        self.last_clicked == Some(SelectedSeat { grid, number })
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    /// Record a click; returns whether the selection changed
    pub fn record_click(&mut self, grid: SeatGrid, number: u32) -> bool {
        self.click_count += 1;
        let seat = SelectedSeat { grid, number };
        let changed = self.last_clicked != Some(seat);
        self.last_clicked = Some(seat);
        changed
    }

    pub fn select(&mut self, grid: SeatGrid, number: u32, cx: &mut Context<Self>) {
        self.record_click(grid, number);
        cx.global::<AulaGlobalStore>().services().logger().debug(
            "seats",
            format!("Seat {number} clicked"),
            Some(json!({
                "grid": grid.id_prefix(),
                "seat": number,
                "clicks": self.click_count,
            })),
        );
        cx.notify();
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        if self.last_clicked.take().is_some() {
            cx.notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_click() {
        let mut state = SeatsState::new();
        assert_eq!(state.last_clicked(), None);

        assert!(state.record_click(SeatGrid::Classroom, 19));
        assert!(!state.record_click(SeatGrid::Classroom, 19));
        assert!(state.record_click(SeatGrid::Classroom, 27));

        assert_eq!(
            state.last_clicked(),
            Some(SelectedSeat {
                grid: SeatGrid::Classroom,
                number: 27
            })
        );
        assert_eq!(state.click_count(), 3);
    }

    #[test]
    fn test_selection_is_scoped_to_grid() {
        let mut state = SeatsState::new();
        assert!(state.record_click(SeatGrid::OnlineCourse, 20));

        assert!(state.is_selected(SeatGrid::OnlineCourse, 20));
        assert!(!state.is_selected(SeatGrid::Classroom, 20));

        // Same number in the other grid is a new selection
        assert!(state.record_click(SeatGrid::Classroom, 20));
        assert!(!state.is_selected(SeatGrid::OnlineCourse, 20));
    }
}
