//! Seat descriptors and demo layouts
//!
//! Pure rendering parameters for the seat icon widget and the grids the seat
//! demo screen arranges them into.

use serde::{Deserialize, Serialize};

/// Display state of a seat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Free seat, can be picked
    #[default]
    Available,
    /// Already taken
    Occupied,
    /// Capacity badge (the number is the total seat count)
    Total,
}

impl SeatStatus {
    pub fn all() -> &'static [SeatStatus] {
        &[SeatStatus::Available, SeatStatus::Occupied, SeatStatus::Total]
    }

    /// Translation key for legends
    pub fn label_key(self) -> &'static str {
        match self {
            SeatStatus::Available => "seats.status_available",
            SeatStatus::Occupied => "seats.status_occupied",
            SeatStatus::Total => "seats.status_total",
        }
    }
}

/// Rendered size of a seat icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SeatSize {
    pub fn all() -> &'static [SeatSize] {
        &[SeatSize::Small, SeatSize::Medium, SeatSize::Large]
    }

    /// Icon edge length in pixels
    pub fn icon_px(self) -> f32 {
        match self {
            SeatSize::Small => 24.0,
            SeatSize::Medium => 36.0,
            SeatSize::Large => 52.0,
        }
    }

    /// Label font size in pixels
    pub fn label_px(self) -> f32 {
        match self {
            SeatSize::Small => 9.0,
            SeatSize::Medium => 11.0,
            SeatSize::Large => 14.0,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SeatSize::Small => "seats.size_small",
            SeatSize::Medium => "seats.size_medium",
            SeatSize::Large => "seats.size_large",
        }
    }
}

/// Rendering parameters for a single seat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSpec {
    pub number: Option<u32>,
    pub status: SeatStatus,
    pub size: SeatSize,
    pub show_number: bool,
}

impl SeatSpec {
    pub fn new(number: Option<u32>, status: SeatStatus) -> Self {
        Self {
            number,
            status,
            size: SeatSize::default(),
            show_number: true,
        }
    }

    pub fn size(mut self, size: SeatSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_number(mut self, show_number: bool) -> Self {
        self.show_number = show_number;
        self
    }

    /// Text drawn on the seat, if any
    ///
    /// Always `None` when `show_number` is off, whatever `number` holds.
    pub fn label(&self) -> Option<String> {
        if !self.show_number {
            return None;
        }
        self.number.map(|n| n.to_string())
    }

    /// Whether the demo wires a click handler to this seat
    pub fn is_clickable(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

/// Occupancy counts for a grid legend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSummary {
    pub occupied: u32,
    pub available: u32,
}

/// Simulated classroom: `rows x cols` seats numbered row-major from 1
///
/// Seats `1..=threshold` are occupied, the rest available.
pub fn classroom_grid(rows: u32, cols: u32, threshold: u32) -> Vec<Vec<SeatSpec>> {
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let number = row * cols + col + 1;
                    SeatSpec::new(Some(number), status_for(number, threshold))
                        .size(SeatSize::Medium)
                })
                .collect()
        })
        .collect()
}

/// Simulated online course: `capacity` seats laid out `per_row` at a time
///
/// The first `enrolled` seats are occupied. The capacity badge is returned
/// separately as a [`SeatStatus::Total`] seat carrying the capacity.
pub fn online_course_grid(
    capacity: u32,
    enrolled: u32,
    per_row: u32,
) -> (SeatSpec, Vec<Vec<SeatSpec>>) {
    let badge = SeatSpec::new(Some(capacity), SeatStatus::Total).size(SeatSize::Large);
    let per_row = per_row.max(1);

    let seats: Vec<SeatSpec> = (1..=capacity)
        .map(|number| {
            SeatSpec::new(Some(number), status_for(number, enrolled)).size(SeatSize::Small)
        })
        .collect();

    let rows = seats
        .chunks(per_row as usize)
        .map(|chunk| chunk.to_vec())
        .collect();

    (badge, rows)
}

/// Count occupied and available seats in a grid
pub fn summarize(grid: &[Vec<SeatSpec>]) -> GridSummary {
    grid.iter()
        .flatten()
        .fold(GridSummary::default(), |mut summary, seat| {
            match seat.status {
                SeatStatus::Occupied => summary.occupied += 1,
                SeatStatus::Available => summary.available += 1,
                SeatStatus::Total => {}
            }
            summary
        })
}

fn status_for(number: u32, threshold: u32) -> SeatStatus {
    if number <= threshold {
        SeatStatus::Occupied
    } else {
        SeatStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_hidden_when_show_number_off() {
        for number in [None, Some(0), Some(7), Some(u32::MAX)] {
            for status in SeatStatus::all() {
                let seat = SeatSpec::new(number, *status).show_number(false);
                assert_eq!(seat.label(), None);
            }
        }
    }

    #[test]
    fn test_label_shown_when_enabled() {
        assert_eq!(SeatSpec::new(Some(12), SeatStatus::Available).label().as_deref(), Some("12"));
        assert_eq!(SeatSpec::new(None, SeatStatus::Available).label(), None);
    }

    #[test]
    fn test_classroom_grid_threshold() {
        let grid = classroom_grid(5, 6, 18);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 6));

        let seats: Vec<_> = grid.iter().flatten().collect();
        assert_eq!(seats.len(), 30);

        for seat in seats {
            let number = seat.number.expect("classroom seats are numbered");
            if number <= 18 {
                assert_eq!(seat.status, SeatStatus::Occupied, "seat {number}");
                assert!(!seat.is_clickable());
            } else {
                assert_eq!(seat.status, SeatStatus::Available, "seat {number}");
                assert!(seat.is_clickable());
            }
        }
    }

    #[test]
    fn test_classroom_grid_row_major() {
        let grid = classroom_grid(2, 3, 0);
        assert_eq!(grid[0][0].number, Some(1));
        assert_eq!(grid[0][2].number, Some(3));
        assert_eq!(grid[1][0].number, Some(4));
    }

    #[test]
    fn test_summarize() {
        let grid = classroom_grid(5, 6, 18);
        assert_eq!(
            summarize(&grid),
            GridSummary {
                occupied: 18,
                available: 12
            }
        );
    }

    #[test]
    fn test_online_course_grid() {
        let (badge, rows) = online_course_grid(24, 10, 8);
        assert_eq!(badge.status, SeatStatus::Total);
        assert_eq!(badge.label().as_deref(), Some("24"));
        assert_eq!(rows.len(), 3);
        assert_eq!(
            summarize(&rows),
            GridSummary {
                occupied: 10,
                available: 14
            }
        );

        let (_, uneven) = online_course_grid(10, 0, 4);
        let lens: Vec<_> = uneven.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![4, 4, 2]);
    }
}
