// squad-core/src/domain/figure/layout.rs

/// Where a panel sits in the figure grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSlot {
    /// Spans every column of the given row.
    FullRow(usize),
    Cell { row: usize, col: usize },
}

/// Grid sized from the component counts.
///
/// Row 0 is the motion panel. The `qc_cnr_avg` panels follow, then the
/// `qc_cnr_std` panels start on a fresh row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub avg_rows: usize,
    pub std_rows: usize,
}

impl GridLayout {
    pub fn compute(n_avg: usize, n_std: usize, max_columns: usize) -> Self {
        let columns = n_avg.max(n_std).min(max_columns.max(1)).max(1);
        Self {
            columns,
            avg_rows: n_avg.div_ceil(columns),
            std_rows: n_std.div_ceil(columns),
        }
    }

    pub fn rows(&self) -> usize {
        1 + self.avg_rows + self.std_rows
    }

    pub fn motion_slot(&self) -> PanelSlot {
        PanelSlot::FullRow(0)
    }

    pub fn avg_slot(&self, index: usize) -> PanelSlot {
        PanelSlot::Cell {
            row: 1 + index / self.columns,
            col: index % self.columns,
        }
    }

    pub fn std_slot(&self, index: usize) -> PanelSlot {
        PanelSlot::Cell {
            row: 1 + self.avg_rows + index / self.columns,
            col: index % self.columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_shells() {
        let grid = GridLayout::compute(2, 2, 4);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.avg_slot(1), PanelSlot::Cell { row: 1, col: 1 });
        assert_eq!(grid.std_slot(0), PanelSlot::Cell { row: 2, col: 0 });
    }

    #[test]
    fn test_wraps_past_max_columns() {
        let grid = GridLayout::compute(6, 6, 4);
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.avg_rows, 2);
        assert_eq!(grid.std_rows, 2);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.avg_slot(5), PanelSlot::Cell { row: 2, col: 1 });
        assert_eq!(grid.std_slot(4), PanelSlot::Cell { row: 4, col: 0 });
    }

    #[test]
    fn test_no_components_leaves_motion_row_only() {
        let grid = GridLayout::compute(0, 0, 4);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.motion_slot(), PanelSlot::FullRow(0));
    }

    #[test]
    fn test_uneven_metrics() {
        let grid = GridLayout::compute(3, 1, 4);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.std_slot(0), PanelSlot::Cell { row: 2, col: 0 });
    }

    #[test]
    fn test_zero_max_columns_is_clamped() {
        let grid = GridLayout::compute(2, 0, 0);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.avg_rows, 2);
    }
}
