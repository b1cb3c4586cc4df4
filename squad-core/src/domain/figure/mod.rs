// squad-core/src/domain/figure/mod.rs
//
// Backend-agnostic description of the QC figure.

pub mod layout;

pub use layout::{GridLayout, PanelSlot};

use crate::domain::stats::{DensityCurve, Quartiles, density_curve, quartiles};

/// One violin + strip group inside a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinGroup {
    pub label: String,
    pub values: Vec<f64>,
    pub quartiles: Option<Quartiles>,
    pub density: Option<DensityCurve>,
}

impl ViolinGroup {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            quartiles: quartiles(&values),
            density: density_curve(&values),
            values,
        }
    }

    /// Smallest and largest value the group draws (density tails included).
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in self.values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        if let Some((d_lo, d_hi)) = self.density.as_ref().and_then(|d| d.value_range()) {
            lo = lo.min(d_lo);
            hi = hi.max(d_hi);
        }
        (lo <= hi).then_some((lo, hi))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub slot: PanelSlot,
    pub groups: Vec<ViolinGroup>,
}

impl Panel {
    /// Y range covering every group, padded by 5%.
    pub fn y_range(&self) -> (f64, f64) {
        let extents: Vec<(f64, f64)> = self.groups.iter().filter_map(ViolinGroup::extent).collect();
        let lo = extents.iter().map(|e| e.0).fold(f64::INFINITY, f64::min);
        let hi = extents.iter().map(|e| e.1).fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        let span = hi - lo;
        let pad = if span > 1e-12 { span * 0.05 } else { lo.abs().max(1.0) * 0.05 };
        (lo - pad, hi + pad)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub layout: GridLayout,
    pub panels: Vec<Panel>,
    pub panel_width: u32,
    pub panel_height: u32,
    pub jitter_seed: u64,
}

impl Figure {
    /// Pixel size: `columns` panels wide, one panel height per grid row.
    pub fn pixel_size(&self) -> (u32, u32) {
        let cols = self.layout.columns.max(2) as u32;
        (cols * self.panel_width, self.layout.rows() as u32 * self.panel_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_extent_includes_density_tails() {
        let group = ViolinGroup::new("g", vec![1.0, 2.0, 3.0]);
        let (lo, hi) = group.extent().unwrap_or((0.0, 0.0));
        assert!(lo < 1.0);
        assert!(hi > 3.0);
    }

    #[test]
    fn test_empty_group_has_no_extent() {
        let group = ViolinGroup::new("g", vec![]);
        assert!(group.extent().is_none());
        assert!(group.quartiles.is_none());
        assert!(group.density.is_none());
    }

    #[test]
    fn test_degenerate_panel_range_is_padded() {
        let panel = Panel {
            title: "t".into(),
            x_label: "x".into(),
            y_label: "y".into(),
            slot: PanelSlot::FullRow(0),
            groups: vec![ViolinGroup::new("g", vec![2.0, 2.0])],
        };
        let (lo, hi) = panel.y_range();
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_pixel_size_grows_with_rows() {
        let figure = Figure {
            layout: GridLayout::compute(6, 6, 4),
            panels: vec![],
            panel_width: 400,
            panel_height: 300,
            jitter_seed: 0,
        };
        assert_eq!(figure.pixel_size(), (1600, 1500));
    }
}
