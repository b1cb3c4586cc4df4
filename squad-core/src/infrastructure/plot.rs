// squad-core/src/infrastructure/plot.rs
//
// plotters adapter: draws a Figure as an SVG document.

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::figure::{Figure, Panel, PanelSlot, ViolinGroup};
use crate::error::SquadError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::renderer::FigureRenderer;

/// Half the horizontal room a violin may take around its slot centre.
const VIOLIN_HALF_WIDTH: f64 = 0.4;
/// Half width of the uniform horizontal jitter of the strip points.
const JITTER: f64 = 0.1;
/// Quartile marker half width when there is no density to follow.
const BARE_MARKER_HALF_WIDTH: f64 = 0.2;
const POINT_RADIUS: i32 = 5;

// seaborn "deep" palette
const PALETTE: [RGBColor; 4] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
];

pub struct SvgRenderer;

impl FigureRenderer for SvgRenderer {
    #[instrument(skip(self, figure), fields(panels = figure.panels.len()))]
    fn render(&self, figure: &Figure, out_path: &Path) -> Result<(), SquadError> {
        draw_figure(figure, out_path)
            .map_err(|e| SquadError::from(InfrastructureError::Render(e.to_string())))?;
        info!(path = %out_path.display(), "🎻 Figure rendered");
        Ok(())
    }
}

fn draw_figure(figure: &Figure, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(out_path, figure.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let rows = root.split_evenly((figure.layout.rows(), 1));
    let mut rng = StdRng::seed_from_u64(figure.jitter_seed);

    for panel in &figure.panels {
        let cells;
        let area = match panel.slot {
            PanelSlot::FullRow(row) => rows.get(row),
            PanelSlot::Cell { row, col } => match rows.get(row) {
                Some(row_area) => {
                    cells = row_area.split_evenly((1, figure.layout.columns));
                    cells.get(col)
                }
                None => None,
            },
        }
        .ok_or_else(|| format!("panel '{}' falls outside the grid", panel.title))?;

        draw_panel(area, panel, &mut rng)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    panel: &Panel,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let slots = panel.groups.len().max(1);
    let (y_lo, y_hi) = panel.y_range();
    let labels: Vec<&str> = panel.groups.iter().map(|g| g.label.as_str()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), y_lo..y_hi)?;

    // Key points on a half-unit step land on every slot centre.
    let label_for = |x: &f64| {
        let centre = x.round();
        if (x - centre).abs() > 1e-6 || centre < 0.0 {
            return String::new();
        }
        labels
            .get(centre as usize)
            .map(|s| s.to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(2 * slots + 1)
        .x_label_formatter(&label_for)
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;

    for (i, group) in panel.groups.iter().enumerate() {
        let colour = PALETTE[i % PALETTE.len()];
        draw_violin(&mut chart, group, i as f64, colour)?;
        draw_strip(&mut chart, group, i as f64, rng)?;
    }

    Ok(())
}

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_violin(
    chart: &mut Chart<'_, '_>,
    group: &ViolinGroup,
    centre: f64,
    colour: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let half_width_at = |value: f64| -> f64 {
        match &group.density {
            Some(curve) if curve.max_density() > 0.0 => {
                curve.density_at(value) / curve.max_density() * VIOLIN_HALF_WIDTH
            }
            _ => BARE_MARKER_HALF_WIDTH,
        }
    };

    if let Some(curve) = group.density.as_ref().filter(|c| c.max_density() > 0.0) {
        let scale = VIOLIN_HALF_WIDTH / curve.max_density();
        let mut outline: Vec<(f64, f64)> = curve
            .points
            .iter()
            .map(|(y, d)| (centre + d * scale, *y))
            .collect();
        outline.extend(curve.points.iter().rev().map(|(y, d)| (centre - d * scale, *y)));

        chart.draw_series(std::iter::once(Polygon::new(
            outline.clone(),
            colour.mix(0.6).filled(),
        )))?;
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        chart.draw_series(std::iter::once(PathElement::new(
            outline,
            BLACK.mix(0.8).stroke_width(1),
        )))?;
    }

    if let Some(q) = group.quartiles {
        for (value, width) in [(q.q1, 1), (q.median, 2), (q.q3, 1)] {
            let hw = half_width_at(value);
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(centre - hw, value), (centre + hw, value)],
                BLACK.stroke_width(width),
            )))?;
        }
    }

    Ok(())
}

fn draw_strip(
    chart: &mut Chart<'_, '_>,
    group: &ViolinGroup,
    centre: f64,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64)> = group
        .values
        .iter()
        .filter(|v| v.is_finite())
        .map(|v| (centre + rng.random_range(-JITTER..=JITTER), *v))
        .collect();

    chart.draw_series(
        points
            .into_iter()
            .map(|p| Circle::new(p, POINT_RADIUS, BLACK.mix(0.5).filled())),
    )?;
    Ok(())
}
