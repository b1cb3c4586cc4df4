// squad-core/src/domain/stats.rs
//
// Distribution summaries behind the violin panels.

/// Number of points on which the density outline is evaluated.
pub const KDE_GRID_POINTS: usize = 100;

/// How far past the data (in bandwidths) the density outline extends.
const KDE_CUT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunningMoments {
    pub count: u64,
    pub mean: f64,
    m2: f64,
}

impl RunningMoments {
    /// Welford's online update.
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Sample standard deviation (n - 1). `None` below two values.
    pub fn sample_std(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        Some((self.m2 / (self.count - 1) as f64).sqrt())
    }
}

impl FromIterator<f64> for RunningMoments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut m = RunningMoments::default();
        for x in iter {
            m.push(x);
        }
        m
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

/// Quantile of already sorted data, linear interpolation between order
/// statistics. `q` is clamped to `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = q.clamp(0.0, 1.0) * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn quartiles(values: &[f64]) -> Option<Quartiles> {
    let sorted = sorted_finite(values);
    Some(Quartiles {
        q1: quantile_sorted(&sorted, 0.25)?,
        median: quantile_sorted(&sorted, 0.5)?,
        q3: quantile_sorted(&sorted, 0.75)?,
    })
}

fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Scott's rule: `std * n^(-1/5)`.
/// `None` when fewer than two values or the spread is zero.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let moments: RunningMoments = values.iter().copied().filter(|v| v.is_finite()).collect();
    let std = moments.sample_std()?;
    if std <= 1e-12 {
        return None;
    }
    Some(std * (moments.count as f64).powf(-0.2))
}

/// Gaussian kernel density estimate at `x`.
pub fn gaussian_kde(values: &[f64], bandwidth: f64, x: f64) -> f64 {
    if values.is_empty() || bandwidth <= 0.0 {
        return 0.0;
    }
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * values.len() as f64);
    values
        .iter()
        .map(|v| {
            let z = (x - v) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum::<f64>()
        * norm
}

/// Density outline of a violin: `(value, density)` pairs ordered by value.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    pub fn max_density(&self) -> f64 {
        self.points.iter().map(|(_, d)| *d).fold(0.0, f64::max)
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.0, self.points.last()?.0))
    }

    /// Density at `value`, linearly interpolated. Zero outside the curve.
    pub fn density_at(&self, value: f64) -> f64 {
        let idx = self.points.partition_point(|(x, _)| *x < value);
        if idx == 0 || idx >= self.points.len() {
            return match self.points.get(idx) {
                Some((x, d)) if idx == 0 && *x == value => *d,
                _ => 0.0,
            };
        }
        let (x0, d0) = self.points[idx - 1];
        let (x1, d1) = self.points[idx];
        if x1 - x0 <= 0.0 {
            return d1;
        }
        d0 + (d1 - d0) * (value - x0) / (x1 - x0)
    }
}

/// Evaluates the KDE from `min - 2*bw` to `max + 2*bw`.
/// `None` when the sample cannot carry a density (single value, zero spread).
pub fn density_curve(values: &[f64]) -> Option<DensityCurve> {
    let bw = scott_bandwidth(values)?;
    let sorted = sorted_finite(values);
    let lo = sorted.first()? - KDE_CUT * bw;
    let hi = sorted.last()? + KDE_CUT * bw;
    let step = (hi - lo) / (KDE_GRID_POINTS - 1) as f64;

    let points = (0..KDE_GRID_POINTS)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, gaussian_kde(&sorted, bw, x))
        })
        .collect();

    Some(DensityCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn test_running_moments_matches_two_pass() -> Result<()> {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m: RunningMoments = data.iter().copied().collect();
        assert_eq!(m.count, 8);
        assert!((m.mean - 5.0).abs() < 1e-12);
        // population std is 2.0, sample std is sqrt(32/7)
        let std = m.sample_std().context("std")?;
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_quartiles_linear_interpolation() -> Result<()> {
        let q = quartiles(&[4.0, 1.0, 3.0, 2.0]).context("quartiles")?;
        assert!((q.q1 - 1.75).abs() < 1e-12);
        assert!((q.median - 2.5).abs() < 1e-12);
        assert!((q.q3 - 3.25).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_quartiles_single_value() -> Result<()> {
        let q = quartiles(&[0.7]).context("quartiles")?;
        assert_eq!((q.q1, q.median, q.q3), (0.7, 0.7, 0.7));
        assert!(quartiles(&[]).is_none());
        Ok(())
    }

    #[test]
    fn test_bandwidth_requires_spread() {
        assert!(scott_bandwidth(&[1.0]).is_none());
        assert!(scott_bandwidth(&[3.0, 3.0, 3.0]).is_none());
        assert!(scott_bandwidth(&[1.0, 2.0, 3.0]).is_some());
    }

    #[test]
    fn test_density_integrates_to_about_one() -> Result<()> {
        let data = [0.21, 0.35, 0.4, 0.52, 0.6, 0.61, 0.9];
        let curve = density_curve(&data).context("curve")?;
        assert_eq!(curve.points.len(), KDE_GRID_POINTS);

        let area: f64 = curve
            .points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum();
        // Cut at 2 bandwidths loses a few percent of the mass.
        assert!(area > 0.9 && area < 1.01, "area = {}", area);
        Ok(())
    }

    #[test]
    fn test_density_range_extends_past_data() -> Result<()> {
        let data = [1.0, 2.0, 3.0];
        let curve = density_curve(&data).context("curve")?;
        let (lo, hi) = curve.value_range().context("range")?;
        assert!(lo < 1.0 && hi > 3.0);
        assert!(curve.max_density() > 0.0);
        Ok(())
    }

    #[test]
    fn test_density_at_interpolates_and_clamps() -> Result<()> {
        let curve = DensityCurve {
            points: vec![(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)],
        };
        assert!((curve.density_at(0.5) - 1.0).abs() < 1e-12);
        assert!((curve.density_at(1.0) - 2.0).abs() < 1e-12);
        assert_eq!(curve.density_at(-1.0), 0.0);
        assert_eq!(curve.density_at(3.0), 0.0);

        let real = density_curve(&[1.0, 2.0, 3.0]).context("curve")?;
        assert!(real.density_at(2.0) > real.density_at(0.0));
        Ok(())
    }
}
