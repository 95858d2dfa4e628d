// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One equal-width histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Split `[min, max]` of the finite values into `bins` equal-width bins.
///
/// Bins are half-open except the last, which also holds `max`. When every
/// value is equal the range is widened to `value ± 0.5`. Returns nothing for
/// zero bins or no finite values.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Least-squares line
// ---------------------------------------------------------------------------

/// `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares over the finite points. Purely descriptive: no
/// goodness-of-fit or significance is computed.
///
/// `None` with fewer than two points or when every `x` is the same.
pub fn fit_line(points: &[[f64; 2]]) -> Option<LinearFit> {
    let pts: Vec<[f64; 2]> = points
        .iter()
        .copied()
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .collect();
    if pts.len() < 2 {
        return None;
    }

    let n = pts.len() as f64;
    let mean_x = pts.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = pts.iter().map(|p| p[1]).sum::<f64>() / n;
    let (sxx, sxy) = pts.iter().fold((0.0, 0.0), |(sxx, sxy), [x, y]| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxy + dx * (y - mean_y))
    });
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_finite_value() {
        let values = [0.3, 0.9, 1.1, 1.2, 1.25, 2.4, f64::NAN, 3.7, 4.1];
        let bins = histogram(&values, 8);
        assert_eq!(bins.len(), 8);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 8);
        assert_eq!(bins[0].lower, 0.3);
        assert_eq!(bins[7].upper, 4.1);
    }

    #[test]
    fn max_lands_in_last_bin_and_edges_are_half_open() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, [1, 1, 1, 2]);
        assert_eq!(bins[1].lower, 1.0);
        assert_eq!(bins[1].width(), 1.0);
        assert_eq!(bins[1].center(), 1.5);
    }

    #[test]
    fn constant_values_widen_the_range() {
        let bins = histogram(&[2.0, 2.0, 2.0], 2);
        assert_eq!(bins[0].lower, 1.5);
        assert_eq!(bins[1].upper, 2.5);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, [0, 3]);
    }

    #[test]
    fn degenerate_histograms_are_empty() {
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
        assert!(histogram(&[], 6).is_empty());
        assert!(histogram(&[f64::NAN], 6).is_empty());
    }

    #[test]
    fn recovers_an_exact_line() {
        let points: Vec<[f64; 2]> = (0..5).map(|i| [i as f64, 2.0 * i as f64 + 1.0]).collect();
        let fit = fit_line(&points).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn fit_needs_spread_in_x() {
        assert!(fit_line(&[[1.0, 2.0]]).is_none());
        assert!(fit_line(&[[1.0, 2.0], [1.0, 3.0]]).is_none());
        assert!(fit_line(&[[1.0, 2.0], [f64::NAN, 3.0]]).is_none());
    }
}
