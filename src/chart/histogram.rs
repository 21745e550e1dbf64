/// Bins used for every histogram.
pub const DEFAULT_BINS: usize = 10;

/// One histogram bar: `[start, end)`, the last bin closed on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn new(column: &str, values: &[f64]) -> Self {
        Histogram {
            column: column.to_string(),
            bins: bin_values(values, DEFAULT_BINS),
        }
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Split the finite `values` into `n_bins` equal-width bins over their range.
///
/// A constant input widens to `v ± 0.5`; no finite values gives `[0, 1]`.
pub fn bin_values(values: &[f64], n_bins: usize) -> Vec<Bin> {
    let n_bins = n_bins.max(1);
    let finite = values.iter().copied().filter(|v| v.is_finite());

    let (mut lo, mut hi) = finite
        .clone()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        lo = 0.0;
        hi = 1.0;
    } else if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    // Edges interpolate between `lo` and `hi`, and positions are taken on
    // halved values, so a span past f64::MAX stays finite.
    let n = n_bins as f64;
    let half_span = hi * 0.5 - lo * 0.5;
    let edge = |i: usize| {
        let t = i as f64 / n;
        lo * (1.0 - t) + hi * t
    };
    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            start: edge(i),
            end: if i + 1 == n_bins { hi } else { edge(i + 1) },
            count: 0,
        })
        .collect();

    for v in finite {
        let pos = (v * 0.5 - lo * 0.5) / half_span;
        let idx = ((pos * n) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_finite_value() {
        let values = [1.0, 2.0, 2.5, 3.0, 9.0, 10.0, f64::NAN, f64::INFINITY];
        let bins = bin_values(&values, 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 6);
        assert_eq!(bins[0].start, 1.0);
        assert_eq!(bins[9].end, 10.0);
        assert_eq!(bins[1].count, 2);
        assert_eq!(bins[8].count, 1);
        // maximum lands in the last, right-closed bin
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn constant_values_widen_the_range() {
        let bins = bin_values(&[4.0, 4.0, 4.0], 10);
        assert_eq!(bins[0].start, 3.5);
        assert_eq!(bins[9].end, 4.5);
        assert_eq!(bins[5].count, 3);
    }

    #[test]
    fn no_values_gives_unit_range() {
        let hist = Histogram::new("empty", &[]);
        assert_eq!(hist.bins.len(), DEFAULT_BINS);
        assert_eq!(hist.bins[0].start, 0.0);
        assert_eq!(hist.bins[DEFAULT_BINS - 1].end, 1.0);
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn extreme_spread_keeps_edges_finite() {
        let bins = bin_values(&[-1e308, 1e308, f64::MAX, -f64::MAX], 10);
        for bin in &bins {
            assert!(bin.start.is_finite() && bin.end.is_finite(), "{bin:?}");
            assert!(bin.width().is_finite());
        }
        assert_eq!(bins[0].start, -f64::MAX);
        assert_eq!(bins[9].end, f64::MAX);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 0, 0, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn bin_geometry() {
        let bins = bin_values(&[0.0, 10.0], 5);
        assert_eq!(bins[1].width(), 2.0);
        assert_eq!(bins[1].center(), 3.0);
    }
}
