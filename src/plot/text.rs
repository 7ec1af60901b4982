//! Plain-text histogram renderer.

use std::io::Write;

use super::HistogramSink;

/// One equal-width bin, `[lower, upper)` except the last, which is closed.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Split the range of `observations` into `bins` equal-width bins and count
/// how many observations fall into each.
///
/// Returns no bins for empty input or `bins == 0`. When every observation is
/// equal a single bin holds them all.
pub fn bin_counts(observations: &[f64], bins: usize) -> Vec<HistogramBin> {
    if observations.is_empty() || bins == 0 {
        return Vec::new();
    }

    let lo = observations.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = observations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if hi <= lo {
        return vec![HistogramBin {
            lower: lo,
            upper: hi,
            count: observations.len(),
        }];
    }

    let width = (hi - lo) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &x in observations {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        result[idx].count += 1;
    }

    result
}

/// Draws histograms as rows of `#` bars into any writer.
pub struct TextHistogram<W: Write> {
    out: W,
    bins: usize,
    bar_width: usize,
}

impl<W: Write> TextHistogram<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bins: 6,
            bar_width: 50,
        }
    }

    /// Set the number of bins.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the length of the longest bar, in characters.
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HistogramSink for TextHistogram<W> {
    fn render_histogram(
        &mut self,
        observations: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> std::io::Result<()> {
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{x_label} | {y_label}")?;

        let bins = bin_counts(observations, self.bins);
        if bins.is_empty() {
            return writeln!(self.out, "(no observations)");
        }

        let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bin in &bins {
            let len = bin.count * self.bar_width / tallest;
            writeln!(
                self.out,
                "[{:>8.1}, {:>8.1}] {:>6} {}",
                bin.lower,
                bin.upper,
                bin.count,
                "#".repeat(len)
            )?;
        }
        self.out.flush()
    }
}
