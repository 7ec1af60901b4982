//! Histogram output for payout distributions.
//!
//! The simulation never draws anything itself; the runner hands payouts to a
//! [`HistogramSink`]. [`TextHistogram`] is the bundled sink and renders bars
//! as text.

mod text;

pub use text::{bin_counts, HistogramBin, TextHistogram};

/// Something that can display a histogram of observations.
pub trait HistogramSink {
    /// Render `observations` with the given title and axis labels.
    fn render_histogram(
        &mut self,
        observations: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> std::io::Result<()>;
}
