//! Plain-text summary of a burndown series.

use crate::aggregator::BurndownSeries;

const BAR_WIDTH: usize = 40;

/// Render a series as a bar table
///
/// **Public** - used by the compute command's `--summary`
///
/// At most `max_lines` rows are printed; longer series are sampled at an
/// even stride so the first and last rows span the whole axis.
/// `labels` replaces raw instants when given (one label per bucket).
pub fn generate_text_summary(
    series: &BurndownSeries,
    labels: Option<&[String]>,
    max_lines: usize,
) -> String {
    let mut lines = Vec::new();

    let Some((peak_time, peak_count)) = series.peak() else {
        lines.push("  (empty series)".to_string());
        return lines.join("\n");
    };

    let label = |index: usize| -> String {
        labels
            .and_then(|l| l.get(index).cloned())
            .unwrap_or_else(|| series.bucket_timestamps[index].to_string())
    };

    lines.push(format!(
        "  Buckets: {} | Step: {} | Peak: {} at {}",
        series.len(),
        series.bucket_duration,
        peak_count,
        series
            .bucket_timestamps
            .iter()
            .position(|&t| t == peak_time)
            .map(&label)
            .unwrap_or_default()
    ));
    lines.push(format!("  {:<32} {:>10}", "BUCKET", "ACTIVE"));

    for index in sample_indices(series.len(), max_lines) {
        let count = series.active_counts[index];
        let filled = if peak_count > 0 {
            (count as usize * BAR_WIDTH) / peak_count as usize
        } else {
            0
        };
        lines.push(format!(
            "  {:<32} {:>10} {}",
            label(index),
            count,
            "█".repeat(filled)
        ));
    }

    lines.join("\n")
}

/// Evenly spaced indices into `0..len`, first and last included
///
/// **Private** - integer stride, no floating point
fn sample_indices(len: usize, max_lines: usize) -> Vec<usize> {
    if len == 0 || max_lines == 0 {
        return Vec::new();
    }
    if len <= max_lines {
        return (0..len).collect();
    }
    if max_lines == 1 {
        return vec![0];
    }

    (0..max_lines)
        .map(|i| i * (len - 1) / (max_lines - 1))
        .collect()
}
