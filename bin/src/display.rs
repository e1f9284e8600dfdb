//! Report formatting for the zipsizer CLI.

use zipsizer_lib::prelude::*;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with two decimals and a binary unit suffix.
pub(crate) fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

fn size(bytes: u64, human_readable: bool) -> String {
    if human_readable {
        format_bytes(bytes)
    } else {
        format!("{bytes} bytes")
    }
}

/// Render an estimate as the plain text report.
pub(crate) fn render_estimate(estimate: &Estimate, human_readable: bool, detailed: bool) -> String {
    let mut lines = vec![
        format!(
            "Total original size: {}",
            size(estimate.total_size, human_readable)
        ),
        format!(
            "Estimated compressed size: {}",
            size(estimate.estimated_size, human_readable)
        ),
    ];

    if detailed {
        lines.push(format!(
            "Estimated savings: {}",
            size(estimate.estimated_savings(), human_readable)
        ));
        lines.push(format!("Codec: {} (level {})", estimate.codec, estimate.level));
        lines.push(format!(
            "Files: {} ({} opened, {} skipped entries)",
            estimate.sample.files, estimate.sample.files_opened, estimate.skipped_entries
        ));
        lines.push(format!(
            "Sampled: {} in {} windows",
            size(estimate.sample.sampled_bytes, human_readable),
            estimate.sample.samples
        ));
        lines.push(format!("Compression ratio: {:.4}", estimate.ratio));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
