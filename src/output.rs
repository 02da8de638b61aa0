use crate::file_updater::UpdateReport;

/// Prints the confirmation echo to stdout.
pub fn output_results(report: &UpdateReport) {
    for line in render_stdout(report) {
        println!("{}", line);
    }
}

pub fn render_stdout(report: &UpdateReport) -> Vec<String> {
    std::iter::once(format!("Updated version to {}", report.version))
        .chain(report.confirmation.iter().map(ToString::to_string))
        .collect()
}
