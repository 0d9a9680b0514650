use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use isobin_lib::{ConversionOutput, ConvertOptions, ConvertProgress, convert_all};

/// Convert every input, reporting each outcome as it happens.
pub(crate) fn run_convert(inputs: &[PathBuf], options: &ConvertOptions, quiet: bool) {
    let batch = inputs.len() > 1;

    let pb = if quiet || !batch {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} [{pos}/{len}] {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb
    };

    let summary = convert_all(inputs, options, |progress| match progress {
        ConvertProgress::Started { total } => {
            log::debug!("Converting {total} image(s)");
        }
        ConvertProgress::Converting { path, .. } => {
            pb.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            pb.tick();
        }
        ConvertProgress::Converted(output) => {
            pb.suspend(|| report_success(&output));
            pb.inc(1);
        }
        ConvertProgress::Failed { path, message } => {
            pb.suspend(|| log::error!("{}: {}", path.display(), message));
            pb.inc(1);
        }
        ConvertProgress::Finished => pb.finish_and_clear(),
    });

    if batch {
        log::info!(
            "{} converted, {} failed",
            summary
                .converted
                .len()
                .if_supports_color(Stdout, |t| t.green()),
            summary.failed.len().if_supports_color(Stdout, |t| t.red()),
        );
    }
}

fn report_success(output: &ConversionOutput) {
    log::info!(
        "{} {} -> {}, {} ({} track(s))",
        "Converted".if_supports_color(Stdout, |t| t.green()),
        output.source.display(),
        output
            .bin_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        output
            .cue_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        output.track_count,
    );
}
