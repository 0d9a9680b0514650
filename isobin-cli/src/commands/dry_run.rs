use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use isobin_core::offset_to_time;
use isobin_lib::{ConversionPlan, ConvertOptions, plan_conversion};

/// Print what each conversion would produce, without writing anything.
pub(crate) fn run_dry_run(inputs: &[PathBuf], options: &ConvertOptions) {
    log::info!(
        "{}",
        "Dry run: no files will be written".if_supports_color(Stdout, |t| t.dimmed()),
    );

    for input in inputs {
        match plan_conversion(input, options) {
            Ok(plan) => print_plan(&plan),
            Err(e) => log::error!("{}: {}", input.display(), e),
        }
    }
}

fn print_plan(plan: &ConversionPlan) {
    log::info!("");
    log::info!(
        "{} ({} bytes, cue: {})",
        plan.source.display().if_supports_color(Stdout, |t| t.bold()),
        plan.image_len,
        plan.descriptor_path.display(),
    );
    for track in &plan.tracks {
        let duration = offset_to_time(track.length).unwrap_or_else(|_| "--:--:--".to_string());
        log::info!(
            "  TRACK {:02} {:<12} INDEX 01 {}  offset {:>12}  length {:>12} ({})",
            track.number,
            track.track_type,
            track.starting_time,
            track.offset,
            track.length,
            duration,
        );
        if let Some(pregap) = &track.pregap {
            log::info!("           PREGAP {pregap}");
        }
    }
    log::info!(
        "  would write {} and {}",
        plan.bin_path.display().if_supports_color(Stdout, |t| t.cyan()),
        plan.cue_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
