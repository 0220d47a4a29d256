mod cli;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use randcuts::{Config, FadeCurve, generate_with};

use crate::cli::build_cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();

    let src_path = matches
        .get_one::<PathBuf>("src_path")
        .expect("required argument");
    let durations: Vec<f64> = matches
        .get_many::<f64>("durations")
        .expect("required argument")
        .copied()
        .collect();
    let out_path = matches
        .get_one::<PathBuf>("out")
        .expect("defaulted argument");
    let dry_run = matches.get_flag("dry-run");

    let config = Config::builder()
        .seed(matches.get_one::<u64>("seed").copied())
        .fade_ms(
            *matches
                .get_one::<u64>("fade-ms")
                .expect("defaulted argument"),
        )
        .fade_curve(
            *matches
                .get_one::<FadeCurve>("fade-curve")
                .expect("defaulted argument"),
        )
        .build();

    let result = generate_with(src_path, &durations, &config)
        .with_context(|| format!("failed to cut clips from '{}'", src_path.display()))?;

    if !dry_run {
        result
            .export(out_path)
            .with_context(|| format!("failed to export '{}'", out_path.display()))?;
    }

    let mut stdout = io::stdout().lock();
    let source = result.source();
    writeln!(
        stdout,
        "Loaded {} ({} ms, {} ch, {} Hz)",
        src_path.display(),
        source.duration_ms(),
        source.channels(),
        source.sample_rate()
    )?;
    for clip in result.clips() {
        writeln!(stdout, "{clip}")?;
    }

    if dry_run {
        writeln!(
            stdout,
            "Dry run: {} ms of audio would be written to {}",
            result.concatenated().duration_ms(),
            out_path.display()
        )?;
    } else {
        writeln!(
            stdout,
            "Exported concatenated audio to {}",
            out_path.display()
        )?;
    }

    Ok(())
}
