use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::ValueParser, value_parser};
use randcuts::{
    FadeCurve,
    constants::{DEFAULT_FADE_MS, DEFAULT_OUTPUT_PATH},
};

pub const SEED_ENV: &str = "RANDCUTS_SEED";

pub fn parse_fade_curve(value: &str) -> Result<FadeCurve, String> {
    value.parse()
}

/// Accepts any 64-bit integer; negative seeds keep their two's complement bits.
pub fn parse_seed(value: &str) -> Result<u64, String> {
    let value = value.trim();
    value
        .parse::<u64>()
        .or_else(|_| {
            value
                .parse::<i64>()
                .map(|seed| u64::from_ne_bytes(seed.to_ne_bytes()))
        })
        .map_err(|_| format!("invalid seed '{value}' (expected an integer)"))
}

pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about("Create a random concatenation of audio clips")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("src_path")
                .value_name("SRC_PATH")
                .help("Path to the source audio file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("durations")
                .value_name("DURATION")
                .help("Durations in seconds for each clip")
                .required(true)
                .num_args(1..)
                .allow_negative_numbers(true)
                .action(ArgAction::Append)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for random start positions")
                .env(SEED_ENV)
                .allow_negative_numbers(true)
                .value_parser(ValueParser::new(parse_seed)),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("OUT")
                .help("Output audio path (format inferred from extension)")
                .default_value(DEFAULT_OUTPUT_PATH)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fade-ms")
                .long("fade-ms")
                .value_name("MS")
                .help("Fade applied to each end of a clip, capped at half the clip")
                .default_value(DEFAULT_FADE_MS.to_string())
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("fade-curve")
                .long("fade-curve")
                .value_name("CURVE")
                .help("Fade shape: linear or equal-power")
                .default_value(FadeCurve::default().to_string())
                .value_parser(ValueParser::new(parse_fade_curve)),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the clip placement without writing the output file")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn cli_collects_durations_in_order() {
        let matches = build_cli()
            .try_get_matches_from(["randcuts", "in.wav", "3.5", "1.25", "2"])
            .unwrap();
        let durations: Vec<f64> = matches
            .get_many::<f64>("durations")
            .unwrap()
            .copied()
            .collect();
        assert_eq!(durations, vec![3.5, 1.25, 2.0]);
        assert_eq!(
            matches.get_one::<PathBuf>("out").unwrap(),
            &PathBuf::from(DEFAULT_OUTPUT_PATH)
        );
    }

    #[test]
    fn cli_accepts_negative_durations_for_later_validation() {
        let matches = build_cli()
            .try_get_matches_from(["randcuts", "in.wav", "-0.5"])
            .unwrap();
        let durations: Vec<f64> = matches
            .get_many::<f64>("durations")
            .unwrap()
            .copied()
            .collect();
        assert_eq!(durations, vec![-0.5]);
    }

    #[test]
    fn cli_requires_a_duration() {
        assert!(build_cli().try_get_matches_from(["randcuts", "in.wav"]).is_err());
    }

    #[test]
    fn cli_parses_options() {
        let matches = build_cli()
            .try_get_matches_from([
                "randcuts",
                "in.wav",
                "1",
                "--seed",
                "42",
                "--out",
                "mix.wav",
                "--fade-ms",
                "50",
                "--fade-curve",
                "equal-power",
                "--dry-run",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<u64>("seed"), Some(&42));
        assert_eq!(matches.get_one::<u64>("fade-ms"), Some(&50));
        assert_eq!(
            matches.get_one::<FadeCurve>("fade-curve"),
            Some(&FadeCurve::EqualPower)
        );
        assert!(matches.get_flag("dry-run"));
    }

    #[test]
    fn cli_fills_fade_defaults() {
        let matches = build_cli()
            .try_get_matches_from(["randcuts", "in.wav", "1"])
            .unwrap();
        assert_eq!(matches.get_one::<u64>("fade-ms"), Some(&DEFAULT_FADE_MS));
        assert_eq!(
            matches.get_one::<FadeCurve>("fade-curve"),
            Some(&FadeCurve::Linear)
        );
        assert!(matches.get_one::<u64>("seed").is_none());

        let help = build_cli().render_help().to_string();
        assert!(help.contains(&format!("[default: {DEFAULT_FADE_MS}]")));
        assert!(help.contains("[default: linear]"));
    }

    #[test]
    fn cli_accepts_negative_seed() {
        let parse = || {
            build_cli()
                .try_get_matches_from(["randcuts", "in.wav", "1", "--seed", "-3"])
                .unwrap()
                .get_one::<u64>("seed")
                .copied()
        };
        let seed = parse().unwrap();
        assert_eq!(parse(), Some(seed));
        assert_ne!(seed, 3);
        assert_eq!(parse_seed("-1"), Ok(u64::MAX));
    }

    #[test]
    fn cli_seed_keeps_non_negative_values() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("18446744073709551615"), Ok(u64::MAX));
        assert!(parse_seed("forty-two").is_err());
        assert!(parse_seed("1.5").is_err());
    }

    #[test]
    fn cli_rejects_unknown_fade_curve() {
        let result =
            build_cli().try_get_matches_from(["randcuts", "in.wav", "1", "--fade-curve", "cubic"]);
        assert!(result.is_err());
    }
}
