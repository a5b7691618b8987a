//! Parsing Options.
//! `recolor [INPUT] [--draw] [--animate] ...`, extra flags may come from `RECOLOR_FLAGS`.

use std::error::Error;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

fn make_options_parser() -> Command {
    Command::new("recolor")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Recolor a 3-colored graph so that every vertex changes color")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Path to the JSON file containing graph data")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("draw")
                .short('d')
                .long("draw")
                .action(ArgAction::SetTrue)
                .help("Show the graph before and after recoloring"),
        )
        .arg(
            Arg::new("animate")
                .short('a')
                .long("animate")
                .action(ArgAction::SetTrue)
                .help("Show the transition from the old colors to the new ones"),
        )
        .arg(
            Arg::new("dot-dir")
                .long("dot-dir")
                .value_name("DIR")
                .help("Write Graphviz files to DIR instead of printing tables")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the recolored graph to FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("FILE")
                .help("Write a JSON summary of the run to FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML file with search limits and animation pacing")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max-steps")
                .long("max-steps")
                .value_name("N")
                .help("Give up after trying N candidate colors")
                .value_parser(value_parser!(u64)),
        )
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub draw: bool,
    pub animate: bool,
    pub dot_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub max_steps: Option<u64>,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let matches = make_options_parser().try_get_matches_from(flags.iter())?;
        Ok(Options {
            input: matches.get_one::<PathBuf>("input").cloned(),
            draw: matches.get_flag("draw"),
            animate: matches.get_flag("animate"),
            dot_dir: matches.get_one::<PathBuf>("dot-dir").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            report: matches.get_one::<PathBuf>("report").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            max_steps: matches.get_one::<u64>("max-steps").copied(),
        })
    }

    /// Environment flags first, so command-line flags can follow them.
    pub fn parse_with_env(env_flags: &str, args: &[String]) -> Result<Self, Box<dyn Error>> {
        let mut flags = shellwords::split(env_flags)?;
        flags.extend_from_slice(args);
        Self::parse_from_args(&flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_str() {
        let options = Options::parse_from_str("graph.json --draw -o out/new.json").unwrap();
        assert_eq!(options.input, Some(PathBuf::from("graph.json")));
        assert!(options.draw);
        assert!(!options.animate);
        assert_eq!(options.output, Some(PathBuf::from("out/new.json")));
    }

    #[test]
    fn test_parse_from_str_err() {
        assert!(Options::parse_from_str("graph.json --unknown").is_err());
        assert!(Options::parse_from_str("graph.json --max-steps lots").is_err());
        assert!(Options::parse_from_str("\"unterminated").is_err());
    }

    #[test]
    fn test_input_is_optional() {
        let options = Options::parse_from_args(&[]).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_env_flags_merge_with_args() {
        let options =
            Options::parse_with_env("--max-steps 50 --animate", &["g.json".to_owned()]).unwrap();
        assert_eq!(options.max_steps, Some(50));
        assert!(options.animate);
        assert_eq!(options.input, Some(PathBuf::from("g.json")));
    }
}
