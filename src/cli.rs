//! Argument parsing for the headless demo runner.

use anyhow::{anyhow, Result};

/// Fallback for `--log` when the flag is absent.
pub const LOG_PATH_ENV: &str = "BUILD_MATCH_LOG_PATH";

pub const USAGE: &str = "usage: build-match [--seed N] [--moves N] [--json] [--log PATH]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: u32,
    /// Maximum number of swaps to play.
    pub moves: u32,
    /// Print JSON lines instead of text boards.
    pub json: bool,
    pub log_path: Option<String>,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            seed: 1,
            moves: 10,
            json: false,
            log_path: None,
            help: false,
        }
    }
}

impl CliArgs {
    /// `--log` if given, else the environment fallback (empty means unset).
    pub fn log_path_or_env(&self) -> Option<String> {
        self.log_path.clone().or_else(|| {
            std::env::var(LOG_PATH_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
        })
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("cli: missing value for --seed"))?;
                out.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("cli: invalid --seed value: {}", v))?;
            }
            "--moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("cli: missing value for --moves"))?;
                out.moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("cli: invalid --moves value: {}", v))?;
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("cli: missing value for --log"))?;
                out.log_path = Some(v.clone());
            }
            "--json" => out.json = true,
            "-h" | "--help" => out.help = true,
            other => {
                return Err(anyhow!("cli: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parses_all_flags() {
        let cfg = parse_args(&args(&[
            "--seed", "42", "--moves", "3", "--json", "--log", "/tmp/bm.jsonl",
        ]))
        .unwrap();
        assert_eq!(
            cfg,
            CliArgs {
                seed: 42,
                moves: 3,
                json: true,
                log_path: Some("/tmp/bm.jsonl".to_string()),
                help: false,
            }
        );
    }

    #[test]
    fn test_missing_value() {
        let err = parse_args(&args(&["--seed"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --seed"));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_args(&args(&["--moves", "-1"])).unwrap_err();
        assert!(err.to_string().contains("invalid --moves value"));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(&args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument: --fast"));
    }

    #[test]
    fn test_explicit_log_wins_over_env() {
        let cfg = parse_args(&args(&["--log", "a.jsonl"])).unwrap();
        assert_eq!(cfg.log_path_or_env().as_deref(), Some("a.jsonl"));
    }
}
