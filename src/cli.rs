use crate::config::load_config;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::parser::parse_tree;
use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "flowtree",
    version,
    about = "Lay out a pipeline tree as a left-to-right flow"
)]
pub struct Args {
    /// Input tree (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout JSON. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file overriding layout constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_level);
    log::debug!("{args:?}");
    execute(&args)
}

fn init_logger(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .try_init();
}

pub fn execute(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("failed to load config")?;
    let input = read_input(args.input.as_deref())?;
    let tree = parse_tree(&input)?;
    log::info!("laying out {} nodes", tree.node_count());

    let layout = compute_layout(&tree, &config.layout)?;
    write_layout_dump(args.output.as_deref(), &layout)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            return read_stdin();
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    read_stdin()
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flowtree-{}-{name}", std::process::id()))
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "flowtree",
            "-i",
            "tree.json",
            "-o",
            "out.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.input.as_deref(), Some(Path::new("tree.json")));
        assert_eq!(args.output.as_deref(), Some(Path::new("out.json")));
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn writes_layout_for_input_file() {
        let input = temp_path("in.json");
        let output = temp_path("out.json");
        std::fs::write(
            &input,
            r#"{"id":"a","name":"A","status":"success","children":[{"id":"b","name":"B","status":"failed"}]}"#,
        )
        .unwrap();

        let args = Args {
            input: Some(input.clone()),
            output: Some(output.clone()),
            config: None,
            log_level: "off".to_string(),
        };
        execute(&args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
        assert_eq!(written["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(written["edges"][0]["source"], "a");
    }

    #[test]
    fn reports_duplicate_ids() {
        let input = temp_path("dup.json");
        std::fs::write(
            &input,
            r#"{"id":"a","status":"success","children":[{"id":"a","status":"success"}]}"#,
        )
        .unwrap();
        let args = Args {
            input: Some(input.clone()),
            output: Some(temp_path("dup-out.json")),
            config: None,
            log_level: "off".to_string(),
        };
        let err = execute(&args).unwrap_err();
        std::fs::remove_file(&input).ok();
        assert!(err.to_string().contains("duplicate node id"));
    }
}
