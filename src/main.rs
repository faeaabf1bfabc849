//! Winview - show the Windows options an application would start with
//!
//! Loads `PATH` (or windows.toml from the standard locations) and prints the
//! resolved options as JSON, or as TOML with `--toml`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use winview::config::OptionsFile;
use winview::{log, Options};

#[derive(Debug, Parser)]
#[command(name = "winview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the resolved Windows window and WebView2 options")]
struct Args {
    /// Print TOML instead of JSON
    #[arg(long)]
    toml: bool,

    /// Options file to load instead of the standard locations
    path: Option<PathBuf>,
}

fn run(args: &Args) -> winview::Result<String> {
    let file = match args.path {
        Some(ref p) => OptionsFile::load_from_path(p)?,
        None => OptionsFile::load()?,
    };

    // Round trip through Options so unknown flag names and bad colours fail here
    let options: Options = file.into_options()?;
    log!("Resolved options: {:?}", options);

    let resolved = OptionsFile {
        messages: Some(options.messages()),
        window_class_name: Some(options.window_class_name().to_string()),
        ..OptionsFile::from_options(&options)
    };

    if args.toml {
        resolved.to_toml()
    } else {
        Ok(serde_json::to_string_pretty(&resolved)?)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    winview::log::init();
    log!("main() starting: {:?}", args);

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!("FATAL: {}", e);
            eprintln!("winview: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["winview", "--toml", "my.toml"]).unwrap();
        assert!(args.toml);
        assert_eq!(args.path, Some(PathBuf::from("my.toml")));

        let args = Args::try_parse_from(["winview"]).unwrap();
        assert!(!args.toml);
        assert!(args.path.is_none());

        assert!(Args::try_parse_from(["winview", "--jsonn"]).is_err());
    }

    #[test]
    fn test_run_keeps_unnamed_dll_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("windows.toml");
        std::fs::write(&path, "dll_search_paths = [\"system32\", \"0x4\"]\n").unwrap();

        let args = Args {
            toml: false,
            path: Some(path),
        };
        let output = run(&args).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json["dll_search_paths"],
            serde_json::json!(["system32", "0x4"])
        );
        assert_eq!(json["window_class_name"], "wailsWindow");
    }
}
