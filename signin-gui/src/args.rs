//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    ConfigPath(PathBuf),
    PropsPath(PathBuf),
    Html,
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("signin-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --config <PATH>     Path of the TOML configuration file
    --props <PATH>      Path of a JSON file with the initial form props
    --html              Print the form as HTML and exit
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(a) => res.push(Arg::ConfigPath(PathBuf::from(a))),
                None => return Err("missing arg to --config".into()),
            },
            "--props" => match iter.next() {
                Some(a) => res.push(Arg::PropsPath(PathBuf::from(a))),
                None => return Err("missing arg to --props".into()),
            },
            "--html" => res.push(Arg::Html),
            other => return Err(format!("unknown argument {}", other).into()),
        }
    }

    Ok(res)
}
