// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use setsift::{
    analyze, handle_request_str, parse_input, AnalysisOptions, ErrorResponse, Groups,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{report, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Analyze {
            files,
            name,
            threshold,
            suggestion_threshold,
            json,
        } => run_analyze(
            &files,
            &name,
            AnalysisOptions {
                threshold,
                suggestion_threshold,
            },
            json,
        ),
        Commands::ServeJson { threshold, pretty } => run_serve_json(threshold, pretty),
        Commands::Score { a, b, threshold } => {
            report::print_score(&a, &b, threshold);
            Ok(())
        }
        Commands::Parse { file } => run_parse(file.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_stdin() -> Result<String, String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    Ok(raw)
}

/// Group name for a file: explicit name if given, else the file stem.
fn group_name(path: &Path, explicit: Option<&String>) -> String {
    match explicit {
        Some(name) => name.clone(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

fn run_analyze(
    files: &[PathBuf],
    names: &[String],
    options: AnalysisOptions,
    json: bool,
) -> Result<(), String> {
    if names.len() > files.len() {
        return Err(format!(
            "{} names given for {} files",
            names.len(),
            files.len()
        ));
    }

    let mut groups = Groups::new();
    for (i, path) in files.iter().enumerate() {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let name = group_name(path, names.get(i));
        if groups.contains_key(&name) {
            return Err(format!("Duplicate group name '{}'", name));
        }
        groups.insert(name, parse_input(&text));
    }

    let result = analyze(groups, &options).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", out);
    } else {
        report::print_report(&result);
    }
    Ok(())
}

fn run_serve_json(threshold: u8, pretty: bool) -> Result<(), String> {
    let body = read_stdin()?;
    let options = AnalysisOptions {
        threshold,
        ..Default::default()
    };

    let (response, failed) = match handle_request_str(&body, &options) {
        Ok(result) => (serde_json::to_value(&result), None),
        Err(e) => {
            let status = e.status_code();
            let error = ErrorResponse {
                error: e.to_string(),
            };
            (serde_json::to_value(&error), Some((status, e)))
        }
    };
    let response = response.map_err(|e| format!("Failed to serialize response: {}", e))?;

    let text = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .map_err(|e| format!("Failed to serialize response: {}", e))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text).map_err(|e| format!("Failed to write response: {}", e))?;

    match failed {
        Some((status, e)) => Err(format!("request failed ({}): {}", status, e)),
        None => Ok(()),
    }
}

fn run_parse(file: Option<&Path>) -> Result<(), String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => read_stdin()?,
    };
    for item in parse_input(&text) {
        println!("{}", item);
    }
    Ok(())
}
