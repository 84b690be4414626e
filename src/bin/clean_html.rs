//! Command-line harness: clean saved HTML pages into `<title>_clean.html`.
//!
//! Prints one JSON `CleaningResult` per document on stdout and a summary on
//! stderr. Existing files are never overwritten; a clashing name gets a
//! number. Exits with status 1 if any document failed.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use wx_html_cleaner::{
    clean_named_with_options, encoding, naming, CleanedDocument, CleaningResult, Options,
};

/// Clean saved article pages into minimal HTML documents.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// HTML files to clean. Reads stdin when none are given.
    files: Vec<PathBuf>,
    /// Directory for cleaned copies. Defaults to each input's directory.
    #[clap(short, long)]
    out_dir: Option<PathBuf>,
    /// Skip the DOM tree and use the regex pipeline only.
    #[clap(long)]
    string_mode: bool,
    /// Write the cleaned stdin document to stdout instead of a file. The JSON
    /// result then goes to stderr.
    #[clap(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let options = Options {
        tree_parsing: !cli.string_mode,
        ..Options::default()
    };

    let results = if cli.files.is_empty() {
        vec![clean_stdin(&cli, &options)]
    } else {
        cli.files
            .iter()
            .map(|path| clean_file(path, cli.out_dir.as_deref(), &options))
            .collect()
    };

    let failed = results.iter().filter(|r| !r.success).count();
    for result in &results {
        let line = serde_json::to_string(result).unwrap_or_default();
        // stdout carries the document itself in --stdout mode
        if cli.stdout && cli.files.is_empty() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
    eprintln!(
        "cleaned {} of {} document(s), {failed} failed",
        results.len() - failed,
        results.len()
    );

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn clean_file(path: &Path, out_dir: Option<&Path>, options: &Options) -> CleaningResult {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("cannot read {}: {err}", path.display());
            return CleaningResult::failed(name, err);
        }
    };
    let html = encoding::decode_html(&bytes);

    let cleaned = match clean_named_with_options(&html, &name, options) {
        Ok(cleaned) => cleaned,
        Err(err) => {
            error!("{name}: {err}");
            return CleaningResult::failed(name, err);
        }
    };

    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| path.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    match write_cleaned(&dir, &cleaned) {
        Ok(file_name) => {
            info!("{name} -> {}", dir.join(&file_name).display());
            CleaningResult::succeeded(name, file_name)
        }
        Err(err) => {
            error!("cannot write {name} into {}: {err}", dir.display());
            CleaningResult::failed(name, err)
        }
    }
}

/// Write under a file name no existing file uses. Returns the name written.
fn write_cleaned(dir: &Path, cleaned: &CleanedDocument) -> io::Result<String> {
    let file_name = naming::unique_file_name(&cleaned.title, |n| dir.join(n).exists());
    fs::write(dir.join(&file_name), &cleaned.html)?;
    Ok(file_name)
}

fn clean_stdin(cli: &Cli, options: &Options) -> CleaningResult {
    const STDIN_NAME: &str = "stdin.html";

    let mut bytes = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut bytes) {
        return CleaningResult::failed(STDIN_NAME, err);
    }
    let html = encoding::decode_html(&bytes);

    let cleaned = match clean_named_with_options(&html, STDIN_NAME, options) {
        Ok(cleaned) => cleaned,
        Err(err) => return CleaningResult::failed(STDIN_NAME, err),
    };
    if cli.stdout {
        print!("{}", cleaned.html);
        return CleaningResult::succeeded(STDIN_NAME, cleaned.file_name);
    }

    let dir = cli.out_dir.clone().unwrap_or_default();
    match write_cleaned(&dir, &cleaned) {
        Ok(file_name) => CleaningResult::succeeded(STDIN_NAME, file_name),
        Err(err) => CleaningResult::failed(STDIN_NAME, err),
    }
}
