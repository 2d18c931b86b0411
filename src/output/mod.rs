//! Reading and writing report files, and running report scripts

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use reportage::config::Settings;
use reportage::language::LoadingError;

/// Name of the environment variable the settings are handed to scripts in.
pub const SETTINGS_VARIABLE: &str = "REPORTAGE_SETTINGS";

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

pub fn write<'i>(filename: &'i Path, content: &str) -> Result<(), LoadingError<'i>> {
    match std::fs::write(filename, content) {
        Ok(()) => {
            info!("Wrote {}", filename.display());
            Ok(())
        }
        Err(error) => {
            debug!(?error);
            Err(LoadingError {
                problem: "Failed writing".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename,
            })
        }
    }
}

/// Run the report script and capture what it prints as the body of the
/// report. A script that fails is only warned about; whatever it managed to
/// print is still used.
pub fn run_script<'i>(
    script: &'i Path,
    settings: &Settings,
    arguments: &[String],
) -> Result<String, LoadingError<'i>> {
    if !script.exists() {
        return Err(LoadingError {
            problem: "Script not found".to_string(),
            details: String::new(),
            filename: script,
        });
    }

    let exported = match settings.to_toml() {
        Ok(exported) => exported,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Unable to pass settings to script".to_string(),
                details: error.to_string(),
                filename: script,
            });
        }
    };

    let mut command = match settings
        .interpreter
        .as_deref()
    {
        Some(interpreter) => {
            let mut words = interpreter.split_whitespace();
            let program = words
                .next()
                .unwrap_or(interpreter);
            let mut command = Command::new(program);
            command
                .args(words)
                .arg(script);
            command
        }
        None => Command::new(script),
    };

    command
        .args(arguments)
        .env(SETTINGS_VARIABLE, exported)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    info!("Running script: {}", script.display());
    debug!(?command);

    let output = match command.output() {
        Ok(output) => output,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Unable to run script".to_string(),
                details: error.to_string(),
                filename: script,
            });
        }
    };

    if !output
        .status
        .success()
    {
        warn!("Script {} failed: {}", script.display(), output.status);
    }

    Ok(decode(script, &output.stdout))
}

// Invalid UTF-8 is replaced rather than rejected, but not silently.
fn decode(script: &Path, bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(
            "Output of script {} is not valid UTF-8; invalid bytes were replaced",
            script.display()
        );
    }
    text.into_owned()
}

/// Where the finished report for the given script goes. Without an explicit
/// output it sits next to the script; an output path not ending in `.html`
/// is taken to be a directory.
pub fn target<'i>(script: &Path, output: Option<&'i Path>) -> Result<PathBuf, LoadingError<'i>> {
    let output = match output {
        None => return Ok(script.with_extension("html")),
        Some(output) => output,
    };

    if output
        .extension()
        .is_some_and(|extension| extension == "html")
    {
        return Ok(output.to_path_buf());
    }

    if let Err(error) = std::fs::create_dir_all(output) {
        debug!(?error);
        return Err(LoadingError {
            problem: "Unable to create output directory".to_string(),
            details: error
                .kind()
                .to_string(),
            filename: output,
        });
    }

    let name = script
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| "report".into());
    Ok(output
        .join(name)
        .with_extension("html"))
}
