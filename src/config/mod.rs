//! Settings controlling how a report is generated, read from a TOML file
//! and overridden from the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::language::{Kind, LoadingError};

/// Name of the configuration file looked for in the current directory.
pub const DEFAULT_CONFIG: &str = "reportage.toml";

const MINIMUM_WIDTH: u32 = 40;
const MAXIMUM_WIDTH: u32 = 100;

/// Where a caption goes relative to the thing it describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub toc: bool,
    pub numbered_headings: bool,
    pub numbered_tables: bool,
    pub numbered_figures: bool,
    pub numbered_code_blocks: bool,
    pub table_captions: Position,
    pub figure_captions: Position,
    pub code_block_captions: Position,
    /// Width of the page container, as a percentage of the window.
    pub page_width: u32,
    /// Program used to run report scripts; scripts are executed directly
    /// when this is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            toc: false,
            numbered_headings: false,
            numbered_tables: false,
            numbered_figures: false,
            numbered_code_blocks: false,
            table_captions: Position::Top,
            figure_captions: Position::Bottom,
            code_block_captions: Position::Top,
            page_width: 80,
            interpreter: None,
        }
    }
}

/// Values given on the command line. Anything left as `None` falls back to
/// the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub toc: Option<bool>,
    pub numbered_headings: Option<bool>,
    pub numbered_tables: Option<bool>,
    pub numbered_figures: Option<bool>,
    pub numbered_code_blocks: Option<bool>,
    pub page_width: Option<u32>,
    pub interpreter: Option<String>,
}

impl Settings {
    pub fn parse(content: &str) -> Result<Settings, toml::de::Error> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings.clamped())
    }

    /// Apply command line values on top of these settings.
    pub fn with(mut self, overrides: Overrides) -> Settings {
        if let Some(toc) = overrides.toc {
            self.toc = toc;
        }
        if let Some(numbered) = overrides.numbered_headings {
            self.numbered_headings = numbered;
        }
        if let Some(numbered) = overrides.numbered_tables {
            self.numbered_tables = numbered;
        }
        if let Some(numbered) = overrides.numbered_figures {
            self.numbered_figures = numbered;
        }
        if let Some(numbered) = overrides.numbered_code_blocks {
            self.numbered_code_blocks = numbered;
        }
        if let Some(width) = overrides.page_width {
            self.page_width = width;
        }
        if overrides
            .interpreter
            .is_some()
        {
            self.interpreter = overrides.interpreter;
        }
        self.clamped()
    }

    // Out of range widths are pulled back into range rather than rejected.
    fn clamped(mut self) -> Settings {
        self.page_width = self
            .page_width
            .clamp(MINIMUM_WIDTH, MAXIMUM_WIDTH);
        self
    }

    pub fn numbered(&self, kind: Kind) -> bool {
        match kind {
            Kind::Table => self.numbered_tables,
            Kind::Figure => self.numbered_figures,
            Kind::CodeBlock => self.numbered_code_blocks,
        }
    }

    pub fn captions(&self, kind: Kind) -> Position {
        match kind {
            Kind::Table => self.table_captions,
            Kind::Figure => self.figure_captions,
            Kind::CodeBlock => self.code_block_captions,
        }
    }

    /// Render as TOML, for handing to report scripts.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Read settings from the given file.
pub fn load(filename: &Path) -> Result<Settings, LoadingError<'_>> {
    let content = match std::fs::read_to_string(filename) {
        Ok(content) => content,
        Err(error) => {
            debug!(?error);
            return match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "Configuration not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading configuration".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            };
        }
    };

    match Settings::parse(&content) {
        Ok(settings) => {
            info!("Using configuration from {}", filename.display());
            Ok(settings)
        }
        Err(error) => Err(LoadingError {
            problem: "Invalid configuration".to_string(),
            details: error
                .message()
                .to_string(),
            filename,
        }),
    }
}

/// Settings from the file named on the command line, or else from
/// `reportage.toml` in the current directory if there is one, or else the
/// defaults.
pub fn locate(explicit: Option<&Path>) -> Result<Settings, LoadingError<'_>> {
    if let Some(filename) = explicit {
        return load(filename);
    }

    let filename = Path::new(DEFAULT_CONFIG);
    if filename.exists() {
        load(filename)
    } else {
        debug!("No configuration file, using defaults");
        Ok(Settings::default())
    }
}
