use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::{debug, Level};

use reportage::config::{self, Overrides};
use reportage::resolving::{self, Options};
use reportage::templating::{self, Html, Page};

mod output;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("reportage")
        .version(VERSION)
        .propagate_version(true)
        .about("Generate HTML reports with cross references and a table of contents.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Show debugging output."),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve the references in an already emitted report")
                .arg(
                    Arg::new("toc")
                        .long("toc")
                        .action(ArgAction::SetTrue)
                        .help("Insert a table of contents built from the report's headings."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the resolved report here rather than back over the input."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The emitted report you want to resolve."),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Run a report script and turn what it prints into a finished report")
                .arg(
                    Arg::new("toc")
                        .long("toc")
                        .action(ArgAction::SetTrue)
                        .help("Insert a table of contents built from the report's headings."),
                )
                .arg(
                    Arg::new("numbered-headings")
                        .long("numbered-headings")
                        .action(ArgAction::SetTrue)
                        .help("Number headings hierarchically."),
                )
                .arg(
                    Arg::new("numbered-tables")
                        .long("numbered-tables")
                        .action(ArgAction::SetTrue)
                        .help("Number table captions."),
                )
                .arg(
                    Arg::new("numbered-figures")
                        .long("numbered-figures")
                        .action(ArgAction::SetTrue)
                        .help("Number figure captions."),
                )
                .arg(
                    Arg::new("numbered-code-blocks")
                        .long("numbered-code-blocks")
                        .action(ArgAction::SetTrue)
                        .help("Number code block captions."),
                )
                .arg(
                    Arg::new("page-width")
                        .long("page-width")
                        .value_parser(value_parser!(u32))
                        .help("Width of the page content as a percentage, between 40 and 100."),
                )
                .arg(
                    Arg::new("interpreter")
                        .long("interpreter")
                        .help("Program to run the script with, for example python3."),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Configuration file to use instead of reportage.toml."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Where to write the report: an .html file, or a directory."),
                )
                .arg(
                    Arg::new("script")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The script that prints the body of the report."),
                )
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .last(true)
                        .help("Arguments passed through to the script."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match matches.subcommand() {
        Some(("resolve", submatches)) => resolve(submatches),
        Some(("build", submatches)) => build(submatches),
        Some(_) => Err("No valid subcommand was used".to_string()),
        None => {
            println!("usage: reportage [COMMAND] ...");
            println!("Try '--help' for more information.");
            return;
        }
    };

    if let Err(problem) = result {
        eprintln!("{}: {}", "error".bright_red(), problem);
        std::process::exit(1);
    }
}

fn required<'a>(submatches: &'a ArgMatches, name: &str) -> Result<&'a Path, String> {
    submatches
        .get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .ok_or_else(|| format!("missing {}", name))
}

fn resolve(submatches: &ArgMatches) -> Result<(), String> {
    let filename = required(submatches, "filename")?;
    debug!(?filename);

    let content = output::load(filename).map_err(|error| error.to_string())?;

    let options = Options {
        toc: submatches.get_flag("toc"),
    };
    let resolved = resolving::resolve(&content, &options).map_err(|error| error.to_string())?;

    let target = submatches
        .get_one::<PathBuf>("output")
        .map(PathBuf::as_path)
        .unwrap_or(filename);
    output::write(target, &resolved).map_err(|error| error.to_string())
}

fn build(submatches: &ArgMatches) -> Result<(), String> {
    let script = required(submatches, "script")?;
    debug!(?script);

    let flag = |name: &str| submatches.get_flag(name).then_some(true);
    let overrides = Overrides {
        toc: flag("toc"),
        numbered_headings: flag("numbered-headings"),
        numbered_tables: flag("numbered-tables"),
        numbered_figures: flag("numbered-figures"),
        numbered_code_blocks: flag("numbered-code-blocks"),
        page_width: submatches
            .get_one::<u32>("page-width")
            .copied(),
        interpreter: submatches
            .get_one::<String>("interpreter")
            .cloned(),
    };

    let explicit = submatches
        .get_one::<PathBuf>("config")
        .map(PathBuf::as_path);
    let settings = config::locate(explicit)
        .map_err(|error| error.to_string())?
        .with(overrides);
    debug!(?settings);

    let arguments: Vec<String> = submatches
        .get_many::<String>("args")
        .unwrap_or_default()
        .cloned()
        .collect();

    let body = output::run_script(script, &settings, &arguments).map_err(|error| error.to_string())?;
    let (title, body) = resolving::lift_title(&body);

    let name = script
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let page = Page {
        name: &name,
        title: title.as_deref(),
        width: settings.page_width,
    };
    let document = templating::fill(&Html, &page, &body).map_err(|error| error.to_string())?;

    let options = Options { toc: settings.toc };
    let resolved = resolving::resolve(&document, &options).map_err(|error| error.to_string())?;

    let target = output::target(
        script,
        submatches
            .get_one::<PathBuf>("output")
            .map(PathBuf::as_path),
    )
    .map_err(|error| error.to_string())?;
    output::write(&target, &resolved).map_err(|error| error.to_string())
}
