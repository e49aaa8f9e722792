use classwrap_core::{
    FormatterConfig, ParsedClasses, UncategorizedPosition, ViewportGrouping, WidthMeasure,
    format_class_lines, group_classes,
};
use std::io::Read;

const LOG_ENV: &str = "CLASSWRAP_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(classwrap_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<classwrap_core::Error> for CliError {
    fn from(value: classwrap_core::Error) -> Self {
        Self::Core(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Format,
    Group,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    config: Option<String>,
    input: Option<String>,
    parsed: bool,
    json: bool,
    print_width: Option<usize>,
    grouping: Option<ViewportGrouping>,
    uncategorized: Option<UncategorizedPosition>,
    width_measure: Option<WidthMeasure>,
}

fn usage() -> &'static str {
    "classwrap-cli\n\
\n\
USAGE:\n\
  classwrap-cli [format] --config <path> [--print-width <n>] [--grouping separate|separate-categorized|inline] [--uncategorized before|after] [--width-measure chars|display] [--parsed] [--json] [<path>|-]\n\
  classwrap-cli group --config <path> [--parsed] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a whitespace-separated class attribute; classes prefixed with a configured\n\
    viewport (`md:hidden`) are treated as that viewport's classes.\n\
  - --parsed reads `{\"baseClasses\": [...], \"viewportClasses\": {...}}` JSON instead.\n\
  - format prints one line per output line; --json prints a JSON array.\n\
  - group prints the category buckets of the base and viewport classes as JSON.\n\
  - Command-line options override the config file.\n\
  - Set CLASSWRAP_LOG (e.g. `debug`) to enable diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "format" => args.command = Command::Format,
            "group" => args.command = Command::Group,
            "--parsed" => args.parsed = true,
            "--json" => args.json = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--print-width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.print_width = Some(w.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--grouping" => {
                let Some(mode) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.grouping = Some(ViewportGrouping::from(mode.as_str()));
            }
            "--uncategorized" => {
                let Some(position) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.uncategorized = Some(match position.as_str() {
                    "before" => UncategorizedPosition::BeforeCategorized,
                    "after" => UncategorizedPosition::AfterCategorized,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--width-measure" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width_measure = Some(match kind.as_str() {
                    "chars" => WidthMeasure::Chars,
                    "display" => WidthMeasure::Display,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.config.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_config(args: &Args) -> Result<FormatterConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => FormatterConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => FormatterConfig::default(),
    };
    if let Some(width) = args.print_width {
        config.print_width = width;
    }
    if let Some(grouping) = args.grouping {
        config.viewport_grouping = grouping;
    }
    if let Some(position) = args.uncategorized {
        config.uncategorized_position = position;
    }
    if let Some(measure) = args.width_measure {
        config.width_measure = measure;
    }
    Ok(config)
}

/// Splits a raw class attribute into base classes and per-viewport classes.
///
/// A class counts as viewport-scoped when it starts with `<viewport>:` for a configured viewport;
/// the prefix is removed from the stored name.
fn split_class_attribute(text: &str, viewports: &[String]) -> ParsedClasses {
    let mut parsed = ParsedClasses::default();
    for class in text.split_whitespace() {
        let scoped = viewports
            .iter()
            .filter(|viewport| !viewport.is_empty())
            .find_map(|viewport| {
                class
                    .strip_prefix(viewport.as_str())
                    .and_then(|rest| rest.strip_prefix(':'))
                    .map(|rest| (viewport, rest))
            });
        match scoped {
            Some((viewport, rest)) => parsed
                .viewport_classes
                .entry(viewport.clone())
                .or_default()
                .push(rest.to_string()),
            None => parsed.base_classes.push(class.to_string()),
        }
    }
    parsed
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let text = read_input(args.input.as_deref())?;
    let classes = if args.parsed {
        ParsedClasses::from_json_str(&text)?
    } else {
        split_class_attribute(&text, &config.viewports)
    };
    tracing::debug!(
        base = classes.base_classes.len(),
        viewports = classes.viewport_classes.len(),
        "read class attribute"
    );

    match args.command {
        Command::Format => {
            let lines = format_class_lines(&classes, &config);
            if args.json {
                serde_json::to_writer(std::io::stdout().lock(), &lines)?;
                println!();
            } else {
                for line in &lines {
                    println!("{line}");
                }
            }
            Ok(())
        }
        Command::Group => {
            let mut combined = classes.base_classes.clone();
            let mut seen: Vec<&str> = Vec::new();
            for viewport in &config.viewports {
                if seen.contains(&viewport.as_str()) {
                    continue;
                }
                seen.push(viewport.as_str());
                combined.extend(classes.prefixed_viewport_classes(viewport));
            }
            let grouped = group_classes(&combined, &config.categories, config.viewports.as_slice());
            serde_json::to_writer_pretty(std::io::stdout().lock(), &grouped)?;
            println!();
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
