// Command-line interface for typomark
//
// Renders Markdown into the keyed output tree and prints it in one of the registered formats.
//
// Usage:
//  typomark <input> [--to <format>] [-o <file>]         - Render a file (default)
//  typomark render <input> [--to <format>] [-o <file>]  - Same as above (explicit)
//  typomark --list-formats                              - List output formats
//
// The input may be `-` to read from stdin. Source that renders to nothing (empty, or only
// blank lines) produces no output at all.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// Configuration keys are overridden the same way; the remaining parameters are passed on
// to the format.
// Example:
//  typomark notes.md --extra-show-keys --extra-root-tag section

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use typomark::{ComrakParser, FormatRegistry, MarkdownRenderer, ParserOptions, RenderOptions};
use typomark_config::{Loader, TypomarkConfig, LOCAL_CONFIG_FILE};

const STDIN_PATH: &str = "-";

/// Formats accepted by `--to`. Kept in sync with build.rs and the default registry.
const AVAILABLE_FORMATS: &[&str] = &["json", "treeviz"];

/// Extra params that are booleans. They only take the next argument as their value when it
/// is a boolean literal, so `--extra-show-keys notes.md` keeps `notes.md` as the input.
const BOOLEAN_PARAMS: &[&str] = &[
    "show-keys",
    "tables",
    "strikethrough",
    "autolink",
    "tasklist",
    "footnotes",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
///
/// Boolean params listed in [`BOOLEAN_PARAMS`] only consume a following boolean literal.
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| {
                    !next.starts_with('-')
                        && (!BOOLEAN_PARAMS.contains(&key) || parse_bool(next).is_some())
                })
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("typomark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown into keyed output trees")
        .long_about(
            "typomark parses CommonMark and renders it into a tree of elements and widgets,\n\
            where every node and attribute carries a sequence key.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration or pass format options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            typomark notes.md                       # Tree visualization\n  \
            typomark notes.md --to json -o out.json # JSON tree to a file\n  \
            cat notes.md | typomark -               # Read from stdin\n  \
            typomark notes.md --extra-show-keys     # Show sequence keys",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a typomark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a Markdown file (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input Markdown file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to output.format from the configuration)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "typomark=warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare input path means "render"
            if cleaned_args.len() > 1
                && (cleaned_args[1] == STDIN_PATH || !cleaned_args[1].starts_with('-'))
                && cleaned_args[1] != "render"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: an input path is required");
                std::process::exit(1);
            };
            let to = sub_matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, &to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_render_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &TypomarkConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_source(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let parser = ComrakParser::new(ParserOptions::from(&config.parser));
    let mut renderer =
        MarkdownRenderer::with_parser(parser).with_options(RenderOptions::from(&config.render));

    let Some(root) = renderer.render(&source) else {
        tracing::debug!(input, "nothing to render");
        return;
    };

    let params = build_format_params(config, extra_params);
    let text = registry
        .serialize_with_params(&root, to, &params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn read_source(input: &str) -> std::io::Result<String> {
    if input == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn handle_list_formats_command() {
    println!("Available output formats:\n");
    let registry = FormatRegistry::default();
    for (name, description) in registry.describe_formats() {
        println!("  {name:<10} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TypomarkConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Pull configuration overrides out of the extra params. What remains goes to the format.
fn apply_config_overrides(
    config: &mut TypomarkConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = extra_params.remove("show-keys") {
        config.output.show_keys = parse_bool_arg("show-keys", &raw);
    }

    let parser_flags: [(&str, &mut bool); 5] = [
        ("tables", &mut config.parser.tables),
        ("strikethrough", &mut config.parser.strikethrough),
        ("autolink", &mut config.parser.autolink),
        ("tasklist", &mut config.parser.tasklist),
        ("footnotes", &mut config.parser.footnotes),
    ];
    for (flag, slot) in parser_flags {
        if let Some(raw) = extra_params.remove(flag) {
            *slot = parse_bool_arg(flag, &raw);
        }
    }

    if let Some(raw) = take_override(extra_params, &["root-tag", "root"]) {
        config.render.root_tag = raw;
    }
    if let Some(raw) = extra_params.remove("table-class") {
        config.render.table_class = raw;
    }
    if let Some(raw) = extra_params.remove("row-class") {
        config.render.row_class = raw;
    }
    if let Some(raw) = extra_params.remove("row-style") {
        config.render.row_style = raw;
    }
}

fn build_format_params(
    config: &TypomarkConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "show-keys".to_string(),
        if config.output.show_keys {
            "true".to_string()
        } else {
            "false".to_string()
        },
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool(raw).unwrap_or_else(|| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
