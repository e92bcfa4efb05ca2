mod test_runner;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use renderer::{HashtagConfig, RenderOptions};

const SUBCOMMANDS: &[&str] = &["render", "test", "help"];
const TOP_LEVEL_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

#[derive(Parser)]
#[command(name = "draft2html", version, about = "Render Draft.js raw content as HTML")]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a raw content JSON file
    Render(RenderArgs),

    /// Run .test.json fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Raw Draft.js content (JSON)
    file: String,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parse only, don't render (exit 0 if valid)
    #[arg(long)]
    check: bool,

    /// Dump the parsed document
    #[arg(long)]
    dump: bool,

    /// List blocks with their type, depth and length
    #[arg(long)]
    list_blocks: bool,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(clap::Args)]
struct OptionArgs {
    /// TOML file with render options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Turn on hashtag detection
    #[arg(long)]
    hashtags: bool,

    /// Hashtag trigger (implies --hashtags)
    #[arg(long)]
    trigger: Option<String>,

    /// Hashtag separator (implies --hashtags)
    #[arg(long)]
    separator: Option<String>,

    /// Add dir="auto" to blocks and list items
    #[arg(long)]
    directional: bool,
}

impl OptionArgs {
    /// Options from the config file (if any), overridden by explicit flags.
    fn resolve(&self) -> Result<RenderOptions, String> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => RenderOptions::default(),
        };
        if self.hashtags || self.trigger.is_some() || self.separator.is_some() {
            let hashtag = options.hashtag.get_or_insert_with(HashtagConfig::default);
            if let Some(trigger) = &self.trigger {
                hashtag.trigger = trigger.clone();
            }
            if let Some(separator) = &self.separator {
                hashtag.separator = separator.clone();
            }
        }
        if self.directional {
            options.directional = true;
        }
        Ok(options)
    }
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.json file or directory containing them
    path: String,

    /// Run only tests in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    init_tracing();

    let args = with_default_subcommand(std::env::args().collect());
    let cli = Cli::parse_from(&args);

    match cli.command {
        Command::Render(render_args) => do_render(render_args, cli.no_color),
        Command::Test(test_args) => {
            let path = Path::new(&test_args.path);
            if test_args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
    }
}

/// `draft2html [opts] file.json` works like `draft2html render [opts] file.json`.
///
/// `render` goes right after the program name unless the first argument other
/// than the global `--no-color` is a subcommand or a top-level flag.
fn with_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    let first = args.iter().skip(1).find(|a| a.as_str() != "--no-color");
    let inject = first.is_some_and(|a| {
        !SUBCOMMANDS.contains(&a.as_str()) && !TOP_LEVEL_FLAGS.contains(&a.as_str())
    });
    if inject {
        args.insert(1, "render".to_string());
    }
    args
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Read render options from a TOML file.
pub(crate) fn load_options(path: &Path) -> Result<RenderOptions, String> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    toml::from_str(&source).map_err(|e| format!("invalid config '{}': {}", path.display(), e))
}

fn do_render(args: RenderArgs, no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", args.file, e);
            process::exit(1);
        }
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.clone(), source.clone());

    let parser = draft::parser::Parser::new(source, file_id);
    let document = match parser.parse() {
        Ok(d) => d,
        Err(errors) => {
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            for error in &errors {
                let diagnostic = error.to_diagnostic();
                let _ =
                    term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            }
            process::exit(1);
        }
    };

    if args.check {
        eprintln!("ok: {} parsed successfully", args.file);
        return;
    }

    if args.dump {
        println!("{:#?}", document);
        return;
    }

    if args.list_blocks {
        for (i, block) in document.blocks.iter().enumerate() {
            let pad = "  ".repeat(if block.is_list_item() { block.depth } else { 0 });
            println!(
                "{:>4}  {}{} ({} chars)",
                i,
                pad,
                block.block_type,
                block.char_len()
            );
        }
        return;
    }

    let options = match args.options.resolve() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let html = match renderer::render_html(&document, &options) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("render error: {}", e);
            process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, html) {
                eprintln!("error: cannot write '{}': {}", path.display(), e);
                process::exit(1);
            }
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{}", html),
    }
}
