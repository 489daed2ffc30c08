use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use theme_preview::{DEFAULT_NAMESPACE, Locale, PreviewArgs, RenderOptions, SystemOpener, run};

/// Render a theme.json file as a static HTML preview page
#[derive(Parser, Debug)]
#[command(name = "theme-preview", version, about)]
struct Cli {
    /// Path to the theme.json file
    input: Option<PathBuf>,

    /// Where to write the page [default: ./preview-theme.html]
    output: Option<PathBuf>,

    /// Open the page in the default browser once written
    #[arg(long)]
    open: bool,

    /// Language of the page text (fr or en)
    #[arg(long, default_value_t = Locale::Fr)]
    lang: Locale,

    /// Prefix of the generated CSS variables
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// More logging, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = PreviewArgs {
        input: cli.input,
        output: cli.output,
        open: cli.open,
        options: RenderOptions::new()
            .namespace(cli.namespace)
            .locale(cli.lang),
    };

    let labels = args.options.labels();
    match run(&args, &SystemOpener::for_current_platform()) {
        Ok(outcome) => {
            println!("{} {}", labels.generated, outcome.path.display());
            if args.open {
                println!("{}", labels.opening);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage_error() {
                eprintln!("{}", labels.usage);
            }
            ExitCode::FAILURE
        }
    }
}
