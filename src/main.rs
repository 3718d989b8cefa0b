use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use songvocab::OutputFormat;
use songvocab::api::HttpLyricsService;
use songvocab::core::config::{self, CliOverrides, ResolvedConfig, SongVocabConfig};
use songvocab::core::controller::{OverlapPolicy, RequestController, SubmitOutcome};
use songvocab::core::render::{ContentPolicy, HtmlView};
use songvocab::core::view::{PageState, UiState};
use songvocab::tui;
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "songvocab",
    about = "Look up song lyrics and their vocabulary"
)]
struct Args {
    /// Base URL of the lyrics/vocabulary service
    #[arg(short, long)]
    base_url: Option<String>,

    /// Whether response content is shown verbatim or escaped
    #[arg(long, value_enum)]
    content_policy: Option<ContentPolicy>,

    /// How overlapping submissions are reconciled
    #[arg(long, value_enum)]
    overlap: Option<OverlapPolicy>,

    /// Run a single lookup, print the page and exit instead of starting the TUI
    #[arg(short, long)]
    query: Option<String>,

    /// Output format for --query
    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to songvocab.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("songvocab.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        log::warn!("{e}; using defaults");
        SongVocabConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url.clone(),
        content_policy: args.content_policy,
        overlap: args.overlap,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("SongVocab starting up: {:?}", resolved);

    match args.query {
        Some(query) => run_once(&resolved, &query, args.format).await,
        None => match tui::run(resolved) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Terminal error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

/// One submission cycle against the configured service, printed to stdout.
async fn run_once(config: &ResolvedConfig, query: &str, format: OutputFormat) -> ExitCode {
    let service = Arc::new(HttpLyricsService::new(
        Some(config.base_url.clone()),
        Some(config.endpoint.clone()),
    ));
    let mut controller = RequestController::new(service, config.overlap);

    let ui_state = match format {
        OutputFormat::Text => {
            let mut page = PageState::new(config.content_policy);
            if controller.submit(query, &mut page).await == SubmitOutcome::Ignored {
                return ExitCode::SUCCESS;
            }
            print_page(&page);
            page.ui_state()
        }
        OutputFormat::Html => {
            let mut view = HtmlView::new(config.content_policy);
            if controller.submit(query, &mut view).await == SubmitOutcome::Ignored {
                return ExitCode::SUCCESS;
            }
            print!("{}", view.to_document());
            view.ui_state()
        }
    };

    if ui_state == UiState::Error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_page(page: &PageState) {
    match page.ui_state() {
        UiState::Error => eprintln!("{}", page.error_message),
        UiState::Results => {
            let width = crossterm::terminal::size()
                .map(|(w, _)| w as usize)
                .unwrap_or(80);
            println!("== Lyrics ==");
            println!("{}", page.lyrics_text());
            println!();
            println!("== Vocabulary ==");
            for line in page.vocabulary_text().lines() {
                let options = textwrap::Options::new(width).subsequent_indent("    ");
                println!("{}", textwrap::fill(line, options));
            }
        }
        UiState::Idle | UiState::Loading => {}
    }
}
