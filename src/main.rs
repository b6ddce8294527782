mod app;
mod browser;
mod config;
mod content;
mod error;
mod event;
mod feed;
mod loader;
mod session;
mod sources;
#[cfg(test)]
mod test_utils;
mod ui;

use app::{App, Effect};
use clap::Parser;
use config::{Config, DataSourceMode, Overrides};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use loader::Loader;
use sources::Sources;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use ui::toast::NotifyLevel;

const TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "termfolio", about = "Terminal portfolio with live GitHub and Hugging Face feeds")]
struct Cli {
    #[arg(long, short, help = "Path to config file")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Where portfolio data comes from")]
    source: Option<DataSourceMode>,

    #[arg(long, help = "GitHub user whose public repositories are listed")]
    github_user: Option<String>,

    #[arg(long, help = "Hugging Face author whose models are listed")]
    hf_author: Option<String>,

    #[arg(long, help = "Aggregating endpoint used in proxy mode")]
    proxy_url: Option<String>,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        Self {
            config_file: cli.config,
            data_source: cli.source,
            github_user: cli.github_user,
            huggingface_author: cli.hf_author,
            proxy_url: cli.proxy_url,
        }
    }
}

// stdout belongs to the TUI, so logs go to a file
fn init_logging(path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: cannot open log file {}: {e}", path.display());
            return;
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("termfolio=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let overrides: Overrides = Cli::parse().into();
    let config = Config::load(&overrides);
    init_logging(&config.resolved_log_file());
    tracing::info!(?config, "starting");

    let sources = match Sources::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(mode = ?sources.mode(), "data sources ready");

    let mut app = App::new(config);
    let session_file = session::session_path();
    session::restore(&mut app, &session_file);
    let mut loader = Loader::new(sources);

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let generation = app.begin_load();
    loader.spawn(generation, tx.clone());

    let input_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    let tick_tx = tx.clone();
    let tick_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        process_event(&mut app, &mut loader, first, &tx);
        while let Ok(pending) = rx.try_recv() {
            process_event(&mut app, &mut loader, pending, &tx);
        }

        if app.should_quit {
            break;
        }
    }

    session::save(&app, &session_file);
    loader.cancel();
    input_task.abort();
    tick_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shutdown");
    Ok(())
}

fn process_event(
    app: &mut App,
    loader: &mut Loader,
    event: AppEvent,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match app.handle_event(event) {
        Some(Effect::OpenUrl(url)) => {
            if let Err(e) = browser::open_url(&url) {
                tracing::warn!(url, error = %e, "could not open link");
                app.notify(NotifyLevel::Error, format!("Could not open {url}"));
            }
        }
        Some(Effect::Reload) => {
            let generation = app.begin_load();
            tracing::info!(generation, superseded = loader.in_flight(), "reloading feeds");
            loader.spawn(generation, tx.clone());
        }
        None => {}
    }
}
