use agrodash::adapters::{CommandSpeech, FileStore, StdRandom, SystemClock};
use agrodash::app::{App, AppMessage, Services};
use agrodash::cli::{apply_flags, parse_args, run_cli_command, CliCommand};
use agrodash::config::Config;
use agrodash::{logging, ui};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    let config = Config::from_env();
    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let flags = match command {
        CliCommand::RunTui(flags) => flags,
        _ => Default::default(),
    };
    let config = apply_flags(config, flags);

    // Logging failures are not fatal; the dashboard works without a log.
    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: {}", e);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let services = Services::new(
        Arc::new(FileStore::open(&config.data_dir)),
        Arc::new(SystemClock),
        Arc::new(StdRandom::from_entropy()),
        Arc::new(CommandSpeech::detect()),
    );
    // Timers are spawned from App::new, so it needs the runtime context.
    let mut app = {
        let _guard = runtime.enter();
        App::new(services, config.start_options())
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    tracing::info!("agrodash exiting");

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the spinners
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event error");
                    }
                    None => return Ok(()),
                }
            }

            // Delayed messages from timers
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
