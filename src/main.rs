use rpg_forum::app::{App, AppMessage};
use rpg_forum::cli::{parse_args, run_cli_command, CliCommand};
use rpg_forum::config::ForumConfig;
use rpg_forum::logging::init_logging;
use rpg_forum::terminal::{setup_panic_hook, TerminalManager};
use rpg_forum::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Animation and toast clock.
const TICK_INTERVAL_MS: u64 = 100;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Flags are handled before the terminal is touched
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("rpg-forum: {}", e);
            std::process::exit(2);
        }
    };
    if run_cli_command(&command) {
        return Ok(());
    }
    let CliCommand::Run(overrides) = command else {
        return Ok(());
    };

    let config = match ForumConfig::from_env() {
        Ok(config) => overrides.apply(config),
        Err(e) => {
            eprintln!("rpg-forum: {}", e);
            std::process::exit(2);
        }
    };

    match init_logging(config.log_file.as_deref()) {
        Ok(path) => info!(
            log = %path.display(),
            "rpg-forum {} starting",
            env!("CARGO_PKG_VERSION")
        ),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    info!(
        topics = %config.topics_url,
        comments = %config.comments_url,
        timeout_ms = config.timeout.as_millis() as u64,
        "forum endpoints"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let mut app = App::from_config(&config);
        app.start();

        let result = run_app(manager.terminal(), &mut app).await;

        manager.restore()?;
        if let Err(e) = &result {
            warn!(error = %e, "event loop failed");
        }
        info!("rpg-forum exiting");
        result
    })
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

    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "terminal event stream error");
                    }
                    None => break,
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
