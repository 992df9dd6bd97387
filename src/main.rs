use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{info, warn};

use mindwell::app::{App, AppMessage};
use mindwell::cli::{parse_args, run_cli_command};
use mindwell::config::Config;
use mindwell::logging::init_logging;
use mindwell::terminal::{setup_panic_hook, TerminalManager};
use mindwell::ui;

fn main() -> Result<()> {
    // --version and --help exit before the terminal is touched.
    let options = match run_cli_command(parse_args(std::env::args())) {
        Ok(options) => options,
        Err(code) => std::process::exit(code),
    };

    color_eyre::install()?;

    let (config, config_warnings) = Config::from_env_checked();
    let config = config.apply_cli(&options);
    init_logging(&config.log_file)?;
    for warning in &config_warnings {
        warn!("{}", warning);
    }
    info!(
        "backend {} with {} skin, logging to {}",
        config.backend_url,
        config.skin,
        config.log_file.display()
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let mut app = App::new(config);
        app.initialize();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    if let Err(e) = &result {
        warn!("exiting with error: {}", e);
    }
    info!("mindwell stopped");
    result
}

/// UI loop: redraw when dirty, then wait for a key, an async result or the
/// 16 ms tick.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => warn!("terminal event error: {}", e),
                    None => app.should_quit = true,
                }
            }

            Some(msg) = async {
                match &mut message_rx {
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

    app.message_rx = message_rx;
    Ok(())
}
