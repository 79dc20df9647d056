use std::io::stdout;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use wiq::app::App;
use wiq::cli::Args;
use wiq::config::{self, ConfigResult};
use wiq::logging;
use wiq::wiki::WikiClient;
use wiq::worker::Fetcher;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    let ConfigResult {
        config: mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_explicit_config(path)?,
        None => config::load_config(),
    };
    args.apply_overrides(&mut config);
    config.search.validate()?;

    // Endpoint and HTTP client problems abort before the terminal is touched
    let client = WikiClient::new(&config.search)?;
    log::debug!("Using endpoint {}", client.endpoint());

    let mut app = App::new(&config, Fetcher::spawn(client));
    if let Some(warning) = warning {
        app.notification.show_error(&warning);
    }
    if let Some(query) = args.initial_query() {
        app.set_query(query);
    }

    let terminal = ratatui::init();
    let result = execute!(
        stdout(),
        EnableMouseCapture,
        EnableFocusChange,
        EnableBracketedPaste
    )
    .map_err(Into::into)
    .and_then(|()| run(terminal, &mut app));

    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableFocusChange,
        DisableMouseCapture
    );
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.next_timeout(Instant::now()))? {
            app.handle_event(event::read()?);
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
