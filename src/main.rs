use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Instant;

use msgbox::app::App;
use msgbox::config::{self, ConfigResult};
use msgbox::notification::NotificationAttributes;
use msgbox::settings::{FileStore, KeyValueStore, MemoryStore, Settings};

/// Animated notification message box for the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Animated notification message box for the terminal"
)]
struct Args {
    /// Heading text (default: "Notification")
    #[arg(long)]
    title: Option<String>,

    /// One of success, error, warning, info; anything else shows as info
    #[arg(long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Message text (default: "This is a notification message.")
    #[arg(long)]
    body: Option<String>,

    /// Action button label (default depends on the type)
    #[arg(long)]
    button_text: Option<String>,

    /// Keep the theme preference in memory instead of the settings file
    #[arg(long)]
    ephemeral: bool,
}

impl Args {
    fn attributes(&self) -> NotificationAttributes {
        let mut attributes = NotificationAttributes::new();
        if let Some(title) = &self.title {
            attributes = attributes.with_title(title);
        }
        if let Some(kind) = &self.kind {
            attributes = attributes.with_kind(kind);
        }
        if let Some(body) = &self.body {
            attributes = attributes.with_body(body);
        }
        if let Some(text) = &self.button_text {
            attributes = attributes.with_button_text(text);
        }
        attributes
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/msgbox-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/msgbox-debug.log")
            .expect("Failed to open /tmp/msgbox-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== MSGBOX DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let settings = open_settings(args.ephemeral);
    let app = App::new(args.attributes(), settings, &config_result.config);

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== MSGBOX DEBUG SESSION ENDED ===");

    Ok(())
}

/// Settings file store, or an in-memory one when ephemeral or when no data
/// directory is available
fn open_settings(ephemeral: bool) -> Settings<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        match FileStore::open_default() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("Theme preference will not persist: {}", e);
                Box::new(MemoryStore::new())
            }
        }
    };
    Settings::new(store)
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    app.status = config_result.warning;
    app.mount(Instant::now());

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
