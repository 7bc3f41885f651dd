use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use gm_desk::app::App;
use gm_desk::error::Result;
use gm_desk::event_loop::{ControlFlow, EventLoop};
use gm_desk::settings::Theme;
use gm_desk::storage::Storage;
use gm_desk::{logging, render};

#[derive(Debug, Parser)]
#[command(name = "gm-desk", about = "Floating-panel GM screen for the terminal", version)]
struct Cli {
    /// Override the data directory (default: the platform data dir).
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Start with this theme instead of the saved one.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Keyboard only; do not capture the mouse.
    #[arg(long)]
    no_mouse: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write settings and layout to a JSON bundle and exit.
    Export { path: PathBuf },
    /// Replace settings and layout from a JSON bundle and exit.
    Import { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = match &cli.data_dir {
        Some(dir) => Storage::open(dir)?,
        None => Storage::open_default()?,
    };
    logging::init_file_logging(storage.dir())?;

    let mut app = App::new(storage);
    if let Some(theme) = cli.theme {
        app.settings.theme = match theme {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        };
        app.persist_settings();
    }

    match cli.command {
        Some(Command::Export { path }) => {
            app.export(&path)?;
            println!("exported to {}", path.display());
            Ok(())
        }
        Some(Command::Import { path }) => {
            app.import(&path)?;
            println!("imported from {}", path.display());
            Ok(())
        }
        None => run_tui(app, !cli.no_mouse),
    }
}

fn run_tui(mut app: App, mouse: bool) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.set_viewport(Rect {
        x: 0,
        y: 0,
        width: size.width,
        height: size.height,
    });

    let result = run_loop(&mut terminal, &mut app);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let events = EventLoop::new(Duration::from_millis(16));
    loop {
        terminal.draw(|frame| render::draw(frame, app))?;
        let flow = events.pump(|event| {
            app.handle_event(&event);
            if app.should_quit() {
                ControlFlow::Quit
            } else {
                ControlFlow::Continue
            }
        })?;
        app.on_tick();
        if flow == ControlFlow::Quit || app.should_quit() {
            return Ok(());
        }
    }
}
