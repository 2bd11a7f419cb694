//! tocsin: a scroll-synced table of contents viewer.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tocsin::{app_state, config, formats, layout, outline, ui};

/// Delay between animation ticks while no input is pending.
const TICK: Duration = Duration::from_millis(30);

#[derive(Parser)]
#[command(name = "tocsin")]
#[command(about = "Scroll-synced table of contents navigation", long_about = None)]
struct Args {
    /// Markdown file to view
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Print the outline and active section as JSON on exit
    #[arg(long)]
    report: bool,

    /// Override the configured wrap width
    #[arg(long, value_name = "COLS")]
    wrap: Option<usize>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(wrap) = args.wrap {
        cfg.wrap_width = wrap;
    }

    let source = std::fs::read_to_string(&args.path)?;
    let doc = layout::WrappedDocument::build(&source, cfg.wrap_width);

    let format = formats::markdown::MarkdownFormat;
    let headings = outline::extract_headings(&source, &doc, &format)?;

    let mut state = app_state::AppState::new(args.path, doc, headings, cfg.scroll_step);
    if state.headings.is_empty() {
        state.message = Some("No headings found".to_string());
    }

    run_tui(state, &cfg, args.report)
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config, report: bool) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Seed pane geometry before the first draw so the initial highlight is computed
    // against real sizes, not zeros.
    let size = terminal.size()?;
    let pane_height = usize::from(size.height).saturating_sub(5);
    app.attach(pane_height, pane_height);

    let result = run_app(&mut terminal, &mut app, cfg);

    app.detach();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else if report {
        let json = serde_json::to_string_pretty(&app.report()).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        if !event::poll(TICK)? {
            app.tick();
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match app.focus {
                app_state::Focus::Content => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => app.scroll_up(app.scroll_step),
                    KeyCode::Down => app.scroll_down(app.scroll_step),
                    KeyCode::PageUp => app.scroll_up(app.viewport.height),
                    KeyCode::PageDown => app.scroll_down(app.viewport.height),
                    KeyCode::Home => app.scroll_to(0),
                    KeyCode::End => app.scroll_to(app.doc.height()),
                    KeyCode::Tab => app.focus = app_state::Focus::Sidebar,
                    _ => {}
                },
                app_state::Focus::Sidebar => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => app.cursor_up(),
                    KeyCode::Down => app.cursor_down(),
                    KeyCode::Enter => app.click_cursor(),
                    KeyCode::Tab | KeyCode::Esc => app.focus = app_state::Focus::Content,
                    _ => {}
                },
            }
        }
    }
}
