//! Campus Portal: terminal home page for the student committee site.
//!
//! Keys: `1-9` pages, `j/k` scroll, `Tab` sections, `h/l` slides and tabs,
//! `/` service search, `t` theme, `m` menu, `?` help, `q` quit. The mouse
//! scrolls, clicks, hovers and drags.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info, warn};

use campus_core::content::SiteContent;
use campus_core::theme::ThemeContext;
use campus_tui::media::{AssetDirCatalog, MediaLibrary};
use campus_tui::persistence::{self, FileThemeStore};
use campus_tui::{input, logging, ui, AppState, PortalConfig};

#[derive(Parser, Debug)]
#[command(name = "campus-portal", version, about = "Campus portal home page in the terminal")]
struct Args {
    /// Content file (TOML) replacing the built-in site content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefer the dark theme when no theme has been saved
    #[arg(long)]
    dark: bool,

    /// Directory media references resolve against
    #[arg(long)]
    assets: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(PortalConfig::default_path);
    let (mut config, config_error) = match PortalConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };
    if args.content.is_some() {
        config.content = args.content.clone();
    }
    if args.assets.is_some() {
        config.assets_dir = args.assets.clone();
    }
    config.prefers_dark |= args.dark;

    let _log_guard = logging::init(&config.log_dir())?;
    info!(config = %config_path.display(), "campus portal starting");
    if let Some(e) = &config_error {
        warn!("using default config: {e:#}");
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let (site, content_error) = load_site(config.content.as_deref());

    // Paths
    let state_path = PortalConfig::app_dir().join("state.json");
    let persisted = persistence::load(&state_path);

    let store = FileThemeStore::new(state_path.clone());
    let theme = ThemeContext::init(Box::new(store), config.system_prefers_dark());
    let media = match &config.assets_dir {
        Some(dir) => {
            let catalog = AssetDirCatalog::new(dir.clone());
            MediaLibrary::new(site.media_refs(), Box::new(catalog))
        }
        None => MediaLibrary::trusting(site.media_refs()),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    let now = Instant::now();
    let mut app = AppState::new(
        site,
        &config,
        theme,
        media,
        Rect::new(0, 0, size.width, size.height),
        now,
    );
    persistence::apply(&mut app, &persisted);
    if let Some(msg) = content_error {
        app.set_error(msg);
    } else if let Some(e) = &config_error {
        app.set_warning(format!("Config ignored: {e}"));
    }

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app, &config);

    // Save state before exit
    let persisted = persistence::extract(&app, persistence::load(&state_path));
    if let Err(e) = persistence::save(&state_path, &persisted) {
        error!("save state: {e:#}");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!("campus portal stopped");
    result
}

/// Built-in content, or the content file when one is configured and valid.
fn load_site(path: Option<&std::path::Path>) -> (SiteContent, Option<String>) {
    let Some(path) = path else {
        return (SiteContent::default_site(), None);
    };
    let loaded = SiteContent::from_file(path).and_then(|site| site.validate().map(|()| site));
    match loaded {
        Ok(site) => {
            info!(path = %path.display(), "content loaded");
            (site, None)
        }
        Err(e) => {
            error!(path = %path.display(), "content rejected: {e}");
            (SiteContent::default_site(), Some(format!("Content error, using built-in: {e}")))
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &PortalConfig,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick_rate)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key, now),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, now),
                Event::Resize(w, h) => input::handle_resize(app, w, h, now),
                _ => {}
            }
        }

        // 3. Advance timers
        app.tick(Instant::now());

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
