use anyhow::{anyhow, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use xrule_prefs::{EnvColorScheme, PreferenceFile, PreferenceStore, Settings};

use crate::app_core::{AppCore, CommandHandler};
use crate::commands::{executor, Effect};
use crate::events::{AppCommand, AppEvent};
use crate::input::{KeyEvent, PointerEvent};
use crate::logging::init_logging;
use crate::state::AppState;
use crate::ui::layouts;

/// Production command handler: writes preferences to disk and runs real timers
struct LiveHandler {
    store: PreferenceFile,
    events: UnboundedSender<AppEvent>,
    icon_revert_delay: Duration,
}

impl CommandHandler for LiveHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        match executor::execute_command(command, state) {
            Some(Effect::PersistTheme(theme)) => {
                if let Err(e) = self.store.save_theme(theme.as_str()) {
                    tracing::warn!("Failed to save theme preference: {}", e);
                }
            }
            Some(Effect::ScheduleIconRevert { generation }) => {
                let tx = self.events.clone();
                let delay = self.icon_revert_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    // Receiver is gone once the app has quit
                    let _ = tx.send(AppEvent::IconRevert { generation });
                });
            }
            None => {}
        }
    }
}

pub struct App {
    settings: Settings,
    store: PreferenceFile,
}

impl App {
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        settings.validate().map_err(|e| anyhow!(e))?;
        let store = PreferenceFile::new()?;
        Ok(Self { settings, store })
    }

    pub async fn run(self) -> Result<()> {
        let _log_path = init_logging()?;

        tracing::info!("xrule starting");

        let theme = xrule_prefs::initial_theme(&self.store, &EnvColorScheme::from_env());
        tracing::info!("Starting with {} theme", theme);
        let state = AppState::new(theme, self.settings.format_options());

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        let handler = LiveHandler {
            store: self.store,
            events: event_tx,
            icon_revert_delay: self.settings.icon_revert_delay(),
        };
        let mut core = AppCore::new(handler, state);

        let mut terminal = init_terminal()?;
        let mut event_stream = EventStream::new();
        let mut frame_area = Rect::default();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            terminal.draw(|f| {
                frame_area = f.area();
                crate::ui::render_app(f, core.state());
            })?;

            tokio::select! {
                _ = interval.tick() => {}
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("Key press: {:?}", key);
                            core.handle_key(KeyEvent::from(key));
                        }
                        Event::Mouse(mouse) => {
                            if let Some(pointer) = PointerEvent::from_mouse(mouse) {
                                let areas = layouts::calculator_areas(frame_area);
                                core.handle_pointer(pointer, &areas);
                            }
                        }
                        _ => {
                            // Resizes are picked up by the next draw
                        }
                    }
                }
                Some(app_event) = event_rx.recv() => {
                    tracing::debug!("Received app event: {:?}", app_event);
                    core.handle_app_event(app_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");
        restore_terminal(terminal)?;

        Ok(())
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
) -> Result<(), std::io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
