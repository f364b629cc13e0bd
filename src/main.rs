mod command;
mod config;
mod countdown;
mod face;
mod geometry;
mod history;
mod runtime;
mod ui;
mod util;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Write},
    time::{Duration, SystemTime},
};

use config::{Appearance, Config, ConfigStore, FileConfigStore};
use countdown::{Countdown, CountdownObserver};
use history::{HistoryLog, RunOutcome};
use runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner};

/// One countdown notification cycle per second.
const TICK_RATE_MS: u64 = 1000;

/// terminal countdown timer with an analog clock face
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A countdown timer drawn as an analog clock face: a pie of remaining time, sixty markers, and a center hand doubling as a play/pause indicator. Duration and theme persist between runs."
)]
pub struct Cli {
    /// countdown duration in seconds (persisted as the new default)
    #[clap(short = 'd', long, value_parser = clap::value_parser!(u64).range(1..))]
    duration: Option<u64>,

    /// color of the remaining-time pie
    #[clap(short = 'a', long, value_enum)]
    appearance: Option<Appearance>,

    /// hide the time labels at the major marks
    #[clap(long)]
    no_labels: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Counting,
    TimeUp,
}

#[derive(Debug)]
pub struct App {
    pub countdown: Countdown,
    pub config: Config,
    pub state: AppState,
    /// Last remaining value notified by the engine, in whole seconds.
    pub remaining_secs: f64,
    pub bell_pending: bool,
    pub history: Option<HistoryLog>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let countdown = Countdown::new(config.duration_secs as f64);
        let remaining_secs = config.duration_secs as f64;
        Self {
            countdown,
            config,
            state: AppState::Counting,
            remaining_secs,
            bell_pending: false,
            history: HistoryLog::new(),
        }
    }

    pub fn fraction_remaining(&self) -> f64 {
        util::fraction_remaining(self.remaining_secs, self.countdown.duration_secs())
    }

    /// Space key: start from stopped, resume from paused, pause while
    /// running.
    pub fn toggle(&mut self, now: SystemTime) {
        self.state = AppState::Counting;
        if self.countdown.is_running() {
            self.countdown.pause(now);
        } else {
            let ev = if self.countdown.is_paused() {
                self.countdown.resume(now)
            } else {
                self.countdown.start(now)
            };
            if let Some(ev) = ev {
                ev.dispatch(self);
            }
        }
    }

    pub fn reset_timer(&mut self) {
        if !self.countdown.is_stopped() {
            self.log_run(RunOutcome::Abandoned);
        }
        self.countdown.reset();
        self.state = AppState::Counting;
        self.remaining_secs = self.countdown.duration_secs();
    }

    pub fn on_app_tick(&mut self, now: SystemTime) {
        if let Some(ev) = self.countdown.tick(now) {
            ev.dispatch(self);
        }
    }

    fn log_run(&self, outcome: RunOutcome) {
        if let Some(ref history) = self.history {
            let _ = history.append(self.config.duration_secs, self.config.appearance, outcome);
        }
    }
}

impl CountdownObserver for App {
    fn on_remaining(&mut self, secs: u64) {
        self.remaining_secs = secs as f64;
    }

    fn on_finished(&mut self) {
        self.remaining_secs = 0.0;
        self.state = AppState::TimeUp;
        self.bell_pending = true;
        self.log_run(RunOutcome::Completed);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    let mut changed = false;
    if let Some(duration) = cli.duration {
        config.duration_secs = duration;
        changed = true;
    }
    if let Some(appearance) = cli.appearance {
        config.appearance = appearance;
        changed = true;
    }
    if cli.no_labels && config.show_labels {
        config.show_labels = false;
        changed = true;
    }
    if changed {
        let _ = store.save(&config);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                app.on_app_tick(SystemTime::now());
            }
            AppEvent::Resize => {}
            AppEvent::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle(SystemTime::now()),
                KeyCode::Char('r') => app.reset_timer(),
                _ => {}
            },
        }

        if app.bell_pending {
            app.bell_pending = false;
            // terminal bell for the time-up alert
            write!(terminal.backend_mut(), "\x07")?;
            // fully qualified: Backend has a flush of its own
            io::Write::flush(terminal.backend_mut())?;
        }

        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    // a run cut short by quitting still lands in the history log
    if !app.countdown.is_stopped() {
        app.reset_timer();
    }

    Ok(())
}
