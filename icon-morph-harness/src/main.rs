use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use icon_morph::{IconCanvas, IconShape, MorphConfig, MorphDriver, StrokeWeight, Transition};

const FPS: u32 = 60;
const SCRUB_STEP: f64 = 0.05;

fn main() -> io::Result<()> {
    init_logging()?;

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run();

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

/// Logs go to the file named by `ICON_MORPH_LOG`; the terminal belongs to the UI.
fn init_logging() -> io::Result<()> {
    let Ok(path) = std::env::var("ICON_MORPH_LOG") else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("icon_morph=debug,icon_morph_harness=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

struct App {
    driver: MorphDriver,
    weight: StrokeWeight,
    scrub: Transition,
    status: String,
}

impl App {
    fn new(config: MorphConfig) -> io::Result<Self> {
        let driver = MorphDriver::new(config).map_err(io::Error::other)?;

        Ok(Self {
            driver,
            weight: config.weight,
            scrub: Transition::StackArrow,
            status: String::new(),
        })
    }

    fn report(&mut self, result: icon_morph::Result<()>) {
        self.status = match result {
            Ok(()) => String::new(),
            Err(e) => {
                warn!(error = %e, "command rejected");
                e.to_string()
            }
        };
    }

    fn scrub_by(&mut self, delta: f64) {
        // A live tween would overwrite the scrubbed offset on the next tick.
        self.driver.stop();

        let offset = if self.driver.transition() == self.scrub {
            (self.driver.progress() + delta).clamp(0.0, 2.0)
        } else {
            0.0
        };

        let result = self.driver.set_offset(self.scrub, offset).map(|_| ());
        self.report(result);
    }

    fn next_weight(&mut self) -> io::Result<()> {
        let weight = match self.weight {
            StrokeWeight::Bold => StrokeWeight::Regular,
            StrokeWeight::Regular => StrokeWeight::Thin,
            StrokeWeight::Thin => StrokeWeight::Bold,
        };
        let shape = self.driver.current_shape();
        let config = self.driver.config().reweighted(weight);

        let scrub = self.scrub;
        *self = Self::new(config)?;
        self.scrub = scrub;

        // Hidden has no rest pose to jump to; start over from the stack.
        if shape != IconShape::Hidden {
            let result = self.driver.jump_to(shape);
            self.report(result);
        }

        info!(?weight, "stroke weight changed");
        Ok(())
    }
}

fn run() -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(MorphConfig {
        color: Color::Rgb(230, 230, 230),
        ..MorphConfig::REGULAR
    })?;
    let frame_interval = Duration::from_secs(1) / FPS;

    loop {
        app.driver.tick(Instant::now());
        terminal.draw(|f| draw(f, &app))?;

        // Idle: block for input. Running: wake up for the next frame.
        let timeout = if app.driver.is_running() {
            frame_interval
        } else {
            Duration::from_secs(60)
        };

        if !event::poll(timeout)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,

            KeyCode::Char('1') => {
                let result = app.driver.jump_to(IconShape::Stack);
                app.report(result);
            }
            KeyCode::Char('2') => {
                let result = app.driver.jump_to(IconShape::Arrow);
                app.report(result);
            }
            KeyCode::Char('3') => {
                let result = app.driver.jump_to(IconShape::Cross);
                app.report(result);
            }
            KeyCode::Char('4') => {
                let result = app.driver.jump_to(IconShape::Check);
                app.report(result);
            }

            KeyCode::Char('s') => {
                let result = app.driver.animate_to(IconShape::Stack);
                app.report(result);
            }
            KeyCode::Char('a') => {
                let result = app.driver.animate_to(IconShape::Arrow);
                app.report(result);
            }
            KeyCode::Char('x') => {
                let result = app.driver.animate_to(IconShape::Cross);
                app.report(result);
            }
            KeyCode::Char('c') => {
                let result = app.driver.animate_to(IconShape::Check);
                app.report(result);
            }
            KeyCode::Char('h') => {
                let result = app.driver.animate_to(IconShape::Hidden);
                app.report(result);
            }

            KeyCode::Tab => {
                let index = Transition::ALL
                    .iter()
                    .position(|t| *t == app.scrub)
                    .unwrap_or(0);
                app.scrub = Transition::ALL[(index + 1) % Transition::ALL.len()];
            }
            KeyCode::Right => app.scrub_by(SCRUB_STEP),
            KeyCode::Left => app.scrub_by(-SCRUB_STEP),

            KeyCode::Char('r') => {
                let rtl = !app.driver.config().rtl;
                app.driver.set_rtl(rtl);
            }
            KeyCode::Char('v') => {
                let visible = !app.driver.config().visible;
                app.driver.set_visible(visible);
            }
            KeyCode::Char('w') => app.next_weight()?,
            KeyCode::Char(' ') => app.driver.stop(),

            _ => {}
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    f.render_widget(
        Paragraph::new(
            "[1-4 jump]  [s/a/x/c/h animate]  [←/→ scrub, tab: pair]  [r rtl] [v visible] [w weight]  [q quit]",
        )
        .style(Style::new().fg(Color::DarkGray)),
        rows[0],
    );

    let cols = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(42),
        Constraint::Min(0),
    ])
    .split(rows[1]);

    let icon = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(22),
        Constraint::Min(0),
    ])
    .split(cols[1]);

    let background = Color::Rgb(20, 20, 30);
    f.render_widget(
        IconCanvas::new(&app.driver)
            .background(background)
            .block(Block::bordered().title(format!(" {:?} ", app.driver.current_shape()))),
        icon[1],
    );

    let state = app.driver.state();
    let line = format!(
        "{:?} @ {:.3}  target {:?}  {}  scrub {:?}  {:?}  {}",
        state.transition,
        state.progress,
        state.target,
        if state.running { "running" } else { "idle" },
        app.scrub,
        app.weight,
        app.status,
    );

    f.render_widget(
        Paragraph::new(line).style(Style::new().fg(Color::Gray)),
        rows[2],
    );
}
