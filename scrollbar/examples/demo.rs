use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use log::{debug, info};
use scrollbar::{
    arrange, paint, Effect, Event, Intent, Key, MouseButton, Rect, ScrollBar, ScrollBarOptions,
    TimerId,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Host-side bookkeeping for the effects the scroll bar asks for.
#[derive(Default)]
struct Host {
    /// Pending repeat and when it is due
    repeat: Option<(TimerId, Instant)>,
    /// Whether the bar currently captures the pointer
    captured: bool,
    needs_draw: bool,
}

impl Host {
    fn apply(&mut self, bar: &mut ScrollBar, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestRedraw => self.needs_draw = true,
                Effect::OverrideCursor { lease, cursor } => {
                    debug!("Cursor override {:?} -> {:?}", lease, cursor);
                }
                Effect::RestoreCursor { lease } => debug!("Cursor restored {:?}", lease),
                Effect::CapturePointer => self.captured = true,
                Effect::ReleasePointer => self.captured = false,
                Effect::ScheduleRepeat { timer, delay } => {
                    self.repeat = Some((timer, Instant::now() + delay));
                }
                Effect::CancelRepeat { timer } => {
                    if self.repeat.is_some_and(|(pending, _)| pending == timer) {
                        self.repeat = None;
                    }
                }
                Effect::Notify(intent) => {
                    let next = match intent {
                        Intent::ThumbMoved(value) => {
                            info!("Thumb moved to {:.1}", value);
                            continue;
                        }
                        Intent::StepRequested(direction) => bar.value() + direction.signum(),
                        Intent::PageRequested(direction) => {
                            bar.value() + direction.signum() * bar.page_size()
                        }
                    };
                    let effects = bar.set_value(next);
                    self.apply(bar, effects);
                }
            }
        }
    }

    fn poll_timeout(&self) -> Duration {
        match self.repeat {
            Some((_, due)) => due.saturating_duration_since(Instant::now()),
            None => Duration::from_millis(250),
        }
    }
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("scrollbar-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let options = match std::env::args().nth(1) {
        Some(path) => ScrollBarOptions::load(path)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?,
        None => ScrollBarOptions::new().max_value(200.0).page_size(20.0),
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&mut stdout, options);

    execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout, options: ScrollBarOptions) -> io::Result<()> {
    let mut bar = ScrollBar::new(options);
    let mut host = Host::default();
    let effects = bar.attach();
    host.apply(&mut bar, effects);

    loop {
        if host.needs_draw {
            draw(stdout, &mut bar)?;
            host.needs_draw = false;
        }

        if event::poll(host.poll_timeout())? {
            let raw = event::read()?;
            if let event::Event::Resize(..) = raw {
                host.needs_draw = true;
            } else if let Some(event) = Event::from_crossterm(&raw) {
                if handle(&mut bar, &mut host, event) {
                    return Ok(());
                }
            }
        }

        if let Some((timer, due)) = host.repeat {
            if Instant::now() >= due {
                host.repeat = None;
                let response = bar.dispatch(&Event::Repeat(timer));
                host.apply(&mut bar, response.effects);
            }
        }
    }
}

/// Route one input event. Returns `true` when the demo should quit.
fn handle(bar: &mut ScrollBar, host: &mut Host, event: Event) -> bool {
    if let Event::Key {
        key: Key::Char('q'),
        ..
    } = event
    {
        if !host.captured {
            return true;
        }
    }

    let response = bar.dispatch(&event);
    host.apply(bar, response.effects);

    // Terminals have no context-menu event; a right press stands in for it.
    if let Event::PointerDown {
        x,
        y,
        button: MouseButton::Right,
    } = event
    {
        let response = bar.dispatch(&Event::ContextMenu { x, y });
        host.apply(bar, response.effects);
    }
    false
}

fn draw(stdout: &mut io::Stdout, bar: &mut ScrollBar) -> io::Result<()> {
    let (_, rows) = terminal::size()?;
    let root = Rect::new(2, 1, 1, rows.saturating_sub(2));

    let frame = bar.render();
    let layout = arrange(root, bar.orientation(), &frame.thumb);
    bar.set_layout(layout);

    queue!(stdout, Clear(ClearType::All))?;
    for glyph in paint(&frame, &layout) {
        queue!(stdout, cursor::MoveTo(glyph.x, glyph.y))?;
        if glyph.active {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        queue!(stdout, Print(glyph.symbol), SetAttribute(Attribute::Reset))?;
    }
    queue!(
        stdout,
        cursor::MoveTo(6, 1),
        Print(format!(
            "value {:>6.1} / {}  page {}  [{}]",
            bar.value(),
            bar.max_value(),
            bar.page_size(),
            frame.data_orientation()
        )),
        cursor::MoveTo(6, 3),
        Print("drag the thumb, hold the arrows or the track, Esc cancels, q quits"),
    )?;
    stdout.flush()
}
