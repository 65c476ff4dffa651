//! Crossterm terminal driver for pathviz.
//!
//! [`CrosstermDriver`] implements [`pathviz_core::Driver`]: it owns raw mode,
//! the alternate screen and mouse capture, turns terminal events into
//! [`Msg`]s and paints diffed [`Frame`]s.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Color, Context, Driver, DriverResult, Frame, Key, MouseAction, Msg, Point};

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        _ => return None,
    };
    Some(key)
}

fn key_msg(ev: KeyEvent) -> Option<Msg> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }
    // Raw mode swallows SIGINT.
    if ev.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ev.code, KeyCode::Char('c' | 'C'))
    {
        return Some(Msg::Quit);
    }
    to_key(ev.code).map(Msg::key)
}

fn mouse_msg(ev: MouseEvent) -> Option<Msg> {
    let action = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
        _ => return None,
    };
    Some(Msg::Mouse {
        action,
        pos: Point::new(i32::from(ev.column), i32::from(ev.row)),
    })
}

/// Translate one terminal event, or `None` if it has no [`Msg`] equivalent.
pub fn translate_event(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(k) => key_msg(k),
        Event::Mouse(m) => mouse_msg(m),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: i32::from(w),
            height: i32::from(h),
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
#[derive(Debug)]
pub struct CrosstermDriver {
    mouse_enabled: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> DriverResult {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>, wait: Duration) -> DriverResult {
        if !event::poll(wait)? {
            return Ok(());
        }
        // Drain whatever is already buffered.
        while !ctx.is_done() && event::poll(Duration::ZERO)? {
            if let Some(msg) = translate_event(event::read()?) {
                if tx.send(msg).is_err() {
                    // Receiver gone: nobody is listening any more.
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> DriverResult {
        if frame.cells.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        for fc in &frame.cells {
            let (Ok(x), Ok(y)) = (u16::try_from(fc.pos.x), u16::try_from(fc.pos.y)) else {
                continue;
            };
            let style = fc.cell.style;
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;
            if style.bold {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(fc.cell.ch))?;
            if style.bold {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
