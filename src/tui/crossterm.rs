use std::io::Write;

use crossterm::{
    cursor,
    event::{self, Event as CrossTermEvent, KeyCode, KeyEvent, KeyEventKind},
    style, terminal, ExecutableCommand, QueueableCommand,
};

use crate::engine::Direction;
use crate::error::Result;
use crate::tui::canvas::Canvas;
use crate::tui::events::{Event, EventSource, UserInput};
use crate::tui::renderer::Renderer;

pub(crate) struct Crossterm<T: Write> {
    w: Box<T>,
}

impl<T: Write> Crossterm<T> {
    pub(crate) fn new(mut w: Box<T>) -> Result<Self> {
        terminal::enable_raw_mode()?;
        w.execute(terminal::EnterAlternateScreen)?;
        w.execute(cursor::Hide)?;
        Ok(Self { w })
    }
}

impl<T: Write> Drop for Crossterm<T> {
    fn drop(&mut self) {
        self.recover();
    }
}

impl<T: Write> Renderer for Crossterm<T> {
    fn size_hint(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn render(&mut self, c: &Canvas) -> Result<()> {
        self.w.queue(terminal::BeginSynchronizedUpdate)?;
        self.w.queue(style::ResetColor)?;
        for row in c.rows() {
            for tuxel in row {
                let (x, y) = tuxel.coordinates();
                self.w.queue(cursor::MoveTo(x as u16, y as u16))?;
                match tuxel.colors() {
                    (Some(fg), _) => self.w.queue(style::SetForegroundColor(fg.into()))?,
                    (None, _) => self.w.queue(style::SetForegroundColor(style::Color::Reset))?,
                };
                match tuxel.colors() {
                    (_, Some(bg)) => self.w.queue(style::SetBackgroundColor(bg.into()))?,
                    (_, None) => self.w.queue(style::SetBackgroundColor(style::Color::Reset))?,
                };
                self.w.queue(style::Print(format!("{}", &tuxel)))?;
            }
        }
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::EndSynchronizedUpdate)?;
        self.w.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        self.w.flush()?;
        Ok(())
    }

    fn recover(&mut self) {
        if let Err(e) = self.w.execute(cursor::Show) {
            log::error!("showing cursor: {}", e);
        }
        if let Err(e) = self.w.execute(terminal::LeaveAlternateScreen) {
            log::error!("leaving alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("disabling raw mode: {}", e);
        }
    }
}

#[derive(Default)]
pub(crate) struct CrosstermEvents {}

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                CrossTermEvent::Key(ke) => match handle_key_event(ke) {
                    Some(input) => return Ok(Event::UserInput(input)),
                    None => continue,
                },
                CrossTermEvent::Resize(_, _) => return Ok(Event::Resize),
                _ => continue,
            };
        }
    }
}

fn handle_key_event(ke: KeyEvent) -> Option<UserInput> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => Some(UserInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(UserInput::Direction(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(UserInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(UserInput::Direction(Direction::Down)),
        KeyCode::Char('u') | KeyCode::Char('z') | KeyCode::Backspace => Some(UserInput::Undo),
        KeyCode::Char('a') => Some(UserInput::Auto),
        KeyCode::Char('r') => Some(UserInput::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(UserInput::Quit),
        _ => None,
    }
}
