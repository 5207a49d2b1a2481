use std::collections::HashMap;
use std::sync::OnceLock;

use palette::{FromColor, Lch, Srgb};

use crate::engine::board::Board;
use crate::engine::grid::Tile;
use crate::error::{Error, Result};
use crate::tui::canvas::Canvas;
use crate::tui::colors::Rgb;
use crate::tui::events::{Event, EventSource, UserInput};
use crate::tui::geometry::{Bounds2D, Idx, Rectangle};
use crate::tui::renderer::Renderer;

/// Layout of the 2048 TUI.
///
///  ╔═══════════════════╗  ╔═══════════════════╗
///  ║      score 0      ║  ║    best tile 0    ║
///  ╚═══════════════════╝  ╚═══════════════════╝
///
///  ╔══════════════════════════════════════════╗
///  ║                                          ║
///  ║  xxxxxxxx  xxxxxxxx  xxxxxxxx  xxxxxxxx  ║
///  ║  xxxxxxxx  xxxxxxxx  xxxxxxxx  xxxxxxxx  ║
///  ║  xxxxxxxx  xxxxxxxx  xxxxxxxx  xxxxxxxx  ║
///  ║                                          ║
///  ║                  ....                    ║
///  ║                                          ║
///  ╚══════════════════════════════════════════╝
///  arrows or hjkl: move, u: undo, a: auto,
///  r: restart, q: quit
const BOARD_FIXED_Y_OFFSET: usize = 4;
const BOARD_FIXED_X_OFFSET: usize = 2;
const BOARD_BORDER_WIDTH: usize = 1;
const BOARD_X_PADDING: usize = 2;
const BOARD_Y_PADDING: usize = 1;
const TILE_HEIGHT: usize = 3;
const TILE_WIDTH: usize = 8;
const HELP_HEIGHT: usize = 3;
const SCORE_WIDTH: usize = 21;

const HELP: &str = "arrows or hjkl: move, u: undo, a: auto, r: restart, q: quit";

fn board_rectangle(board: &Board) -> Rectangle {
    let (width, height) = board.dimensions();
    Rectangle(
        Idx(BOARD_FIXED_X_OFFSET, BOARD_FIXED_Y_OFFSET),
        Bounds2D(
            2 * BOARD_BORDER_WIDTH + BOARD_X_PADDING * (width + 1) + TILE_WIDTH * width,
            2 * BOARD_BORDER_WIDTH + BOARD_Y_PADDING * (height + 1) + TILE_HEIGHT * height,
        ),
    )
}

fn tile_rectangle(x: usize, y: usize) -> Rectangle {
    let x_offset = BOARD_FIXED_X_OFFSET + BOARD_BORDER_WIDTH + BOARD_X_PADDING;
    let y_offset = BOARD_FIXED_Y_OFFSET + BOARD_BORDER_WIDTH + BOARD_Y_PADDING;
    Rectangle(
        Idx(
            x_offset + (BOARD_X_PADDING + TILE_WIDTH) * x,
            y_offset + (BOARD_Y_PADDING + TILE_HEIGHT) * y,
        ),
        Bounds2D(TILE_WIDTH, TILE_HEIGHT),
    )
}

fn help_rectangle(board: &Rectangle) -> Rectangle {
    let (_, y_extent) = board.extents();
    Rectangle(Idx(board.x(), y_extent), Bounds2D(board.width(), HELP_HEIGHT))
}

fn draw_board(board: &Board, canvas: &mut Canvas) -> Result<()> {
    let board_rectangle = board_rectangle(board);
    let help_rectangle = help_rectangle(&board_rectangle);
    let (x_extent, y_extent) = help_rectangle.extents();
    if !canvas.rectangle().encloses(&help_rectangle) {
        return Err(Error::TerminalTooSmall(x_extent, y_extent));
    }

    let score_bg = Rgb::new(75, 50, 25).lighten(0.6);
    let score_fg = Rgb::new(0, 0, 0);
    for (idx, text) in [
        (0, format!("score {}", board.score())),
        (1, format!("best tile {}", board.max_tile())),
    ] {
        let r = Rectangle(
            Idx(BOARD_FIXED_X_OFFSET + idx * (SCORE_WIDTH + 2), 0),
            Bounds2D(SCORE_WIDTH, 3),
        );
        canvas.draw_border(&r)?;
        canvas.write_center(&r.inset(1), &text)?;
        canvas.colorize(&r, Some(score_fg.clone()), Some(score_bg.clone()))?;
    }

    let board_bg = Rgb::new(40, 0, 0);
    canvas.draw_border(&board_rectangle)?;
    canvas.colorize(
        &board_rectangle,
        Some(Rgb::new(25, 50, 75).lighten(0.4)),
        Some(board_bg.clone()),
    )?;

    let empty_bg = board_bg.lighten(0.15);
    for (y, row) in board.tiles().iter().enumerate() {
        for (x, value) in row.iter().enumerate() {
            let r = tile_rectangle(x, y);
            if *value == 0 {
                canvas.colorize(&r, None, Some(empty_bg.clone()))?;
                continue;
            }
            let (bg, fg) = colors_from_value(*value);
            canvas.colorize(&r, Some(fg), Some(bg))?;
            canvas.write_center(&r, &format!("{}", value))?;
        }
    }

    if !board.can_move() {
        let banner = Rectangle(
            Idx(board_rectangle.x() + 8, board_rectangle.y() + 8),
            Bounds2D(board_rectangle.width() - 16, 3),
        );
        canvas.fill(&banner, ' ')?;
        canvas.draw_border(&banner)?;
        canvas.write_center(&banner.inset(1), "game over")?;
        canvas.colorize(&banner, Some(score_fg), Some(score_bg))?;
    }

    canvas.write_wrapped(&help_rectangle, HELP)?;
    Ok(())
}

static TILE_COLORS: OnceLock<HashMap<Tile, (Rgb, Rgb)>> = OnceLock::new();

fn tile_colors() -> HashMap<Tile, (Rgb, Rgb)> {
    let bg_hue = 28.0;
    let fg_hue = bg_hue + 180.0;
    (1..12)
        .map(|i| -> (Tile, Lch, Lch) {
            (
                2u32.pow(i),
                Lch::new(80.0, 90.0, i as f32 * 360.0 / 11.0),
                Lch::new(20.0, 50.0, fg_hue),
            )
        })
        .map(|(k, bg_lch, fg_lch)| {
            (
                k,
                Srgb::<f32>::from_color(bg_lch).into_format::<u8>(),
                Srgb::<f32>::from_color(fg_lch).into_format::<u8>(),
            )
        })
        .map(|(k, bg_rgb, fg_rgb)| (k, (Rgb::from(bg_rgb), Rgb::from(fg_rgb))))
        .collect()
}

/// Background and foreground colors of a tile.
#[inline(always)]
fn colors_from_value(value: Tile) -> (Rgb, Rgb) {
    TILE_COLORS
        .get_or_init(tile_colors)
        .get(&value)
        .cloned()
        .unwrap_or((Rgb::new(255, 255, 255), Rgb::new(90, 0, 0)))
}

pub(crate) struct Tui48<R: Renderer, E: EventSource> {
    renderer: R,
    event_source: E,
    board: Board,
    game_over: bool,
}

impl<R: Renderer, E: EventSource> Tui48<R, E> {
    pub(crate) fn new(board: Board, renderer: R, event_source: E) -> Self {
        Self {
            board,
            renderer,
            event_source,
            game_over: false,
        }
    }

    /// Run consumes the Tui48 instance and takes control of the terminal until the player quits.
    /// The board is handed back in its final state.
    pub(crate) fn run(mut self) -> Result<Board> {
        match self.inner_run() {
            Err(e) => {
                self.renderer.recover();
                Err(e)
            }
            Ok(_) => Ok(self.board),
        }
    }

    fn inner_run(&mut self) -> Result<()> {
        loop {
            let canvas = self.draw()?;
            self.renderer.render(&canvas)?;

            match self.event_source.next_event()? {
                Event::UserInput(UserInput::Direction(d)) => {
                    self.board.shift(d);
                    log::debug!("moved {}, score {}", d, self.board.score());
                }
                Event::UserInput(UserInput::Undo) => {
                    self.board.rollback();
                    log::debug!("undo, {} moves left to undo", self.board.history_len());
                }
                Event::UserInput(UserInput::Auto) => {
                    let d = self.board.auto_move();
                    log::debug!("auto moved {}, score {}", d, self.board.score());
                }
                Event::UserInput(UserInput::Restart) => self.board.reset(),
                Event::UserInput(UserInput::Quit) => break,
                Event::Resize => self.renderer.clear()?,
            }

            let game_over = !self.board.can_move();
            if game_over && !self.game_over {
                log::info!(
                    "game over with score {} and best tile {}",
                    self.board.score(),
                    self.board.max_tile()
                );
            }
            self.game_over = game_over;
        }
        Ok(())
    }

    fn draw(&self) -> Result<Canvas> {
        let (width, height) = self.renderer.size_hint()?;
        let mut canvas = Canvas::new(width as usize, height as usize);
        match draw_board(&self.board, &mut canvas) {
            Ok(()) => Ok(canvas),
            Err(Error::TerminalTooSmall(min_width, min_height)) => {
                let mut canvas = Canvas::new(width as usize, height as usize);
                let r = canvas.rectangle();
                canvas.write_wrapped(
                    &r,
                    &format!(
                        "terminal too small, resize to at least {} x {}",
                        min_width, min_height
                    ),
                )?;
                Ok(canvas)
            }
            Err(e) => Err(e),
        }
    }
}
