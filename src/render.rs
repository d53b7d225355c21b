//! Terminal drawing and paced playback of a solution.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::board::{Board, Move, SIDE};

/// Draws the 3x3 grid. Tiles already on their goal cell are green.
pub fn render_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let goal = Board::GOAL;
    for (i, &tile) in board.tiles().iter().enumerate() {
        let cell = if tile == 0 {
            "    ".to_string().on(Color::DarkGrey)
        } else if tile == goal.tiles()[i] {
            format!(" {:>2} ", tile).with(Color::Black).on(Color::Green)
        } else {
            format!(" {:>2} ", tile).with(Color::White).on(Color::Blue)
        };
        queue!(out, PrintStyledContent(cell), Print(" "))?;
        if i % SIDE == SIDE - 1 {
            queue!(out, Print("\n"))?;
        }
    }
    out.flush()
}

/// Replays `moves` from `start`, redrawing after each step and waiting
/// `delay` between steps. Returns the final board.
pub fn play_back<W: Write>(
    out: &mut W,
    start: &Board,
    moves: &[Move],
    delay: Duration,
    clear: bool,
) -> io::Result<Board> {
    let total = moves.len();
    let mut board = *start;
    draw_frame(out, &board, &format!("Step 0/{}", total), clear)?;

    for (step, &m) in moves.iter().enumerate() {
        thread::sleep(delay);
        board = board.apply_move(m);
        draw_frame(out, &board, &format!("Step {}/{}: {}", step + 1, total, m), clear)?;
    }

    Ok(board)
}

fn draw_frame<W: Write>(out: &mut W, board: &Board, title: &str, clear: bool) -> io::Result<()> {
    if clear {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    }
    queue!(out, Print(title), Print("\n"))?;
    render_board(out, board)?;
    queue!(out, Print("\n"))?;
    out.flush()
}
