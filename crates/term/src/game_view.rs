//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also answers the reverse question, which
//! toolbar button or board square sits under a clicked terminal cell, so the
//! drawing and the hit testing always share one layout.

use crate::core::{BoardSize, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Square;

/// Rows above the board: the toolbar and the status line.
const HEADER_ROWS: u16 = 2;
/// Row below the board reserved for the key hint.
const FOOTER_ROWS: u16 = 1;
/// Columns reserved for the "Board: 20 x 20" label on the status line.
const LABEL_WIDTH: u16 = 15;
/// Upper bound on square height in terminal rows.
const MAX_CELL_H: u16 = 3;
/// Square width as a multiple of its height; 2x1 compensates for the usual
/// terminal glyph aspect ratio.
const CELL_ASPECT: u16 = 2;

const LIGHT_SQ: Rgb = Rgb::new(0xF0, 0xD9, 0xB5);
const DARK_SQ: Rgb = Rgb::new(0xB5, 0x88, 0x63);
const QUEEN_BG: Rgb = Rgb::new(0xFF, 0xD1, 0x66);
const GRID_CLR: Rgb = Rgb::new(0x44, 0x44, 0x44);
const BLOCK_CLR: Rgb = Rgb::new(0xD9, 0x04, 0x29);
const TARGET_CLR: Rgb = Rgb::new(0x2B, 0x6C, 0xB0);
const INK: Rgb = Rgb::new(0x10, 0x10, 0x10);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Buttons on the toolbar row, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Size,
    Reset,
    Queen,
    Block,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 4] = [
        ToolbarButton::Size,
        ToolbarButton::Reset,
        ToolbarButton::Queen,
        ToolbarButton::Block,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarButton::Size => "[Size]",
            ToolbarButton::Reset => "[Reset]",
            ToolbarButton::Queen => "[Queen]",
            ToolbarButton::Block => "[Block]",
        }
    }

    /// Toolbar `(x, width)` of this button.
    pub fn span(&self) -> (u16, u16) {
        let mut x = 1u16;
        for b in Self::ALL {
            let w = b.label().chars().count() as u16;
            if b == *self {
                return (x, w);
            }
            x += w + 1;
        }
        (x, 0)
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewHit {
    Button(ToolbarButton),
    Square(Square),
}

/// Board-size prompt contents, as far as drawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptView<'a> {
    pub input: &'a str,
    pub error: Option<&'a str>,
    pub first_launch: bool,
}

/// Where the board lands for one board size and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    /// Size of one square in terminal cells.
    pub cell_w: u16,
    pub cell_h: u16,
    pub n: u8,
}

impl BoardLayout {
    pub fn frame_w(&self) -> u16 {
        self.cell_w * self.n as u16 + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.cell_h * self.n as u16 + 2
    }

    /// Top-left terminal cell of a board square.
    pub fn cell_origin(&self, sq: Square) -> (u16, u16) {
        (
            self.frame_x + 1 + sq.col as u16 * self.cell_w,
            self.frame_y + 1 + sq.row as u16 * self.cell_h,
        )
    }

    /// Board square under terminal cell `(x, y)`, by integer division of the
    /// offset from the board origin by the per-square size.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Square> {
        let ox = x.checked_sub(self.frame_x + 1)?;
        let oy = y.checked_sub(self.frame_y + 1)?;
        let col = ox / self.cell_w;
        let row = oy / self.cell_h;
        if col >= self.n as u16 || row >= self.n as u16 {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }
}

/// A lightweight terminal renderer for the queen board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    ascii_queen: bool,
}

impl GameView {
    /// Draw the queen as `Q` for terminals without the chess glyph.
    pub fn with_ascii_queen(mut self, ascii_queen: bool) -> Self {
        self.ascii_queen = ascii_queen;
        self
    }

    fn queen_glyph(&self) -> char {
        if self.ascii_queen {
            'Q'
        } else {
            '♛'
        }
    }

    /// Compute the board placement for `size` in `viewport`.
    ///
    /// Squares grow with the available height up to `MAX_CELL_H` rows and shrink
    /// until the board fits horizontally, never below one row. The board is
    /// centered in the space between the header and the footer.
    pub fn layout(&self, size: BoardSize, viewport: Viewport) -> BoardLayout {
        let n = size.get() as u16;
        let avail_h = viewport
            .height
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS + 2);
        let avail_w = viewport.width.saturating_sub(2);

        let mut cell_h = (avail_h / n).clamp(1, MAX_CELL_H);
        while cell_h > 1 && cell_h * CELL_ASPECT * n > avail_w {
            cell_h -= 1;
        }
        let cell_w = cell_h * CELL_ASPECT;

        let frame_w = cell_w * n + 2;
        let frame_h = cell_h * n + 2;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let below_header = viewport.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        let frame_y = HEADER_ROWS + below_header.saturating_sub(frame_h) / 2;

        BoardLayout {
            frame_x,
            frame_y,
            cell_w,
            cell_h,
            n: size.get(),
        }
    }

    /// Map a clicked terminal cell to a toolbar button or board square.
    ///
    /// Clicks on the border, the status line or empty space return `None`.
    pub fn hit_test(
        &self,
        size: Option<BoardSize>,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<ViewHit> {
        if y == 0 {
            return ToolbarButton::ALL.into_iter().find_map(|b| {
                let (bx, bw) = b.span();
                (x >= bx && x < bx + bw).then_some(ViewHit::Button(b))
            });
        }
        let layout = self.layout(size?, viewport);
        layout.square_at(x, y).map(ViewHit::Square)
    }

    /// Render the game, with an optional board-size prompt on top, into an
    /// existing framebuffer.
    ///
    /// Before the first game starts there is no snapshot; only the toolbar and
    /// the prompt are drawn. Callers can reuse a framebuffer across frames.
    pub fn render_into(
        &self,
        snap: Option<&GameSnapshot>,
        prompt: Option<&PromptView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        self.draw_header(fb, snap, viewport);

        if let Some(snap) = snap {
            let layout = self.layout(snap.size, viewport);
            self.draw_board(fb, snap, &layout);
            self.draw_footer(fb, &layout, viewport);
        }

        if let Some(prompt) = prompt {
            self.draw_prompt(fb, prompt, viewport);
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: Option<&GameSnapshot>, viewport: Viewport) {
        let button = CellStyle::new(TEXT, SCREEN_BG).bold();
        for b in ToolbarButton::ALL {
            let (x, _) = b.span();
            fb.put_str(x, 0, b.label(), button);
        }

        let label = CellStyle::new(TEXT, SCREEN_BG).bold();
        let value = CellStyle::new(TEXT, SCREEN_BG);

        fb.put_str(1, 1, "Board:", label);
        match snap {
            Some(snap) => {
                let n = snap.size.get() as u32;
                let mut x = 8;
                x += fb.put_u32(x, 1, n, value);
                fb.put_str(x, 1, " x ", value);
                fb.put_u32(x + 3, 1, n, value);
            }
            None => fb.put_str(8, 1, "-", value),
        }

        // "Moves: N", right-aligned; dropped when it would overlap the label.
        let moves = snap.map_or(0, |s| s.move_count);
        let width = 7 + digit_count(moves);
        let x = viewport.width.saturating_sub(width + 1);
        if x > LABEL_WIDTH {
            fb.put_str(x, 1, "Moves:", label);
            fb.put_u32(x + 7, 1, moves, value);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let border = CellStyle::new(GRID_CLR, SCREEN_BG);
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w(),
            layout.frame_h(),
            border,
        );

        for sq in snap.size.squares() {
            let bg = if sq == snap.queen { QUEEN_BG } else { square_bg(sq) };
            let (x, y) = layout.cell_origin(sq);
            fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ' ', CellStyle::new(INK, bg));
        }

        let block_style = CellStyle::new(BLOCK_CLR, square_bg(snap.blocked));
        self.draw_marker(fb, layout, snap.blocked, '●', block_style);
        let queen_style = CellStyle::new(INK, QUEEN_BG);
        self.draw_marker(fb, layout, snap.queen, self.queen_glyph(), queen_style);

        for &sq in snap.legal_moves.iter() {
            self.draw_target_outline(fb, layout, sq);
        }
    }

    /// Put one glyph in the middle of a square, keeping the square's background.
    fn draw_marker(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        sq: Square,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = layout.cell_origin(sq);
        fb.put_char(
            x + (layout.cell_w - 1) / 2,
            y + (layout.cell_h - 1) / 2,
            ch,
            style.bold(),
        );
    }

    /// Outline a legal destination: box corners on tall squares, brackets on
    /// single-row squares.
    fn draw_target_outline(&self, fb: &mut FrameBuffer, layout: &BoardLayout, sq: Square) {
        let (x, y) = layout.cell_origin(sq);
        let style = CellStyle::new(TARGET_CLR, square_bg(sq)).bold();
        let right = x + layout.cell_w - 1;
        if layout.cell_h >= 2 {
            let bottom = y + layout.cell_h - 1;
            fb.put_char(x, y, '┌', style);
            fb.put_char(right, y, '┐', style);
            fb.put_char(x, bottom, '└', style);
            fb.put_char(right, bottom, '┘', style);
        } else {
            fb.put_char(x, y, '[', style);
            fb.put_char(right, y, ']', style);
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, layout: &BoardLayout, viewport: Viewport) {
        let y = layout.frame_y + layout.frame_h();
        if y >= viewport.height {
            return;
        }
        let hint = CellStyle::new(TEXT, SCREEN_BG).dim();
        fb.put_str_centered(
            0,
            y,
            viewport.width,
            "click a marked square  s size  r reset  x queen  b block  q quit",
            hint,
        );
    }

    fn draw_prompt(&self, fb: &mut FrameBuffer, prompt: &PromptView<'_>, viewport: Viewport) {
        let w: u16 = 40;
        let h: u16 = 7;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let body = CellStyle::new(TEXT, Rgb::new(30, 30, 40));
        fb.fill_rect(x, y, w, h, ' ', body);
        fb.draw_box(x, y, w, h, body.bold());

        fb.put_str_centered(x, y + 1, w, "Board size N for an N x N board (2-20)", body);

        let input = CellStyle::new(Rgb::new(255, 255, 255), body.bg).bold();
        fb.put_str(x + 3, y + 2, "> ", input);
        fb.put_str(x + 5, y + 2, prompt.input, input);
        fb.put_char(x + 5 + prompt.input.chars().count() as u16, y + 2, '_', input);

        if let Some(err) = prompt.error {
            let style = CellStyle::new(Rgb::new(255, 110, 110), body.bg);
            fb.put_str_centered(x + 1, y + 3, w - 2, err, style);
        }

        let hint = body.dim();
        let cancel = if prompt.first_launch {
            "Enter: ok   Esc: default (8)"
        } else {
            "Enter: ok   Esc: cancel"
        };
        fb.put_str_centered(x, y + 5, w, cancel, hint);
    }
}

fn square_bg(sq: Square) -> Rgb {
    if sq.is_dark() {
        DARK_SQ
    } else {
        LIGHT_SQ
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
