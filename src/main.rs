//! Terminal queen game (default binary).
//!
//! Uses crossterm for input (keys and mouse) and a framebuffer-based renderer.
//! The loop blocks on the next terminal event and redraws only after something
//! visible changed.

use anyhow::Result;
use crossterm::event;

use queen_step::term::{FrameBuffer, TerminalRenderer, Viewport};
use queen_step::{init_logging, App, AppConfig, Flow};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        if app.take_dirty() {
            app.render_into(&mut fb);
            term.draw_swap(&mut fb)?;
        }

        let ev = event::read()?;
        if let event::Event::Resize(..) = ev {
            term.invalidate();
        }
        if app.handle_event(ev) == Flow::Quit {
            log::info!("quit");
            return Ok(());
        }
    }
}
