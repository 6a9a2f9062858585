//! Hello-triangle demo application
//!
//! Opens a 640x480 window and draws a single orange triangle every frame
//! until the window is closed. Takes no arguments and always exits 0;
//! initialization failures are logged and the frame loop is skipped.

use gl_engine::foundation::logging;
use gl_engine::{RenderWindow, WindowConfig};

fn main() {
    logging::init();

    let mut window = RenderWindow::new(WindowConfig::default());

    match window.initialize() {
        Ok(()) => {
            if let Err(err) = window.run() {
                log::error!("Frame loop failed: {}", err);
            }
        }
        Err(err) => {
            log::error!("Initialization failed: {}", err);
        }
    }
}
