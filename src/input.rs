//! Keyboard input handling
//!
//! Maps browser key names onto `TickInput`. Arrows are held flags; pause,
//! restart and autopilot fire once per press.

use crate::sim::TickInput;

/// Handle key down event
///
/// `repeat` is set for auto-repeat events while a key is held; those only
/// refresh the arrow flags. Returns true for the arrows, whose default
/// scrolling should be suppressed.
pub fn handle_key_down(key: &str, repeat: bool, input: &mut TickInput) -> bool {
    match key {
        "ArrowLeft" => input.left = true,
        "ArrowRight" => input.right = true,
        _ if repeat => return false,
        "Escape" | "p" | "P" => input.pause = true,
        "r" | "R" => input.restart = true,
        "i" | "I" => {
            input.idle_mode = !input.idle_mode;
            log::info!("Autopilot: {}", input.idle_mode);
        }
        _ => {}
    }
    matches!(key, "ArrowLeft" | "ArrowRight")
}

/// Handle key up event
pub fn handle_key_up(key: &str, input: &mut TickInput) {
    match key {
        "ArrowLeft" => input.left = false,
        "ArrowRight" => input.right = false,
        _ => {}
    }
}
