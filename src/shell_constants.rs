//! Fixed literals for the shell window and its surroundings.

pub(crate) const WINDOW_TITLE: &str = "课程表";
pub(crate) const WINDOW_CLASS_NAME: &str = "TimetableShellWindow";

pub(crate) const WINDOW_ORIGIN: (i32, i32) = (10, 10);
pub(crate) const WINDOW_SIZE: (i32, i32) = (1280, 720);

/// Fully opaque; the layered attribute exists for the Mica-like styling, not
/// for see-through content.
pub(crate) const SHELL_ALPHA: u8 = 255;

/// Rendering-backend hint read by the hosted runtime during its own init.
/// Best-effort: the runtime is free to ignore it.
pub(crate) const RENDER_BACKEND_ENV: &str = "TIMETABLE_RENDER_BACKEND";
pub(crate) const RENDER_BACKEND_HINT: &str = "gpu";

pub(crate) const SHELL_LOG_FILE: &str = "timetable-shell.log";
pub(crate) const SHELL_LOG_DIR_ENV: &str = "TIMETABLE_SHELL_LOG_DIR";

pub(crate) const EXIT_CREATE_FAILED: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_literals_match_the_shipped_shell() {
        assert_eq!(WINDOW_TITLE, "课程表");
        assert_eq!(WINDOW_ORIGIN, (10, 10));
        assert_eq!(WINDOW_SIZE, (1280, 720));
        assert_eq!(SHELL_ALPHA, 255);
    }
}
