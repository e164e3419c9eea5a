//! Startup orchestration: console, COM bracket, argument forwarding, window
//! creation, chrome customization, and the blocking message loop.

use crate::logging::append_shell_log;
use crate::shell_constants::EXIT_CREATE_FAILED;
use crate::shell_types::ShellError;

/// Window creation through loop exit. Creation failure is fatal: the window
/// is never styled, the loop never starts, and the non-zero status becomes
/// the process exit status.
fn boot_and_pump<W, C, S, P>(create: C, style_window: S, pump_messages: P) -> i32
where
    C: FnOnce() -> Result<W, ShellError>,
    S: FnOnce(&W),
    P: FnOnce(&W) -> i32,
{
    let shell = match create() {
        Ok(shell) => shell,
        Err(error) => {
            append_shell_log(&error.to_string());
            return EXIT_CREATE_FAILED;
        }
    };

    style_window(&shell);
    pump_messages(&shell)
}

/// Runs the shell to completion and returns the process exit status.
#[cfg(windows)]
pub(crate) fn run() -> i32 {
    use std::env;

    use crate::chrome_style::{self, Win32StyleWriter};
    use crate::com_apartment::ComApartment;
    use crate::console_attach;
    use crate::event_loop::{self, Win32MessagePump};
    use crate::hosted_runtime::{EmbeddedViewRuntime, RuntimeLauncher};
    use crate::launch_args;
    use crate::shell_constants::{
        RENDER_BACKEND_ENV, RENDER_BACKEND_HINT, WINDOW_ORIGIN, WINDOW_SIZE, WINDOW_TITLE,
    };
    use crate::shell_types::WindowGeometry;
    use crate::window_shell::WindowShell;

    console_attach::ensure_console_if_debug_context();

    // Dropped on every exit path, including early creation failure.
    let _com = ComApartment::initialize();

    // Rendering-backend hint for the runtime; must land before the runtime
    // initializes.
    env::set_var(RENDER_BACKEND_ENV, RENDER_BACKEND_HINT);

    let arguments = launch_args::collect();
    append_shell_log(&format!(
        "shell starting with {} argument(s)",
        arguments.len()
    ));

    let mut launcher = RuntimeLauncher::new(Box::<EmbeddedViewRuntime>::default());
    launcher.configure(arguments);
    if !launcher.arguments().is_empty() {
        append_shell_log(&format!(
            "forwarding arguments: {:?}",
            launcher.arguments().as_slice()
        ));
    }

    let geometry = WindowGeometry::new(
        WINDOW_ORIGIN.0,
        WINDOW_ORIGIN.1,
        WINDOW_SIZE.0,
        WINDOW_SIZE.1,
    );
    let exit_status = boot_and_pump(
        || WindowShell::create(WINDOW_TITLE, geometry, &mut launcher),
        |shell| {
            chrome_style::apply_frameless_layered_chrome(&mut Win32StyleWriter::new(
                shell.handle(),
            ));
            shell.set_quit_on_close(true);
        },
        |_shell| {
            let mut pump = Win32MessagePump::new();
            event_loop::run_until_quit(&mut pump)
        },
    );
    append_shell_log(&format!("shell exiting with status {exit_status}"));
    exit_status
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn create_failure_is_fatal_and_skips_styling_and_the_loop() {
        let steps: RefCell<Vec<&str>> = RefCell::new(Vec::new());

        let status = boot_and_pump(
            || Err::<(), _>(ShellError::CreateFailed("no window materialized".into())),
            |_| steps.borrow_mut().push("style"),
            |_| {
                steps.borrow_mut().push("pump");
                0
            },
        );

        assert_eq!(status, EXIT_CREATE_FAILED);
        assert_ne!(status, 0);
        assert!(steps.borrow().is_empty());
    }

    #[test]
    fn successful_create_styles_the_window_before_the_loop() {
        let steps: RefCell<Vec<&str>> = RefCell::new(Vec::new());

        let status = boot_and_pump(
            || Ok::<_, ShellError>(()),
            |_| steps.borrow_mut().push("style"),
            |_| {
                steps.borrow_mut().push("pump");
                0
            },
        );

        assert_eq!(status, 0);
        assert_eq!(*steps.borrow(), ["style", "pump"]);
    }

    #[test]
    fn loop_status_becomes_the_exit_status() {
        let status = boot_and_pump(|| Ok::<_, ShellError>(()), |_| {}, |_| 7);

        assert_eq!(status, 7);
    }
}
