//! Routes stdout/stderr to a console when the shell is launched from a
//! terminal or under a debugger. Runs once, before any diagnostic output.

use windows::Win32::System::Console::{AllocConsole, AttachConsole, ATTACH_PARENT_PROCESS};
use windows::Win32::System::Diagnostics::Debug::IsDebuggerPresent;

/// Attaches to the parent console when one exists; otherwise allocates a new
/// console only when a debugger is attached. Silent no-op everywhere else.
pub(crate) fn ensure_console_if_debug_context() {
    unsafe {
        if AttachConsole(ATTACH_PARENT_PROCESS).is_err() && IsDebuggerPresent().as_bool() {
            let _ = AllocConsole();
        }
    }
}
