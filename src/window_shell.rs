//! The native top-level window: creation with platform-default styling,
//! runtime attach, handle exposure, and the quit-on-close policy.

use std::sync::atomic::{AtomicBool, Ordering};

use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, LoadCursorW, PostQuitMessage, RegisterClassW,
    ShowWindow, CS_HREDRAW, CS_VREDRAW, HMENU, IDC_ARROW, SW_SHOW, WINDOW_EX_STYLE, WM_DESTROY,
    WNDCLASSW, WS_OVERLAPPEDWINDOW,
};

use crate::hosted_runtime::{AttachTarget, RuntimeLauncher};
use crate::shell_constants::WINDOW_CLASS_NAME;
use crate::shell_types::{ShellError, WindowGeometry};

/// When set, destroying the shell window posts the quit sentinel that ends
/// the message loop. One shell window per process.
static QUIT_ON_CLOSE: AtomicBool = AtomicBool::new(false);

pub(crate) struct WindowShell {
    hwnd: HWND,
}

impl WindowShell {
    /// Creates the window with platform-default chrome and attaches the
    /// hosted runtime to it. Attach failure tears the window down again; both
    /// failure modes surface as `CreateFailed`.
    pub(crate) fn create(
        title: &str,
        geometry: WindowGeometry,
        launcher: &mut RuntimeLauncher,
    ) -> Result<Self, ShellError> {
        let module = unsafe { GetModuleHandleW(None) }
            .map_err(|error| ShellError::CreateFailed(format!("module handle: {error}")))?;
        let instance: HINSTANCE = module.into();

        let class_name = HSTRING::from(WINDOW_CLASS_NAME);
        let window_class = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(shell_window_proc),
            hInstance: instance,
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };
        if unsafe { RegisterClassW(&window_class) } == 0 {
            return Err(ShellError::CreateFailed(
                "window class registration failed".to_string(),
            ));
        }

        let title = HSTRING::from(title);
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                PCWSTR(class_name.as_ptr()),
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                geometry.origin.x,
                geometry.origin.y,
                geometry.size.width,
                geometry.size.height,
                HWND::default(),
                HMENU::default(),
                instance,
                None,
            )
        }
        .map_err(|error| ShellError::CreateFailed(format!("CreateWindowExW: {error}")))?;

        let target = AttachTarget {
            raw_window_handle: hwnd.0 as isize,
            width: geometry.size.width,
            height: geometry.size.height,
        };
        if let Err(error) = launcher.attach(target) {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(ShellError::CreateFailed(error.to_string()));
        }

        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOW);
        }

        Ok(Self { hwnd })
    }

    /// Valid for as long as the shell owns the window; borrowers never
    /// destroy it.
    pub(crate) fn handle(&self) -> HWND {
        self.hwnd
    }

    /// Observable only through message-loop termination: with the policy set,
    /// closing the window ends the loop with status 0.
    pub(crate) fn set_quit_on_close(&self, quit_on_close: bool) {
        QUIT_ON_CLOSE.store(quit_on_close, Ordering::Relaxed);
    }
}

extern "system" fn shell_window_proc(
    hwnd: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match message {
        WM_DESTROY => {
            if QUIT_ON_CLOSE.load(Ordering::Relaxed) {
                unsafe { PostQuitMessage(0) };
            }
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, message, wparam, lparam) },
    }
}
