//! Chrome customization: strip the standard decorations from the window style
//! and mark the window layered so the transparency attribute takes effect.
//!
//! The mask transforms are pure and the applier drives a `StyleWriter` seam,
//! so both the bit arithmetic and the write ordering stay testable off
//! Windows; only `Win32StyleWriter` touches the live window.

use crate::shell_constants::SHELL_ALPHA;

// winuser.h style bits.
const WS_CAPTION: isize = 0x00C0_0000;
const WS_THICKFRAME: isize = 0x0004_0000;
const WS_MINIMIZEBOX: isize = 0x0002_0000;
const WS_MAXIMIZEBOX: isize = 0x0001_0000;
const WS_SYSMENU: isize = 0x0008_0000;
const WS_EX_LAYERED: isize = 0x0008_0000;

/// Every decoration bit the shell removes from a freshly created window.
pub(crate) const CHROME_STYLE_BITS: isize =
    WS_CAPTION | WS_THICKFRAME | WS_MINIMIZEBOX | WS_MAXIMIZEBOX | WS_SYSMENU;

/// Clears the decoration bits. Idempotent.
pub(crate) fn strip_chrome(style: isize) -> isize {
    style & !CHROME_STYLE_BITS
}

/// Sets the layered bit on the extended style. Idempotent.
pub(crate) fn with_layered(ex_style: isize) -> isize {
    ex_style | WS_EX_LAYERED
}

/// Alpha blend applied once the layered bit is present. The color-key channel
/// is unused; the blend is alpha-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransparencyAttribute {
    pub(crate) alpha: u8,
}

pub(crate) const SHELL_TRANSPARENCY: TransparencyAttribute = TransparencyAttribute {
    alpha: SHELL_ALPHA,
};

/// One live window's style surface: the three mutation points the chrome
/// customization drives. Every write is best-effort; implementations discard
/// platform failures and the shell proceeds with whatever chrome state
/// results.
pub(crate) trait StyleWriter {
    fn style(&self) -> isize;
    fn set_style(&mut self, style: isize);
    fn ex_style(&self) -> isize;
    fn set_ex_style(&mut self, ex_style: isize);
    fn set_transparency(&mut self, attribute: TransparencyAttribute);
}

/// Reads, transforms, and writes back the style masks, then applies the alpha
/// attribute. The ordering is load-bearing: the layered extended-style bit
/// must be in place before the transparency attribute, or the attribute is
/// silently ignored on some platform versions.
pub(crate) fn apply_frameless_layered_chrome<W: StyleWriter>(window: &mut W) {
    let style = window.style();
    window.set_style(strip_chrome(style));

    let ex_style = window.ex_style();
    window.set_ex_style(with_layered(ex_style));

    window.set_transparency(SHELL_TRANSPARENCY);
}

#[cfg(windows)]
pub(crate) struct Win32StyleWriter {
    hwnd: windows::Win32::Foundation::HWND,
}

#[cfg(windows)]
impl Win32StyleWriter {
    pub(crate) fn new(hwnd: windows::Win32::Foundation::HWND) -> Self {
        Self { hwnd }
    }
}

#[cfg(windows)]
impl StyleWriter for Win32StyleWriter {
    fn style(&self) -> isize {
        use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, GWL_STYLE};

        unsafe { GetWindowLongPtrW(self.hwnd, GWL_STYLE) }
    }

    fn set_style(&mut self, style: isize) {
        use windows::Win32::UI::WindowsAndMessaging::{SetWindowLongPtrW, GWL_STYLE};

        unsafe {
            let _ = SetWindowLongPtrW(self.hwnd, GWL_STYLE, style);
        }
    }

    fn ex_style(&self) -> isize {
        use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, GWL_EXSTYLE};

        unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) }
    }

    fn set_ex_style(&mut self, ex_style: isize) {
        use windows::Win32::UI::WindowsAndMessaging::{SetWindowLongPtrW, GWL_EXSTYLE};

        unsafe {
            let _ = SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, ex_style);
        }
    }

    fn set_transparency(&mut self, attribute: TransparencyAttribute) {
        use windows::Win32::Foundation::COLORREF;
        use windows::Win32::UI::WindowsAndMessaging::{SetLayeredWindowAttributes, LWA_ALPHA};

        unsafe {
            let _ = SetLayeredWindowAttributes(self.hwnd, COLORREF(0), attribute.alpha, LWA_ALPHA);
        }
    }
}
