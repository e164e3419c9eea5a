//! Process-wide COM bracket around the window shell and the message loop.

use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};

/// Apartment-threaded COM for the shell thread, released on drop so every
/// exit path (normal quit or early creation failure) uninitializes exactly
/// once.
pub(crate) struct ComApartment;

impl ComApartment {
    pub(crate) fn initialize() -> Self {
        unsafe {
            let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
        }
        Self
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}
