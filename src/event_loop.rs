//! The blocking message loop that owns process lifetime, written as an
//! explicit RUNNING/TERMINATED state machine with one blocking retrieval per
//! iteration.

/// Outcome of one blocking retrieval.
pub(crate) enum Retrieved {
    /// A regular message; translate and dispatch it.
    Message,
    /// The quit sentinel, carrying the loop's final status.
    Quit(i32),
    /// The message could not be retrieved; skip it and keep pumping.
    Failed,
}

/// The single suspension point of the shell plus the dispatch step for the
/// message it retrieved.
pub(crate) trait MessagePump {
    /// Blocks until the next pending message or the quit sentinel.
    fn wait_message(&mut self) -> Retrieved;

    /// Keyboard-accelerator normalization followed by dispatch to the owning
    /// window's handler.
    fn translate_and_dispatch(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Terminated(i32),
}

/// Runs the loop to termination and returns the carried status.
pub(crate) fn run_until_quit<P: MessagePump>(pump: &mut P) -> i32 {
    let mut state = LoopState::Running;
    loop {
        state = match state {
            LoopState::Running => match pump.wait_message() {
                Retrieved::Quit(status) => LoopState::Terminated(status),
                Retrieved::Message => {
                    pump.translate_and_dispatch();
                    LoopState::Running
                }
                Retrieved::Failed => LoopState::Running,
            },
            LoopState::Terminated(status) => return status,
        };
    }
}

/// `GetMessageW`-backed pump. `-1` marks an unretrievable message, `0` the
/// quit sentinel; everything else is dispatched.
#[cfg(windows)]
pub(crate) struct Win32MessagePump {
    message: windows::Win32::UI::WindowsAndMessaging::MSG,
}

#[cfg(windows)]
impl Win32MessagePump {
    pub(crate) fn new() -> Self {
        Self {
            message: windows::Win32::UI::WindowsAndMessaging::MSG::default(),
        }
    }
}

#[cfg(windows)]
impl MessagePump for Win32MessagePump {
    fn wait_message(&mut self) -> Retrieved {
        use windows::Win32::UI::WindowsAndMessaging::GetMessageW;

        let result = unsafe { GetMessageW(&mut self.message, None, 0, 0) };
        match result.0 {
            -1 => Retrieved::Failed,
            0 => Retrieved::Quit(self.message.wParam.0 as i32),
            _ => Retrieved::Message,
        }
    }

    fn translate_and_dispatch(&mut self) {
        use windows::Win32::UI::WindowsAndMessaging::{DispatchMessageW, TranslateMessage};

        unsafe {
            let _ = TranslateMessage(&self.message);
            DispatchMessageW(&self.message);
        }
    }
}
