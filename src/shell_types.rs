use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Size {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

/// Placement of the shell window, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowGeometry {
    pub(crate) origin: Point,
    pub(crate) size: Size,
}

impl WindowGeometry {
    pub(crate) fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }
}

/// The only fatal failure the shell surfaces: the window (or the runtime
/// attach that happens during creation) could not be materialized.
#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error("window creation failed: {0}")]
    CreateFailed(String),
}
