//! Seam to the embedded application runtime. The shell only forwards the
//! launch arguments and a render target; everything past that boundary is the
//! runtime's business.

use thiserror::Error;

use crate::launch_args::LaunchArguments;
use crate::logging::append_shell_log;

/// Where the runtime renders: the shell window's raw native handle plus the
/// client size it was created with. The shell keeps ownership of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttachTarget {
    pub(crate) raw_window_handle: isize,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

/// Attach failures surface as `CreateFailed` because window creation and
/// runtime attach are one step from the shell's point of view.
#[derive(Debug, Error)]
#[error("hosted runtime attach failed: {0}")]
pub(crate) struct AttachError(pub(crate) String);

pub(crate) trait HostedRuntime {
    /// Hands the collected process arguments to the runtime. Must happen
    /// before the runtime is attached to a window.
    fn configure(&mut self, arguments: &LaunchArguments);

    /// Asks the runtime to render into the target.
    fn attach(&mut self, target: AttachTarget) -> Result<(), AttachError>;
}

/// Owns the runtime instance and the argument hand-off ordering.
pub(crate) struct RuntimeLauncher {
    runtime: Box<dyn HostedRuntime>,
    arguments: LaunchArguments,
    configured: bool,
}

impl RuntimeLauncher {
    pub(crate) fn new(runtime: Box<dyn HostedRuntime>) -> Self {
        Self {
            runtime,
            arguments: LaunchArguments::default(),
            configured: false,
        }
    }

    pub(crate) fn configure(&mut self, arguments: LaunchArguments) {
        self.runtime.configure(&arguments);
        self.arguments = arguments;
        self.configured = true;
    }

    pub(crate) fn arguments(&self) -> &LaunchArguments {
        &self.arguments
    }

    pub(crate) fn attach(&mut self, target: AttachTarget) -> Result<(), AttachError> {
        if !self.configured {
            return Err(AttachError(
                "runtime attached before configure".to_string(),
            ));
        }
        self.runtime.attach(target)
    }
}

/// Runtime wiring used by the shell binary. The embedded engine picks up the
/// forwarded arguments and renders into the target on its own; the shell only
/// records the hand-off.
#[derive(Debug, Default)]
pub(crate) struct EmbeddedViewRuntime {
    attached_to: Option<AttachTarget>,
}

impl EmbeddedViewRuntime {
    #[cfg(test)]
    fn attached_to(&self) -> Option<AttachTarget> {
        self.attached_to
    }
}

impl HostedRuntime for EmbeddedViewRuntime {
    fn configure(&mut self, arguments: &LaunchArguments) {
        append_shell_log(&format!(
            "runtime configured with {} argument(s)",
            arguments.len()
        ));
    }

    fn attach(&mut self, target: AttachTarget) -> Result<(), AttachError> {
        if self.attached_to.is_some() {
            return Err(AttachError(
                "runtime is already attached to a window".to_string(),
            ));
        }
        self.attached_to = Some(target);
        append_shell_log(&format!(
            "runtime attached to window 0x{:X} ({}x{})",
            target.raw_window_handle, target.width, target.height
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Recorded {
        configured_with: Option<Vec<String>>,
        attach_targets: Vec<AttachTarget>,
        fail_attach: bool,
    }

    struct RecordingRuntime(Rc<RefCell<Recorded>>);

    impl HostedRuntime for RecordingRuntime {
        fn configure(&mut self, arguments: &LaunchArguments) {
            self.0.borrow_mut().configured_with = Some(arguments.as_slice().to_vec());
        }

        fn attach(&mut self, target: AttachTarget) -> Result<(), AttachError> {
            let mut recorded = self.0.borrow_mut();
            recorded.attach_targets.push(target);
            if recorded.fail_attach {
                return Err(AttachError("engine refused the surface".to_string()));
            }
            Ok(())
        }
    }

    fn launcher_with(recorded: &Rc<RefCell<Recorded>>) -> RuntimeLauncher {
        RuntimeLauncher::new(Box::new(RecordingRuntime(Rc::clone(recorded))))
    }

    fn arguments(parts: &[&str]) -> LaunchArguments {
        // Built through the same path collect() uses, program name included.
        let mut argv = vec!["shell.exe".to_string()];
        argv.extend(parts.iter().map(|part| part.to_string()));
        crate::launch_args::from_argv(argv)
    }

    #[test]
    fn configure_forwards_arguments_unchanged() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut launcher = launcher_with(&recorded);

        launcher.configure(arguments(&["--foo", "bar"]));

        assert_eq!(
            recorded.borrow().configured_with.as_deref(),
            Some(["--foo".to_string(), "bar".to_string()].as_slice())
        );
        assert_eq!(launcher.arguments().as_slice(), ["--foo", "bar"]);
    }

    #[test]
    fn attach_before_configure_is_an_error() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut launcher = launcher_with(&recorded);

        let result = launcher.attach(AttachTarget {
            raw_window_handle: 0x1234,
            width: 1280,
            height: 720,
        });

        assert!(result.is_err());
        assert!(recorded.borrow().attach_targets.is_empty());
    }

    #[test]
    fn attach_passes_the_target_through() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut launcher = launcher_with(&recorded);
        launcher.configure(arguments(&[]));

        let target = AttachTarget {
            raw_window_handle: 0x1234,
            width: 1280,
            height: 720,
        };
        launcher.attach(target).expect("attach succeeds");

        assert_eq!(recorded.borrow().attach_targets, vec![target]);
    }

    #[test]
    fn attach_failure_propagates() {
        let recorded = Rc::new(RefCell::new(Recorded {
            fail_attach: true,
            ..Recorded::default()
        }));
        let mut launcher = launcher_with(&recorded);
        launcher.configure(arguments(&[]));

        let result = launcher.attach(AttachTarget {
            raw_window_handle: 0x1234,
            width: 1280,
            height: 720,
        });

        assert_eq!(
            result.unwrap_err().to_string(),
            "hosted runtime attach failed: engine refused the surface"
        );
    }

    #[test]
    fn embedded_view_runtime_remembers_its_target() {
        let mut runtime = EmbeddedViewRuntime::default();
        runtime.configure(&arguments(&["--foo"]));

        let target = AttachTarget {
            raw_window_handle: 0xBEEF,
            width: 1280,
            height: 720,
        };
        runtime.attach(target).expect("attach succeeds");

        assert_eq!(runtime.attached_to(), Some(target));
    }

    #[test]
    fn embedded_view_runtime_rejects_a_second_attach() {
        let mut runtime = EmbeddedViewRuntime::default();
        runtime.configure(&arguments(&[]));

        let target = AttachTarget {
            raw_window_handle: 0xBEEF,
            width: 1280,
            height: 720,
        };
        runtime.attach(target).expect("first attach succeeds");

        assert!(runtime.attach(target).is_err());
        assert_eq!(runtime.attached_to(), Some(target));
    }
}
