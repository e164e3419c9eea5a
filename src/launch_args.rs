//! Process command-line arguments, collected once and handed to the hosted
//! runtime untouched.

use std::env;

/// Ordered argv tail (program name excluded). Immutable once collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LaunchArguments(Vec<String>);

impl LaunchArguments {
    pub(crate) fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Collects the process arguments. Called once at startup.
pub(crate) fn collect() -> LaunchArguments {
    from_argv(env::args())
}

pub(crate) fn from_argv<I>(argv: I) -> LaunchArguments
where
    I: IntoIterator<Item = String>,
{
    LaunchArguments(argv.into_iter().skip(1).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn from_argv_drops_only_the_program_name() {
        let arguments = from_argv(argv(&["shell.exe", "--foo", "bar"]));
        assert_eq!(arguments.as_slice(), ["--foo", "bar"]);
    }

    #[test]
    fn from_argv_preserves_order_and_duplicates() {
        let arguments = from_argv(argv(&["shell.exe", "b", "a", "b"]));
        assert_eq!(arguments.as_slice(), ["b", "a", "b"]);
    }

    #[test]
    fn bare_invocation_yields_an_empty_sequence() {
        let arguments = from_argv(argv(&["shell.exe"]));
        assert_eq!(arguments.len(), 0);
        assert!(arguments.as_slice().is_empty());
    }

    #[test]
    fn empty_argv_yields_an_empty_sequence() {
        let arguments = from_argv(Vec::<String>::new());
        assert_eq!(arguments, LaunchArguments::default());
    }
}
