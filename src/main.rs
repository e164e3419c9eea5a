#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg_attr(not(windows), allow(dead_code))]
mod chrome_style;
#[cfg_attr(not(windows), allow(dead_code))]
mod event_loop;
#[cfg_attr(not(windows), allow(dead_code))]
mod hosted_runtime;
#[cfg_attr(not(windows), allow(dead_code))]
mod launch_args;
#[cfg_attr(not(windows), allow(dead_code))]
mod logging;
#[cfg_attr(not(windows), allow(dead_code))]
mod shell_constants;
#[cfg_attr(not(windows), allow(dead_code))]
mod shell_runtime;
#[cfg_attr(not(windows), allow(dead_code))]
mod shell_types;

#[cfg(windows)]
mod com_apartment;
#[cfg(windows)]
mod console_attach;
#[cfg(windows)]
mod window_shell;

#[cfg(windows)]
fn main() {
    std::process::exit(shell_runtime::run());
}

#[cfg(not(windows))]
fn main() {
    let arguments = launch_args::collect();
    println!(
        "{} is a Windows-only shell; collected {} launch argument(s)",
        env!("CARGO_PKG_NAME"),
        arguments.len()
    );
}
