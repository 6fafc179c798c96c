/// Conditional console logging for development builds
///
/// The `log!` macro writes informational lines prefixed with `[console]` to
/// the browser console. It is compiled out of release builds unless the
/// `console_logging` feature is enabled. Warnings and errors that an operator
/// may need to see in production go through `leptos::logging::warn!` and
/// `leptos::logging::error!` instead.
///
/// # Examples
///
/// ```rust,ignore
/// use rail_console::log;
///
/// log!("Snapshot applied: seq {}", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!("[console] {}", format!($($arg),+));
        }
        #[cfg(not(any(debug_assertions, feature = "console_logging")))]
        {
            let _ = ($(&$arg),+);
        }
    };
}

pub use log;
