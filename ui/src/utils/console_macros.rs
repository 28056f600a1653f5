/// Browser console logging for components.
///
/// Each line is prefixed with the `Date.now()` timestamp and the `HYNS`
/// tag. Off WASM (unit tests) the same lines go to `tracing`, since the
/// console and clock bindings only exist in the browser.
#[doc(hidden)]
#[macro_export]
macro_rules! __hyns_console {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::$level!(format!(
            "[{}] HYNS {}",
            js_sys::Date::now(),
            format!($($arg)*)
        ));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::$level!("HYNS {}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__hyns_console!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__hyns_console!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::__hyns_console!(error, $($arg)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => { $crate::__hyns_console!(debug, $($arg)*) };
}
