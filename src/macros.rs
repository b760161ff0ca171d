//! Call-site macros. They capture file, line, and enclosing function for the `%src`,
//! `%fsrc`, `%ln`, and `%func` tokens, and compile away below the `max-level-*` floor.

/// Name of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        $crate::fmt::token::short_function_name(name.strip_suffix("::f").unwrap_or(name))
    }};
}

/// A [`CallSite`](crate::CallSite) for the line this expands on.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), $crate::__function_name!())
    };
}

/// Logs one line at a level, with call-site context.
///
/// ```no_run
/// use sblogger::{Level, StreamLogger, sb_log};
///
/// let mut logger = StreamLogger::builder().format("%src:%ln [%^lvl] %msg").build();
/// sb_log!(logger, Level::Info, "listening on {0}:{1}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! sb_log {
    ($logger:expr, $level:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        let level: $crate::Level = $level;
        if level >= $crate::level::STATIC_MIN_LEVEL && $crate::should_emit(level) {
            use $crate::Logger as _;
            let site = $crate::call_site!();
            let args: &[&dyn ::core::fmt::Display] = &[$(&$arg),*];
            $logger.log_record(
                &$crate::LogRecord::new($msg, args)
                    .level(level)
                    .line()
                    .site(&site),
            );
        }
    }};
}

/// Ungated partial write with call-site context. No line terminator.
#[macro_export]
macro_rules! sb_write {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        let site = $crate::call_site!();
        let args: &[&dyn ::core::fmt::Display] = &[$(&$arg),*];
        $logger.log_record(&$crate::LogRecord::new($msg, args).site(&site));
    }};
}

/// Ungated full line with call-site context.
#[macro_export]
macro_rules! sb_write_line {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        let site = $crate::call_site!();
        let args: &[&dyn ::core::fmt::Display] = &[$(&$arg),*];
        $logger.log_record(&$crate::LogRecord::new($msg, args).line().site(&site));
    }};
}

#[macro_export]
macro_rules! sb_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::sb_log!($logger, $crate::Level::Trace, $($rest)+)
    };
}

#[macro_export]
macro_rules! sb_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::sb_log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! sb_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::sb_log!($logger, $crate::Level::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! sb_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::sb_log!($logger, $crate::Level::Warn, $($rest)+)
    };
}

#[macro_export]
macro_rules! sb_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::sb_log!($logger, $crate::Level::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! sb_critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::sb_log!($logger, $crate::Level::Critical, $($rest)+)
    };
}
