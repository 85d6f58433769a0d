// Without the `logging` feature every macro expands to nothing, and some
// of them are never used. Squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

/// Emits a trace record when an entry point rejects its input, then hands
/// the result back unchanged.
macro_rules! traced {
    ($what:literal, $input:expr, $result:expr) => {{
        let result = $result;
        if let Err(ref _err) = result {
            trace!("rejected {} {:?}: {}", $what, $input, _err);
        }
        result
    }};
}
