//! Helper macros for export generation.
//!
//! Provides the `shim_fn!` macro that generates `#[unsafe(no_mangle)] pub unsafe extern "C" fn`
//! forwarders.

/// Generate an exported forwarder.
///
/// # Usage
///
/// ```ignore
/// shim_fn! {
///     /// Doc comment for the export.
///     fn ce_thing(handle: *mut CURL) -> CURLcode {
///         curl_thing(handle)
///     }
/// }
/// ```
///
/// The body runs inside `unsafe` and must be a single call into libcurl with
/// the export's arguments, unchanged.
macro_rules! shim_fn {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty
        $body:block
    ) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            unsafe { $body }
        }
    };

    // Variant without return type (returns ())
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? )
        $body:block
    ) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) {
            unsafe { $body }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use shim_fn;
