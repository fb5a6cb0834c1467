//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are cheap no-ops until [`set_enabled`] turns them on.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Turn puffin scope collection on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Whether scope collection is currently enabled.
pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Mark the start of a new profiling frame.
///
/// Hosts that redraw charts continuously call this once per redraw so the
/// viewer groups scopes per frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling-http")]
mod server {
    use std::sync::OnceLock;

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Enable scopes and serve them to `puffin_viewer` on `addr`.
    pub fn init_http(addr: &str) {
        puffin::set_scopes_on(true);

        match puffin_http::Server::new(addr) {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://{}", addr);
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }
}

#[cfg(feature = "profiling-http")]
pub use server::init_http;
