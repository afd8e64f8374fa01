// Server module entry
// Listener creation, accept loop, and per-connection handling

pub mod connection;
pub mod listener;

// `loop` is a keyword and cannot name a module directly
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
