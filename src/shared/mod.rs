// Shared Kernel
// Cross-cutting pieces used by every bounded context in `modules/`

pub mod application; // Use-case traits and pagination
pub mod config; // Environment-driven configuration
pub mod domain; // Identifiers shared across contexts
pub mod errors; // Error taxonomy
pub mod infrastructure; // Database pool
pub mod utils; // Logging and validation helpers

pub use config::AppConfig;
pub use infrastructure::database::Database;
