// Adapters layer: concrete implementations of the domain ports for external
// systems (catalog/cart backends, session file, CLI shell collaborators).

pub mod console;
pub mod file;
pub mod http;
pub mod session;

pub use console::{ConsoleNavigator, NoopNotifier};
pub use file::{CsvCatalogSource, JsonCartSource};
pub use http::{HttpCartClient, HttpCatalogSource};
pub use session::FileSessionStore;
