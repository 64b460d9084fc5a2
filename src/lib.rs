// Main library file for the traveldesk front-end data layer

// Export one module per concern of the data layer
pub mod desk;
pub mod editor;
pub mod error;
pub mod filter;
pub mod headings;
pub mod listing;
pub mod messages;
pub mod record;
pub mod resource;
pub mod rest;
pub mod routes;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for convenience
pub use desk::Desk;
pub use editor::Editor;
pub use error::{ApiError, ErrorMap};
pub use headings::{HeadingIndex, OTHER_HEADING};
pub use listing::Listing;
pub use messages::{Message, MessageBag, Severity};
pub use record::{Booking, Customer, Hotel, Record, RecordId, Taxi};
pub use resource::Resource;
pub use rest::{ClientConfig, RestTransport};
pub use routes::Route;
pub use transport::ResourceTransport;
