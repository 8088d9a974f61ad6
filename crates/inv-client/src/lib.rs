//! REST client for the inventaris admin backend.
//!
//! The client returns records exactly as the backend encodes them; display
//! normalization is left to `inv-normalize`.
//!
//! Authentication is explicit: callers build a [`Session`] from a token they
//! obtained themselves. There is no fallback credential, and an anonymous
//! session fails every request before it reaches the network.
//!
//! # Example
//!
//! ```no_run
//! use inv_client::{ClientConfig, InventarisClient, Session};
//!
//! fn list() -> inv_client::Result<()> {
//!     let config = ClientConfig::default().with_base_url("https://inventaris.example/api");
//!     let session = Session::authenticated("token", "siti");
//!     let client = InventarisClient::new(&config, session)?;
//!     for vendor in client.list_vendors()? {
//!         println!("{}", vendor.vendor_id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::InventarisClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::Session;
