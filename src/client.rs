// src/client.rs
//! The asynchronous `Client` used to talk to the hosted API.

// Re-export the API accessor trait so it's available wherever Client is used.
pub use crate::client_api_accessors::ClientApiAccessors;

/// Define a private namespace for all its items.
mod private
{
  use crate::config::ClientConfig;

  use reqwest::Client as HttpClient;
  use core::sync::atomic::AtomicBool;

  /// The asynchronous client for interacting with the hosted API.
  ///
  /// Accessors for each resource group (`chat`, `models`, `images`, ...)
  /// are exposed through [`ClientApiAccessors`].
  ///
  /// # Example
  ///
  /// ```no_run
  /// use api_venice::{ Client, ClientConfig, Secret, ClientApiAccessors };
  ///
  /// # async fn example() -> Result<(), Box< dyn core::error::Error > > {
  /// let config = ClientConfig::builder()
  ///   .api_key_from_env( "VENICE_API_KEY" )?
  ///   .build()?;
  /// let client = Client::build( config )?;
  ///
  /// let models = client.models().list( None ).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[ derive( Debug ) ]
  pub struct Client
  {
    /// The underlying HTTP client used for requests.
    pub( crate ) http_client : HttpClient,
    /// Whether `http_client` was built internally (and therefore owned) or
    /// supplied externally by the caller.
    pub( crate ) should_close : bool,
    /// Resolved configuration (base URL, retry policy, ...).
    pub( crate ) config : ClientConfig,
    /// Set once `close()` has run; further operations are refused.
    pub( crate ) closed : AtomicBool,
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Client,
  };
}
