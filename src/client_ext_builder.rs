// src/client_ext_builder.rs
//! Client construction.
//!
//! Two entry points mirror the two ways a caller can supply the HTTP
//! transport: `build` constructs and owns a `reqwest::Client` internally;
//! `build_with_transport` adopts a caller-supplied one and never closes it.

mod private
{
  use crate::
  {
    client ::Client,
    config ::ClientConfig,
    error ::ConfigError,
  };

  use reqwest::Client as HttpClient;
  use core::sync::atomic::AtomicBool;

  impl Client
  {
    /// Builds a client that owns its own `reqwest::Client`, constructed
    /// from `config`'s transport options.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidApiKey` if the key cannot be turned
    /// into a header value.
    #[ inline ]
    pub fn build( config : ClientConfig ) -> Result< Self, ConfigError >
    {
      let headers = config.default_headers()?;
      let http_client = HttpClient::builder()
        .default_headers( headers )
        .timeout( config.transport.timeout )
        .connect_timeout( config.transport.connect_timeout )
        .pool_max_idle_per_host( config.transport.pool_max_idle_per_host )
        .build()
        .map_err( | e | ConfigError::InvalidBaseUrl( e.to_string() ) )?;

      Ok( Self
      {
        http_client,
        should_close : true,
        config,
        closed : AtomicBool::new( false ),
      })
    }

    /// Builds a client around an externally-supplied `reqwest::Client`.
    /// The client will never attempt to close a transport it doesn't own.
    #[ inline ]
    #[ must_use ]
    pub fn build_with_transport( config : ClientConfig, http_client : HttpClient ) -> Self
    {
      Self
      {
        http_client,
        should_close : false,
        config,
        closed : AtomicBool::new( false ),
      }
    }
  }

} // end mod private
