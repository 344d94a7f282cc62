// src/config/mod.rs
//! Client configuration: base URL, API key, timeouts and retry policy.

/// Define a private namespace for all its items.
mod private
{
  use crate::error::ConfigError;
  use crate::secret::Secret;
  use crate::retry::RetryPolicy;

  use reqwest::header;
  use secrecy::ExposeSecret;
  use url::Url;
  use core::time::Duration;

  /// Default base URL for the hosted API.
  const DEFAULT_BASE_URL : &str = "https://api.venice.ai/api/v1/";

  /// Default overall request timeout.
  const DEFAULT_TIMEOUT : Duration = Duration::from_secs( 300 );

  /// Default connect timeout.
  const DEFAULT_CONNECT_TIMEOUT : Duration = Duration::from_secs( 30 );

  /// Name of the environment variable holding the API key.
  pub const API_KEY_ENV_VAR : &str = "VENICE_API_KEY";

  /// Transport-level tuning options shared by the async and blocking clients.
  #[ derive( Debug, Clone ) ]
  pub struct TransportOptions
  {
    /// Overall per-request timeout.
    pub timeout : Duration,
    /// TCP connect timeout.
    pub connect_timeout : Duration,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host : usize,
  }

  impl Default for TransportOptions
  {
    #[ inline ]
    fn default() -> Self
    {
      Self
      {
        timeout : DEFAULT_TIMEOUT,
        connect_timeout : DEFAULT_CONNECT_TIMEOUT,
        pool_max_idle_per_host : 10,
      }
    }
  }

  /// Fully resolved client configuration.
  ///
  /// Built through [`ClientConfigBuilder`] so construction-time mistakes
  /// (missing key, unparseable URL) surface as a [`ConfigError`] instead of
  /// a panic.
  #[ derive( Debug, Clone ) ]
  #[ non_exhaustive ]
  pub struct ClientConfig
  {
    /// API key used to authenticate requests.
    pub api_key : Secret,
    /// Base URL all relative request paths are joined against.
    pub base_url : Url,
    /// Retry policy applied to idempotent and explicitly-retriable requests.
    pub retry_policy : RetryPolicy,
    /// Transport tuning knobs.
    pub transport : TransportOptions,
  }

  impl ClientConfig
  {
    /// Starts building a configuration.
    #[ inline ]
    #[ must_use ]
    pub fn builder() -> ClientConfigBuilder
    {
      ClientConfigBuilder::default()
    }

    /// Builds the default header set sent with every request: bearer
    /// authentication, a JSON content type, and a JSON accept type.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidApiKey` if the key contains characters
    /// that cannot appear in an HTTP header value.
    #[ inline ]
    pub fn default_headers( &self ) -> Result< header::HeaderMap, ConfigError >
    {
      let mut headers = header::HeaderMap::new();
      let api_key = self.api_key.expose_secret();
      let auth_value = header::HeaderValue::from_str( &format!( "Bearer {api_key}" ) )
        .map_err( | e | ConfigError::InvalidApiKey( e.to_string() ) )?;
      headers.insert( header::AUTHORIZATION, auth_value );
      headers.insert( header::CONTENT_TYPE, header::HeaderValue::from_static( "application/json" ) );
      headers.insert( header::ACCEPT, header::HeaderValue::from_static( "application/json" ) );
      Ok( headers )
    }

    /// Joins a relative path onto the configured base URL.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBaseUrl` if the join fails.
    #[ inline ]
    pub fn join_url( &self, path : &str ) -> Result< Url, ConfigError >
    {
      self.base_url.join( path ).map_err( | e | ConfigError::InvalidBaseUrl( e.to_string() ) )
    }
  }

  /// Builder for [`ClientConfig`].
  #[ derive( Debug, Default ) ]
  pub struct ClientConfigBuilder
  {
    api_key : Option< Secret >,
    base_url : Option< String >,
    retry_policy : Option< RetryPolicy >,
    transport : Option< TransportOptions >,
  }

  impl ClientConfigBuilder
  {
    /// Sets the API key explicitly.
    #[ inline ]
    #[ must_use ]
    pub fn api_key( mut self, api_key : Secret ) -> Self
    {
      self.api_key = Some( api_key );
      self
    }

    /// Reads the API key from the given environment variable.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvironmentVariable` if it is unset.
    #[ inline ]
    pub fn api_key_from_env( mut self, var : &str ) -> Result< Self, ConfigError >
    {
      let secret = Secret::from_env( var ).map_err( | _e | ConfigError::MissingEnvironmentVariable( var.to_string() ) )?;
      self.api_key = Some( secret );
      Ok( self )
    }

    /// Overrides the base URL. Defaults to the hosted API's production URL.
    #[ inline ]
    #[ must_use ]
    pub fn base_url( mut self, base_url : impl Into< String > ) -> Self
    {
      self.base_url = Some( base_url.into() );
      self
    }

    /// Overrides the retry policy. Defaults to [`RetryPolicy::default`].
    #[ inline ]
    #[ must_use ]
    pub fn retry_policy( mut self, retry_policy : RetryPolicy ) -> Self
    {
      self.retry_policy = Some( retry_policy );
      self
    }

    /// Overrides transport tuning options.
    #[ inline ]
    #[ must_use ]
    pub fn transport( mut self, transport : TransportOptions ) -> Self
    {
      self.transport = Some( transport );
      self
    }

    /// Validates and finalizes the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingApiKey` if no key was supplied, or
    /// `ConfigError::InvalidBaseUrl` if the base URL does not parse.
    #[ inline ]
    pub fn build( self ) -> Result< ClientConfig, ConfigError >
    {
      let api_key = self.api_key.ok_or( ConfigError::MissingApiKey )?;
      let base_url_str = self.base_url.unwrap_or_else( || DEFAULT_BASE_URL.to_string() );
      let base_url = Url::parse( &base_url_str ).map_err( | e | ConfigError::InvalidBaseUrl( e.to_string() ) )?;

      Ok( ClientConfig
      {
        api_key,
        base_url,
        retry_policy : self.retry_policy.unwrap_or_default(),
        transport : self.transport.unwrap_or_default(),
      })
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    ClientConfig,
    ClientConfigBuilder,
    TransportOptions,
    API_KEY_ENV_VAR,
  };
}
