// src/client_blocking.rs
//! The blocking counterpart to [`crate::client::Client`], for callers
//! outside an async runtime.
//!
//! Shares its retry decisioning and error translation with the async
//! client ([`crate::retry`], [`crate::error`]) rather than re-implementing
//! them; the only thing that differs is how a request attempt is sent and
//! how the thread waits between retries.

mod private
{
  use crate::
  {
    config ::ClientConfig,
    error ::{ ClientError, ConfigError, Result },
    retry ::parse_retry_after,
  };

  use reqwest::blocking::Client as HttpClient;
  use reqwest::Method;
  use serde::{ de::DeserializeOwned, Serialize };
  use serde_json::Value;
  use core::sync::atomic::{ AtomicBool, Ordering };

  /// A blocking client for interacting with the hosted API.
  ///
  /// Exposes the same JSON convenience methods as [`crate::client::Client`]
  /// (`get`/`post`/`delete`) but no streaming methods: server-sent events
  /// and chunked binary downloads are inherently async-friendly and aren't
  /// reproduced here.
  #[ derive( Debug ) ]
  pub struct BlockingClient
  {
    http_client : HttpClient,
    should_close : bool,
    config : ClientConfig,
    closed : AtomicBool,
  }

  impl BlockingClient
  {
    /// Builds a client that owns its own `reqwest::blocking::Client`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidApiKey` if the key cannot be turned
    /// into a header value, or `ConfigError::InvalidBaseUrl` if the
    /// underlying transport fails to build.
    pub fn build( config : ClientConfig ) -> core::result::Result< Self, ConfigError >
    {
      let headers = config.default_headers()?;
      let http_client = HttpClient::builder()
        .default_headers( headers )
        .timeout( config.transport.timeout )
        .connect_timeout( config.transport.connect_timeout )
        .pool_max_idle_per_host( config.transport.pool_max_idle_per_host )
        .build()
        .map_err( | e | ConfigError::InvalidBaseUrl( e.to_string() ) )?;

      Ok( Self { http_client, should_close : true, config, closed : AtomicBool::new( false ) } )
    }

    /// Builds a client around an externally-supplied blocking transport.
    #[ inline ]
    #[ must_use ]
    pub fn build_with_transport( config : ClientConfig, http_client : HttpClient ) -> Self
    {
      Self { http_client, should_close : false, config, closed : AtomicBool::new( false ) }
    }

    /// Closes the client. Idempotent: repeated calls are no-ops. Refuses
    /// further requests afterward regardless of whether the transport was
    /// owned.
    #[ inline ]
    pub fn close( &self )
    {
      self.closed.store( true, Ordering::Release );
    }

    fn ensure_open( &self ) -> Result< () >
    {
      if self.closed.load( Ordering::Acquire )
      {
        return Err( ClientError::ApiConnection { message : "client is closed".to_string(), request : None } );
      }
      Ok( () )
    }

    /// Runs one logical request to completion, retrying per the client's
    /// configured [`crate::retry::RetryPolicy`], sleeping the calling thread
    /// between attempts.
    ///
    /// # Errors
    /// Returns the translated [`ClientError`] once retries are exhausted or
    /// the failure is not retriable.
    fn execute( &self, method : Method, path : &str, body : Option< &Value > ) -> Result< reqwest::blocking::Response >
    {
      self.ensure_open()?;

      let url = self.config.join_url( path )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      let method_name = method.as_str().to_string();

      let mut attempt : u32 = 0;
      loop
      {
        attempt += 1;

        let mut builder = self.http_client.request( method.clone(), url.clone() );
        if let Some( body ) = body
        {
          builder = builder.json( body );
        }

        let response = match builder.send()
        {
          Ok( response ) => response,
          Err( e ) =>
          {
            if self.config.retry_policy.should_retry_transport_error( &method_name, attempt, &e )
            {
              std::thread::sleep( self.config.retry_policy.backoff_delay( attempt ) );
              continue;
            }
            return Err( crate::error::translate_transport_error( &e, &method_name, url.as_str() ) );
          }
        };

        let status = response.status();
        if status.is_success()
        {
          return Ok( response );
        }

        let retry_after = response.headers().get( reqwest::header::RETRY_AFTER )
          .and_then( | v | v.to_str().ok() )
          .and_then( | v | parse_retry_after( v, None ) );

        if self.config.retry_policy.should_retry( &method_name, status.as_u16(), attempt )
        {
          std::thread::sleep( self.config.retry_policy.delay_for( attempt, retry_after ) );
          continue;
        }

        let status_code = status.as_u16();
        let bytes = response.bytes().unwrap_or_default();
        let raw_text = String::from_utf8_lossy( &bytes ).into_owned();
        let json_body = serde_json::from_slice::< Value >( &bytes ).ok();

        return Err( crate::error::translate_status
        (
          status_code,
          &method_name,
          url.as_str(),
          json_body.as_ref(),
          &raw_text,
          retry_after.map( | d | d.as_secs() ),
        ));
      }
    }

    /// Sends a GET request and decodes the JSON response.
    ///
    /// # Errors
    /// See [`BlockingClient::execute`].
    pub fn get< O : DeserializeOwned >( &self, path : &str ) -> Result< O >
    {
      let response = self.execute( Method::GET, path, None )?;
      response.json().map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )
    }

    /// Sends a POST request with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    /// See [`BlockingClient::execute`].
    pub fn post< I : Serialize, O : DeserializeOwned >( &self, path : &str, body : &I ) -> Result< O >
    {
      let body = serde_json::to_value( body )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      let response = self.execute( Method::POST, path, Some( &body ) )?;
      response.json().map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )
    }

    /// Sends a DELETE request and decodes the JSON response.
    ///
    /// # Errors
    /// See [`BlockingClient::execute`].
    pub fn delete< O : DeserializeOwned >( &self, path : &str ) -> Result< O >
    {
      let response = self.execute( Method::DELETE, path, None )?;
      response.json().map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )
    }
  }

  impl Drop for BlockingClient
  {
    fn drop( &mut self )
    {
      if self.should_close
      {
        self.close();
      }
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    BlockingClient,
  };
}
