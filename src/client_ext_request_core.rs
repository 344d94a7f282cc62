// src/client_ext_request_core.rs
//! Core request executor shared by every typed endpoint method.
//!
//! A single retry loop drives every request: build it, send it, decide
//! whether the outcome is retriable via [`crate::retry::RetryPolicy`], sleep
//! for the computed delay, and try again. On a terminal failure the error is
//! translated via [`crate::error::translate_status`] /
//! [`crate::error::translate_transport_error`].

mod private
{
  use crate::
  {
    client ::Client,
    error ::{ ClientError, Result },
    retry ::parse_retry_after,
  };

  use reqwest::{ Method, header::{ self, HeaderMap } };
  use serde_json::Value;
  use core::sync::atomic::Ordering;

  /// Describes a single logical request: enough information to build it
  /// fresh on every retry attempt.
  #[ derive( Debug, Clone ) ]
  pub struct RequestSpec
  {
    /// HTTP method.
    pub method : Method,
    /// Path relative to the client's configured base URL.
    pub path : String,
    /// JSON query parameters, serialized onto the URL.
    pub query : Option< Value >,
    /// JSON request body. Absent for methods that carry none.
    pub body : Option< Value >,
    /// Headers to merge on top of the client's defaults for this request.
    pub extra_headers : HeaderMap,
  }

  impl RequestSpec
  {
    /// Starts a spec for the given method and path.
    #[ inline ]
    #[ must_use ]
    pub fn new( method : Method, path : impl Into< String > ) -> Self
    {
      Self { method, path : path.into(), query : None, body : None, extra_headers : HeaderMap::new() }
    }

    /// Attaches a JSON body.
    #[ inline ]
    #[ must_use ]
    pub fn with_body( mut self, body : Value ) -> Self
    {
      self.body = Some( body );
      self
    }

    /// Attaches JSON query parameters.
    #[ inline ]
    #[ must_use ]
    pub fn with_query( mut self, query : Value ) -> Self
    {
      self.query = Some( query );
      self
    }
  }

  /// Applies the method-conditional header composition rule to a request
  /// already carrying the client's default headers: drops `Content-Type`
  /// and `Accept` for a GET unless the caller explicitly supplied them,
  /// forces a JSON `Content-Type` when a body is present, then merges the
  /// caller's extra headers on top so they always win.
  fn apply_header_rules( headers : &mut HeaderMap, method : &Method, has_body : bool, extra : &HeaderMap )
  {
    if *method == Method::GET
    {
      if !extra.contains_key( header::CONTENT_TYPE )
      {
        headers.remove( header::CONTENT_TYPE );
      }
      if !extra.contains_key( header::ACCEPT )
      {
        headers.remove( header::ACCEPT );
      }
    }
    else if has_body
    {
      headers.insert( header::CONTENT_TYPE, header::HeaderValue::from_static( "application/json" ) );
    }

    for ( key, value ) in extra
    {
      headers.insert( key.clone(), value.clone() );
    }
  }

  impl Client
  {
    /// Returns `ClientError::ApiConnection` if the client has already been
    /// closed; every request path checks this first.
    fn ensure_open( &self ) -> Result< () >
    {
      if self.closed.load( Ordering::Acquire )
      {
        return Err( ClientError::ApiConnection
        {
          message : "client is closed".to_string(),
          request : None,
        });
      }
      Ok( () )
    }

    /// Runs `spec` to completion, retrying per the client's configured
    /// [`crate::retry::RetryPolicy`], and returns the successful response.
    ///
    /// The response is returned unconsumed so callers can choose how to
    /// read the body (JSON, raw bytes, or a stream).
    ///
    /// # Errors
    /// Returns the translated [`ClientError`] once retries are exhausted or
    /// the failure is not retriable.
    pub( crate ) async fn execute( &self, spec : &RequestSpec ) -> Result< reqwest::Response >
    {
      self.ensure_open()?;

      let url = self.config.join_url( &spec.path )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      let method_name = spec.method.as_str().to_string();

      let mut attempt : u32 = 0;
      loop
      {
        attempt += 1;

        let mut builder = self.http_client.request( spec.method.clone(), url.clone() );
        if let Some( body ) = &spec.body
        {
          builder = builder.json( body );
        }
        if let Some( query ) = &spec.query
        {
          builder = builder.query( query );
        }

        let mut request = builder.build()
          .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
        apply_header_rules( request.headers_mut(), &spec.method, spec.body.is_some(), &spec.extra_headers );

        let send_result = self.http_client.execute( request ).await;

        let response = match send_result
        {
          Ok( response ) => response,
          Err( e ) =>
          {
            if self.config.retry_policy.should_retry_transport_error( &method_name, attempt, &e )
            {
              let delay = self.config.retry_policy.backoff_delay( attempt );
              tokio::time::sleep( delay ).await;
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
          let delay = self.config.retry_policy.delay_for( attempt, retry_after );
          tokio::time::sleep( delay ).await;
          continue;
        }

        let status_code = status.as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
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
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    RequestSpec,
  };
}
