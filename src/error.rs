// src/error.rs
//! Error taxonomy for the client.
//!
//! Every failure observable while using the client surfaces as a
//! [`ClientError`] variant. Failures that occur while assembling a
//! `ClientConfig`/`Client`, before any network I/O happens, surface as the
//! smaller [`ConfigError`].

/// Define a private namespace for all its items.
mod private
{
  use serde_json::Value;
  use error_tools::dependency::thiserror;

  /// Identifies the request that produced an error, for diagnostics.
  #[ derive( Debug, Clone ) ]
  pub struct RequestDescriptor
  {
    /// HTTP method of the failed request.
    pub method : String,
    /// URL of the failed request.
    pub url : String,
  }

  /// Errors that can occur while assembling a `ClientConfig` or `Client`.
  #[ derive( Debug, Clone, thiserror::Error ) ]
  #[ non_exhaustive ]
  pub enum ConfigError
  {
    /// No API key was supplied to the builder and none could be found.
    #[ error( "API key is required" ) ]
    MissingApiKey,

    /// The configured base URL could not be parsed.
    #[ error( "invalid base URL: {0}" ) ]
    InvalidBaseUrl( String ),

    /// The API key failed basic shape validation.
    #[ error( "invalid API key: {0}" ) ]
    InvalidApiKey( String ),

    /// The requested environment variable was not set.
    #[ error( "environment variable {0} is not set" ) ]
    MissingEnvironmentVariable( String ),
  }

  /// The full error taxonomy surfaced by client operations.
  ///
  /// Each variant carries enough context (message, request descriptor,
  /// status) to be logged or displayed directly. No variant ever embeds an
  /// API key.
  #[ derive( Debug, Clone, thiserror::Error ) ]
  #[ non_exhaustive ]
  pub enum ClientError
  {
    /// 401 - credentials rejected.
    #[ error( "{message}" ) ]
    Authentication { message : String, request : Option< RequestDescriptor > },

    /// 403 - credentials valid but insufficient permission.
    #[ error( "{message}" ) ]
    PermissionDenied { message : String, request : Option< RequestDescriptor > },

    /// 400 / 413 / 415 - malformed or unacceptable request.
    #[ error( "{message}" ) ]
    InvalidRequest { message : String, request : Option< RequestDescriptor > },

    /// 404 - resource not found.
    #[ error( "{message}" ) ]
    NotFound { message : String, request : Option< RequestDescriptor > },

    /// 409 - conflicting resource state.
    #[ error( "{message}" ) ]
    Conflict { message : String, request : Option< RequestDescriptor > },

    /// 422 - semantically invalid request.
    #[ error( "{message}" ) ]
    Unprocessable { message : String, request : Option< RequestDescriptor > },

    /// 429 - rate limited. Carries the delay the server asked for, if parsed.
    #[ error( "{message}" ) ]
    RateLimit { message : String, request : Option< RequestDescriptor >, retry_after_seconds : Option< u64 > },

    /// 5xx - server-side failure.
    #[ error( "{message}" ) ]
    InternalServer { message : String, request : Option< RequestDescriptor >, status : u16 },

    /// Generic API error for status codes that don't map to a specific kind.
    #[ error( "{message}" ) ]
    Api { message : String, request : Option< RequestDescriptor >, status : Option< u16 > },

    /// The transport could not connect, or the connection dropped.
    #[ error( "connection error: {message}" ) ]
    ApiConnection { message : String, request : Option< RequestDescriptor > },

    /// The request exceeded its configured timeout.
    #[ error( "request timed out: {message}" ) ]
    ApiTimeout { message : String, request : Option< RequestDescriptor > },

    /// The response body could not be parsed into the expected shape.
    #[ error( "failed to process response: {message}" ) ]
    ApiResponseProcessing { message : String, request : Option< RequestDescriptor > },

    /// The caller attempted to iterate a stream that was already consumed.
    #[ error( "stream already consumed" ) ]
    StreamConsumed,

    /// The caller attempted to iterate a stream that was already closed.
    #[ error( "stream already closed" ) ]
    StreamClosed,
  }

  impl ClientError
  {
    /// The HTTP status code associated with this error, if any.
    #[ inline ]
    #[ must_use ]
    pub fn status( &self ) -> Option< u16 >
    {
      match self
      {
        Self::Authentication { .. } => Some( 401 ),
        Self::PermissionDenied { .. } => Some( 403 ),
        Self::InvalidRequest { .. } => Some( 400 ),
        Self::NotFound { .. } => Some( 404 ),
        Self::Conflict { .. } => Some( 409 ),
        Self::Unprocessable { .. } => Some( 422 ),
        Self::RateLimit { .. } => Some( 429 ),
        Self::InternalServer { status, .. } => Some( *status ),
        Self::Api { status, .. } => *status,
        _ => None,
      }
    }

    /// Rewrites this error's message with a "Stream request failed" prefix.
    /// Used when the failure occurs mid-stream rather than on the initial
    /// request/response exchange.
    #[ inline ]
    #[ must_use ]
    pub fn into_stream_error( self ) -> Self
    {
      fn prefix( message : String ) -> String
      {
        format!( "Stream request failed: {message}" )
      }

      match self
      {
        Self::Authentication { message, request } => Self::Authentication { message : prefix( message ), request },
        Self::PermissionDenied { message, request } => Self::PermissionDenied { message : prefix( message ), request },
        Self::InvalidRequest { message, request } => Self::InvalidRequest { message : prefix( message ), request },
        Self::NotFound { message, request } => Self::NotFound { message : prefix( message ), request },
        Self::Conflict { message, request } => Self::Conflict { message : prefix( message ), request },
        Self::Unprocessable { message, request } => Self::Unprocessable { message : prefix( message ), request },
        Self::RateLimit { message, request, retry_after_seconds } =>
          Self::RateLimit { message : prefix( message ), request, retry_after_seconds },
        Self::InternalServer { message, request, status } =>
          Self::InternalServer { message : prefix( message ), request, status },
        Self::Api { message, request, status } => Self::Api { message : prefix( message ), request, status },
        Self::ApiConnection { message, request } => Self::ApiConnection { message : prefix( message ), request },
        Self::ApiTimeout { message, request } => Self::ApiTimeout { message : prefix( message ), request },
        Self::ApiResponseProcessing { message, request } =>
          Self::ApiResponseProcessing { message : prefix( message ), request },
        other => other,
      }
    }
  }

  /// Convenience alias used throughout the crate.
  pub type Result< T > = core::result::Result< T, ClientError >;

  /// Builds the message body for a status-mapped error.
  ///
  /// Starts from a base message, appends `": <detail>"` when the JSON body
  /// carries `error.message`/`error.detail`, then appends
  /// `" (Code: <code>)"` when `error.code` is also present. With no JSON
  /// body but non-empty raw text, appends `": <raw text>"` instead.
  #[ must_use ]
  pub fn compose_message( status : u16, method : &str, url : &str, json_body : Option< &Value >, raw_text : &str ) -> String
  {
    let base = format!( "API error {status} for {method} {url}" );

    let Some( body ) = json_body else
    {
      return if raw_text.trim().is_empty() { base } else { format!( "{base}: {raw_text}" ) };
    };

    let error_obj = body.get( "error" );
    let detail = error_obj
      .and_then( | e | e.get( "message" ).or_else( || e.get( "detail" ) ) )
      .and_then( Value::as_str );
    let code = error_obj.and_then( | e | e.get( "code" ) );

    match ( detail, code )
    {
      ( Some( detail ), Some( code ) ) => format!( "{base}: {detail} (Code: {code})" ),
      ( Some( detail ), None ) => format!( "{base}: {detail}" ),
      ( None, Some( code ) ) => format!( "{base} (Code: {code})" ),
      ( None, None ) =>
        if raw_text.trim().is_empty() { base } else { format!( "{base}: {raw_text}" ) },
    }
  }

  /// Maps an HTTP status code and response body to the matching
  /// [`ClientError`] variant.
  #[ must_use ]
  pub fn translate_status
  (
    status : u16,
    method : &str,
    url : &str,
    json_body : Option< &Value >,
    raw_text : &str,
    retry_after_seconds : Option< u64 >,
  ) -> ClientError
  {
    let message = compose_message( status, method, url, json_body, raw_text );
    let request = Some( RequestDescriptor { method : method.to_string(), url : url.to_string() } );

    match status
    {
      400 | 413 | 415 => ClientError::InvalidRequest { message, request },
      401 => ClientError::Authentication { message, request },
      403 => ClientError::PermissionDenied { message, request },
      404 => ClientError::NotFound { message, request },
      409 => ClientError::Conflict { message, request },
      422 => ClientError::Unprocessable { message, request },
      429 => ClientError::RateLimit { message, request, retry_after_seconds },
      500..=599 => ClientError::InternalServer { message, request, status },
      400..=499 =>
        ClientError::Api { message : format!( "Unhandled 4xx error: {message}" ), request, status : Some( status ) },
      _ => ClientError::Api { message, request, status : Some( status ) },
    }
  }

  /// Translates a `reqwest` transport-level failure into the matching
  /// [`ClientError`] variant.
  #[ must_use ]
  pub fn translate_transport_error( error : &reqwest::Error, method : &str, url : &str ) -> ClientError
  {
    let request = Some( RequestDescriptor { method : method.to_string(), url : url.to_string() } );

    if error.is_timeout()
    {
      ClientError::ApiTimeout { message : error.to_string(), request }
    }
    else if error.is_decode()
    {
      ClientError::ApiResponseProcessing { message : error.to_string(), request }
    }
    else
    {
      ClientError::ApiConnection { message : error.to_string(), request }
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    ClientError,
    ConfigError,
    RequestDescriptor,
    Result,
    compose_message,
    translate_status,
    translate_transport_error,
  };
}
