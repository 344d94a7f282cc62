// src/retry.rs
//! Deterministic retry policy: which failures are retriable, and how long to
//! wait before the next attempt.
//!
//! The delay is computed exactly, with no jitter and no elapsed-time cap: a
//! caller inspecting two runs with the same inputs sees the same delays.

/// Define a private namespace for all its items.
mod private
{
  use std::collections::HashSet;
  use core::time::Duration;
  use chrono::{ DateTime, Utc };

  /// HTTP status codes that are safe to retry.
  fn default_retry_statuses() -> HashSet< u16 >
  {
    [ 429, 500, 502, 503, 504 ].into_iter().collect()
  }

  /// HTTP methods that are safe to retry, including POST: every retry is a
  /// brand new attempt at the same logical operation, not a replay of a
  /// partially-applied one.
  fn default_retry_methods() -> HashSet< String >
  {
    [ "GET", "POST", "PUT", "DELETE", "PATCH" ].into_iter().map( String::from ).collect()
  }

  /// Governs how many times a request is retried and how the delay between
  /// attempts is computed.
  #[ derive( Debug, Clone ) ]
  pub struct RetryPolicy
  {
    /// Maximum number of attempts, including the first one.
    pub max_attempts : u32,
    /// Base delay, in seconds, used in `base * 2^(attempt - 1)`.
    pub base_delay_seconds : f64,
    /// Status codes considered retriable.
    pub retry_statuses : HashSet< u16 >,
    /// HTTP methods considered retriable.
    pub retry_methods : HashSet< String >,
    /// Whether a `Retry-After` response header overrides the computed delay.
    pub respect_retry_after : bool,
  }

  impl Default for RetryPolicy
  {
    #[ inline ]
    fn default() -> Self
    {
      Self
      {
        max_attempts : 3,
        base_delay_seconds : 1.0,
        retry_statuses : default_retry_statuses(),
        retry_methods : default_retry_methods(),
        respect_retry_after : true,
      }
    }
  }

  impl RetryPolicy
  {
    /// A policy that never retries; useful for tests or callers that want
    /// to manage retries themselves.
    #[ inline ]
    #[ must_use ]
    pub fn none() -> Self
    {
      Self { max_attempts : 1, ..Self::default() }
    }

    /// Whether a request with the given method and a response with the
    /// given status is eligible for another attempt, given attempts already
    /// made (`attempt` is 1-based: the attempt that just failed).
    #[ inline ]
    #[ must_use ]
    pub fn should_retry( &self, method : &str, status : u16, attempt : u32 ) -> bool
    {
      attempt < self.max_attempts
        && self.retry_methods.contains( &method.to_ascii_uppercase() )
        && self.retry_statuses.contains( &status )
    }

    /// Whether a transport-level failure (no response at all) is eligible
    /// for another attempt.
    ///
    /// Only a connect failure or a timeout that struck before any response
    /// bytes arrived is retriable; a timeout that struck while a body was
    /// already being read, and builder/programmer errors (a malformed
    /// header, an invalid URL), are not — replaying those would repeat the
    /// same failure rather than recover from a transient one.
    #[ inline ]
    #[ must_use ]
    pub fn should_retry_transport_error( &self, method : &str, attempt : u32, error : &reqwest::Error ) -> bool
    {
      attempt < self.max_attempts
        && self.retry_methods.contains( &method.to_ascii_uppercase() )
        && is_retriable_transport_failure( error )
    }

    /// Computes the exponential backoff delay for the given 1-based attempt
    /// number: `base * 2^(attempt - 1)`.
    #[ inline ]
    #[ must_use ]
    pub fn backoff_delay( &self, attempt : u32 ) -> Duration
    {
      let exponent = attempt.saturating_sub( 1 );
      let seconds = self.base_delay_seconds * 2f64.powi( i32::try_from( exponent ).unwrap_or( i32::MAX ) );
      Duration::from_secs_f64( seconds.max( 0.0 ) )
    }

    /// Computes the delay to honor before the next attempt, combining the
    /// computed backoff with any `Retry-After` value: whichever is larger
    /// wins when both are present.
    #[ inline ]
    #[ must_use ]
    pub fn delay_for
    (
      &self,
      attempt : u32,
      retry_after : Option< Duration >,
    ) -> Duration
    {
      let computed = self.backoff_delay( attempt );
      match ( self.respect_retry_after, retry_after )
      {
        ( true, Some( from_header ) ) => computed.max( from_header ),
        _ => computed,
      }
    }
  }

  /// Classifies a transport-level failure as retriable or not.
  ///
  /// `reqwest` doesn't expose a dedicated "read during idle keep-alive"
  /// flag, so a connect failure and a pre-body timeout are treated as the
  /// retriable cases the underlying connection-reuse failures fall into;
  /// a timeout after the body started streaming, and builder errors, are
  /// excluded.
  fn is_retriable_transport_failure( error : &reqwest::Error ) -> bool
  {
    if error.is_builder() || error.is_redirect()
    {
      return false;
    }
    if error.is_connect()
    {
      return true;
    }
    if error.is_timeout()
    {
      return !error.is_body();
    }
    false
  }

  /// Parses a `Retry-After` header value into a delay.
  ///
  /// Tries an integer number of seconds first. If that fails, parses the
  /// value as an HTTP date and computes the delay relative to `now` (the
  /// response's own `Date` header when available, otherwise wall-clock
  /// time). Any parse failure returns `None`, signalling the caller should
  /// fall back to the computed backoff.
  #[ must_use ]
  pub fn parse_retry_after( header_value : &str, now : Option< DateTime< Utc > > ) -> Option< Duration >
  {
    if let Ok( seconds ) = header_value.trim().parse::< i64 >()
    {
      return Some( Duration::from_secs( u64::try_from( seconds.max( 0 ) ).unwrap_or( 0 ) ) );
    }

    let target = DateTime::parse_from_rfc2822( header_value.trim() ).ok()?.with_timezone( &Utc );
    let now = now.unwrap_or_else( Utc::now );
    let delta_seconds = ( target - now ).num_seconds();
    Some( Duration::from_secs( u64::try_from( delta_seconds.max( 0 ) ).unwrap_or( 0 ) ) )
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    RetryPolicy,
    parse_retry_after,
  };
}
