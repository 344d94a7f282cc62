//! Retry Policy Tests
//!
//! Covers exponential backoff calculation, which statuses/methods are
//! retriable, and `Retry-After` header parsing.

use api_venice::retry::{ RetryPolicy, parse_retry_after };
use core::time::Duration;
use chrono::Utc;

mod retry_calculation_tests
{
  use super::*;

  #[ test ]
  fn exponential_backoff_has_no_jitter()
  {
    let policy = RetryPolicy::default();

    assert_eq!( policy.backoff_delay( 1 ), Duration::from_secs_f64( 1.0 ) );
    assert_eq!( policy.backoff_delay( 2 ), Duration::from_secs_f64( 2.0 ) );
    assert_eq!( policy.backoff_delay( 3 ), Duration::from_secs_f64( 4.0 ) );
  }

  #[ test ]
  fn backoff_scales_with_base_delay()
  {
    let policy = RetryPolicy { base_delay_seconds : 0.5, ..RetryPolicy::default() };
    assert_eq!( policy.backoff_delay( 1 ), Duration::from_secs_f64( 0.5 ) );
    assert_eq!( policy.backoff_delay( 4 ), Duration::from_secs_f64( 4.0 ) );
  }
}

mod retry_eligibility_tests
{
  use super::*;

  #[ test ]
  fn retries_known_statuses_for_retriable_methods()
  {
    let policy = RetryPolicy::default();
    assert!( policy.should_retry( "POST", 429, 1 ) );
    assert!( policy.should_retry( "get", 503, 1 ) );
    assert!( !policy.should_retry( "POST", 400, 1 ) );
  }

  #[ test ]
  fn stops_once_max_attempts_reached()
  {
    let policy = RetryPolicy { max_attempts : 2, ..RetryPolicy::default() };
    assert!( policy.should_retry( "GET", 500, 1 ) );
    assert!( !policy.should_retry( "GET", 500, 2 ) );
  }

  #[ test ]
  fn none_policy_never_retries()
  {
    let policy = RetryPolicy::none();
    assert!( !policy.should_retry( "GET", 500, 1 ) );
    assert!( !policy.should_retry_transport_error( "GET", 1, &builder_error() ) );
  }

  /// Synthesizes a `reqwest::Error` with `is_builder() == true` without any
  /// network I/O: an invalid header value fails at request-build time.
  fn builder_error() -> reqwest::Error
  {
    reqwest::Client::new()
      .get( "https://example.invalid/" )
      .header( "x-test", vec![ 0xffu8 ] )
      .build()
      .expect_err( "invalid header bytes should fail to build" )
  }

  #[ test ]
  fn builder_errors_are_never_retried()
  {
    let policy = RetryPolicy::default();
    assert!( !policy.should_retry_transport_error( "POST", 1, &builder_error() ) );
  }
}

mod retry_after_parsing_tests
{
  use super::*;

  #[ test ]
  fn parses_integer_seconds()
  {
    assert_eq!( parse_retry_after( "30", None ), Some( Duration::from_secs( 30 ) ) );
  }

  #[ test ]
  fn parses_http_date_relative_to_now()
  {
    let now = Utc::now();
    let future = now + chrono::Duration::seconds( 120 );
    let header = future.to_rfc2822();

    let parsed = parse_retry_after( &header, Some( now ) ).expect( "should parse HTTP date" );
    assert!( parsed.as_secs() >= 119 && parsed.as_secs() <= 121 );
  }

  #[ test ]
  fn unparsable_value_returns_none()
  {
    assert_eq!( parse_retry_after( "not-a-date", None ), None );
  }

  #[ test ]
  fn delay_for_takes_the_larger_of_computed_and_retry_after()
  {
    let policy = RetryPolicy::default();
    let delay = policy.delay_for( 1, Some( Duration::from_secs( 10 ) ) );
    assert_eq!( delay, Duration::from_secs( 10 ) );

    let delay = policy.delay_for( 3, Some( Duration::from_secs( 1 ) ) );
    assert_eq!( delay, Duration::from_secs_f64( 4.0 ) );
  }
}
