//! Token Estimation Tests

use api_venice::token_estimator::{ TokenInput, estimate_tokens };

mod exact_count_tests
{
  use super::*;

  #[ test ]
  fn empty_text_is_zero_tokens()
  {
    assert_eq!( estimate_tokens( &TokenInput::from( "" ) ), 0 );
  }

  #[ test ]
  fn short_sentence_has_a_small_nonzero_count()
  {
    let count = estimate_tokens( &TokenInput::from( "The quick brown fox jumps over the lazy dog." ) );
    assert!( count > 0 && count < 20 );
  }

  #[ test ]
  fn longer_text_counts_more_than_shorter_text()
  {
    let short = estimate_tokens( &TokenInput::from( "hello" ) );
    let long = estimate_tokens( &TokenInput::from( "hello ".repeat( 50 ).trim() ) );
    assert!( long > short );
  }
}
