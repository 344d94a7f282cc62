// src/token_estimator.rs
//! Token count estimation, used to size requests before sending them.
//!
//! Prefers an exact `cl100k_base` tokenizer count; falls back to a rough
//! character-based estimate if the tokenizer can't be built. The fallback
//! never attributes tokens to numeric input — only to genuine text.

mod private
{
  use std::sync::Once;

  static FALLBACK_WARNING : Once = Once::new();

  fn warn_fallback( reason : &str )
  {
    FALLBACK_WARNING.call_once( ||
    {
      tracing::warn!( reason, "falling back to approximate token counting" );
    });
  }

  /// Approximates a token count without a tokenizer: roughly one token per
  /// four characters, rounded up, with a floor of one token for any
  /// non-empty string. Numeric input always estimates to zero, mirroring
  /// the exact-count path's behavior of not charging tokens for bare
  /// numbers passed where text was expected.
  fn fallback_estimate( text : &str, was_numeric : bool ) -> u64
  {
    if was_numeric || text.is_empty()
    {
      return 0;
    }
    ( ( text.len() as f64 ) / 4.0 ).floor().max( 1.0 ) as u64
  }

  /// Input to [`estimate_tokens`]: either text or a number that will be
  /// stringified before counting.
  #[ derive( Debug, Clone ) ]
  pub enum TokenInput
  {
    /// Text content.
    Text( String ),
    /// A numeric value, stringified before counting.
    Number( f64 ),
  }

  impl From< &str > for TokenInput
  {
    #[ inline ]
    fn from( value : &str ) -> Self
    {
      Self::Text( value.to_string() )
    }
  }

  impl From< String > for TokenInput
  {
    #[ inline ]
    fn from( value : String ) -> Self
    {
      Self::Text( value )
    }
  }

  /// Estimates the token count of `input`.
  ///
  /// When the `cl100k_base` tokenizer is available, returns its exact
  /// count unconditionally, including for numeric input that stringifies
  /// to a non-empty string. Only the fallback path (tokenizer unavailable)
  /// special-cases numeric input to zero.
  #[ must_use ]
  pub fn estimate_tokens( input : &TokenInput ) -> u64
  {
    let ( text, was_numeric ) = match input
    {
      TokenInput::Text( text ) => ( text.clone(), false ),
      TokenInput::Number( number ) => ( number.to_string(), true ),
    };

    if text.is_empty()
    {
      return 0;
    }

    match tiktoken_rs::cl100k_base()
    {
      Ok( encoding ) => encoding.encode_with_special_tokens( &text ).len() as u64,
      Err( e ) =>
      {
        warn_fallback( "tiktoken tokenizer unavailable" );
        let _ = e;
        fallback_estimate( &text, was_numeric )
      }
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    TokenInput,
    estimate_tokens,
  };
}
