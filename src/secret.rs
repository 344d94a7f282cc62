// src/secret.rs
//! Defines the `Secret` type for handling the API key. It wraps a string and
//! ensures the value is never accidentally exposed in debug output or logs.

/// Define a private namespace for all its items.
mod private
{
  use secrecy::{ SecretString, ExposeSecret };
  use crate::error::ConfigError;

  /// Validates the basic shape of an API key.
  ///
  /// The hosted API does not publish a fixed key format, so validation is
  /// limited to rejecting empty or implausibly long values rather than
  /// matching a specific prefix.
  fn validate_api_key_format( secret : &str ) -> Result< (), ConfigError >
  {
    let trimmed = secret.trim();

    if trimmed.is_empty()
    {
      return Err( ConfigError::InvalidApiKey( "API key must not be empty".to_string() ) );
    }

    if trimmed.len() > 512
    {
      return Err( ConfigError::InvalidApiKey( "API key too long - maximum 512 characters allowed".to_string() ) );
    }

    Ok( () )
  }

  /// Holds the API key. Wraps `secrecy::SecretString` so the value never
  /// appears in `Debug` output, logs, or error messages.
  #[ derive( Clone ) ]
  #[ non_exhaustive ]
  pub struct Secret( SecretString );

  impl core::fmt::Debug for Secret
  {
    #[ inline ]
    fn fmt( &self, f : &mut core::fmt::Formatter< '_ > ) -> core::fmt::Result
    {
      f.debug_tuple( "Secret" ).field( &"[redacted]" ).finish()
    }
  }

  impl Secret
  {
    /// Creates a new `Secret` from a string, rejecting empty or
    /// implausibly long values.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidApiKey` if the value fails validation.
    #[ inline ]
    pub fn new( secret : String ) -> Result< Self, ConfigError >
    {
      validate_api_key_format( &secret )?;
      Ok( Self( SecretString::from( secret ) ) )
    }

    /// Creates a new `Secret` without validation. Intended for tests.
    #[ inline ]
    #[ must_use ]
    pub fn new_unchecked( secret : String ) -> Self
    {
      Self( SecretString::from( secret ) )
    }

    /// Reads the key from the given environment variable.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvironmentVariable` if the variable is
    /// unset, or `ConfigError::InvalidApiKey` if its value is empty.
    #[ inline ]
    pub fn from_env( env_var : &str ) -> Result< Self, ConfigError >
    {
      let secret_string = std::env::var( env_var )
        .map_err( | _e | ConfigError::MissingEnvironmentVariable( env_var.to_string() ) )?;
      Self::new( secret_string.trim().to_string() )
    }
  }

  impl ExposeSecret< str > for Secret
  {
    #[ inline ]
    fn expose_secret( &self ) -> &str
    {
      self.0.expose_secret()
    }
  }

  impl From< String > for Secret
  {
    #[ inline ]
    fn from( secret : String ) -> Self
    {
      Self::new_unchecked( secret )
    }
  }

  impl From< &str > for Secret
  {
    #[ inline ]
    fn from( secret : &str ) -> Self
    {
      Self::new_unchecked( secret.to_owned() )
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Secret,
  };
}
