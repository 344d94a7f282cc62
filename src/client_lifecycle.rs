// src/client_lifecycle.rs
//! Resource-scoped client acquisition and idempotent shutdown.
//!
//! `close()` is explicit and synchronous, so it also runs from `Drop` when
//! the client owns its transport. [`with_client`] gives callers a
//! scoped-acquisition pattern that runs it on every exit path, including an
//! early `?`, without waiting on the implicit drop.

mod private
{
  use crate::
  {
    client ::Client,
    client_blocking ::BlockingClient,
    config ::ClientConfig,
    error ::ConfigError,
  };

  use core::sync::atomic::Ordering;
  use core::future::Future;

  impl Client
  {
    /// Marks the client closed. Idempotent: repeated calls, and calls after
    /// the owned transport has already gone away, are no-ops. Requests
    /// issued after `close()` fail with `ClientError::ApiConnection`.
    #[ inline ]
    pub fn close( &self )
    {
      self.closed.store( true, Ordering::Release );
    }

    /// Whether `close()` has already run.
    #[ inline ]
    #[ must_use ]
    pub fn is_closed( &self ) -> bool
    {
      self.closed.load( Ordering::Acquire )
    }
  }

  impl Drop for Client
  {
    /// Closes the client on drop, but only when it owns its transport.
    /// A `Client` built over a caller-supplied `reqwest::Client` must never
    /// close on the caller's behalf; `Drop` can't `.await`, but `close()`
    /// itself is synchronous so this is safe to run here.
    fn drop( &mut self )
    {
      if self.should_close
      {
        self.close();
      }
    }
  }

  /// Builds a client from `config`, runs `body` with a borrow of it, and
  /// closes the client afterward regardless of whether `body` returned an
  /// error.
  ///
  /// # Errors
  /// Returns `ConfigError` if the client fails to build, otherwise
  /// whatever `body` returned.
  pub async fn with_client< F, Fut, T, E >( config : ClientConfig, body : F ) -> core::result::Result< T, E >
  where
    F : FnOnce( &Client ) -> Fut,
    Fut : Future< Output = core::result::Result< T, E > >,
    E : From< ConfigError >,
  {
    let client = Client::build( config )?;
    let result = body( &client ).await;
    client.close();
    result
  }

  /// Builds a blocking client from `config`, runs `body` with a borrow of
  /// it, and closes the client afterward regardless of whether `body`
  /// returned an error.
  ///
  /// # Errors
  /// Returns `ConfigError` if the client fails to build, otherwise
  /// whatever `body` returned.
  pub fn with_blocking_client< F, T, E >( config : ClientConfig, body : F ) -> core::result::Result< T, E >
  where
    F : FnOnce( &BlockingClient ) -> core::result::Result< T, E >,
    E : From< ConfigError >,
  {
    let client = BlockingClient::build( config )?;
    let result = body( &client );
    client.close();
    result
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    with_client,
    with_blocking_client,
  };
}
