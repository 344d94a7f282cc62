// src/stream_raw.rs
//! Raw binary streaming for endpoints that return opaque byte chunks (audio,
//! images) rather than server-sent JSON events.

mod private
{
  use crate::
  {
    client ::Client,
    client_ext_request_core ::RequestSpec,
    error ::{ ClientError, Result },
  };

  use futures_util::StreamExt;
  use serde::Serialize;
  use tokio::sync::mpsc;
  use bytes::Bytes;

  /// Lifecycle of a raw byte stream handle, mirroring [`crate::stream_sse::SseStream`].
  #[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
  enum StreamState
  {
    Open,
    Consumed,
    Closed,
  }

  /// A handle to an in-flight raw binary stream. Chunks are delivered
  /// opaquely; no payload interpretation happens here.
  #[ derive( Debug ) ]
  pub struct RawStream
  {
    receiver : mpsc::Receiver< Result< Bytes > >,
    state : StreamState,
  }

  impl RawStream
  {
    /// Pulls the next non-empty chunk, if any.
    ///
    /// # Errors
    /// Returns `ClientError::StreamConsumed`/`StreamClosed` for
    /// post-lifecycle iteration, or the translated error that terminated
    /// the stream.
    pub async fn next( &mut self ) -> Option< Result< Bytes > >
    {
      if self.state == StreamState::Consumed
      {
        return Some( Err( ClientError::StreamConsumed ) );
      }
      if self.state == StreamState::Closed
      {
        return Some( Err( ClientError::StreamClosed ) );
      }

      match self.receiver.recv().await
      {
        Some( item ) => Some( item ),
        None =>
        {
          self.state = StreamState::Consumed;
          None
        }
      }
    }

    /// Closes the stream early. Idempotent.
    pub fn close( &mut self )
    {
      self.receiver.close();
      self.state = StreamState::Closed;
    }
  }

  impl Client
  {
    /// Sends `spec` and returns a stream of raw byte chunks from the
    /// response body. Zero-length chunks are skipped.
    ///
    /// # Errors
    /// Returns the translated error if the initial request fails.
    pub async fn stream_raw< I >( &self, path : &str, body : &I ) -> Result< RawStream >
    where
      I : Serialize,
    {
      let body_value = serde_json::to_value( body )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      let mut spec = RequestSpec::new( reqwest::Method::POST, path ).with_body( body_value );
      spec.extra_headers.insert( reqwest::header::ACCEPT, reqwest::header::HeaderValue::from_static( "*/*" ) );
      let response = self.execute( &spec ).await?;

      let ( tx, rx ) = mpsc::channel( 64 );

      tokio::spawn( async move
      {
        let mut byte_stream = response.bytes_stream();
        loop
        {
          match byte_stream.next().await
          {
            Some( Ok( chunk ) ) =>
            {
              if chunk.is_empty()
              {
                continue;
              }
              if tx.send( Ok( chunk ) ).await.is_err()
              {
                return;
              }
            }
            Some( Err( e ) ) =>
            {
              let translated = ClientError::ApiConnection
              {
                message : e.to_string(),
                request : None,
              }.into_stream_error();
              let _ = tx.send( Err( translated ) ).await;
              return;
            }
            None => return,
          }
        }
      });

      Ok( RawStream { receiver : rx, state : StreamState::Open } )
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    RawStream,
  };
}
