// src/stream_sse.rs
//! Server-sent-event streaming for incremental JSON responses (chat
//! completions, and anything else the API streams as `data:` lines).
//!
//! Each `data:` line is treated as a self-contained JSON event; the stream
//! ends on a `data: [DONE]` sentinel line. Malformed lines are logged and
//! skipped rather than failing the whole stream.

mod private
{
  use crate::
  {
    client ::Client,
    client_ext_request_core ::RequestSpec,
    error ::{ ClientError, Result },
  };

  use futures_util::StreamExt;
  use serde::{ de::DeserializeOwned, Serialize };
  use tokio::sync::mpsc;

  /// The terminal sentinel the hosted API sends to close a stream.
  const DONE_SENTINEL : &str = "[DONE]";

  /// Lifecycle of a stream handle, tracked so re-iterating a consumed or
  /// closed stream produces the right error instead of silently yielding
  /// nothing.
  #[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
  enum StreamState
  {
    Open,
    Consumed,
    Closed,
  }

  /// A handle to an in-flight server-sent-event stream.
  ///
  /// Wraps an `mpsc::Receiver` fed by a background task that owns the
  /// underlying HTTP response. `next()` yields decoded events until the
  /// stream closes or an error terminates it.
  #[ derive( Debug ) ]
  pub struct SseStream< O >
  {
    receiver : mpsc::Receiver< Result< O > >,
    state : StreamState,
  }

  impl< O > SseStream< O >
  {
    /// Pulls the next event, if any.
    ///
    /// # Errors
    /// Returns `ClientError::StreamConsumed` if the stream was already
    /// fully drained, `ClientError::StreamClosed` if `close()` was already
    /// called, or the translated error that terminated the stream.
    pub async fn next( &mut self ) -> Option< Result< O > >
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

    /// Closes the stream early. Idempotent and infallible: repeated calls,
    /// or calls after natural exhaustion, are no-ops.
    pub fn close( &mut self )
    {
      self.receiver.close();
      self.state = StreamState::Closed;
    }
  }

  /// Parses one `data:` payload. Returns `None` for the `[DONE]` sentinel or
  /// a blank line (connection keep-alive), `Some(Err(..))` for malformed
  /// JSON.
  fn parse_data_line< O : DeserializeOwned >( data : &str ) -> Option< Result< O > >
  {
    if data.is_empty() || data == DONE_SENTINEL
    {
      return None;
    }

    match serde_json::from_str::< O >( data )
    {
      Ok( value ) => Some( Ok( value ) ),
      Err( e ) => Some( Err( ClientError::ApiResponseProcessing
      {
        message : format!( "failed to parse SSE event '{data}': {e}" ),
        request : None,
      })),
    }
  }

  impl Client
  {
    /// Sends `spec` and returns a stream of decoded events from the
    /// response body, parsed as server-sent events.
    ///
    /// # Errors
    /// Returns the translated error if the initial request itself fails
    /// (non-2xx status, connection failure). Errors that occur while
    /// reading the body are delivered through the stream instead, rewritten
    /// with [`ClientError::into_stream_error`].
    pub async fn stream_sse< I, O >( &self, path : &str, body : &I ) -> Result< SseStream< O > >
    where
      I : Serialize,
      O : DeserializeOwned + Send + 'static,
    {
      let body_value = serde_json::to_value( body )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      let mut spec = RequestSpec::new( reqwest::Method::POST, path ).with_body( body_value );
      spec.extra_headers.insert( reqwest::header::ACCEPT, reqwest::header::HeaderValue::from_static( "text/event-stream" ) );
      let response = self.execute( &spec ).await?;

      let ( tx, rx ) = mpsc::channel( 64 );

      tokio::spawn( async move
      {
        let mut byte_stream = response.bytes_stream();
        let mut buffer = String::new();

        loop
        {
          match byte_stream.next().await
          {
            Some( Ok( chunk ) ) =>
            {
              buffer.push_str( &String::from_utf8_lossy( &chunk ) );

              while let Some( newline_pos ) = buffer.find( '\n' )
              {
                let line : String = buffer.drain( ..=newline_pos ).collect();
                let line = line.trim_end_matches( [ '\n', '\r' ] );

                let Some( data ) = line.strip_prefix( "data:" ) else { continue };
                let data = data.trim();

                if data == DONE_SENTINEL
                {
                  return;
                }

                if let Some( parsed ) = parse_data_line::< O >( data )
                  && tx.send( parsed ).await.is_err()
                {
                  return;
                }
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

      Ok( SseStream { receiver : rx, state : StreamState::Open } )
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    SseStream,
  };
}
