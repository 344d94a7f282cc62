// src/chat.rs
//! Chat completions resource wrapper.

/// Define a private namespace for all its items.
mod private
{
  use crate::
  {
    client ::Client,
    error ::{ ClientError, Result },
    message_validator,
    components::input::Message,
    stream_sse::SseStream,
  };

  use former::Former;
  use serde::{ Serialize, Deserialize };

  /// Request body for `/chat/completions`.
  #[ derive( Debug, Clone, Serialize, Deserialize, Former ) ]
  pub struct ChatCompletionRequest
  {
    /// Model identifier.
    pub model : String,
    /// Conversation so far.
    pub messages : Vec< Message >,
    /// Whether to stream the response as server-sent events.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub stream : Option< bool >,
    /// Sampling temperature.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub temperature : Option< f64 >,
    /// Nucleus sampling threshold.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub top_p : Option< f64 >,
    /// Maximum tokens to generate.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub max_tokens : Option< u32 >,
  }

  /// A single chat completion response.
  #[ derive( Debug, Clone, Serialize, Deserialize ) ]
  pub struct ChatCompletionResponse
  {
    /// Completion identifier.
    pub id : String,
    /// Model that produced the completion.
    pub model : String,
    /// Generated choices.
    pub choices : Vec< ChatCompletionChoice >,
  }

  /// One generated choice within a [`ChatCompletionResponse`].
  #[ derive( Debug, Clone, Serialize, Deserialize ) ]
  pub struct ChatCompletionChoice
  {
    /// Index of this choice within the response.
    pub index : u32,
    /// The generated message.
    pub message : Message,
    /// Why generation stopped, if known.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub finish_reason : Option< String >,
  }

  /// One incremental event from a streamed chat completion.
  #[ derive( Debug, Clone, Serialize, Deserialize ) ]
  pub struct ChatCompletionStreamEvent
  {
    /// Completion identifier, stable across every event in the stream.
    pub id : String,
    /// Model that produced the completion.
    pub model : String,
    /// Incremental choices for this event.
    pub choices : Vec< serde_json::Value >,
  }

  /// Resource wrapper for chat completions. Holds only a borrow of the
  /// parent client; no state or independent retry/caching behavior of its
  /// own.
  #[ derive( Debug, Clone ) ]
  pub struct Chat< 'client >
  {
    client : &'client Client,
  }

  impl< 'client > Chat< 'client >
  {
    #[ inline ]
    pub( crate ) fn new( client : &'client Client ) -> Self
    {
      Self { client }
    }

    /// Creates a chat completion.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` if the message list fails
    /// structural validation, or the translated error from the network
    /// layer otherwise.
    #[ inline ]
    pub async fn create( &self, request : ChatCompletionRequest ) -> Result< ChatCompletionResponse >
    {
      validate_messages( &request.messages )?;
      self.client.post( "chat/completions", &request ).await
    }

    /// Creates a chat completion and streams the response incrementally.
    ///
    /// # Errors
    /// See [`Chat::create`].
    #[ inline ]
    pub async fn create_stream( &self, request : ChatCompletionRequest ) -> Result< SseStream< ChatCompletionStreamEvent > >
    {
      validate_messages( &request.messages )?;
      self.client.stream_sse( "chat/completions", &request ).await
    }
  }

  fn validate_messages( messages : &[ Message ] ) -> Result< () >
  {
    let report = message_validator::validate( messages );
    if !report.is_valid()
    {
      return Err( ClientError::InvalidRequest
      {
        message : format!( "message validation failed: {}", report.errors.join( "; " ) ),
        request : None,
      });
    }
    Ok( () )
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Chat,
    ChatCompletionRequest,
    ChatCompletionResponse,
    ChatCompletionChoice,
    ChatCompletionStreamEvent,
  };
}
