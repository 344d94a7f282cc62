//! Chat message shapes shared by the chat endpoint and the message
//! validator.

/// Define a private namespace for all its items.
mod private
{
  use serde::{ Deserialize, Serialize };

  /// A single message in a chat completion request.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct Message
  {
    /// `system`, `user`, `assistant`, or `tool`.
    pub role : String,
    /// Text content, or a list of content parts for multimodal messages.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub content : Option< MessageContent >,
    /// Participant name, when the role supports it.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub name : Option< String >,
    /// Tool calls requested by an assistant message.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub tool_calls : Option< Vec< ToolCall > >,
    /// The tool call this message responds to, for `role: "tool"` messages.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub tool_call_id : Option< String >,
  }

  /// Message content: either plain text or a list of multimodal parts.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  #[ serde( untagged ) ]
  pub enum MessageContent
  {
    /// Plain text content.
    Text( String ),
    /// A sequence of content parts (text and/or images).
    Parts( Vec< ContentPart > ),
  }

  /// One part of a multimodal message's content.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  #[ serde( tag = "type" ) ]
  pub enum ContentPart
  {
    /// Text content.
    #[ serde( rename = "text" ) ]
    Text
    {
      /// The text.
      text : String,
    },
    /// An image, specified by URL.
    #[ serde( rename = "image_url" ) ]
    ImageUrl
    {
      /// The image URL payload.
      image_url : ImageUrlData,
    },
  }

  /// URL payload for an image content part.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct ImageUrlData
  {
    /// The image URL or base64 data URL.
    pub url : String,
  }

  /// A tool call requested by the model.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct ToolCall
  {
    /// Unique identifier for this tool call, referenced by the matching
    /// tool response message.
    pub id : String,
    /// Always `"function"` today.
    pub r#type : String,
    /// The function invocation being requested.
    pub function : ToolCallFunction,
  }

  /// The function invocation portion of a [`ToolCall`].
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct ToolCallFunction
  {
    /// Name of the function to call.
    pub name : String,
    /// JSON-encoded arguments for the function.
    pub arguments : String,
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Message,
    MessageContent,
    ContentPart,
    ImageUrlData,
    ToolCall,
    ToolCallFunction,
  };
}
