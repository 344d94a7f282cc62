//! Request structures for embeddings API

/// Define a private namespace for all its items.
mod private
{
  use serde::{ Serialize, Deserialize };
  use former::Former;

  /// Input for embedding creation - can be a single string or array of strings
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  #[ serde( untagged ) ]
  pub enum EmbeddingInput
  {
    /// Single text input
    Single( String ),
    /// Multiple text inputs for batch processing
    Multiple( Vec< String > ),
  }

  /// Request for creating embeddings
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq, Former ) ]
  pub struct CreateEmbeddingRequest
  {
    /// Input text to embed, encoded as a string or array of strings
    pub input : EmbeddingInput,

    /// ID of the model to use
    pub model : String,

    /// The number of dimensions the resulting output embeddings should have.
    /// Only supported in text-embedding-3 and later models.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub dimensions : Option< u32 >,

    /// The format to return the embeddings in. Can be either `float` or `base64`.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub encoding_format : Option< String >,

    /// A unique identifier representing the end-user, which can help the provider monitor and detect abuse.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub user : Option< String >,
  }

  impl CreateEmbeddingRequest
  {
    /// Create a new embedding request with single text input
    #[ inline ]
    #[ must_use ]
    pub fn new_single( input : String, model : String ) -> Self
    {
      Self
      {
        input : EmbeddingInput::Single( input ),
        model,
        dimensions : None,
        encoding_format : None,
        user : None,
      }
    }

    /// Create a new embedding request with multiple text inputs
    #[ inline ]
    #[ must_use ]
    pub fn new_multiple( input : Vec< String >, model : String ) -> Self
    {
      Self
      {
        input : EmbeddingInput::Multiple( input ),
        model,
        dimensions : None,
        encoding_format : None,
        user : None,
      }
    }
  }

  impl Default for CreateEmbeddingRequest
  {
    #[ inline ]
    fn default() -> Self
    {
      Self
      {
        input : EmbeddingInput::Single( String::new() ),
        model : String::new(),
        dimensions : None,
        encoding_format : None,
        user : None,
      }
    }
  }

  /// One embedding vector within a [`CreateEmbeddingResponse`].
  #[ derive( Debug, Clone, Serialize, Deserialize, PartialEq ) ]
  pub struct EmbeddingData
  {
    /// Position of this embedding within the request's input array.
    pub index : u32,
    /// The embedding vector itself.
    pub embedding : Vec< f32 >,
    /// Always `"embedding"`.
    pub object : String,
  }

  /// Response body for `/embeddings`.
  #[ derive( Debug, Clone, Serialize, Deserialize, PartialEq ) ]
  pub struct CreateEmbeddingResponse
  {
    /// Model that produced the embeddings.
    pub model : String,
    /// One entry per input, in the same order.
    pub data : Vec< EmbeddingData >,
    /// Always `"list"`.
    pub object : String,
  }
}

crate ::mod_interface!
{
  exposed use
  {
    EmbeddingInput,
    CreateEmbeddingRequest,
    EmbeddingData,
    CreateEmbeddingResponse,
  };
}