// src/embeddings.rs
//! This module defines the `Embeddings` resource wrapper.

/// Define a private namespace for all its items.
mod private
{
  use crate::
  {
    client ::Client,
    error ::Result,
    components::embeddings_request::{ CreateEmbeddingRequest, CreateEmbeddingResponse },
  };

  /// Resource wrapper for embeddings. Holds only a borrow of the parent
  /// client.
  #[ derive( Debug, Clone ) ]
  pub struct Embeddings< 'client >
  {
    client : &'client Client,
  }

  impl< 'client > Embeddings< 'client >
  {
    #[ inline ]
    pub( crate ) fn new( client : &'client Client ) -> Self
    {
      Self { client }
    }

    /// Creates an embedding vector representing the input text.
    ///
    /// # Errors
    /// Returns the translated error from the network layer.
    #[ inline ]
    pub async fn create( &self, request : CreateEmbeddingRequest ) -> Result< CreateEmbeddingResponse >
    {
      self.client.post( "embeddings", &request ).await
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Embeddings,
  };
}
