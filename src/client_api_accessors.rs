//! Accessor methods for each resource group, each returning a thin wrapper
//! borrowing the parent `Client`.

use mod_interface::mod_interface;

mod private
{
  use crate::
  {
    client ::Client,
    chat ::Chat,
    embeddings ::Embeddings,
    images ::Images,
    audio ::Audio,
    models ::Models,
  };

  /// Extension trait providing resource accessor methods on [`Client`].
  pub trait ClientApiAccessors
  {
    /// Returns a `Chat` resource wrapper.
    fn chat( &self ) -> Chat< '_ >;
    /// Returns an `Embeddings` resource wrapper.
    fn embeddings( &self ) -> Embeddings< '_ >;
    /// Returns an `Images` resource wrapper.
    fn images( &self ) -> Images< '_ >;
    /// Returns an `Audio` resource wrapper.
    fn audio( &self ) -> Audio< '_ >;
    /// Returns a `Models` resource wrapper.
    fn models( &self ) -> Models< '_ >;
  }

  impl ClientApiAccessors for Client
  {
    #[ inline ]
    fn chat( &self ) -> Chat< '_ >
    {
      Chat::new( self )
    }

    #[ inline ]
    fn embeddings( &self ) -> Embeddings< '_ >
    {
      Embeddings::new( self )
    }

    #[ inline ]
    fn images( &self ) -> Images< '_ >
    {
      Images::new( self )
    }

    #[ inline ]
    fn audio( &self ) -> Audio< '_ >
    {
      Audio::new( self )
    }

    #[ inline ]
    fn models( &self ) -> Models< '_ >
    {
      Models::new( self )
    }
  }
}

mod_interface!
{
  exposed use
  {
    ClientApiAccessors,
  };
}
