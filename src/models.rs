// src/models.rs
//! This module defines the `Models` resource wrapper.

/// Define a private namespace for all its items.
mod private
{
  use crate::
  {
    client ::Client,
    error ::Result,
    model_selection ::{ ModelFilter, filter_models, prepare_model_list_type_param },
    components::models::{ Model, ListModelsResponse },
  };

  use serde::Serialize;

  #[ derive( Debug, Clone, Serialize ) ]
  struct ListModelsQuery
  {
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    r#type : Option< String >,
  }

  /// Resource wrapper for model listing. Holds only a borrow of the parent
  /// client.
  #[ derive( Debug, Clone ) ]
  pub struct Models< 'client >
  {
    client : &'client Client,
  }

  impl< 'client > Models< 'client >
  {
    #[ inline ]
    pub( crate ) fn new( client : &'client Client ) -> Self
    {
      Self { client }
    }

    /// Lists models, optionally narrowed server-side by category.
    ///
    /// `category` follows [`prepare_model_list_type_param`]: `None` requests
    /// every category; an unrecognized value sends no `type` parameter at
    /// all rather than guessing.
    ///
    /// # Errors
    /// Returns the translated error from the network layer.
    pub async fn list( &self, category : Option< &str > ) -> Result< ListModelsResponse >
    {
      let query = ListModelsQuery { r#type : prepare_model_list_type_param( category ) };
      self.client.get( "models", Some( query ) ).await
    }

    /// Lists models and applies a client-side capability filter on top of
    /// the server's response.
    ///
    /// # Errors
    /// See [`Models::list`].
    pub async fn list_filtered( &self, category : Option< &str >, filter : &ModelFilter ) -> Result< Vec< Model > >
    {
      let response = self.list( category ).await?;
      Ok( filter_models( &response.data, filter ).into_iter().cloned().collect() )
    }

    /// Fetches a single model by id.
    ///
    /// # Errors
    /// Returns `ClientError::NotFound` if no model with that id exists, or
    /// the translated error from the network layer otherwise.
    pub async fn get( &self, id : &str ) -> Result< Model >
    {
      self.client.get( &format!( "models/{id}" ), None::< () > ).await
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Models,
  };
}
