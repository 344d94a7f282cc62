// src/images.rs
//! This module defines the `Images` resource wrapper.

/// Define a private namespace for all its items.
mod private
{
  use crate::
  {
    client ::Client,
    error ::{ ClientError, Result },
    components::images::
    {
      CreateImageRequest,
      ImagesResponse,
      CreateImageEditRequest,
      CreateImageVariationRequest,
    },
  };

  use reqwest::multipart::{ Form, Part };

  /// Resource wrapper for image generation, editing and variation. Holds
  /// only a borrow of the parent client.
  #[ derive( Debug, Clone ) ]
  pub struct Images< 'client >
  {
    client : &'client Client,
  }

  impl< 'client > Images< 'client >
  {
    #[ inline ]
    pub( crate ) fn new( client : &'client Client ) -> Self
    {
      Self { client }
    }

    /// Generates an image from a text prompt.
    ///
    /// # Errors
    /// Returns the translated error from the network layer.
    #[ inline ]
    pub async fn generate( &self, request : CreateImageRequest ) -> Result< ImagesResponse >
    {
      self.client.post( "images/generations", &request ).await
    }

    /// Edits an existing image according to a prompt, optionally restricted
    /// to a masked region.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` if the image bytes can't be
    /// packaged as a multipart part, or the translated error from the
    /// network layer otherwise.
    pub async fn edit( &self, request : CreateImageEditRequest ) -> Result< ImagesResponse >
    {
      let image_part = Part::bytes( request.image )
        .file_name( request.image_filename.clone() )
        .mime_str( "image/png" )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;

      let mut form = Form::new()
        .part( "image", image_part )
        .text( "prompt", request.prompt );

      if let ( Some( mask_data ), Some( mask_filename ) ) = ( request.mask, request.mask_filename )
      {
        let mask_part = Part::bytes( mask_data )
          .file_name( mask_filename )
          .mime_str( "image/png" )
          .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
        form = form.part( "mask", mask_part );
      }

      if let Some( model ) = request.model { form = form.text( "model", model ); }
      if let Some( n ) = request.n { form = form.text( "n", n.to_string() ); }
      if let Some( size ) = request.size { form = form.text( "size", size ); }
      if let Some( response_format ) = request.response_format { form = form.text( "response_format", response_format ); }
      if let Some( user ) = request.user { form = form.text( "user", user ); }

      self.client.post_multipart( "images/edits", form, None ).await
    }

    /// Creates a variation of a given image.
    ///
    /// # Errors
    /// See [`Images::edit`].
    pub async fn variation( &self, request : CreateImageVariationRequest ) -> Result< ImagesResponse >
    {
      let image_part = Part::bytes( request.image )
        .file_name( request.image_filename.clone() )
        .mime_str( "image/png" )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;

      let mut form = Form::new().part( "image", image_part );

      if let Some( model ) = request.model { form = form.text( "model", model ); }
      if let Some( n ) = request.n { form = form.text( "n", n.to_string() ); }
      if let Some( response_format ) = request.response_format { form = form.text( "response_format", response_format ); }
      if let Some( size ) = request.size { form = form.text( "size", size ); }
      if let Some( user ) = request.user { form = form.text( "user", user ); }

      self.client.post_multipart( "images/variations", form, None ).await
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Images,
  };
}
