//! Request/response structures for image generation, editing and variation.

/// Define a private namespace for all its items.
mod private
{
  use serde::{ Serialize, Deserialize };
  use former::Former;

  /// Request body for `/images/generations`.
  #[ derive( Debug, Clone, Serialize, Deserialize, Former ) ]
  pub struct CreateImageRequest
  {
    /// Text description of the desired image.
    pub prompt : String,
    /// Model to use for generation.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub model : Option< String >,
    /// Number of images to generate.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub n : Option< u32 >,
    /// Requested image dimensions, e.g. `"1024x1024"`.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub size : Option< String >,
    /// `"url"` or `"b64_json"`.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub response_format : Option< String >,
  }

  /// One generated image.
  #[ derive( Debug, Clone, Serialize, Deserialize ) ]
  pub struct ImageData
  {
    /// A URL to the generated image, present when `response_format` was `"url"`.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub url : Option< String >,
    /// Base64-encoded image bytes, present when `response_format` was `"b64_json"`.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub b64_json : Option< String >,
  }

  /// Response body for any of the images endpoints.
  #[ derive( Debug, Clone, Serialize, Deserialize ) ]
  pub struct ImagesResponse
  {
    /// Unix timestamp of creation.
    pub created : u64,
    /// Generated images.
    pub data : Vec< ImageData >,
  }

  /// Request for `/images/edits`. Sent as multipart form data.
  #[ derive( Debug, Clone ) ]
  pub struct CreateImageEditRequest
  {
    /// Raw bytes of the source image.
    pub image : Vec< u8 >,
    /// File name to present for the image part.
    pub image_filename : String,
    /// Edit instructions.
    pub prompt : String,
    /// Raw bytes of the mask image, if any.
    pub mask : Option< Vec< u8 > >,
    /// File name to present for the mask part.
    pub mask_filename : Option< String >,
    /// Model to use for the edit.
    pub model : Option< String >,
    /// Number of images to generate.
    pub n : Option< u32 >,
    /// Requested image dimensions.
    pub size : Option< String >,
    /// `"url"` or `"b64_json"`.
    pub response_format : Option< String >,
    /// End-user identifier.
    pub user : Option< String >,
  }

  /// Request for `/images/variations`. Sent as multipart form data.
  #[ derive( Debug, Clone ) ]
  pub struct CreateImageVariationRequest
  {
    /// Raw bytes of the source image.
    pub image : Vec< u8 >,
    /// File name to present for the image part.
    pub image_filename : String,
    /// Model to use for the variation.
    pub model : Option< String >,
    /// Number of images to generate.
    pub n : Option< u32 >,
    /// `"url"` or `"b64_json"`.
    pub response_format : Option< String >,
    /// Requested image dimensions.
    pub size : Option< String >,
    /// End-user identifier.
    pub user : Option< String >,
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    CreateImageRequest,
    ImageData,
    ImagesResponse,
    CreateImageEditRequest,
    CreateImageVariationRequest,
  };
}
