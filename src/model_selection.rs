// src/model_selection.rs
//! Pure helpers for turning a model-list query into request parameters and
//! for filtering an already-fetched model list by capability.

mod private
{
  use crate::components::models::{ Model, ModelType };

  /// Filters accepted when narrowing a model list.
  #[ derive( Debug, Clone, Default ) ]
  pub struct ModelFilter
  {
    /// Restrict to a specific model type.
    pub model_type : Option< ModelType >,
    /// Require vision support.
    pub supports_vision : Option< bool >,
    /// Require reasoning support.
    pub supports_reasoning : Option< bool >,
    /// Require function-calling support.
    pub supports_function_calling : Option< bool >,
    /// Require web-search support.
    pub supports_web_search : Option< bool >,
    /// Require log-probability support.
    pub supports_log_probs : Option< bool >,
    /// Require code optimization.
    pub optimized_for_code : Option< bool >,
    /// Require a specific trait tag to be present.
    pub has_trait : Option< String >,
    /// Require beta status to match exactly.
    pub is_beta : Option< bool >,
  }

  /// Prepares the `type` query parameter for `/models`.
  ///
  /// `None` maps to `"all"`. Recognized category names are lowercased and
  /// `"chat"`/`"audio"` are mapped onto the wire's `"text"`/`"tts"` names.
  /// Any other, unrecognized value produces no type parameter at all: the
  /// request is sent without narrowing by type rather than guessing.
  #[ must_use ]
  pub fn prepare_model_list_type_param( requested : Option< &str > ) -> Option< String >
  {
    let Some( requested ) = requested else { return Some( "all".to_string() ) };

    let lowered = requested.to_lowercase();
    match lowered.as_str()
    {
      "chat" => Some( "text".to_string() ),
      "audio" => Some( "tts".to_string() ),
      "embedding" | "image" | "text" | "tts" | "upscale" => Some( lowered ),
      _ => None,
    }
  }

  /// Returns `true` if `model` satisfies every constraint in `filter`.
  #[ must_use ]
  pub fn matches_filter( model : &Model, filter : &ModelFilter ) -> bool
  {
    if let Some( model_type ) = filter.model_type
      && model.r#type != model_type
    {
      return false;
    }
    if let Some( want ) = filter.supports_vision
      && model.capabilities.supports_vision != want
    {
      return false;
    }
    if let Some( want ) = filter.supports_reasoning
      && model.capabilities.supports_reasoning != want
    {
      return false;
    }
    if let Some( want ) = filter.supports_function_calling
      && model.capabilities.supports_function_calling != want
    {
      return false;
    }
    if let Some( want ) = filter.supports_web_search
      && model.capabilities.supports_web_search != want
    {
      return false;
    }
    if let Some( want ) = filter.supports_log_probs
      && model.capabilities.supports_log_probs != want
    {
      return false;
    }
    if let Some( want ) = filter.optimized_for_code
      && model.capabilities.optimized_for_code != want
    {
      return false;
    }
    if let Some( want ) = filter.is_beta
      && model.beta != want
    {
      return false;
    }
    if let Some( required_trait ) = &filter.has_trait
      && !model.traits.iter().any( | t | t == required_trait )
    {
      return false;
    }
    true
  }

  /// Filters a model list, returning only the models that satisfy `filter`.
  #[ must_use ]
  pub fn filter_models< 'm >( models : &'m [ Model ], filter : &ModelFilter ) -> Vec< &'m Model >
  {
    models.iter().filter( | m | matches_filter( m, filter ) ).collect()
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    ModelFilter,
    prepare_model_list_type_param,
    matches_filter,
    filter_models,
  };
}
