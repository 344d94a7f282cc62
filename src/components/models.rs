//! Model records returned by the `/models` endpoint.

/// Define a private namespace for all its items.
mod private
{
  use serde::{ Serialize, Deserialize };

  /// The category a model belongs to.
  #[ derive( Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq ) ]
  #[ serde( rename_all = "lowercase" ) ]
  pub enum ModelType
  {
    /// Text embedding model.
    Embedding,
    /// Image generation model.
    Image,
    /// Text/chat generation model.
    Text,
    /// Text-to-speech model.
    Tts,
    /// Image upscaling model.
    Upscale,
  }

  /// Per-unit pricing for a model. Every field is optional since not every
  /// model charges for every dimension.
  #[ derive( Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default ) ]
  pub struct ModelPricing
  {
    /// Cost per million input tokens.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub input_cost_per_mtok : Option< f64 >,
    /// Cost per million output tokens.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub output_cost_per_mtok : Option< f64 >,
    /// Cost per generated image.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub input_cost_per_image : Option< f64 >,
    /// Cost per output image.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub output_cost_per_image : Option< f64 >,
    /// Cost per second of generated audio.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub input_cost_per_second : Option< f64 >,
    /// Cost per second of generated output.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub output_cost_per_second : Option< f64 >,
  }

  /// Model capabilities as reported by the API.
  ///
  /// The hosted API sends capability flags in camelCase under a nested
  /// `capabilities` object; this type also accepts the snake_case spelling
  /// so callers can construct or compare instances in idiomatic Rust without
  /// worrying about which casing the wire used.
  #[ derive( Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default ) ]
  pub struct ModelCapabilities
  {
    /// Supports image/vision input.
    #[ serde( rename = "supportsVision", alias = "supports_vision", default ) ]
    pub supports_vision : bool,
    /// Supports function/tool calling.
    #[ serde( rename = "supportsFunctionCalling", alias = "supports_functions", default ) ]
    pub supports_function_calling : bool,
    /// Supports reasoning mode.
    #[ serde( rename = "supportsReasoning", alias = "supports_reasoning", default ) ]
    pub supports_reasoning : bool,
    /// Supports web search grounding.
    #[ serde( rename = "supportsWebSearch", alias = "supports_web_search", default ) ]
    pub supports_web_search : bool,
    /// Supports returning log probabilities.
    #[ serde( rename = "supportsLogProbs", alias = "supports_log_probs", default ) ]
    pub supports_log_probs : bool,
    /// Tuned for code generation.
    #[ serde( rename = "optimizedForCode", alias = "optimized_for_code", default ) ]
    pub optimized_for_code : bool,
    /// Supports streaming responses.
    #[ serde( default ) ]
    pub streaming : bool,
  }

  /// Sampling parameter bounds for a model.
  #[ derive( Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default ) ]
  pub struct ModelConstraints
  {
    /// Minimum allowed temperature.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub temperature_min : Option< f64 >,
    /// Maximum allowed temperature.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub temperature_max : Option< f64 >,
    /// Default temperature.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub temperature_default : Option< f64 >,
    /// Minimum allowed top-p.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub top_p_min : Option< f64 >,
    /// Maximum allowed top-p.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub top_p_max : Option< f64 >,
    /// Default top-p.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub top_p_default : Option< f64 >,
  }

  /// A model offering available through the API.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct Model
  {
    /// The model identifier, used when referencing the model in other calls.
    pub id : String,
    /// Always `"model"`.
    pub object : String,
    /// Unix timestamp (seconds) when the model was made available.
    pub created : i64,
    /// The organization or provider that owns the model.
    pub owned_by : String,
    /// Human-readable display name.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub name : Option< String >,
    /// Longer description of the model.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub description : Option< String >,
    /// The model's category.
    pub r#type : ModelType,
    /// Pricing, when published.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub pricing : Option< ModelPricing >,
    /// Capability flags.
    #[ serde( default ) ]
    pub capabilities : ModelCapabilities,
    /// Sampling parameter bounds.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub constraints : Option< ModelConstraints >,
    /// Whether this model is in beta.
    #[ serde( default ) ]
    pub beta : bool,
    /// Free-form trait tags (e.g. `"default"`, `"most_intelligent"`).
    #[ serde( default ) ]
    pub traits : Vec< String >,
  }

  /// Response envelope for `/models`.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct ListModelsResponse
  {
    /// Always `"list"`.
    pub object : String,
    /// The model records.
    pub data : Vec< Model >,
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Model,
    ModelType,
    ModelPricing,
    ModelCapabilities,
    ModelConstraints,
    ListModelsResponse,
  };
}
