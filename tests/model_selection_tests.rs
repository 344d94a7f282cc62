//! Model List Parameter and Filtering Tests

use api_venice::model_selection::{ ModelFilter, matches_filter, filter_models, prepare_model_list_type_param };
use api_venice::components::models::{ Model, ModelType, ModelCapabilities };

fn model( id : &str, r#type : ModelType, capabilities : ModelCapabilities, beta : bool ) -> Model
{
  Model
  {
    id : id.to_string(),
    object : "model".to_string(),
    created : 0,
    owned_by : "venice".to_string(),
    name : None,
    description : None,
    r#type,
    pricing : None,
    capabilities,
    constraints : None,
    beta,
    traits : vec![],
  }
}

mod type_param_tests
{
  use super::*;

  #[ test ]
  fn none_requests_every_category()
  {
    assert_eq!( prepare_model_list_type_param( None ), Some( "all".to_string() ) );
  }

  #[ test ]
  fn chat_and_audio_map_to_wire_categories()
  {
    assert_eq!( prepare_model_list_type_param( Some( "chat" ) ), Some( "text".to_string() ) );
    assert_eq!( prepare_model_list_type_param( Some( "audio" ) ), Some( "tts".to_string() ) );
  }

  #[ test ]
  fn recognized_categories_pass_through_lowercased()
  {
    assert_eq!( prepare_model_list_type_param( Some( "TEXT" ) ), Some( "text".to_string() ) );
    assert_eq!( prepare_model_list_type_param( Some( "upscale" ) ), Some( "upscale".to_string() ) );
  }

  #[ test ]
  fn unrecognized_category_sends_no_param_at_all()
  {
    assert_eq!( prepare_model_list_type_param( Some( "carrier-pigeon" ) ), None );
  }
}

mod filtering_tests
{
  use super::*;

  #[ test ]
  fn filters_by_type_and_capability()
  {
    let vision_caps = ModelCapabilities { supports_vision : true, ..ModelCapabilities::default() };
    let models = vec![
      model( "vision-model", ModelType::Text, vision_caps, false ),
      model( "plain-model", ModelType::Text, ModelCapabilities::default(), false ),
      model( "embedder", ModelType::Embedding, ModelCapabilities::default(), false ),
    ];

    let filter = ModelFilter { model_type : Some( ModelType::Text ), supports_vision : Some( true ), ..ModelFilter::default() };
    let matched = filter_models( &models, &filter );

    assert_eq!( matched.len(), 1 );
    assert_eq!( matched[ 0 ].id, "vision-model" );
  }

  #[ test ]
  fn beta_filter_matches_exactly()
  {
    let m = model( "beta-model", ModelType::Text, ModelCapabilities::default(), true );
    assert!( matches_filter( &m, &ModelFilter { is_beta : Some( true ), ..ModelFilter::default() } ) );
    assert!( !matches_filter( &m, &ModelFilter { is_beta : Some( false ), ..ModelFilter::default() } ) );
  }

  #[ test ]
  fn empty_filter_matches_everything()
  {
    let m = model( "any-model", ModelType::Image, ModelCapabilities::default(), false );
    assert!( matches_filter( &m, &ModelFilter::default() ) );
  }
}
