//! Chat Completion Integration Tests
//!
//! Exercises the full request path (client -> retry loop -> error
//! translation) against a mock HTTP server rather than the real hosted API.

use api_venice::{ Client, ClientApiAccessors, Secret };
use api_venice::config::ClientConfig;
use api_venice::chat::ChatCompletionRequest;
use api_venice::components::input::{ Message, MessageContent };
use api_venice::retry::RetryPolicy;
use wiremock::{ Mock, MockServer, ResponseTemplate };
use wiremock::matchers::{ method, path };

fn user_message( text : &str ) -> Message
{
  Message
  {
    role : "user".to_string(),
    content : Some( MessageContent::Text( text.to_string() ) ),
    name : None,
    tool_calls : None,
    tool_call_id : None,
  }
}

async fn client_for( server : &MockServer ) -> Client
{
  let config = ClientConfig::builder()
    .api_key( Secret::new_unchecked( "test-key".to_string() ) )
    .base_url( format!( "{}/api/v1/", server.uri() ) )
    .build()
    .expect( "config should build" );
  Client::build( config ).expect( "client should build" )
}

async fn client_with_retry_policy( server : &MockServer, retry_policy : RetryPolicy ) -> Client
{
  let config = ClientConfig::builder()
    .api_key( Secret::new_unchecked( "test-key".to_string() ) )
    .base_url( format!( "{}/api/v1/", server.uri() ) )
    .retry_policy( retry_policy )
    .build()
    .expect( "config should build" );
  Client::build( config ).expect( "client should build" )
}

fn default_request() -> ChatCompletionRequest
{
  ChatCompletionRequest
  {
    model : "venice-large".to_string(),
    messages : vec![ user_message( "hello" ) ],
    stream : None,
    temperature : None,
    top_p : None,
    max_tokens : None,
  }
}

mod success_path_tests
{
  use super::*;

  #[ tokio::test ]
  async fn create_returns_the_decoded_response()
  {
    let server = MockServer::start().await;
    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 200 ).set_body_json( serde_json::json!({
        "id": "chatcmpl-1",
        "model": "venice-large",
        "choices": [{
          "index": 0,
          "message": { "role": "assistant", "content": "hi there" },
          "finish_reason": "stop"
        }]
      })))
      .mount( &server )
      .await;

    let client = client_for( &server ).await;
    let request = ChatCompletionRequest
    {
      model : "venice-large".to_string(),
      messages : vec![ user_message( "hello" ) ],
      stream : None,
      temperature : None,
      top_p : None,
      max_tokens : None,
    };

    let response = client.chat().create( request ).await.expect( "request should succeed" );
    assert_eq!( response.id, "chatcmpl-1" );
    assert_eq!( response.choices.len(), 1 );
  }

  #[ tokio::test ]
  async fn empty_message_list_fails_before_any_network_call()
  {
    let server = MockServer::start().await;
    let client = client_for( &server ).await;
    let request = ChatCompletionRequest
    {
      model : "venice-large".to_string(),
      messages : vec![],
      stream : None,
      temperature : None,
      top_p : None,
      max_tokens : None,
    };

    let result = client.chat().create( request ).await;
    assert!( result.is_err() );
  }
}

mod retry_path_tests
{
  use super::*;

  #[ tokio::test ]
  async fn retries_on_503_then_succeeds()
  {
    let server = MockServer::start().await;

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 503 ) )
      .up_to_n_times( 1 )
      .mount( &server )
      .await;

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 200 ).set_body_json( serde_json::json!({
        "id": "chatcmpl-2",
        "model": "venice-large",
        "choices": []
      })))
      .mount( &server )
      .await;

    let client = client_for( &server ).await;
    let request = ChatCompletionRequest
    {
      model : "venice-large".to_string(),
      messages : vec![ user_message( "hello" ) ],
      stream : None,
      temperature : None,
      top_p : None,
      max_tokens : None,
    };

    let response = client.chat().create( request ).await.expect( "retry should eventually succeed" );
    assert_eq!( response.id, "chatcmpl-2" );
  }

  #[ tokio::test ]
  async fn non_retriable_status_fails_immediately()
  {
    let server = MockServer::start().await;

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 401 ).set_body_json( serde_json::json!({
        "error": { "message": "invalid api key" }
      })))
      .mount( &server )
      .await;

    let client = client_for( &server ).await;
    let request = ChatCompletionRequest
    {
      model : "venice-large".to_string(),
      messages : vec![ user_message( "hello" ) ],
      stream : None,
      temperature : None,
      top_p : None,
      max_tokens : None,
    };

    let result = client.chat().create( request ).await;
    assert!( matches!( result, Err( api_venice::error::ClientError::Authentication { .. } ) ) );
  }

  #[ tokio::test ]
  async fn exhausting_retries_on_persistent_503_surfaces_internal_server_error()
  {
    let server = MockServer::start().await;

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 503 ) )
      .mount( &server )
      .await;

    let fast_retries = RetryPolicy { base_delay_seconds : 0.01, ..RetryPolicy::default() };
    let client = client_with_retry_policy( &server, fast_retries ).await;

    let result = client.chat().create( default_request() ).await;
    assert!( matches!(
      result,
      Err( api_venice::error::ClientError::InternalServer { status : 503, .. } )
    ));
  }

  #[ tokio::test ]
  async fn rate_limit_response_carries_the_parsed_retry_after_seconds()
  {
    let server = MockServer::start().await;

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 429 )
        .insert_header( "Retry-After", "30" )
        .set_body_json( serde_json::json!({ "error": { "message": "rate limited" } }) ) )
      .mount( &server )
      .await;

    let client = client_with_retry_policy( &server, RetryPolicy::none() ).await;

    let result = client.chat().create( default_request() ).await;
    match result
    {
      Err( api_venice::error::ClientError::RateLimit { retry_after_seconds, .. } ) =>
      {
        assert_eq!( retry_after_seconds, Some( 30 ) );
      }
      other => panic!( "expected RateLimit, got {other:?}" ),
    }
  }
}

mod streaming_tests
{
  use super::*;

  #[ tokio::test ]
  async fn sse_stream_decodes_events_and_stops_at_the_done_sentinel()
  {
    let server = MockServer::start().await;

    let sse_body = concat!(
      "data: {\"id\":\"chatcmpl-3\",\"model\":\"venice-large\",\"choices\":[]}\n\n",
      "data: {\"id\":\"chatcmpl-3\",\"model\":\"venice-large\",\"choices\":[]}\n\n",
      "data: [DONE]\n\n",
    );

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/chat/completions" ) )
      .respond_with( ResponseTemplate::new( 200 )
        .insert_header( "content-type", "text/event-stream" )
        .set_body_string( sse_body ) )
      .mount( &server )
      .await;

    let client = client_for( &server ).await;
    let request = ChatCompletionRequest { stream : Some( true ), ..default_request() };
    let mut stream = client.chat().create_stream( request ).await.expect( "stream should open" );

    let mut events = Vec::new();
    while let Some( event ) = stream.next().await
    {
      events.push( event.expect( "event should decode" ) );
    }

    assert_eq!( events.len(), 2 );
    assert_eq!( events[ 0 ].id, "chatcmpl-3" );
  }
}

mod lifecycle_tests
{
  use super::*;

  #[ tokio::test ]
  async fn closed_client_refuses_new_requests()
  {
    let server = MockServer::start().await;
    let client = client_for( &server ).await;
    client.close();

    let request = ChatCompletionRequest
    {
      model : "venice-large".to_string(),
      messages : vec![ user_message( "hello" ) ],
      stream : None,
      temperature : None,
      top_p : None,
      max_tokens : None,
    };

    let result = client.chat().create( request ).await;
    assert!( matches!( result, Err( api_venice::error::ClientError::ApiConnection { .. } ) ) );
  }
}
