//! Text-to-Speech Streaming Tests
//!
//! Exercises the raw byte stream engine via the audio resource wrapper's
//! streaming speech endpoint.

use api_venice::{ Client, ClientApiAccessors, Secret };
use api_venice::config::ClientConfig;
use api_venice::components::audio::CreateSpeechRequest;
use wiremock::{ Mock, MockServer, ResponseTemplate };
use wiremock::matchers::{ method, path };

async fn client_for( server : &MockServer ) -> Client
{
  let config = ClientConfig::builder()
    .api_key( Secret::new_unchecked( "test-key".to_string() ) )
    .base_url( format!( "{}/api/v1/", server.uri() ) )
    .build()
    .expect( "config should build" );
  Client::build( config ).expect( "client should build" )
}

fn speech_request() -> CreateSpeechRequest
{
  CreateSpeechRequest
  {
    model : "venice-tts".to_string(),
    input : "hello there".to_string(),
    voice : "alloy".to_string(),
    response_format : None,
    speed : None,
  }
}

mod chunk_delivery_tests
{
  use super::*;

  #[ tokio::test ]
  async fn yields_every_byte_sent_by_the_server()
  {
    let server = MockServer::start().await;
    let audio_bytes : Vec< u8 > = ( 0u8..=255 ).collect();

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/audio/speech" ) )
      .respond_with( ResponseTemplate::new( 200 ).set_body_bytes( audio_bytes.clone() ) )
      .mount( &server )
      .await;

    let client = client_for( &server ).await;
    let mut stream = client.audio().speech_stream( &speech_request() ).await.expect( "stream should open" );

    let mut received = Vec::new();
    while let Some( chunk ) = stream.next().await
    {
      received.extend_from_slice( &chunk.expect( "chunk should decode" ) );
    }

    assert_eq!( received, audio_bytes );
  }

  #[ tokio::test ]
  async fn closing_early_stops_further_iteration()
  {
    let server = MockServer::start().await;

    Mock::given( method( "POST" ) )
      .and( path( "/api/v1/audio/speech" ) )
      .respond_with( ResponseTemplate::new( 200 ).set_body_bytes( vec![ 1, 2, 3 ] ) )
      .mount( &server )
      .await;

    let client = client_for( &server ).await;
    let mut stream = client.audio().speech_stream( &speech_request() ).await.expect( "stream should open" );
    stream.close();

    let result = stream.next().await;
    assert!( matches!( result, Some( Err( api_venice::error::ClientError::StreamClosed ) ) ) );
  }
}
