//! Multipart Upload Integration Tests
//!
//! Exercises the multipart request path end to end via the audio
//! transcription endpoint, which never runs through the retry loop.

use api_venice::{ Client, ClientApiAccessors, Secret };
use api_venice::config::ClientConfig;
use api_venice::components::audio::CreateTranscriptionRequest;
use wiremock::{ Mock, MockServer, ResponseTemplate };
use wiremock::matchers::{ method, path, header_regex };

async fn client_for( server : &MockServer ) -> Client
{
  let config = ClientConfig::builder()
    .api_key( Secret::new_unchecked( "test-key".to_string() ) )
    .base_url( format!( "{}/api/v1/", server.uri() ) )
    .build()
    .expect( "config should build" );
  Client::build( config ).expect( "client should build" )
}

#[ tokio::test ]
async fn transcription_uploads_the_file_as_multipart_and_decodes_the_response()
{
  let server = MockServer::start().await;

  Mock::given( method( "POST" ) )
    .and( path( "/api/v1/audio/transcriptions" ) )
    .and( header_regex( "content-type", "^multipart/form-data" ) )
    .respond_with( ResponseTemplate::new( 200 ).set_body_json( serde_json::json!({
      "text": "hello from the transcript"
    })))
    .mount( &server )
    .await;

  let client = client_for( &server ).await;
  let request = CreateTranscriptionRequest
  {
    file : vec![ 0u8, 1, 2, 3 ],
    filename : "clip.wav".to_string(),
    model : "venice-whisper".to_string(),
    language : None,
    prompt : None,
    response_format : None,
  };

  let response = client.audio().transcribe( request ).await.expect( "upload should succeed" );
  assert_eq!( response.text, "hello from the transcript" );
}
