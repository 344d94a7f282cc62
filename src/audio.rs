// src/audio.rs
//! This module defines the `Audio` resource wrapper.

/// Define a private namespace for all its items.
mod private
{
  use crate::
  {
    client ::Client,
    error ::{ ClientError, Result },
    components::audio::
    {
      CreateSpeechRequest,
      CreateTranscriptionRequest,
      CreateTranscriptionResponse,
    },
    stream_raw::RawStream,
  };

  use reqwest::multipart::{ Form, Part };

  /// Resource wrapper for text-to-speech and transcription. Holds only a
  /// borrow of the parent client.
  #[ derive( Debug, Clone ) ]
  pub struct Audio< 'client >
  {
    client : &'client Client,
  }

  impl< 'client > Audio< 'client >
  {
    #[ inline ]
    pub( crate ) fn new( client : &'client Client ) -> Self
    {
      Self { client }
    }

    /// Generates audio from input text, returning the raw audio bytes.
    ///
    /// # Errors
    /// Returns the translated error from the network layer.
    #[ inline ]
    pub async fn speech( &self, request : CreateSpeechRequest ) -> Result< Vec< u8 > >
    {
      self.client.post_binary( "audio/speech", &request ).await
    }

    /// Generates audio from input text, streaming the encoded bytes back as
    /// they arrive rather than waiting for the full clip.
    ///
    /// # Errors
    /// Returns the translated error if the initial request fails.
    #[ inline ]
    pub async fn speech_stream( &self, request : &CreateSpeechRequest ) -> Result< RawStream >
    {
      self.client.stream_raw( "audio/speech", request ).await
    }

    /// Transcribes audio into text.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` if the audio bytes can't be
    /// packaged as a multipart part, or the translated error from the
    /// network layer otherwise.
    pub async fn transcribe( &self, request : CreateTranscriptionRequest ) -> Result< CreateTranscriptionResponse >
    {
      let file_part = Part::bytes( request.file )
        .file_name( request.filename )
        .mime_str( "application/octet-stream" )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;

      let mut form = Form::new()
        .part( "file", file_part )
        .text( "model", request.model );

      if let Some( language ) = request.language { form = form.text( "language", language ); }
      if let Some( prompt ) = request.prompt { form = form.text( "prompt", prompt ); }
      if let Some( response_format ) = request.response_format { form = form.text( "response_format", response_format ); }

      self.client.post_multipart( "audio/transcriptions", form, None ).await
    }
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    Audio,
  };
}
