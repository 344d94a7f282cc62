//! Request/response shapes for text-to-speech and audio transcription.

/// Define a private namespace for all its items.
mod private
{
  use serde::{ Serialize, Deserialize };

  /// Request body for `/audio/speech`.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct CreateSpeechRequest
  {
    /// The text-to-speech model to use.
    pub model : String,
    /// The text to synthesize. Providers typically cap this around 4096 characters.
    pub input : String,
    /// The voice to use when generating the audio.
    pub voice : String,
    /// Output audio format (e.g. `mp3`, `wav`, `opus`).
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub response_format : Option< String >,
    /// Playback speed multiplier.
    #[ serde( skip_serializing_if = "Option::is_none" ) ]
    pub speed : Option< f64 >,
  }

  /// Basic transcription response containing the transcribed text.
  #[ derive( Debug, Serialize, Deserialize, Clone, PartialEq ) ]
  pub struct CreateTranscriptionResponse
  {
    /// The transcribed text.
    pub text : String,
  }

  /// Request for `/audio/transcriptions`. Sent as multipart form data.
  #[ derive( Debug, Clone ) ]
  pub struct CreateTranscriptionRequest
  {
    /// Raw bytes of the audio file.
    pub file : Vec< u8 >,
    /// File name to present for the audio part.
    pub filename : String,
    /// Transcription model to use.
    pub model : String,
    /// Language of the input audio, as an ISO-639-1 code.
    pub language : Option< String >,
    /// Optional text to guide the model's style.
    pub prompt : Option< String >,
    /// `"json"`, `"text"`, `"srt"`, `"verbose_json"` or `"vtt"`.
    pub response_format : Option< String >,
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    CreateSpeechRequest,
    CreateTranscriptionResponse,
    CreateTranscriptionRequest,
  };
}
