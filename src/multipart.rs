// src/multipart.rs
//! Multipart form uploads.
//!
//! Multipart requests build a fresh header set rather than inheriting the
//! client's default JSON `Content-Type`: authorization and user-agent are
//! preserved, caller-supplied extras are applied, and `Accept: */*` is used
//! unless the caller overrides it.

mod private
{
  use crate::
  {
    client ::Client,
    error ::{ ClientError, Result },
  };

  use reqwest::header::{ self, HeaderMap };
  use secrecy::ExposeSecret;
  use serde::de::DeserializeOwned;

  impl Client
  {
    /// Sends a multipart form via POST and decodes the JSON response.
    ///
    /// Multipart requests never run through the retry loop: once the
    /// request body (file handles, in-memory parts) has been consumed by
    /// the first send attempt, it cannot be replayed.
    ///
    /// # Errors
    /// Returns the translated error on a non-2xx response or a transport
    /// failure, or `ClientError::ApiResponseProcessing` if the body isn't
    /// valid JSON for `O`.
    pub async fn post_multipart< O >
    (
      &self,
      path : &str,
      form : reqwest::multipart::Form,
      extra_headers : Option< HeaderMap >,
    ) -> Result< O >
    where
      O : DeserializeOwned,
    {
      let url = self.config.join_url( path )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;

      let mut headers = HeaderMap::new();
      let auth_value = header::HeaderValue::from_str( &format!( "Bearer {}", self.config.api_key.expose_secret() ) )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      headers.insert( header::AUTHORIZATION, auth_value );
      headers.insert( header::ACCEPT, header::HeaderValue::from_static( "*/*" ) );
      if let Some( extra ) = extra_headers
      {
        headers.extend( extra );
      }

      let response = self.http_client.request( reqwest::Method::POST, url.clone() )
        .headers( headers )
        .multipart( form )
        .send()
        .await
        .map_err( | e | crate::error::translate_transport_error( &e, "POST", url.as_str() ) )?;

      let status = response.status();
      if !status.is_success()
      {
        let status_code = status.as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
        let raw_text = String::from_utf8_lossy( &bytes ).into_owned();
        let json_body = serde_json::from_slice::< serde_json::Value >( &bytes ).ok();
        return Err( crate::error::translate_status( status_code, "POST", url.as_str(), json_body.as_ref(), &raw_text, None ) );
      }

      let bytes = response.bytes().await
        .map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )?;
      serde_json::from_slice( &bytes )
        .map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )
    }
  }

} // end mod private
