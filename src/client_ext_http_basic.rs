// src/client_ext_http_basic.rs
//! Convenience HTTP methods built on top of [`crate::client_ext_request_core`].

mod private
{
  use crate::
  {
    client ::Client,
    client_ext_request_core ::RequestSpec,
    error ::{ ClientError, Result },
  };

  use reqwest::Method;
  use serde::{ de::DeserializeOwned, Serialize };

  impl Client
  {
    /// Runs `spec` and decodes the response body as JSON.
    ///
    /// A `204 No Content` or empty body decodes as `O = ()`; callers that
    /// expect a payload will get a deserialization error from `serde_json`
    /// in that case, which is the intended signal.
    ///
    /// # Errors
    /// Propagates the translated [`ClientError`] from [`Client::execute`],
    /// or `ClientError::ApiResponseProcessing` if the body isn't valid JSON
    /// for `O`.
    pub async fn request< O >( &self, spec : RequestSpec ) -> Result< O >
    where
      O : DeserializeOwned,
    {
      let response = self.execute( &spec ).await?;
      let bytes = response.bytes().await
        .map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )?;

      if bytes.is_empty()
      {
        return serde_json::from_slice( b"null" )
          .map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } );
      }

      serde_json::from_slice( &bytes ).map_err( | e |
      {
        let body = String::from_utf8_lossy( &bytes );
        ClientError::ApiResponseProcessing
        {
          message : format!( "failed to parse JSON response: {e}. Response body: {body}" ),
          request : None,
        }
      })
    }

    /// Sends a GET request with JSON query parameters.
    ///
    /// # Errors
    /// See [`Client::request`].
    #[ inline ]
    pub async fn get< O >( &self, path : &str, query : Option< impl Serialize > ) -> Result< O >
    where
      O : DeserializeOwned,
    {
      let mut spec = RequestSpec::new( Method::GET, path );
      if let Some( query ) = query
      {
        spec = spec.with_query( serde_json::to_value( query )
          .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )? );
      }
      self.request( spec ).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    /// See [`Client::request`].
    #[ inline ]
    pub async fn post< I, O >( &self, path : &str, body : &I ) -> Result< O >
    where
      I : Serialize,
      O : DeserializeOwned,
    {
      let body = serde_json::to_value( body )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      self.request( RequestSpec::new( Method::POST, path ).with_body( body ) ).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    /// See [`Client::request`].
    #[ inline ]
    pub async fn delete< O >( &self, path : &str ) -> Result< O >
    where
      O : DeserializeOwned,
    {
      self.request( RequestSpec::new( Method::DELETE, path ) ).await
    }

    /// Sends a POST request with a JSON body and returns the raw response
    /// bytes, for endpoints that return binary content (audio, images)
    /// rather than JSON.
    ///
    /// # Errors
    /// Propagates the translated [`ClientError`] from [`Client::execute`].
    pub async fn post_binary< I >( &self, path : &str, body : &I ) -> Result< Vec< u8 > >
    where
      I : Serialize,
    {
      let body = serde_json::to_value( body )
        .map_err( | e | ClientError::InvalidRequest { message : e.to_string(), request : None } )?;
      let spec = RequestSpec::new( Method::POST, path ).with_body( body );
      let response = self.execute( &spec ).await?;
      let bytes = response.bytes().await
        .map_err( | e | ClientError::ApiResponseProcessing { message : e.to_string(), request : None } )?;
      Ok( bytes.to_vec() )
    }
  }

} // end mod private
