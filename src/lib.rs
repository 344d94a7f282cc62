// src/lib.rs
//! A client for the Venice AI API: chat completions, embeddings, image
//! generation, text-to-speech, transcription, and model listing.
//!
//! # Design
//!
//! The client is a thin transport layer: one retry-driven request executor
//! ([`client_ext_request_core`]) that every resource wrapper ([`chat`],
//! [`embeddings`], [`images`], [`audio`], [`models`]) builds requests
//! through. Retry policy, error translation and request signing are pure
//! functions ([`retry`], [`error`]) shared between the async [`Client`] and
//! the blocking [`client_blocking::BlockingClient`], rather than duplicated
//! or layered behind a background thread.
//!
//! API keys are held in [`secret::Secret`], which never logs or otherwise
//! exposes its contents outside of building the `Authorization` header.

#[ cfg( feature = "enabled" ) ]
use mod_interface::mod_interface;

#[ cfg( feature = "enabled" ) ]
mod private {}

// Re-export ClientApiAccessors at crate root for convenience
#[ cfg( feature = "enabled" ) ]
pub use client_api_accessors::ClientApiAccessors;

// Client extension modules (impl blocks for Client)
#[ cfg( feature = "enabled" ) ]
mod client_ext_builder;
#[ cfg( feature = "enabled" ) ]
mod client_ext_request_core;
#[ cfg( feature = "enabled" ) ]
mod client_ext_http_basic;
#[ cfg( feature = "enabled" ) ]
mod stream_sse;
#[ cfg( feature = "enabled" ) ]
mod stream_raw;
#[ cfg( feature = "enabled" ) ]
mod multipart;

#[ cfg( feature = "enabled" ) ]
crate ::mod_interface!
{
  // Resource wrappers, one per API surface.
  layer chat;
  layer embeddings;
  layer images;
  layer audio;
  layer models;

  // Core client machinery.
  layer client;
  layer client_blocking;
  layer client_api_accessors;
  layer client_lifecycle;
  layer components;
  layer config;
  layer error;
  layer retry;
  layer secret;

  // Request-shaping helpers used by the resource wrappers.
  layer model_selection;
  layer message_validator;
  layer token_estimator;

  exposed use chat;
  exposed use embeddings;
  exposed use images;
  exposed use audio;
  exposed use models;

  exposed use client;
  exposed use client_blocking;
  exposed use client_api_accessors;
  exposed use client_lifecycle;
  exposed use components;
  exposed use config;
  exposed use error;
  exposed use retry;
  exposed use secret;

  exposed use model_selection;
  exposed use message_validator;
  exposed use token_estimator;
}
