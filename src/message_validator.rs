// src/message_validator.rs
//! Structural validation of a chat message list before it's sent: role
//! ordering, tool-call/tool-response pairing, and other shape checks the
//! server would otherwise reject after a round trip.

mod private
{
  use crate::components::input::{ Message, MessageContent };
  use std::collections::HashSet;

  /// The outcome of validating a message list: hard failures and
  /// non-fatal warnings, both as human-readable strings.
  #[ derive( Debug, Clone, Default, PartialEq, Eq ) ]
  pub struct ValidationReport
  {
    /// Problems that make the message list invalid to send.
    pub errors : Vec< String >,
    /// Problems worth surfacing but that don't block the request.
    pub warnings : Vec< String >,
  }

  impl ValidationReport
  {
    /// Whether no errors were recorded. Warnings don't affect this.
    #[ inline ]
    #[ must_use ]
    pub fn is_valid( &self ) -> bool
    {
      self.errors.is_empty()
    }
  }

  const VALID_ROLES : [ &str; 4 ] = [ "system", "user", "assistant", "tool" ];

  /// Returns the message's content as text, if it carries any.
  fn as_text( content : &Option< MessageContent > ) -> Option< &str >
  {
    match content
    {
      Some( MessageContent::Text( text ) ) => Some( text.as_str() ),
      _ => None,
    }
  }

  /// Whether `content` is present as non-empty text.
  fn has_nonempty_text( content : &Option< MessageContent > ) -> bool
  {
    as_text( content ).is_some_and( | text | !text.is_empty() )
  }

  /// Whether `content` is present as a non-empty string or a non-empty
  /// list of content parts.
  fn has_nonempty_content( content : &Option< MessageContent > ) -> bool
  {
    match content
    {
      Some( MessageContent::Text( text ) ) => !text.is_empty(),
      Some( MessageContent::Parts( parts ) ) => !parts.is_empty(),
      None => false,
    }
  }

  /// Validates a chat message list.
  ///
  /// Checks, in order: the list isn't empty; every role is recognized; at
  /// most one `system` message, and only at index 0; `user` and
  /// `assistant` messages may not directly follow a message of the same
  /// role; an `assistant` message must carry either non-empty content or
  /// a non-empty `tool_calls` list, and each tool call must have a
  /// non-empty id, `type: "function"`, and a non-empty function name; a
  /// `tool` message must follow an assistant message, carry a
  /// `tool_call_id`, and carry non-empty content; every tool call issued
  /// by an assistant message eventually receives a matching tool response
  /// before the conversation moves on to a new user turn.
  #[ must_use ]
  pub fn validate( messages : &[ Message ] ) -> ValidationReport
  {
    let mut report = ValidationReport::default();

    if messages.is_empty()
    {
      report.errors.push( "Messages list cannot be empty".to_string() );
      return report;
    }

    let mut expected_tool_call_ids : HashSet< String > = HashSet::new();
    let mut system_message_seen = false;
    let mut previous_role : Option< &str > = None;

    for ( index, message ) in messages.iter().enumerate()
    {
      if !VALID_ROLES.contains( &message.role.as_str() )
      {
        report.errors.push( format!( "Message at index {index} has invalid role: '{}'", message.role ) );
        continue;
      }

      match message.role.as_str()
      {
        "system" =>
        {
          if index != 0
          {
            report.errors.push( format!( "Message at index {index} has role 'system' but a system message must be first" ) );
          }
          if system_message_seen
          {
            report.errors.push( format!( "Message at index {index} is a second 'system' message; at most one is allowed" ) );
          }
          system_message_seen = true;

          if !has_nonempty_text( &message.content )
          {
            report.errors.push( format!( "Message at index {index} with role 'system' must have non-empty text content" ) );
          }
          if message.tool_calls.is_some()
          {
            report.errors.push( format!( "Message at index {index} with role 'system' may not carry tool_calls" ) );
          }
          if message.tool_call_id.is_some()
          {
            report.errors.push( format!( "Message at index {index} with role 'system' may not carry a tool_call_id" ) );
          }
        }
        "user" =>
        {
          if previous_role == Some( "user" )
          {
            report.errors.push( format!( "Message at index {index} with role 'user' directly follows another 'user' message" ) );
          }
          if !has_nonempty_content( &message.content )
          {
            report.errors.push( format!( "Message at index {index} with role 'user' must have non-empty content" ) );
          }
          expected_tool_call_ids.clear();
        }
        "assistant" =>
        {
          if previous_role == Some( "assistant" )
          {
            report.errors.push( format!( "Message at index {index} with role 'assistant' directly follows another 'assistant' message" ) );
          }

          match &message.tool_calls
          {
            Some( calls ) if !calls.is_empty() =>
            {
              for call in calls
              {
                if call.id.trim().is_empty()
                {
                  report.errors.push( format!( "Message at index {index} has a tool call with an empty id" ) );
                }
                if call.r#type != "function"
                {
                  report.errors.push( format!(
                    "Message at index {index} has a tool call of type '{}', expected 'function'", call.r#type
                  ));
                }
                if call.function.name.trim().is_empty()
                {
                  report.errors.push( format!( "Message at index {index} has a tool call with an empty function name" ) );
                }
                expected_tool_call_ids.insert( call.id.clone() );
              }
            }
            Some( _ ) =>
            {
              report.errors.push( format!( "Message at index {index} with role 'assistant' has an empty tool_calls list" ) );
            }
            None =>
            {
              if !has_nonempty_text( &message.content )
              {
                report.errors.push( format!( "Message at index {index} with role 'assistant' has neither content nor tool_calls" ) );
              }
            }
          }
        }
        "tool" =>
        {
          if previous_role != Some( "assistant" )
          {
            report.errors.push( format!( "Message at index {index} with role 'tool' does not follow an assistant message" ) );
          }

          match &message.tool_call_id
          {
            None =>
            {
              report.errors.push( format!( "Message at index {index} with role 'tool' must have a tool_call_id" ) );
            }
            Some( id ) =>
            {
              if expected_tool_call_ids.remove( id )
              {
                // matched, nothing further to record
              }
              else
              {
                report.warnings.push( format!(
                  "Message at index {index} has tool_call_id '{id}' that does not match any preceding tool call"
                ));
              }
            }
          }

          if !has_nonempty_text( &message.content )
          {
            report.errors.push( format!( "Message at index {index} with role 'tool' must have non-empty content" ) );
          }
        }
        _ => {}
      }

      previous_role = Some( message.role.as_str() );
    }

    if !expected_tool_call_ids.is_empty()
    {
      let mut ids : Vec< &String > = expected_tool_call_ids.iter().collect();
      ids.sort();
      let joined = ids.into_iter().cloned().collect::< Vec< _ > >().join( ", " );
      report.errors.push( format!( "Missing tool responses for tool_call_ids: {joined}" ) );
    }

    report
  }

} // end mod private

crate ::mod_interface!
{
  exposed use
  {
    ValidationReport,
    validate,
  };
}
