//! Message List Validation Tests

use api_venice::components::input::{ Message, MessageContent, ToolCall, ToolCallFunction };
use api_venice::message_validator::validate;

fn text_message( role : &str, text : &str ) -> Message
{
  Message
  {
    role : role.to_string(),
    content : Some( MessageContent::Text( text.to_string() ) ),
    name : None,
    tool_calls : None,
    tool_call_id : None,
  }
}

mod structural_validation_tests
{
  use super::*;

  #[ test ]
  fn empty_list_is_invalid()
  {
    let report = validate( &[] );
    assert!( !report.is_valid() );
    assert_eq!( report.errors.len(), 1 );
  }

  #[ test ]
  fn unknown_role_is_invalid()
  {
    let messages = vec![ text_message( "narrator", "hi" ) ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn well_formed_conversation_is_valid()
  {
    let messages = vec![
      text_message( "system", "be concise" ),
      text_message( "user", "hello" ),
      text_message( "assistant", "hi there" ),
    ];
    let report = validate( &messages );
    assert!( report.is_valid() );
    assert!( report.warnings.is_empty() );
  }

  #[ test ]
  fn system_message_after_index_zero_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hello" ),
      text_message( "system", "be concise" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn second_system_message_is_invalid()
  {
    let messages = vec![
      text_message( "system", "be concise" ),
      text_message( "system", "also be terse" ),
      text_message( "user", "hello" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn empty_system_content_is_invalid()
  {
    let messages = vec![ text_message( "system", "" ) ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn consecutive_user_messages_are_invalid()
  {
    let messages = vec![
      text_message( "user", "hello" ),
      text_message( "user", "are you there" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn empty_user_content_is_invalid()
  {
    let messages = vec![ text_message( "user", "" ) ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn consecutive_assistant_messages_are_invalid()
  {
    let messages = vec![
      text_message( "user", "hello" ),
      text_message( "assistant", "hi" ),
      text_message( "assistant", "anything else?" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn assistant_with_no_content_and_no_tool_calls_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hello" ),
      Message { role : "assistant".to_string(), content : None, name : None, tool_calls : None, tool_call_id : None },
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }
}

mod tool_call_pairing_tests
{
  use super::*;

  fn assistant_with_tool_call( id : &str ) -> Message
  {
    Message
    {
      role : "assistant".to_string(),
      content : None,
      name : None,
      tool_calls : Some( vec![ ToolCall
      {
        id : id.to_string(),
        r#type : "function".to_string(),
        function : ToolCallFunction { name : "lookup".to_string(), arguments : "{}".to_string() },
      }]),
      tool_call_id : None,
    }
  }

  fn tool_response( id : &str ) -> Message
  {
    Message
    {
      role : "tool".to_string(),
      content : Some( MessageContent::Text( "result".to_string() ) ),
      name : None,
      tool_calls : None,
      tool_call_id : Some( id.to_string() ),
    }
  }

  #[ test ]
  fn tool_message_without_tool_call_id_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      Message { role : "tool".to_string(), content : None, name : None, tool_calls : None, tool_call_id : None },
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn matched_tool_call_and_response_is_valid()
  {
    let messages = vec![
      text_message( "user", "what's the weather" ),
      assistant_with_tool_call( "call_1" ),
      tool_response( "call_1" ),
    ];
    let report = validate( &messages );
    assert!( report.is_valid() );
    assert!( report.warnings.is_empty() );
  }

  #[ test ]
  fn unmatched_tool_response_warns_without_erroring()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      text_message( "assistant", "sure, one moment" ),
      tool_response( "call_unknown" ),
    ];
    let report = validate( &messages );
    assert!( report.is_valid() );
    assert_eq!( report.warnings.len(), 1 );
  }

  #[ test ]
  fn missing_tool_response_is_a_single_combined_error()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      assistant_with_tool_call( "call_1" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
    assert_eq!( report.errors.len(), 1 );
    assert!( report.errors[ 0 ].contains( "call_1" ) );
  }

  #[ test ]
  fn new_user_turn_clears_expectation_for_unanswered_tool_calls()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      assistant_with_tool_call( "call_1" ),
      text_message( "user", "never mind" ),
    ];
    let report = validate( &messages );
    assert!( report.is_valid() );
  }

  #[ test ]
  fn tool_call_with_empty_id_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      assistant_with_tool_call( "" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn tool_call_with_wrong_type_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      Message
      {
        role : "assistant".to_string(),
        content : None,
        name : None,
        tool_calls : Some( vec![ ToolCall
        {
          id : "call_1".to_string(),
          r#type : "not_a_function".to_string(),
          function : ToolCallFunction { name : "lookup".to_string(), arguments : "{}".to_string() },
        }]),
        tool_call_id : None,
      },
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn tool_call_with_empty_function_name_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      Message
      {
        role : "assistant".to_string(),
        content : None,
        name : None,
        tool_calls : Some( vec![ ToolCall
        {
          id : "call_1".to_string(),
          r#type : "function".to_string(),
          function : ToolCallFunction { name : String::new(), arguments : "{}".to_string() },
        }]),
        tool_call_id : None,
      },
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn tool_message_not_following_an_assistant_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      tool_response( "call_1" ),
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }

  #[ test ]
  fn tool_message_with_empty_content_is_invalid()
  {
    let messages = vec![
      text_message( "user", "hi" ),
      assistant_with_tool_call( "call_1" ),
      Message
      {
        role : "tool".to_string(),
        content : Some( MessageContent::Text( String::new() ) ),
        name : None,
        tool_calls : None,
        tool_call_id : Some( "call_1".to_string() ),
      },
    ];
    let report = validate( &messages );
    assert!( !report.is_valid() );
  }
}
