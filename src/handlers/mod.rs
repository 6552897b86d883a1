pub mod message_handlers;
