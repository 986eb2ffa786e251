pub mod api_message;
pub mod wire_date;
