pub mod notification_dto;
pub mod notification_list_response;
pub mod notifications;
pub mod notify_request;
