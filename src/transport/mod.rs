//! Transport layer: endpoint URLs and form encoding of every request.

mod campaign;
mod endpoint;
mod link;
mod message;
mod task;

use chrono::NaiveDateTime;

pub use campaign::{
    encode_add_recipients_form, encode_campaign_id_form, encode_campaign_links_form,
    encode_create_campaign_form,
};
pub use endpoint::{Endpoint, api_url};
pub use link::{encode_create_link_form, encode_delete_link_form, encode_link_id_form};
pub use message::{
    MessageFilter, encode_message_filter_form, encode_message_status_form,
    encode_send_message_form,
};
pub use task::encode_task_status_form;

/// `deferredToTs` wire format.
fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}
