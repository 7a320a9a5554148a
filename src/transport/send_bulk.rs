use serde_json::Value;

use crate::domain::{GroupId, MessageText, NotifyUrl, PhoneNumber, SendBulk};

/// Bulk recipients travel as a JSON array serialized into the `phone` string.
pub fn encode_send_bulk_params(
    request: &SendBulk,
    group_id: Option<&GroupId>,
) -> Vec<(String, String)> {
    let phones = Value::Array(
        request
            .phones()
            .iter()
            .map(|phone| Value::String(phone.as_str().to_owned()))
            .collect(),
    );

    let mut params = vec![
        (PhoneNumber::FIELD.to_owned(), phones.to_string()),
        (
            MessageText::FIELD.to_owned(),
            request.msg().as_str().to_owned(),
        ),
        (
            NotifyUrl::FIELD.to_owned(),
            request.notify().as_str().to_owned(),
        ),
    ];
    if let Some(group_id) = group_id {
        params.push((GroupId::FIELD.to_owned(), group_id.as_str().to_owned()));
    }
    params
}
