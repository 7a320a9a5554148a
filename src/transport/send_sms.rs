use crate::domain::{MessageText, PhoneNumber, SendSms, ShortcodeId};

pub fn encode_send_sms_params(
    request: &SendSms,
    shortcode_id: Option<&ShortcodeId>,
) -> Vec<(String, String)> {
    let mut params = vec![
        (
            PhoneNumber::FIELD.to_owned(),
            request.phone().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.msg().as_str().to_owned(),
        ),
    ];
    if let Some(shortcode_id) = shortcode_id {
        params.push((
            ShortcodeId::FIELD.to_owned(),
            shortcode_id.as_str().to_owned(),
        ));
    }
    params
}
