use crate::domain::{PhoneNumber, SendOtp, ShortcodeId};

pub fn encode_send_otp_params(
    request: &SendOtp,
    shortcode_id: Option<&ShortcodeId>,
) -> Vec<(String, String)> {
    let mut params = vec![(
        PhoneNumber::FIELD.to_owned(),
        request.phone().as_str().to_owned(),
    )];
    if let Some(shortcode_id) = shortcode_id {
        params.push((
            ShortcodeId::FIELD.to_owned(),
            shortcode_id.as_str().to_owned(),
        ));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_phone_only_without_shortcode() {
        let req = SendOtp::new(PhoneNumber::new("+251912345678").unwrap());
        assert_eq!(
            encode_send_otp_params(&req, None),
            vec![("phone".to_owned(), "+251912345678".to_owned())]
        );
    }

    #[test]
    fn encode_appends_shortcode_when_configured() {
        let req = SendOtp::new(PhoneNumber::new("251912345678").unwrap());
        let shortcode = ShortcodeId::new(8899).unwrap();
        assert_eq!(
            encode_send_otp_params(&req, Some(&shortcode)),
            vec![
                ("phone".to_owned(), "251912345678".to_owned()),
                ("shortcode_id".to_owned(), "8899".to_owned()),
            ]
        );
    }
}
