// Outbound contact links.

/// `tel:` link with every whitespace character stripped from the number.
pub fn dial_link(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// WhatsApp click-to-chat link with a pre-filled, percent-encoded message.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

pub fn mail_link(address: &str) -> String {
    format!("mailto:{}", address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn dial_link_is_one_token() {
        assert_eq!(dial_link(config::PHONE_DISPLAY), "tel:+254746480706");
        assert_eq!(dial_link(" +1 555\t0100 "), "tel:+15550100");
    }

    #[test]
    fn whatsapp_text_round_trips() {
        let link = whatsapp_link(config::PHONE_DIGITS, config::WHATSAPP_GREETING);
        let (base, text) = link.split_once("?text=").unwrap();
        assert_eq!(base, "https://wa.me/254746480706");
        assert!(!text.contains(' '));
        assert!(!text.contains(','));
        assert_eq!(urlencoding::decode(text).unwrap(), config::WHATSAPP_GREETING);
    }

    #[test]
    fn whatsapp_text_escapes_query_syntax() {
        let link = whatsapp_link("1", "a&b=c?");
        assert_eq!(link, "https://wa.me/1?text=a%26b%3Dc%3F");
    }

    #[test]
    fn mail_link_prefix() {
        assert_eq!(mail_link(config::EMAIL), "mailto:magomerebrad018@gmail.com");
    }
}
