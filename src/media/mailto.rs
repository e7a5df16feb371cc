// SPDX-License-Identifier: MPL-2.0
//! `mailto:` link construction.

use crate::domain::contact::MailDraft;

/// Builds `mailto:<address>?subject=<s>&body=<b>`.
///
/// Subject and body are percent-encoded as entered. Everything except RFC 3986
/// unreserved characters is escaped, so spaces become `%20` and line breaks
/// `%0A`. The address is used verbatim.
pub fn mailto_uri(address: &str, draft: &MailDraft) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(&draft.subject),
        urlencoding::encode(&draft.body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(subject: &str, body: &str) -> MailDraft {
        MailDraft {
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn plain_values_are_left_alone() {
        assert_eq!(
            mailto_uri("me@example.com", &draft("Hi", "World")),
            "mailto:me@example.com?subject=Hi&body=World"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let uri = mailto_uri("me@example.com", &draft("Q&A = fun?", "line one\nline two"));
        assert_eq!(
            uri,
            "mailto:me@example.com?subject=Q%26A%20%3D%20fun%3F&body=line%20one%0Aline%20two"
        );
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        let uri = mailto_uri("me@example.com", &draft("Café", "✓"));
        assert!(uri.ends_with("subject=Caf%C3%A9&body=%E2%9C%93"));
    }
}
