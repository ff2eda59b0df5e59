/// Prefix carried by the feed's identifier elements (`id`, `payloadId`,
/// `skuId`).
const URN_UUID_PREFIX: &str = "urn:uuid:";

/// Strip the `urn:uuid:` prefix from an identifier, if present.
///
/// The prefix is removed at most once; a bare identifier passes through
/// unchanged.
pub(crate) fn strip_urn(input: &str) -> &str {
    input.strip_prefix(URN_UUID_PREFIX).unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix() {
        assert_eq!(
            strip_urn("urn:uuid:9e04ef23-b94f-4f09-98ab-4e6d6e5a29d5"),
            "9e04ef23-b94f-4f09-98ab-4e6d6e5a29d5"
        );
    }

    #[test]
    fn bare_identifier_unchanged() {
        assert_eq!(strip_urn("9e04ef23"), "9e04ef23");
    }

    #[test]
    fn strips_at_most_once() {
        assert_eq!(strip_urn("urn:uuid:urn:uuid:x"), "urn:uuid:x");
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip_urn(""), "");
    }
}
