//! Carrier detection and tracking URL derivation.
//!
//! Expressed as an ordered list of (predicate, template) rules evaluated
//! top-to-bottom, first match wins. Rule order is load-bearing: the FedEx
//! digit pattern deliberately precedes the USPS one, so a bare 91/92/93/94
//! number with no carrier string resolves to FedEx exactly as it always has.
//! Changing the order or the patterns is a compatibility break.

use std::sync::LazyLock;

use regex::Regex;

static FEDEX_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{12,22}|96\d{18})$").unwrap());
static USPS_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^9[1-4]\d{18,20}$").unwrap());

struct CarrierRule {
    matches: fn(carrier: &str, number: &str) -> bool,
    template: fn(number: &str) -> String,
}

/// Evaluated top-to-bottom; the final rule is the catch-all.
static RULES: &[CarrierRule] = &[
    CarrierRule {
        matches: |carrier, number| carrier.contains("ups") || number.starts_with("1Z"),
        template: |n| format!("https://www.ups.com/track?loc=en_US&tracknum={n}"),
    },
    CarrierRule {
        matches: |carrier, number| carrier.contains("fedex") || FEDEX_NUMBER.is_match(number),
        template: |n| format!("https://www.fedex.com/fedextrack/?trknbr={n}"),
    },
    CarrierRule {
        matches: |carrier, number| carrier.contains("usps") || USPS_NUMBER.is_match(number),
        template: |n| format!("https://tools.usps.com/go/TrackConfirmAction?tLabels={n}"),
    },
    CarrierRule {
        matches: |carrier, _| carrier.contains("dhl"),
        template: |n| format!("https://www.dhl.com/en/express/tracking.html?AWB={n}&brand=DHL"),
    },
    CarrierRule {
        matches: |_, _| true,
        template: |n| format!("https://www.google.com/search?q={n}"),
    },
];

/// Derive a tracking URL from a tracking number and optional carrier name.
///
/// A missing or empty number short-circuits to `None` before any pattern
/// runs. Carrier matching is a case-insensitive substring check.
pub fn tracking_url(number: Option<&str>, carrier: Option<&str>) -> Option<String> {
    let number = number?.trim();
    if number.is_empty() {
        return None;
    }
    let carrier = carrier.unwrap_or("").to_ascii_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&carrier, number))
        .map(|rule| (rule.template)(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_number_yields_no_url() {
        assert_eq!(tracking_url(None, Some("UPS")), None);
        assert_eq!(tracking_url(Some(""), Some("UPS")), None);
        assert_eq!(tracking_url(Some("   "), None), None);
    }

    #[test]
    fn ups_prefix_without_carrier_resolves_to_ups() {
        let url = tracking_url(Some("1Z999AA10123456784"), None).unwrap();
        assert_eq!(
            url,
            "https://www.ups.com/track?loc=en_US&tracknum=1Z999AA10123456784"
        );
    }

    #[test]
    fn carrier_name_match_is_case_insensitive_substring() {
        let url = tracking_url(Some("ABC123"), Some("UPS Ground")).unwrap();
        assert!(url.starts_with("https://www.ups.com/track"));

        let url = tracking_url(Some("ABC123"), Some("FedEx Express")).unwrap();
        assert!(url.starts_with("https://www.fedex.com/fedextrack/"));
    }

    #[test]
    fn twelve_digit_number_resolves_to_fedex() {
        let url = tracking_url(Some("123456789012"), None).unwrap();
        assert_eq!(url, "https://www.fedex.com/fedextrack/?trknbr=123456789012");
    }

    #[test]
    fn ninety_six_prefixed_twenty_digits_resolves_to_fedex() {
        let url = tracking_url(Some("96123456789012345678"), None).unwrap();
        assert!(url.starts_with("https://www.fedex.com/fedextrack/"));
    }

    #[test]
    fn bare_usps_style_number_falls_to_fedex_by_rule_order() {
        // 22 digits starting 94: matches the FedEx 12-22 digit rule first.
        let url = tracking_url(Some("9400111899223100001234"), None).unwrap();
        assert!(url.starts_with("https://www.fedex.com/fedextrack/"));
    }

    #[test]
    fn usps_carrier_string_is_shadowed_by_the_ups_substring_rule() {
        // "usps" contains "ups"; rule order keeps the historical behavior.
        let url = tracking_url(Some("9261290100001234567890"), Some("USPS")).unwrap();
        assert!(url.starts_with("https://www.ups.com/track"));
    }

    #[test]
    fn dhl_carrier_resolves_to_dhl() {
        let url = tracking_url(Some("JD014600003828800661"), Some("DHL Express"));
        // 20 digits would hit the FedEx digit rule, but this number has
        // letters, so only the carrier string matches.
        assert_eq!(
            url.unwrap(),
            "https://www.dhl.com/en/express/tracking.html?AWB=JD014600003828800661&brand=DHL"
        );
    }

    #[test]
    fn unknown_number_falls_back_to_web_search() {
        let url = tracking_url(Some("XYZ-42"), None).unwrap();
        assert_eq!(url, "https://www.google.com/search?q=XYZ-42");
    }
}
