use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static NUMERIC_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").unwrap());

/// Named entities decoded after numeric references. `&amp;` goes first, so an
/// escaped `&amp;lt;` comes out as `<`.
const NAMED_ENTITIES: [(&str, &str); 18] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&bull;", "\u{2022}"),
    ("&deg;", "\u{00B0}"),
    ("&frac12;", "\u{00BD}"),
    ("&frac13;", "\u{2153}"),
    ("&frac14;", "\u{00BC}"),
    ("&frac34;", "\u{00BE}"),
];

/// Strips tags and decodes HTML entities, returning trimmed plain text.
///
/// Unknown named entities and numeric references that are not valid Unicode
/// scalars are left as written.
pub fn strip_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, "");
    let mut text = decode_numeric_entities(&without_tags);

    for (entity, replacement) in NAMED_ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }

    text.replace('\u{00A0}', " ").trim().to_string()
}

fn decode_numeric_entities(text: &str) -> String {
    NUMERIC_ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let code_point = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                _ => None,
            };
            match code_point.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_and_named_entities() {
        assert_eq!(strip_html("<p>Mix &amp; Match</p>"), "Mix & Match");
        assert_eq!(
            strip_html("<li class=\"step\">Bake at 350&deg;F</li>"),
            "Bake at 350\u{00B0}F"
        );
        assert_eq!(strip_html("&frac12; cup &ldquo;fancy&rdquo; sugar"), "½ cup “fancy” sugar");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(strip_html("caf&#233;"), "café");
        assert_eq!(strip_html("caf&#xE9;"), "café");
        assert_eq!(strip_html("they&#X2019;re"), "they’re");
        assert_eq!(strip_html("&#8211; dash &#x2014;"), "– dash —");
    }

    #[test]
    fn test_invalid_and_unknown_entities_pass_through() {
        assert_eq!(strip_html("bad &#xD800; point"), "bad &#xD800; point");
        assert_eq!(strip_html("&#99999999999; big"), "&#99999999999; big");
        assert_eq!(strip_html("cr&egrave;me"), "cr&egrave;me");
    }

    #[test]
    fn test_nbsp_and_trim() {
        assert_eq!(strip_html("  \u{00A0}Salt&nbsp;to taste\u{00A0} "), "Salt to taste");
        assert_eq!(strip_html("<br/>"), "");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_escaped_entity_decodes_through_ampersand() {
        assert_eq!(strip_html("a &amp;lt; b"), "a < b");
        assert_eq!(strip_html("Salt &amp;amp; pepper"), "Salt &amp; pepper");
    }
}
