/// Rewrites special characters in text destined for XML attributes.
///
/// CI dashboards display suite and case names verbatim, so markup-sensitive
/// characters are spelled out as words instead of being entity-escaped.
/// Two-character tokens are handled before their one-character prefixes so
/// `<=` never decays into `less than=`. `None` sanitizes to an empty string.
pub fn sanitize(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };
    name.replace("<=", "less than or equal to")
        .replace(">=", "greater than or equal to")
        .replace('<', "less than")
        .replace('%', "percent")
        .replace('&', "and")
        .replace("||", "or")
        .replace('"', "'")
}

/// Wraps failure text in a CDATA section.
///
/// Any CDATA delimiters already present in the data are neutralized first so
/// the wrapping section stays well-formed. `None` yields an empty string
/// with no wrapping.
pub fn cdata(data: Option<&str>) -> String {
    let Some(data) = data else {
        return String::new();
    };
    let body = data.replace("<![CDATA[", "(CDATA)[").replace("]]>", "]");
    format!("<![CDATA[ {} ]]>", body)
}
