//! Text helpers for merged leaf values.

/// Decode the HTML entities the rendering pipeline produces: `&lt;`,
/// `&gt;`, then `&amp;`, in that order, so `&amp;lt;` decodes to the
/// literal text `&lt;` instead of double-unescaping.
///
/// # Examples
///
/// ```
/// use lynk_transform::unescape_html;
///
/// assert_eq!(unescape_html("1 &lt; 2 &amp;&amp; 3 &gt; 2"), "1 < 2 && 3 > 2");
/// assert_eq!(unescape_html("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_html("plain"), "plain");
/// ```
pub fn unescape_html(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
