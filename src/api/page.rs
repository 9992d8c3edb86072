//! Server-rendered movie picker page.

use std::fmt::Write;

const STYLE: &str = r#"
    body { background-color: #0E1117; color: #FAFAFA; font-family: sans-serif; }
    main { max-width: 720px; margin: 0 auto; padding: 40px 20px; }
    .title { font-size: 40px; font-weight: bold; color: #FF4B4B; text-align: center; }
    .subtitle { font-size: 18px; color: #BBBBBB; text-align: center; margin-bottom: 30px; }
    select, button { font-size: 16px; padding: 8px; margin-top: 8px; }
    select { width: 100%; }
    .recommend-box { border: 2px solid #FF4B4B; border-radius: 10px; padding: 15px; margin-top: 20px; background-color: #1E1E1E; }
    .recommend-title { font-size: 22px; font-weight: bold; margin-bottom: 10px; color: #FFFFFF; }
    .recommend-movie { font-size: 18px; color: #FFD700; margin: 5px 0; }
    .warning { margin-top: 20px; padding: 15px; border-radius: 10px; background-color: #3E3A1E; color: #FFE08A; }
"#;

pub const NOT_FOUND_NOTICE: &str = "Movie not found in dataset. Please try another.";

/// Recommendations produced for the selected title
#[derive(Debug)]
pub struct Results<'a> {
    pub title: &'a str,
    pub found: bool,
    pub recommendations: Vec<String>,
}

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full page: title picker plus, when given, the results box
/// or a not-found warning.
pub fn render(titles: &[&str], results: Option<&Results<'_>>) -> String {
    let selected = results.map(|r| r.title);

    let mut options = String::new();
    for title in titles {
        let title_html = escape_html(title);
        let marker = if selected == Some(*title) { " selected" } else { "" };
        // writing to a String cannot fail
        let _ = writeln!(options, r#"<option value="{title_html}"{marker}>{title_html}</option>"#);
    }

    let results_html = results.map(render_results).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Movie Recommendation System</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<div class="title">🎬 Movie Recommendation System</div>
<div class="subtitle">Find movies similar to your favorites using their genres</div>
<form method="get" action="/">
<label for="title">Choose a movie:</label>
<select id="title" name="title">
{options}</select>
<button type="submit">Recommend</button>
</form>
{results_html}
</main>
</body>
</html>
"#
    )
}

fn render_results(results: &Results<'_>) -> String {
    if !results.found {
        return format!(r#"<div class="warning">❌ {NOT_FOUND_NOTICE}</div>"#);
    }

    let mut html = String::from(r#"<div class="recommend-box">"#);
    let _ = write!(
        html,
        r#"<div class="recommend-title">Recommended movies similar to "{}"</div>"#,
        escape_html(results.title)
    );
    for movie in &results.recommendations {
        let _ = write!(html, r#"<div class="recommend-movie">🍿 {}</div>"#, escape_html(movie));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Heat (1995)"), "Heat (1995)");
    }

    #[test]
    fn test_picker_lists_every_title() {
        let html = render(&["Heat (1995)", "Casino (1995)"], None);
        assert!(html.contains(r#"<option value="Heat (1995)">Heat (1995)</option>"#));
        assert!(html.contains(r#"<option value="Casino (1995)">Casino (1995)</option>"#));
        assert!(!html.contains(r#"class="recommend-box""#));
        assert!(!html.contains(NOT_FOUND_NOTICE));
    }

    #[test]
    fn test_results_box() {
        let results = Results {
            title: "Heat (1995)",
            found: true,
            recommendations: vec!["Casino (1995)".to_string()],
        };
        let html = render(&["Heat (1995)", "Casino (1995)"], Some(&results));
        assert!(html.contains(r#"Recommended movies similar to "Heat (1995)""#));
        assert!(html.contains(r#"class="recommend-box""#));
        assert!(html.contains("🍿 Casino (1995)"));
        assert!(html.contains(r#"<option value="Heat (1995)" selected>"#));
    }

    #[test]
    fn test_not_found_warning() {
        let results = Results {
            title: "<script>",
            found: false,
            recommendations: Vec::new(),
        };
        let html = render(&[], Some(&results));
        assert!(html.contains(NOT_FOUND_NOTICE));
        assert!(!html.contains(r#"class="recommend-box""#));
        assert!(!html.contains("<script>"));
    }
}
