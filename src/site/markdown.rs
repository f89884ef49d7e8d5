use pulldown_cmark::{html, Options, Parser};

/// Renders a note body to an HTML fragment. Tables, footnotes and
/// strikethrough are on to match the rest of the note corpus; fenced code is
/// native.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Post pages live one directory below the image root, so relative image
/// references gain one level.
pub fn rewrite_image_paths(html: &str) -> String {
    html.replace("src=\"images/", "src=\"../images/")
}
