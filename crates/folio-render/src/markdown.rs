//! Markdown to HTML conversion for page bodies.

use markdown::{CompileOptions, Options};

/// Render a page body to an HTML fragment.
///
/// GFM extensions are on, and raw HTML passes through since book
/// sources routinely embed it.
pub fn render_markdown(source: &str) -> Result<String, String> {
    let options = Options {
        compile: CompileOptions {
            allow_dangerous_html: true,
            ..CompileOptions::gfm()
        },
        ..Options::gfm()
    };
    markdown::to_html_with_options(source, &options).map_err(|message| message.to_string())
}
