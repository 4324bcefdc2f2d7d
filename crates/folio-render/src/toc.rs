//! Sidebar table of contents for a whole book.
//!
//! This is the left hand navigation listing every page of the book in
//! reading order, not the per-page heading list.

use std::fmt::Write;

use folio_core::Book;

/// Build the sidebar HTML for `book`, marking the page with id
/// `active` as the current one.
pub fn book_toc(book: &Book, active: &str) -> String {
    let mut html = String::from("<ol class=\"chapter\">\n");
    let mut depth = 1;

    for page in &book.pages {
        while depth < page.depth {
            html.push_str("<li><ol class=\"section\">\n");
            depth += 1;
        }
        while depth > page.depth {
            html.push_str("</ol></li>\n");
            depth -= 1;
        }

        let class = if page.id == active {
            "chapter-item active"
        } else {
            "chapter-item"
        };
        // SectionNumber's Display already carries the trailing dot.
        let number = match &page.number {
            Some(number) => format!("<strong>{number}</strong> "),
            None => String::new(),
        };
        let _ = writeln!(
            html,
            "<li class=\"{class}\"><a href=\"{}\">{number}{}</a></li>",
            escape(&page.url),
            escape(&page.name),
        );
    }

    while depth > 1 {
        html.push_str("</ol></li>\n");
        depth -= 1;
    }
    html.push_str("</ol>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
