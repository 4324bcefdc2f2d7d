//! # folio-render
//!
//! Renders collected [`Book`]s to a static HTML site: one
//! `index.html` per page, a redirect stub at each book root that
//! forwards to its default page, and the shared static assets.
//!
//! Templates are embedded in the binary and can be shadowed per file
//! with a template override directory.

use std::fs;
use std::path::Path;

use minijinja::{Environment, context};
use tracing::{debug, instrument};

use folio_config::HtmlConfig;
use folio_core::nav::{self, RedirectOutcome};
use folio_core::{Book, Dirs, Page};

mod assets;
pub mod error;
pub mod markdown;
pub mod toc;

pub use error::{RenderError, Result};
pub use markdown::render_markdown;

pub struct HtmlRenderer<'a> {
    books: &'a [Book],
    dirs: &'a Dirs,
    html: &'a HtmlConfig,
    env: Environment<'static>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(
        books: &'a [Book],
        dirs: &'a Dirs,
        html: &'a HtmlConfig,
        template_overrides: Option<&Path>,
    ) -> Result<Self> {
        let env = assets::environment(template_overrides)?;
        Ok(Self {
            books,
            dirs,
            html,
            env,
        })
    }

    /// Render the whole site into the output directory, replacing any
    /// previous build.
    #[instrument(skip(self), fields(books = self.books.len()))]
    pub fn render(&self) -> Result<()> {
        if self.dirs.out_dir.exists() {
            fs::remove_dir_all(&self.dirs.out_dir)?;
        }
        fs::create_dir_all(&self.dirs.out_dir)?;
        assets::write_static(&self.dirs.out_dir)?;

        for book in self.books {
            for page in &book.pages {
                let html = self.render_page(book, page)?;
                if let Some(parent) = page.output.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&page.output, html)?;
            }
            self.write_redirect(book)?;
            debug!(book = book.slug, pages = book.pages.len(), "rendered book");
        }

        Ok(())
    }

    fn render_page(&self, book: &Book, page: &Page) -> Result<String> {
        let source = fs::read_to_string(&page.input)?;
        let content = render_markdown(&source).map_err(|message| RenderError::Markdown {
            path: page.input.clone(),
            message,
        })?;

        let template = self.env.get_template("page.html")?;
        let html = template.render(context! {
            language => self.html.language,
            default_theme => self.html.default_theme,
            base_url => self.dirs.base_url,
            book_title => book.title,
            book_url => book.root_url,
            title => page.name,
            content => content,
            toc => toc::book_toc(book, &page.id),
            breadcrumbs => page.breadcrumbs,
            previous => page.previous,
            next => page.next,
        })?;
        Ok(html)
    }

    /// Write the meta refresh stub that forwards a book root to its
    /// default page. Books whose root already serves a page get none.
    fn write_redirect(&self, book: &Book) -> Result<()> {
        let RedirectOutcome::RedirectTo(url) = nav::resolve(self.books, &book.root_url) else {
            return Ok(());
        };

        let template = self.env.get_template("redirect.html")?;
        let html = template.render(context! {
            language => self.html.language,
            url => url,
        })?;

        let output = self.dirs.out_dir.join(&book.slug).join("index.html");
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use folio_core::collect;
    use folio_core::summary::parse_summary;
    use tempfile::TempDir;

    use super::*;

    struct Site {
        _temp: TempDir,
        out: PathBuf,
        books: Vec<Book>,
        dirs: Dirs,
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn build_site() -> Site {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let out = temp.path().join("out");

        write(&src, "guide/title-page.md", "# Title Page\n");
        write(&src, "guide/one.md", "# One\n");
        write(&src, "guide/two.md", "# Two\n");
        write(&src, "manual/README.md", "# Manual\n");
        write(&src, "manual/cli.md", "# Cli\n");

        let dirs = Dirs {
            base_dir: src.clone(),
            out_dir: out.clone(),
            base_url: "/".to_owned(),
        };

        let guide = parse_summary(
            "# Guide\n\n[Title Page](title-page.md)\n\n- [One](one.md)\n- [Two](two.md)\n",
        )
        .unwrap();
        let manual = parse_summary("# Manual\n\n- [Intro](README.md)\n- [Cli](cli.md)\n").unwrap();

        let books = vec![
            collect::collect_book("guide", &src.join("guide"), &guide, None, &dirs).unwrap(),
            collect::collect_book("manual", &src.join("manual"), &manual, None, &dirs).unwrap(),
        ];

        Site {
            _temp: temp,
            out,
            books,
            dirs,
        }
    }

    fn render(site: &Site) {
        let html = HtmlConfig::default();
        HtmlRenderer::new(&site.books, &site.dirs, &html, None)
            .unwrap()
            .render()
            .unwrap();
    }

    #[test]
    fn writes_every_page() {
        let site = build_site();
        render(&site);

        for rel in [
            "guide/title-page/index.html",
            "guide/one/index.html",
            "guide/two/index.html",
            "manual/index.html",
            "manual/cli/index.html",
        ] {
            assert!(site.out.join(rel).is_file(), "missing {rel}");
        }
        assert!(site.out.join("folio.css").is_file());
    }

    #[test]
    fn book_root_redirects_to_default_page() {
        let site = build_site();
        render(&site);

        let stub = fs::read_to_string(site.out.join("guide/index.html")).unwrap();
        assert!(stub.contains("http-equiv=\"refresh\""));
        assert!(stub.contains("url=/guide/title-page/"));
    }

    #[test]
    fn root_readme_serves_without_redirect() {
        let site = build_site();
        render(&site);

        let root = fs::read_to_string(site.out.join("manual/index.html")).unwrap();
        assert!(!root.contains("http-equiv=\"refresh\""));
        assert!(root.contains("<h1>Manual</h1>"));
    }

    #[test]
    fn first_page_gets_only_a_forward_link() {
        let site = build_site();
        render(&site);

        let first = fs::read_to_string(site.out.join("guide/title-page/index.html")).unwrap();
        assert!(!first.contains("rel=\"prev\""));
        assert_eq!(first.matches("rel=\"next\"").count(), 1);
    }

    #[test]
    fn interior_page_links_both_ways() {
        let site = build_site();
        render(&site);

        let middle = fs::read_to_string(site.out.join("guide/one/index.html")).unwrap();
        assert_eq!(middle.matches("rel=\"prev\"").count(), 1);
        assert_eq!(middle.matches("rel=\"next\"").count(), 1);
        assert!(middle.contains("href=\"/guide/title-page/\""));
        assert!(middle.contains("href=\"/guide/two/\""));
    }

    #[test]
    fn last_page_gets_only_a_backward_link() {
        let site = build_site();
        render(&site);

        let last = fs::read_to_string(site.out.join("guide/two/index.html")).unwrap();
        assert_eq!(last.matches("rel=\"prev\"").count(), 1);
        assert!(!last.contains("rel=\"next\""));
    }

    #[test]
    fn urls_render_verbatim() {
        let site = build_site();
        render(&site);

        // Canonical paths keep their literal slashes everywhere they
        // appear: the redirect stub, nav anchors, and the stylesheet
        // link.
        let stub = fs::read_to_string(site.out.join("guide/index.html")).unwrap();
        assert!(stub.contains("url=/guide/title-page/"));
        assert!(!stub.contains("&#x2f;"));

        let page = fs::read_to_string(site.out.join("guide/one/index.html")).unwrap();
        assert!(page.contains("href=\"/guide/two/\""));
        assert!(page.contains("href=\"/folio.css\""));
        assert!(!page.contains("&#x2f;"));
    }

    #[test]
    fn chapter_names_are_escaped_in_page_chrome() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let out = temp.path().join("out");
        write(&src, "demo/qa.md", "# Q & A\n");

        let dirs = Dirs {
            base_dir: src.clone(),
            out_dir: out.clone(),
            base_url: "/".to_owned(),
        };
        let summary = parse_summary("# Demo\n\n- [Q & A](qa.md)\n").unwrap();
        let books =
            vec![collect::collect_book("demo", &src.join("demo"), &summary, None, &dirs).unwrap()];

        let html = HtmlConfig::default();
        HtmlRenderer::new(&books, &dirs, &html, None)
            .unwrap()
            .render()
            .unwrap();

        let page = fs::read_to_string(out.join("demo/qa/index.html")).unwrap();
        assert!(page.contains("<title>Q &amp; A - Demo</title>"));
    }

    #[test]
    fn rerender_replaces_stale_output() {
        let site = build_site();
        render(&site);

        write(&site.out, "stale/index.html", "old");
        render(&site);
        assert!(!site.out.join("stale/index.html").exists());
        assert!(site.out.join("guide/one/index.html").is_file());
    }

    #[test]
    fn sidebar_marks_current_page() {
        let site = build_site();
        render(&site);

        let page = fs::read_to_string(site.out.join("guide/one/index.html")).unwrap();
        assert_eq!(page.matches("chapter-item active").count(), 1);
    }
}
