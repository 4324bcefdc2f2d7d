//! `SUMMARY.md` parsing.
//!
//! A `SUMMARY.md` file is the recipe for a book's layout:
//!
//! ```markdown
//! # Summary
//!
//! [Foreword](foreword.md)
//!
//! - [Getting Started](start.md)
//!   - [Installation](start/install.md)
//! - [Reference](reference.md)
//!
//! # Appendices
//!
//! - [Glossary](glossary.md)
//!
//! [Colophon](colophon.md)
//! ```
//!
//! The grammar has four regions, all driven by the markdown structure:
//!
//! * a required `# Title` heading;
//! * **prefix chapters**: bare links before the first list, unnumbered
//!   and never nested;
//! * **numbered chapters**: nested bullet lists, optionally split into
//!   parts by further `#` headings; section numbers continue across
//!   parts and thematic breaks;
//! * **suffix chapters**: bare links after the last list. A list after a
//!   suffix chapter is an error.
//!
//! A link with an empty destination is a draft chapter: it appears in
//! the summary tree but has no source file and is skipped when the book
//! is collected.
//!
//! Parsing works on the `markdown` crate's mdast tree rather than a
//! token stream, so the structure above maps directly onto node matches.

use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use markdown::ParseOptions;
use markdown::mdast::Node;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SummaryError;

type Result<T> = std::result::Result<T, SummaryError>;

/// Parse the text of a `SUMMARY.md` file.
pub fn parse_summary(src: &str) -> Result<Summary> {
    let tree = markdown::to_mdast(src, &ParseOptions::gfm())
        .map_err(|message| SummaryError::Markdown(message.to_string()))?;
    let children = match tree {
        Node::Root(root) => root.children,
        other => return Err(SummaryError::Markdown(format!("unexpected root: {other:?}"))),
    };
    SummaryParser::new(&children).parse()
}

/// The parsed `SUMMARY.md`, specifying how a book is laid out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The book's title, from the leading `#` heading.
    pub title: String,
    /// Chapters before the main text (forewords, introductions).
    pub prefix: Vec<Chapter>,
    /// The numbered main text, possibly nested.
    pub numbered: Vec<SummaryItem>,
    /// Chapters after the main text (conclusions, colophons).
    pub suffix: Vec<Chapter>,
}

/// A single chapter reference: a display name and an optional source
/// location. `location` is `None` for draft chapters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    pub location: Option<PathBuf>,
}

/// A numbered entry in the summary, possibly with nested entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub chapter: Chapter,
    pub number: SectionNumber,
    pub children: Vec<SummaryItem>,
}

impl SummaryItem {
    /// Visit this item and all nested items, depth-first. The closure
    /// receives references tied to `self`, so callers can collect them.
    pub fn for_each<'a>(&'a self, f: &mut impl FnMut(&'a SummaryItem)) {
        f(self);
        for child in &self.children {
            child.for_each(f);
        }
    }
}

/// A section number like `1.2.3.`: a newtype over `Vec<u32>` with a
/// dotted `Display` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNumber(pub Vec<u32>);

impl Display for SectionNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "0")
        } else {
            for part in &self.0 {
                write!(f, "{part}.")?;
            }
            Ok(())
        }
    }
}

impl Deref for SectionNumber {
    type Target = Vec<u32>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SectionNumber {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<u32> for SectionNumber {
    fn from_iter<I: IntoIterator<Item = u32>>(it: I) -> Self {
        SectionNumber(it.into_iter().collect())
    }
}

/// Walks the top-level mdast nodes of a `SUMMARY.md`.
struct SummaryParser<'a> {
    nodes: &'a [Node],
    pos: usize,
}

impl<'a> SummaryParser<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Node> {
        self.nodes.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Node> {
        let node = self.nodes.get(self.pos);
        if node.is_some() {
            self.pos += 1;
        }
        node
    }

    fn parse(mut self) -> Result<Summary> {
        let title = self.parse_title()?;
        let prefix = self.parse_affix_links()?;
        let numbered = self.parse_parts()?;
        let suffix = self.parse_affix_links()?;

        // Anything left after the suffix region is a structural error.
        if let Some(node) = self.peek() {
            if matches!(node, Node::List(_)) {
                return Err(SummaryError::SuffixFollowedByList {
                    line: line_of(node),
                });
            }
        }

        debug!(
            title,
            prefix = prefix.len(),
            numbered = numbered.len(),
            suffix = suffix.len(),
            "parsed summary"
        );

        Ok(Summary {
            title,
            prefix,
            numbered,
            suffix,
        })
    }

    fn parse_title(&mut self) -> Result<String> {
        match self.bump() {
            Some(Node::Heading(heading)) if heading.depth == 1 => {
                Ok(stringify_nodes(&heading.children))
            }
            _ => Err(SummaryError::MissingTitle),
        }
    }

    /// Parse prefix or suffix chapters: paragraphs of bare links up to
    /// the next list or heading.
    fn parse_affix_links(&mut self) -> Result<Vec<Chapter>> {
        let mut chapters = Vec::new();

        while let Some(node) = self.peek() {
            match node {
                Node::Paragraph(paragraph) => {
                    for child in &paragraph.children {
                        if let Node::Link(link) = child {
                            chapters.push(chapter_from_link(link));
                        }
                    }
                    self.bump();
                }
                // HTML comments between chapters are fine.
                Node::Html(_) => {
                    self.bump();
                }
                _ => break,
            }
        }

        Ok(chapters)
    }

    /// Parse the numbered region: lists interleaved with part headings
    /// and thematic breaks, ending at a paragraph (the suffix region)
    /// or end of input.
    fn parse_parts(&mut self) -> Result<Vec<SummaryItem>> {
        let mut items = Vec::new();
        // Root numbering continues across parts and breaks.
        let mut root_count = 0u32;

        while let Some(node) = self.peek() {
            match node {
                Node::List(list) => {
                    let parent = SectionNumber::default();
                    let mut batch = self.parse_list_items(&list.children, &parent)?;
                    renumber_roots(&mut batch, root_count);
                    root_count += batch.len() as u32;
                    items.extend(batch);
                    self.bump();
                }
                // A part title; the numbering keeps counting.
                Node::Heading(_) => {
                    self.bump();
                }
                Node::ThematicBreak(_) | Node::Html(_) => {
                    self.bump();
                }
                Node::Paragraph(_) => break,
                other => {
                    trace!(node = ?other, "skipping node in numbered region");
                    self.bump();
                }
            }
        }

        Ok(items)
    }

    fn parse_list_items(&self, nodes: &[Node], parent: &SectionNumber) -> Result<Vec<SummaryItem>> {
        let mut items: Vec<SummaryItem> = Vec::new();

        for node in nodes {
            let Node::ListItem(item) = node else {
                continue;
            };

            let mut chapter = None;
            let mut children = Vec::new();
            let mut number = parent.clone();
            number.push(items.len() as u32 + 1);

            for part in &item.children {
                match part {
                    Node::Paragraph(paragraph) => {
                        let link = paragraph.children.iter().find_map(|child| match child {
                            Node::Link(link) => Some(link),
                            _ => None,
                        });
                        match link {
                            Some(link) if chapter.is_none() => {
                                chapter = Some(chapter_from_link(link));
                            }
                            _ => {
                                return Err(SummaryError::InvalidChapterItem {
                                    line: line_of(part),
                                });
                            }
                        }
                    }
                    Node::List(list) => {
                        children = self.parse_list_items(&list.children, &number)?;
                    }
                    _ => {}
                }
            }

            let chapter = chapter.ok_or_else(|| SummaryError::InvalidChapterItem {
                line: line_of(node),
            })?;

            trace!(number = %number, name = %chapter.name, "found chapter");
            items.push(SummaryItem {
                chapter,
                number,
                children,
            });
        }

        Ok(items)
    }
}

/// Shift the root-level component of freshly parsed items so numbering
/// continues across lists separated by breaks or part headings.
fn renumber_roots(items: &mut [SummaryItem], by: u32) {
    fn shift(items: &mut [SummaryItem], by: u32) {
        for item in items {
            item.number.0[0] += by;
            shift(&mut item.children, by);
        }
    }
    shift(items, by);
}

fn chapter_from_link(link: &markdown::mdast::Link) -> Chapter {
    let name = stringify_nodes(&link.children);
    let href = link.url.replace("%20", " ");
    let location = if href.is_empty() {
        None
    } else {
        Some(PathBuf::from(href))
    };
    Chapter { name, location }
}

/// Strip styling from inline nodes, leaving plain text. Soft line
/// breaks inside a chapter name become single spaces.
fn stringify_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    collect_text(nodes, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(&text.value),
            Node::InlineCode(code) => out.push_str(&code.value),
            Node::Break(_) => out.push(' '),
            other => {
                if let Some(children) = other.children() {
                    collect_text(children, out);
                }
            }
        }
    }
}

fn line_of(node: &Node) -> usize {
    node.position().map(|p| p.start.line).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[SummaryItem]) -> Vec<String> {
        let mut out = Vec::new();
        for item in items {
            item.for_each(&mut |i| out.push(i.number.to_string()));
        }
        out
    }

    #[test]
    fn for_each_references_outlive_the_closure() {
        let src = "# S\n\n- [First](./first.md)\n  - [Nested](./nested.md)\n- [Second](./second.md)\n";
        let summary = parse_summary(src).unwrap();

        let mut chapters: Vec<&Chapter> = Vec::new();
        for item in &summary.numbered {
            item.for_each(&mut |i| chapters.push(&i.chapter));
        }

        let names: Vec<&str> = chapters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Nested", "Second"]);
    }

    #[test]
    fn section_number_has_dotted_representation() {
        let cases = vec![
            (vec![], "0"),
            (vec![0], "0."),
            (vec![1, 3], "1.3."),
            (vec![1, 2, 3], "1.2.3."),
        ];
        for (input, expected) in cases {
            assert_eq!(SectionNumber(input).to_string(), expected);
        }
    }

    #[test]
    fn parse_initial_title() {
        let summary = parse_summary("# Summary").unwrap();
        assert_eq!(summary.title, "Summary");
    }

    #[test]
    fn parse_title_with_styling() {
        let summary = parse_summary("# My **Awesome** Summary").unwrap();
        assert_eq!(summary.title, "My Awesome Summary");
    }

    #[test]
    fn missing_title_is_an_error() {
        let err = parse_summary("- [First](./first.md)\n").unwrap_err();
        assert_eq!(err, SummaryError::MissingTitle);
    }

    #[test]
    fn parse_prefix_chapters() {
        let summary = parse_summary("# S\n\n[First](./first.md)\n[Second](./second.md)\n").unwrap();
        assert_eq!(
            summary.prefix,
            vec![
                Chapter {
                    name: "First".to_owned(),
                    location: Some(PathBuf::from("./first.md")),
                },
                Chapter {
                    name: "Second".to_owned(),
                    location: Some(PathBuf::from("./second.md")),
                },
            ]
        );
        assert!(summary.numbered.is_empty());
    }

    #[test]
    fn parse_numbered_chapter() {
        let summary = parse_summary("# S\n\n- [First](./first.md)\n").unwrap();
        assert_eq!(summary.numbered.len(), 1);
        let item = &summary.numbered[0];
        assert_eq!(item.chapter.name, "First");
        assert_eq!(item.number, SectionNumber(vec![1]));
        assert!(item.children.is_empty());
    }

    #[test]
    fn parse_nested_numbered_chapters() {
        let src = "# S\n\n- [First](./first.md)\n  - [Nested](./nested.md)\n- [Second](./second.md)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(summary.numbered.len(), 2);
        assert_eq!(summary.numbered[0].children.len(), 1);
        assert_eq!(
            summary.numbered[0].children[0].number,
            SectionNumber(vec![1, 1])
        );
        assert_eq!(summary.numbered[1].number, SectionNumber(vec![2]));
    }

    #[test]
    fn keep_numbering_after_separator() {
        let src = "# S\n\n- [First](./first.md)\n\n---\n\n- [Second](./second.md)\n\n---\n\n- [Third](./third.md)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(numbers(&summary.numbered), vec!["1.", "2.", "3."]);
    }

    #[test]
    fn keep_numbering_across_parts() {
        let src = "# S\n\n- [First](./first.md)\n- [Second](./second.md)\n\n# Part Two\n\n- [Third](./third.md)\n  - [Fourth](./fourth.md)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(numbers(&summary.numbered), vec!["1.", "2.", "3.", "3.1."]);
    }

    #[test]
    fn numbered_chapters_separated_by_comment() {
        let src = "# S\n\n- [First](./first.md)\n\n<!-- a comment -->\n\n- [Second](./second.md)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(numbers(&summary.numbered), vec!["1.", "2."]);
    }

    #[test]
    fn empty_link_location_is_a_draft_chapter() {
        let summary = parse_summary("# S\n\n- [Empty]()\n").unwrap();
        assert_eq!(summary.numbered[0].chapter.location, None);
        assert_eq!(summary.numbered[0].chapter.name, "Empty");
    }

    #[test]
    fn multi_line_chapter_names_get_spaces() {
        let summary = parse_summary("# S\n\n- [Chapter\ntitle](./chapter.md)\n").unwrap();
        assert_eq!(summary.numbered[0].chapter.name, "Chapter title");
    }

    #[test]
    fn allow_space_in_link_destination() {
        let src = "# S\n\n- [test1](./test%20link1.md)\n- [test2](<./test link2.md>)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(
            summary.numbered[0].chapter.location,
            Some(PathBuf::from("./test link1.md"))
        );
        assert_eq!(
            summary.numbered[1].chapter.location,
            Some(PathBuf::from("./test link2.md"))
        );
    }

    #[test]
    fn suffix_chapters_after_numbered() {
        let src = "# S\n\n- [Main](./main.md)\n\n[Colophon](./colophon.md)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(summary.suffix.len(), 1);
        assert_eq!(summary.suffix[0].name, "Colophon");
    }

    #[test]
    fn suffix_chapters_cannot_be_followed_by_a_list() {
        let src = "# S\n\n- [Main](./main.md)\n\n[After](./after.md)\n\n- [Again](./again.md)\n";
        let err = parse_summary(src).unwrap_err();
        assert!(matches!(err, SummaryError::SuffixFollowedByList { .. }));
    }

    #[test]
    fn subheading_between_nested_items() {
        let src = "# S\n\n- [First](./first.md)\n\n## Subheading\n\n- [Second](./second.md)\n";
        let summary = parse_summary(src).unwrap();
        assert_eq!(numbers(&summary.numbered), vec!["1.", "2."]);
    }
}
