//! # folio-core
//!
//! The book model and navigation engine behind the folio documentation
//! generator.
//!
//! A folio workspace holds one or more books, each described by a
//! `SUMMARY.md`. This crate parses those summaries ([`summary`]),
//! flattens them into ordered, renderable [`Book`]s ([`collect`]), and
//! answers the two navigation questions the site needs ([`nav`]):
//! whether a book root redirects to a default page, and which pages sit
//! before and after a given page in reading order.
//!
//! ```
//! use folio_core::{collect, nav, summary};
//!
//! let parsed = summary::parse_summary("# Demo\n\n- [One](one.md)\n- [Two](two.md)\n").unwrap();
//! let dirs = collect::Dirs {
//!     base_dir: "/src".into(),
//!     out_dir: "/out".into(),
//!     base_url: "/".to_owned(),
//! };
//! let book = collect::collect_book("demo", "/src/demo".as_ref(), &parsed, None, &dirs).unwrap();
//!
//! assert_eq!(
//!     nav::resolve(std::slice::from_ref(&book), "/demo/"),
//!     nav::RedirectOutcome::RedirectTo("/demo/one/".to_owned()),
//! );
//! let state = nav::adjacency(&book, "one").unwrap();
//! assert_eq!(state.next.as_deref(), Some("two"));
//! ```

pub mod book;
pub mod collect;
pub mod create_missing;
pub mod error;
pub mod nav;
pub mod summary;

pub use book::{Book, Crumb, Page};
pub use collect::{Dirs, collect};
pub use create_missing::create_missing;
pub use error::{CoreError, NavError, SummaryError};
pub use nav::{NavigationState, RedirectOutcome, adjacency, resolve};
pub use summary::{Chapter, SectionNumber, Summary, SummaryItem, parse_summary};
