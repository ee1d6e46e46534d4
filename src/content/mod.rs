//! Content-view registry.
//!
//! Each documentation topic is a static, parameterless constructor producing
//! prose blocks and zero or more code samples. The routing core treats every
//! page as an opaque leaf; nothing in here carries logic or state.

mod advanced;
mod core_concepts;
mod getting_started;

use crate::highlight::CodeSample;
use crate::route::ViewId;

// =============================================================================
// Page Model
// =============================================================================

/// One block of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Second-level heading.
    Heading(String),
    /// A paragraph of prose, wrapped to the content width at render time.
    Prose(String),
    /// A bulleted list.
    List(Vec<String>),
    /// A code sample destined for tokenized display.
    Code(CodeSample),
    /// An emphasized callout box.
    Callout { title: String, body: String },
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn prose(text: impl Into<String>) -> Self {
        Self::Prose(text.into())
    }

    pub fn list<const N: usize>(items: [&str; N]) -> Self {
        Self::List(items.iter().map(|s| (*s).to_string()).collect())
    }

    pub fn code(text: &str, language: &str) -> Self {
        Self::Code(CodeSample::new(text, language))
    }

    pub fn rust(text: &str) -> Self {
        Self::Code(CodeSample::rust(text))
    }

    pub fn callout(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Callout {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A rendered-once documentation page: a title plus ordered blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// All code samples on the page, in document order.
    pub fn code_samples(&self) -> Vec<&CodeSample> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Code(sample) => Some(sample),
                _ => None,
            })
            .collect()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Look up the static page for a resolved content view.
pub fn page(view: ViewId) -> Page {
    match view {
        ViewId::Introduction => getting_started::introduction(),
        ViewId::Installation => getting_started::installation(),
        ViewId::BasicUsage => getting_started::basic_usage(),
        ViewId::Requests => core_concepts::requests(),
        ViewId::Notifications => core_concepts::notifications(),
        ViewId::Behaviors => core_concepts::behaviors(),
        ViewId::NotificationBehaviors => core_concepts::notification_behaviors(),
        ViewId::AutoRegistration => advanced::auto_registration(),
    }
}

/// The landing page at `/`.
pub fn home() -> Page {
    Page::new(
        "courier",
        vec![
            Block::prose("The ultimate mediator pattern library for Rust."),
            Block::prose(
                "Decouple your application with a robust, high-performance mediator \
                 implementation. Built for modern async Rust services.",
            ),
            Block::prose("Press d to open the documentation, q to quit."),
            Block::callout(
                "High Performance",
                "Optimized for speed with minimal allocation overhead. Handles thousands \
                 of requests per second.",
            ),
            Block::callout(
                "Type Safe",
                "Leverage the full power of Rust generics and compile-time checking for \
                 your requests and handlers.",
            ),
            Block::callout(
                "Resilient",
                "Built-in support for retry policies and dead-letter queues.",
            ),
        ],
    )
}

/// The terminal fallback for unresolvable paths.
pub fn not_found(path: &str) -> Page {
    Page::new(
        "Page Not Found",
        vec![
            Block::prose(format!("Nothing lives at {path}.")),
            Block::prose("Press h for the home page or d for the documentation."),
        ],
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_VIEWS: [ViewId; 8] = [
        ViewId::Introduction,
        ViewId::Installation,
        ViewId::BasicUsage,
        ViewId::Requests,
        ViewId::Notifications,
        ViewId::Behaviors,
        ViewId::NotificationBehaviors,
        ViewId::AutoRegistration,
    ];

    #[test]
    fn test_every_view_has_a_page() {
        for view in ALL_VIEWS {
            let page = page(view);
            assert!(!page.title.is_empty(), "{view:?} needs a title");
            assert!(!page.blocks.is_empty(), "{view:?} needs content");
        }
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(page(ViewId::Introduction).title, "Introduction to courier");
        assert_eq!(page(ViewId::Requests).title, "Requests & Handlers");
        assert_eq!(page(ViewId::AutoRegistration).title, "Auto-Registration");
    }

    #[test]
    fn test_code_samples_carry_language_tags() {
        for view in ALL_VIEWS {
            for sample in page(view).code_samples() {
                assert!(
                    !sample.language.is_empty(),
                    "{view:?} has a sample without a language tag"
                );
                assert!(!sample.text.is_empty());
            }
        }
    }

    #[test]
    fn test_installation_page_has_shell_and_rust_samples() {
        let samples = page(ViewId::Installation)
            .code_samples()
            .iter()
            .map(|s| s.language.clone())
            .collect::<Vec<_>>();
        assert!(samples.contains(&"bash".to_string()));
        assert!(samples.contains(&"rust".to_string()));
    }

    #[test]
    fn test_not_found_names_the_path() {
        let page = not_found("/docs/missing");
        let Block::Prose(text) = &page.blocks[0] else {
            panic!("first block should be prose");
        };
        assert!(text.contains("/docs/missing"));
    }
}
