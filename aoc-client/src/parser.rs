//! HTML response classification

use crate::client::SubmissionResult;
use crate::error::AocError;
use scraper::{Html, Selector};
use std::cell::OnceCell;

/// Parser for submission responses with a cached selector.
///
/// The site wraps its verdict in an `<article>` element; the classification
/// is a plain substring match on that element's text.
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    article_selector: OnceCell<Selector>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            article_selector: OnceCell::new(),
        }
    }

    fn article_selector(&self) -> &Selector {
        self.article_selector
            .get_or_init(|| Selector::parse("article").expect("static selector is valid"))
    }

    /// Text content of the `<article>` element of an HTML document
    pub fn extract_message(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);

        let article = document
            .select(self.article_selector())
            .next()
            .ok_or(AocError::HtmlParse)?;

        Ok(article.text().collect::<String>())
    }

    /// Classify a submission response body by its message text
    pub fn classify(&self, html: &str) -> Result<SubmissionResult, AocError> {
        let message = self.extract_message(html)?;

        if message.contains("That's the right answer") {
            Ok(SubmissionResult::Correct)
        } else if message.contains("That's not the right answer") {
            Ok(SubmissionResult::Incorrect)
        } else {
            Ok(SubmissionResult::Other(message))
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
