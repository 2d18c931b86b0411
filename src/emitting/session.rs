//! The state of one report being written

use tracing::debug;

use super::registry::Registry;
use super::slug::{reduce_whitespace, slug};
use crate::config::{Position, Settings};
use crate::language::{
    anchor, heading_anchor, EmissionError, Kind, Reference, ResolutionError, ANCHOR_LINK_CLASS,
    NON_BREAKING_SPACE, PILCROW,
};
use crate::resolving::{self, Options};
use crate::templating::{self, Page, Template};

/// Everything needed to write a single report. Nothing is shared between
/// sessions, so several reports can be generated independently in the same
/// process.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    registry: Registry,
    tables: u32,
    figures: u32,
    code_blocks: u32,
    headings: u32,
    numbering: [u32; 6],
    title: Option<String>,
    body: String,
}

impl Session {
    pub fn new(settings: Settings) -> Session {
        Session {
            settings,
            registry: Registry::new(),
            tables: 0,
            figures: 0,
            code_blocks: 0,
            headings: 0,
            numbering: [0; 6],
            title: None,
            body: String::new(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The report's content so far, still carrying its placeholders.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Append raw markup.
    pub fn print(&mut self, text: &str) {
        self.body
            .push_str(text);
        if !text.ends_with('\n') {
            self.body
                .push('\n');
        }
    }

    pub fn paragraph(&mut self, text: &str) {
        self.print(&format!("<div>{}</div>", text));
    }

    /// Write a heading. The whole element goes on one line so that it can be
    /// found again when building the table of contents.
    pub fn heading(
        &mut self,
        level: u8,
        text: &str,
        reference: Option<&Reference>,
    ) -> Result<(), EmissionError> {
        if !(1..=6).contains(&level) {
            return Err(EmissionError::InvalidLevel(level));
        }
        if let Some(reference) = reference {
            self.registry
                .bind(reference)?;
        }

        let mut text = reduce_whitespace(text);
        if self
            .settings
            .numbered_headings
        {
            let number = self.next_heading_number(level);
            text = format!("{}{}{}{}", number, NON_BREAKING_SPACE, NON_BREAKING_SPACE, text);
        }

        self.headings += 1;
        let anchor = heading_anchor(reference, &slug(&text), self.headings);

        debug!("Heading {} at level {}", anchor, level);

        self.print(&format!(
            "<h{} id=\"{}\">{}<a class=\"{}\" href=\"#{}\">{}</a></h{}>",
            level, anchor, text, ANCHOR_LINK_CLASS, anchor, PILCROW, level
        ));
        Ok(())
    }

    // Counting at this level, and starting over at every level below it.
    fn next_heading_number(&mut self, level: u8) -> String {
        let depth = level as usize;
        self.numbering[depth - 1] += 1;
        for deeper in &mut self.numbering[depth..] {
            *deeper = 0;
        }

        self.numbering[..depth]
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn table(
        &mut self,
        markup: &str,
        caption: Option<&str>,
        reference: Option<&Reference>,
    ) -> Result<(), EmissionError> {
        self.fragment(Kind::Table, markup, caption, reference)
    }

    pub fn figure(
        &mut self,
        markup: &str,
        caption: Option<&str>,
        reference: Option<&Reference>,
    ) -> Result<(), EmissionError> {
        self.fragment(Kind::Figure, markup, caption, reference)
    }

    /// Write a block of source code. The code is escaped, so it is shown as
    /// written rather than interpreted as markup.
    pub fn code_block(
        &mut self,
        source: &str,
        language: Option<&str>,
        caption: Option<&str>,
        reference: Option<&Reference>,
    ) -> Result<(), EmissionError> {
        let class = match language {
            Some(language) => format!("block-highlight {}", language),
            None => "block-highlight".to_string(),
        };
        let markup = format!(
            "<pre><code class=\"{}\">{}</code></pre>",
            class,
            escape(source)
        );
        self.fragment(Kind::CodeBlock, &markup, caption, reference)
    }

    fn fragment(
        &mut self,
        kind: Kind,
        content: &str,
        caption: Option<&str>,
        reference: Option<&Reference>,
    ) -> Result<(), EmissionError> {
        // a failed bind must not use up a number
        if let Some(reference) = reference {
            self.registry
                .bind(reference)?;
        }

        let counter = match kind {
            Kind::Table => &mut self.tables,
            Kind::Figure => &mut self.figures,
            Kind::CodeBlock => &mut self.code_blocks,
        };
        *counter += 1;
        let index = *counter;

        let anchor = anchor(kind, reference, index);

        let text = match (self.settings.numbered(kind), caption) {
            (true, Some(caption)) => format!("{} {}: {}", kind.caption(), index, caption),
            (true, None) => format!("{} {}.", kind.caption(), index),
            (false, Some(caption)) => caption.to_string(),
            (false, None) => String::new(),
        };
        let caption = format!(
            "<div class=\"reportage-caption\"><a id=\"{}\"><b>{}</b></a></div>",
            anchor, text
        );

        debug!("{} {}", kind.caption(), anchor);

        let (before, after) = match self
            .settings
            .captions(kind)
        {
            Position::Top => (caption.as_str(), content),
            Position::Bottom => (content, caption.as_str()),
        };
        self.print(&format!(
            "<div class=\"{}\">\n{}\n{}\n</div>",
            kind.wrapper_class(),
            before,
            after
        ));
        Ok(())
    }

    /// Put the body into a page and resolve every placeholder in it.
    pub fn finish(self, template: &impl Template, name: &str) -> Result<String, ResolutionError> {
        let page = Page {
            name,
            title: self
                .title
                .as_deref(),
            width: self
                .settings
                .page_width,
        };
        let document = templating::fill(template, &page, &self.body)?;

        let options = Options {
            toc: self
                .settings
                .toc,
        };
        resolving::resolve(&document, &options)
    }
}

fn escape(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    for c in source.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
