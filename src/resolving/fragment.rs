//! A deliberately small markup parser, good for exactly one self-contained
//! element such as a heading tag and the inline markup inside it. It is not
//! an HTML parser: no entities are decoded, no implied end tags are
//! inserted, and anything unbalanced is rejected.

use std::fmt;

use crate::language::PILCROW;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenate the content of every text node beneath this element,
    /// descending through nested inline elements.
    pub fn text(&self) -> String {
        let mut result = String::new();
        collect_text(&self.children, &mut result);
        result
    }

    /// Text of a heading, leaving out the self-link decoration that trails
    /// it (an anchor whose entire text is a pilcrow).
    pub fn heading_text(&self) -> String {
        let children = match self
            .children
            .split_last()
        {
            Some((Node::Element(last), rest)) if is_decoration(last) => rest,
            _ => &self.children[..],
        };

        let mut result = String::new();
        collect_text(children, &mut result);
        result
    }
}

fn collect_text(nodes: &[Node], result: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => result.push_str(text),
            Node::Element(element) => collect_text(&element.children, result),
        }
    }
}

fn is_decoration(element: &Element) -> bool {
    element.name == "a"
        && element
            .text()
            .trim()
            == PILCROW
}

/// A fragment that could not be parsed. Offsets are in bytes from the start
/// of the fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedHeading {
    Expected(usize, &'static str),
    InvalidTagName(usize),
    UnexpectedEndOfInput(usize),
    MismatchedClose(usize, String),
    TooDeep(usize),
}

impl MalformedHeading {
    pub fn offset(&self) -> usize {
        match self {
            MalformedHeading::Expected(offset, _) => *offset,
            MalformedHeading::InvalidTagName(offset) => *offset,
            MalformedHeading::UnexpectedEndOfInput(offset) => *offset,
            MalformedHeading::MismatchedClose(offset, _) => *offset,
            MalformedHeading::TooDeep(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MalformedHeading::Expected(_, value) => format!("expected {}", value),
            MalformedHeading::InvalidTagName(_) => "invalid tag name".to_string(),
            MalformedHeading::UnexpectedEndOfInput(_) => "unexpected end of input".to_string(),
            MalformedHeading::MismatchedClose(_, name) => {
                format!("closing tag </{}> does not match", name)
            }
            MalformedHeading::TooDeep(_) => {
                format!("elements nested more than {} deep", MAXIMUM_DEPTH)
            }
        }
    }
}

impl fmt::Display for MalformedHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for MalformedHeading {}

// elements which never have content or a closing tag
const VOID: [&str; 5] = ["br", "hr", "img", "wbr", "input"];

/// Nesting beyond this is refused rather than recursed into.
const MAXIMUM_DEPTH: usize = 128;

/// Parse a single element from the start of the fragment. Content following
/// the element's closing tag is ignored.
pub fn parse_element(fragment: &str) -> Result<Element, MalformedHeading> {
    let mut input = Parser::new(fragment);
    input.read_element()
}

struct Parser<'i> {
    source: &'i str,
    offset: usize,
    depth: usize,
}

impl<'i> Parser<'i> {
    fn new(content: &'i str) -> Parser<'i> {
        Parser {
            source: content,
            offset: 0,
            depth: 0,
        }
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn trim_whitespace(&mut self) {
        let trimmed = self
            .source
            .trim_start();
        let width = self.source.len() - trimmed.len();
        self.advance(width);
    }

    fn expect(&mut self, literal: &'static str) -> Result<(), MalformedHeading> {
        if self.is_finished() {
            return Err(MalformedHeading::UnexpectedEndOfInput(self.offset));
        }
        if self
            .source
            .starts_with(literal)
        {
            self.advance(literal.len());
            Ok(())
        } else {
            Err(MalformedHeading::Expected(self.offset, literal))
        }
    }

    /// Take characters for as long as the predicate holds.
    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'i str {
        let source = self.source;
        let width = source
            .find(|c: char| !predicate(c))
            .unwrap_or(source.len());
        let result = &source[..width];
        self.advance(width);
        result
    }

    fn read_name(&mut self) -> Result<String, MalformedHeading> {
        let offset = self.offset;
        let name = self.take_while(|c| c.is_ascii_alphanumeric());
        if name.is_empty() {
            Err(MalformedHeading::InvalidTagName(offset))
        } else {
            Ok(name.to_ascii_lowercase())
        }
    }

    fn read_element(&mut self) -> Result<Element, MalformedHeading> {
        if self.depth >= MAXIMUM_DEPTH {
            return Err(MalformedHeading::TooDeep(self.offset));
        }
        self.expect("<")?;
        let name = self.read_name()?;
        let mut attributes = Vec::new();

        loop {
            self.trim_whitespace();
            if self.is_finished() {
                return Err(MalformedHeading::UnexpectedEndOfInput(self.offset));
            }
            if self
                .source
                .starts_with("/>")
            {
                self.advance(2);
                return Ok(Element {
                    name,
                    attributes,
                    children: Vec::new(),
                });
            }
            if self
                .source
                .starts_with('>')
            {
                self.advance(1);
                break;
            }
            attributes.push(self.read_attribute()?);
        }

        if VOID.contains(&name.as_str()) {
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        self.depth += 1;
        let children = self.read_children(&name)?;
        self.depth -= 1;

        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    fn read_attribute(&mut self) -> Result<(String, String), MalformedHeading> {
        let offset = self.offset;
        let key = self.take_while(|c| !c.is_whitespace() && !matches!(c, '=' | '>' | '/' | '"' | '\''));
        if key.is_empty() {
            return Err(MalformedHeading::Expected(offset, "attribute name"));
        }

        self.trim_whitespace();
        if !self
            .source
            .starts_with('=')
        {
            // boolean attribute
            return Ok((key.to_string(), String::new()));
        }
        self.advance(1);
        self.trim_whitespace();

        let value = if let Some(quote) = self
            .source
            .chars()
            .next()
            .filter(|c| *c == '"' || *c == '\'')
        {
            self.advance(1);
            let value = self.take_while(|c| c != quote);
            if self.is_finished() {
                return Err(MalformedHeading::UnexpectedEndOfInput(self.offset));
            }
            self.advance(1);
            value
        } else {
            self.take_while(|c| !c.is_whitespace() && c != '>')
        };

        Ok((key.to_string(), value.to_string()))
    }

    fn read_children(&mut self, name: &str) -> Result<Vec<Node>, MalformedHeading> {
        let mut children = Vec::new();

        loop {
            if self.is_finished() {
                return Err(MalformedHeading::UnexpectedEndOfInput(self.offset));
            }

            if self
                .source
                .starts_with("</")
            {
                let offset = self.offset;
                self.advance(2);
                let close = self.read_name()?;
                self.trim_whitespace();
                self.expect(">")?;
                if close != name {
                    return Err(MalformedHeading::MismatchedClose(offset, close));
                }
                return Ok(children);
            } else if self
                .source
                .starts_with("<!--")
            {
                match self
                    .source
                    .find("-->")
                {
                    Some(end) => self.advance(end + 3),
                    None => return Err(MalformedHeading::UnexpectedEndOfInput(self.offset)),
                }
            } else if self
                .source
                .starts_with('<')
            {
                let element = self.read_element()?;
                children.push(Node::Element(element));
            } else {
                let text = self.take_while(|c| c != '<');
                children.push(Node::Text(text.to_string()));
            }
        }
    }
}
