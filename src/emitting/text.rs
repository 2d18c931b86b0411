//! Inline markup for the text of paragraphs, captions and headings

use crate::language::MarkupError;

/// An element to be written around some values. Classes and attributes are
/// written in the order they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    name: String,
    classes: Option<Vec<String>>,
    attributes: Vec<(String, Option<String>)>,
    separator: String,
    paired: bool,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Tag {
        Tag {
            name: name.into(),
            classes: None,
            attributes: Vec::new(),
            separator: String::new(),
            paired: true,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Tag {
        self.classes
            .get_or_insert_with(Vec::new)
            .push(class.into());
        self
    }

    /// Add several classes at once. Giving none at all still writes an
    /// empty `class=""`.
    pub fn classes<I, S>(mut self, classes: I) -> Tag
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes
            .get_or_insert_with(Vec::new)
            .extend(
                classes
                    .into_iter()
                    .map(Into::into),
            );
        self
    }

    /// Values are written as they are; quotes in them are not escaped.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Tag {
        self.attributes
            .push((key.into(), Some(value.into())));
        self
    }

    /// A boolean attribute, written without a value.
    pub fn flag(mut self, key: impl Into<String>) -> Tag {
        self.attributes
            .push((key.into(), None));
        self
    }

    /// Text placed between the values, and also just inside the tags.
    pub fn separator(mut self, separator: impl Into<String>) -> Tag {
        self.separator = separator.into();
        self
    }

    /// Write only the opening tag, as for `<br>`.
    pub fn unpaired(mut self) -> Tag {
        self.paired = false;
        self
    }

    fn opening(&self) -> Result<String, MarkupError> {
        let mut result = format!("<{}", self.name);

        if let Some(classes) = &self.classes {
            if self
                .attributes
                .iter()
                .any(|(key, _)| key == "class")
            {
                return Err(MarkupError {
                    element: self
                        .name
                        .clone(),
                });
            }
            result.push_str(&format!(" class=\"{}\"", classes.join(" ")));
        }

        for (key, value) in &self.attributes {
            match value {
                Some(value) => result.push_str(&format!(" {}=\"{}\"", key, value)),
                None => result.push_str(&format!(" {}", key)),
            }
        }

        result.push('>');
        Ok(result)
    }

    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String, MarkupError> {
        let opening = self.opening()?;
        if !self.paired {
            return Ok(opening);
        }

        let content = values
            .iter()
            .map(|value| value.as_ref())
            .collect::<Vec<&str>>()
            .join(&self.separator);

        Ok(format!(
            "{}{}{}{}</{}>",
            opening, self.separator, content, self.separator, self.name
        ))
    }
}

pub fn bold() -> Tag {
    Tag::new("b")
}

pub fn em() -> Tag {
    Tag::new("em")
}

pub fn div() -> Tag {
    Tag::new("div")
}

pub fn span() -> Tag {
    Tag::new("span")
}

pub fn a() -> Tag {
    Tag::new("a")
}

/// Inline source code. With a language, the element is marked for syntax
/// highlighting.
pub fn code(language: Option<&str>) -> Tag {
    let tag = Tag::new("code");
    match language {
        Some(language) => tag.classes(["inline-highlight", language]),
        None => tag,
    }
}

pub fn link(text: &str, href: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href, text)
}

/// A list, with every value wrapped in its own item element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    outer: Tag,
    item: Tag,
}

impl List {
    /// Change the list element itself, for instance to give it a class.
    pub fn outer(mut self, change: impl FnOnce(Tag) -> Tag) -> List {
        self.outer = change(self.outer);
        self
    }

    /// Change every item element.
    pub fn item(mut self, change: impl FnOnce(Tag) -> Tag) -> List {
        self.item = change(self.item);
        self
    }

    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String, MarkupError> {
        let mut items = Vec::with_capacity(values.len());
        for value in values {
            items.push(
                self.item
                    .render(&[value])?,
            );
        }
        self.outer
            .render(&[items.concat()])
    }
}

pub fn ulist() -> List {
    List {
        outer: Tag::new("ul"),
        item: Tag::new("li"),
    }
}

pub fn olist() -> List {
    List {
        outer: Tag::new("ol"),
        item: Tag::new("li"),
    }
}
