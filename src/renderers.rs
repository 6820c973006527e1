pub mod profile_renderer;

/// One display element staged for injection into the page.
///
/// Attributes keep insertion order. An element without text content
/// serializes as a void tag (`<img ...>`); one with text gets a
/// closing tag (`<p ...>text</p>`).
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, content: &str) -> Self {
        self.text = Some(content.to_string());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push('<');
        html.push_str(&self.tag);
        for (name, value) in &self.attributes {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape(value));
            html.push('"');
        }
        html.push('>');
        if let Some(text) = &self.text {
            html.push_str(&escape(text));
            html.push_str("</");
            html.push_str(&self.tag);
            html.push('>');
        }
        html
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The page regions that receive appended profile elements: the
/// document metadata section and the picture container mount point.
///
/// A surface is handed into each render step instead of looked up
/// ambiently, and is append-only.
#[derive(Debug, Default)]
pub struct RenderSurface {
    head: Vec<Element>,
    container: Vec<Element>,
}

impl RenderSurface {
    pub fn new() -> Self {
        RenderSurface::default()
    }

    pub fn append_head(&mut self, element: Element) {
        self.head.push(element);
    }

    pub fn append_container(&mut self, element: Element) {
        self.container.push(element);
    }

    pub fn head(&self) -> &[Element] {
        &self.head
    }

    pub fn container(&self) -> &[Element] {
        &self.container
    }

    pub fn head_html(&self) -> String {
        self.head
            .iter()
            .map(Element::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn container_html(&self) -> String {
        self.container
            .iter()
            .map(Element::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
