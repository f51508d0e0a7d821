use scraper::ElementRef;

/// Read-only view of an element in a parsed page.
///
/// Extraction only needs this much from the markup tree, so the rules work
/// against any parser that can provide it.
pub trait MarkupNode: Copy {
    /// Whether the element carries `class` among its class tokens
    fn has_class(&self, class: &str) -> bool;

    /// Element children, in document order
    fn child_elements(&self) -> Vec<Self>;

    /// Trimmed text of the first child, empty when that child is not text
    fn leading_text(&self) -> String;

    /// All descendant text concatenated
    fn text_content(&self) -> String;

    /// Value of the first attribute in source order
    fn first_attr_value(&self) -> Option<String>;
}

/// Predicate matching elements by class token
pub fn by_class<N: MarkupNode>(class: &str) -> impl Fn(&N) -> bool + '_ {
    move |node| node.has_class(class)
}

/// First node matching `pred`, searching depth-first from `root` (inclusive).
pub fn find_first<N, P>(root: N, pred: P) -> Option<N>
where
    N: MarkupNode,
    P: Fn(&N) -> bool,
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if pred(&node) {
            return Some(node);
        }
        stack.extend(node.child_elements().into_iter().rev());
    }
    None
}

/// All nodes matching `pred` in document order.
///
/// The search does not descend into a node once it has matched, so nested
/// matches are reported through their outermost ancestor only.
pub fn find_all<N, P>(root: N, pred: P) -> Vec<N>
where
    N: MarkupNode,
    P: Fn(&N) -> bool,
{
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if pred(&node) {
            found.push(node);
            continue;
        }
        stack.extend(node.child_elements().into_iter().rev());
    }
    found
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn leading_text(&self) -> String {
        self.first_child()
            .and_then(|child| child.value().as_text().map(|text| text.trim().to_string()))
            .unwrap_or_default()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn first_attr_value(&self) -> Option<String> {
        self.value().attrs().next().map(|(_, value)| value.to_string())
    }
}
