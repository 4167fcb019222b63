use std::fmt::{Debug, Formatter};

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) line: String,
    pub(crate) next: Link,
}

impl Node {
    pub(crate) fn new(line: String) -> Node {
        Node {
            line,
            next: None,
        }
    }
}

/// An ordered, singly linked list of raw text lines.
///
/// Every line is owned by exactly one list. Pipeline stages consume a list and produce a new one,
/// either by moving lines into a fresh list or, for the sort, by relinking the existing nodes.
///
/// Collecting from an iterator appends at the tail, so insertion order is preserved.
///
/// # Examples
/// ```
/// use song_analyzer::line_list::LineList;
///
/// let mut lines: LineList = vec!["a", "b", "c"].into_iter().map(String::from).collect();
/// lines.reverse();
/// assert_eq!(lines.iter().collect::<Vec<&str>>(), vec!["c", "b", "a"]);
/// ```
#[derive(Default)]
pub struct LineList {
    head: Link,
}

impl LineList {
    /// Create an empty list
    pub fn new() -> LineList {
        LineList {
            head: None,
        }
    }

    pub(crate) fn from_head(head: Link) -> LineList {
        LineList {
            head,
        }
    }

    pub(crate) fn into_head(mut self) -> Link {
        self.head.take()
    }

    /// Count the lines by walking the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert a line before the current first line.
    pub fn push_front(&mut self, line: String) {
        let mut node = Box::new(Node::new(line));
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Remove and return the first line.
    pub fn pop_front(&mut self) -> Option<String> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            node.line
        })
    }

    /// Get the first line.
    pub fn front(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.line.as_str())
    }

    /// Reverse the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for LineList {
    // unlink iteratively, the default recursive drop overflows the stack on long lists
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl Debug for LineList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<String> for LineList {
    fn from_iter<T: IntoIterator<Item=String>>(iter: T) -> Self {
        let mut list = LineList::new();
        let mut tail = &mut list.head;
        for line in iter {
            tail = &mut tail.insert(Box::new(Node::new(line))).next;
        }
        list
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.line.as_str()
        })
    }
}

pub struct IntoIter {
    list: LineList,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl IntoIterator for LineList {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

impl<'a> IntoIterator for &'a LineList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
