use crate::key::Key;
use crate::line_list::{LineList, Link, Node};

/// Sort lines ascending by `key` with a merge sort over the linked nodes.
///
/// The sort is stable, lines with equal keys keep their relative order. Nodes are relinked,
/// never copied. An unsupported key gives every line the key 0 and leaves the order unchanged.
///
/// # Examples
/// ```
/// use song_analyzer::key::Key;
/// use song_analyzer::line_list::LineList;
/// use song_analyzer::sort::sort;
///
/// let lines: LineList = vec![
///     "C,Artist1,1,2021,7,3,150,2000,60",
///     "A,Artist1,1,2021,5,1,100,1000,50",
/// ]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let sorted = sort(lines, &Key::Streams, ',');
/// assert_eq!(sorted.front(), Some("A,Artist1,1,2021,5,1,100,1000,50"));
/// ```
pub fn sort(lines: LineList, key: &Key, field_separator: char) -> LineList {
    if !key.is_supported() {
        log::warn!("Unsupported sort key: {}, the order is left unchanged", key);
    }

    let sorted = LineList::from_head(merge_sort(lines.into_head(), key, field_separator));
    log::info!("Sorted {} lines by {}", sorted.len(), key);
    sorted
}

/// Check that adjacent lines are in ascending `key` order.
pub fn is_sorted(lines: &LineList, key: &Key, field_separator: char) -> bool {
    let mut previous: Option<i64> = None;
    for line in lines {
        let current = key.line_value(line, field_separator);
        match previous {
            Some(previous_value) if previous_value > current => return false,
            _ => previous = Some(current),
        }
    }
    true
}

fn merge_sort(head: Link, key: &Key, field_separator: char) -> Link {
    match head {
        None => None,
        Some(node) if node.next.is_none() => Some(node),
        Some(mut node) => {
            let right = split(&mut node);
            let left = merge_sort(Some(node), key, field_separator);
            let right = merge_sort(right, key, field_separator);
            merge(left, right, key, field_separator)
        }
    }
}

// Detach the second half of the list starting at `head` and return it. The first half keeps
// ceil(n / 2) nodes.
fn split(head: &mut Box<Node>) -> Link {
    // fast moves two nodes for each node slow moves
    let mut steps = 0;
    let mut fast = head.next.as_deref();
    while let Some(second) = fast.and_then(|node| node.next.as_deref()) {
        steps += 1;
        fast = second.next.as_deref();
    }

    let mut slow = head;
    for _ in 0..steps {
        slow = match slow.next {
            Some(ref mut next) => next,
            None => break,
        };
    }
    slow.next.take()
}

// Merge two sorted lists. Ties take from the left to keep the sort stable.
fn merge(mut left: Link, mut right: Link, key: &Key, field_separator: char) -> Link {
    let mut head: Link = None;
    let mut tail = &mut head;
    loop {
        let take_left = match (left.as_deref(), right.as_deref()) {
            (Some(l), Some(r)) => {
                key.line_value(&l.line, field_separator) <= key.line_value(&r.line, field_separator)
            }
            _ => break,
        };

        let source = if take_left { &mut left } else { &mut right };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = if left.is_some() { left } else { right };
    head
}
