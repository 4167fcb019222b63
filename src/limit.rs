use crate::line_list::LineList;
use crate::order::Order;

/// Keep at most `count` lines from one end of an ascending sorted list.
///
/// * [Order::Asc] keeps the first `count` lines in their existing order.
/// * [Order::Desc] skips `length - count` lines, keeps the rest and reverses them, so the
///   largest keys come first.
///
/// A missing `count` keeps every line. A `count` of 0 or less keeps none, a `count` at or above
/// the length keeps all of them.
///
/// # Examples
/// ```
/// use song_analyzer::limit::limit;
/// use song_analyzer::line_list::LineList;
/// use song_analyzer::order::Order;
///
/// let lines: LineList = vec!["1", "2", "3"].into_iter().map(String::from).collect();
/// let top = limit(lines, &Order::Desc, Some(2));
/// assert_eq!(top.iter().collect::<Vec<&str>>(), vec!["3", "2"]);
/// ```
pub fn limit(lines: LineList, order: &Order, count: Option<i64>) -> LineList {
    let length = lines.len();
    let count = count.unwrap_or(length as i64);
    let limited = match order {
        Order::Asc => {
            let take = usize::try_from(count).unwrap_or(0);
            lines.into_iter().take(take).collect()
        }
        Order::Desc => {
            let skip = (length as i64).saturating_sub(count).max(0);
            let skip = usize::try_from(skip).unwrap_or(usize::MAX);
            let mut tail: LineList = lines.into_iter().skip(skip).collect();
            tail.reverse();
            tail
        }
    };
    log::info!("Limit {} {} kept {} of {} lines", order, count, limited.len(), length);
    limited
}
