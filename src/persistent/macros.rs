//! Literal constructors for lists and streams.

/// Creates a [`List`](crate::persistent::List) containing the given elements
/// in order.
///
/// # Examples
///
/// ```
/// use stackless::list;
/// use stackless::persistent::List;
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.head(), Ok(&1));
/// assert_eq!(list.length(), 3);
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::persistent::List::empty()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::persistent::List::from_vec(vec![$($element),+])
    };
}

/// Creates a finite [`Stream`](crate::persistent::Stream) over the given
/// elements.
///
/// The elements themselves are evaluated eagerly, when the macro runs;
/// only the walk over them is deferred.
///
/// # Examples
///
/// ```
/// use stackless::{list, stream};
///
/// let stream = stream![1, 2, 3];
/// assert_eq!(stream.head_option(), Some(1));
/// assert_eq!(stream.to_list(), list![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::persistent::Stream::empty()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::persistent::Stream::from_vec(vec![$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::persistent::{List, Stream};
    use rstest::rstest;

    #[rstest]
    fn test_list_macro_empty() {
        let list: List<i32> = list![];
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_list_macro_trailing_comma() {
        assert_eq!(list![1, 2, 3,], list![1, 2, 3]);
        assert_eq!(list![1, 2, 3].to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_stream_macro() {
        let empty: Stream<i32> = stream![];
        assert!(empty.is_empty());
        assert_eq!(stream!["a", "b",].to_list(), list!["a", "b"]);
    }
}
