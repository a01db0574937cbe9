use crate::MappingFailure;

/// Maps every element through a total function, preserving order and length.
///
/// `f` is called once per element, in ascending index order.
///
/// # Example
///
/// ```
/// use mapseq_transform::map_fn;
///
/// let words = ["WORD"; 3];
/// let rows = map_fn(&words, |word| word.to_lowercase());
/// assert_eq!(rows, vec!["word", "word", "word"]);
/// ```
pub fn map_fn<I, O, F>(inputs: &[I], f: F) -> Vec<O>
where
    F: FnMut(&I) -> O,
{
    inputs.iter().map(f).collect()
}

/// Maps every element through a fallible function, stopping at the first failure.
///
/// `f` is called in ascending index order and never for elements after the
/// first failure.
///
/// # Errors
///
/// Returns a [`MappingFailure`] carrying the index of the first element for
/// which `f` failed, together with its error.
///
/// # Example
///
/// ```
/// use mapseq_transform::try_map_fn;
///
/// let parsed = try_map_fn(&["1", "2", "3"], |s| s.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let failure = try_map_fn(&["1", "x", "3"], |s| s.parse::<i32>()).unwrap_err();
/// assert_eq!(failure.index, 1);
/// ```
pub fn try_map_fn<I, O, E, F>(inputs: &[I], mut f: F) -> Result<Vec<O>, MappingFailure<E>>
where
    F: FnMut(&I) -> Result<O, E>,
{
    let mut outputs = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        let output = f(input).map_err(|source| MappingFailure { index, source })?;
        outputs.push(output);
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::ParseIntError;

    #[test]
    fn empty_input_gives_empty_output() {
        let inputs: [&str; 0] = [];
        assert!(map_fn(&inputs, |s| s.len()).is_empty());
        assert_eq!(try_map_fn(&inputs, |s| s.parse::<i32>()), Ok(vec![]));
    }

    #[test]
    fn single_element() {
        assert_eq!(map_fn(&[21], |x| x * 2), vec![42]);
    }

    #[test]
    fn calls_in_index_order_once_each() {
        let mut calls = Vec::new();
        let out = map_fn(&['a', 'b', 'c'], |c| {
            calls.push(*c);
            c.to_ascii_uppercase()
        });

        assert_eq!(out, vec!['A', 'B', 'C']);
        assert_eq!(calls, vec!['a', 'b', 'c']);
    }

    #[test]
    fn stops_at_first_failure() {
        let mut calls = Vec::new();
        let result: Result<Vec<i32>, MappingFailure<ParseIntError>> =
            try_map_fn(&["1", "x", "y", "4"], |s| {
                calls.push(*s);
                s.parse()
            });

        let failure = result.unwrap_err();
        assert_eq!(failure.index, 1);
        assert_eq!(failure.to_string(), "mapping failed at index 1");
        assert_eq!(calls, vec!["1", "x"]);
    }

    #[test]
    fn leaves_input_untouched() {
        let inputs = vec![String::from("a"), String::from("b")];
        let lengths = map_fn(&inputs, String::len);

        assert_eq!(lengths, vec![1, 1]);
        assert_eq!(inputs, vec!["a", "b"]);
    }
}
