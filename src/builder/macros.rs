//! Macros for declaring transition tables.

/// Declare a [`TransitionTable`](crate::TransitionTable) from state names.
///
/// Expands to a `Result<TransitionTable, BuildError>`; names and
/// declarations are validated exactly as by
/// [`TransitionTable::from_names`](crate::TransitionTable::from_names).
///
/// # Example
///
/// ```
/// use transit::{transition_table, State};
///
/// let table = transition_table! {
///     "green" => ["yellow"],
///     "yellow" => ["red"],
///     "red" => ["green"],
/// }
/// .unwrap();
///
/// assert!(table.contains(&State::new("red").unwrap(), &State::new("green").unwrap()));
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $source:expr => [$($destination:expr),* $(,)?]
        ),* $(,)?
    ) => {{
        let edges: ::std::vec::Vec<(&str, ::std::vec::Vec<&str>)> = ::std::vec![
            $(($source, ::std::vec![$($destination),*])),*
        ];
        $crate::TransitionTable::from_names(edges)
    }};
}
