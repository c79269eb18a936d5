//! Macros for ergonomic state table construction.

/// Build a [`StateTable`](crate::core::StateTable) from a literal listing.
///
/// States keep the order they are written in. A state with no outgoing
/// transitions is written with an empty body.
///
/// # Example
///
/// ```
/// use retrace::state_table;
///
/// let table = state_table! {
///     "locked" => { "coin" => "unlocked", "push" => "locked" },
///     "unlocked" => { "push" => "locked" },
///     "broken" => {},
/// };
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("locked").unwrap().transitions.target("coin").unwrap(), "unlocked");
/// assert!(table.get("broken").unwrap().transitions.is_empty());
/// ```
#[macro_export]
macro_rules! state_table {
    (
        $(
            $state:expr => {
                $( $event:expr => $target:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::StateTable::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::core::TransitionTable::new();
            $( transitions.insert($event, $target); )*
            table.insert($state, $crate::core::StateDefinition::new(transitions));
        )*
        table
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    #[test]
    fn state_table_macro_keeps_order() {
        let table = state_table! {
            "c" => { "next" => "a" },
            "a" => { "next" => "b" },
            "b" => {},
        };

        let names: Vec<&str> = table.ids().map(StateId::as_str).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn state_table_macro_records_transitions() {
        let table = state_table! {
            "idle" => { "start" => "running", "stop" => "idle" },
            "running" => { "stop" => "idle" }
        };

        let idle = &table.get("idle").unwrap().transitions;
        assert_eq!(idle.len(), 2);
        assert_eq!(idle.target("start").unwrap(), "running");
        assert_eq!(idle.target("stop").unwrap(), "idle");
    }

    #[test]
    fn state_table_macro_accepts_empty_input() {
        let table = state_table! {};

        assert!(table.is_empty());
    }

    #[test]
    fn state_table_macro_accepts_owned_names() {
        let source = String::from("start");
        let target = StateId::new("finish");
        let table = state_table! {
            source => { "go" => target },
        };

        assert!(table.contains("start"));
        assert_eq!(table.get("start").unwrap().transitions.target("go").unwrap(), "finish");
    }
}
