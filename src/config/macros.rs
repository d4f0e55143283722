//! Macros for ergonomic configuration construction.

/// Declare a configuration with `String` states and events.
///
/// Expands to [`ConfigBuilder`](crate::config::ConfigBuilder) calls and
/// evaluates to `Result<Config<String, String>, ConfigError>`. States are
/// declared in the order written, and each state expression is evaluated
/// exactly once.
///
/// # Example
///
/// ```
/// use retrace::fsm_config;
///
/// let config = fsm_config! {
///     initial: "hungry",
///     states: {
///         "hungry" => { "eat" => "full" },
///         "full" => {},
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.states().collect::<Vec<_>>(), vec!["hungry", "full"]);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::config::ConfigBuilder::<::std::string::String, ::std::string::String>::new()
            .initial($initial);
        $(
            let state: ::std::string::String = ::std::convert::Into::into($state);
            let builder = builder.state(state.clone());
            $(
                let builder = builder.transition(state.clone(), $event, $target);
            )*
        )*
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigError;

    #[test]
    fn fsm_config_macro_builds_config() {
        let config = fsm_config! {
            initial: "solid",
            states: {
                "solid" => { "melt" => "liquid" },
                "liquid" => { "freeze" => "solid", "boil" => "gas" },
                "gas" => { "condense" => "liquid" },
            }
        }
        .unwrap();

        assert_eq!(config.initial(), "solid");
        assert_eq!(
            config.states().collect::<Vec<_>>(),
            vec!["solid", "liquid", "gas"]
        );
        assert_eq!(
            config.target(&"liquid".to_string(), &"boil".to_string()),
            Some(&"gas".to_string())
        );
    }

    #[test]
    fn fsm_config_supports_states_without_transitions() {
        let config = fsm_config! {
            initial: "only",
            states: {
                "only" => {}
            }
        }
        .unwrap();

        assert_eq!(config.states().count(), 1);
    }

    #[test]
    fn fsm_config_reports_validation_errors() {
        let result = fsm_config! {
            initial: "start",
            states: {
                "start" => { "go" => "missing" },
            }
        };

        assert!(matches!(result, Err(ConfigError::UnknownTarget { .. })));
    }

    #[test]
    fn fsm_config_reports_duplicate_states() {
        let result = fsm_config! {
            initial: "a",
            states: {
                "a" => {},
                "a" => {},
            }
        };

        assert!(matches!(result, Err(ConfigError::DuplicateState { .. })));
    }

    #[test]
    fn fsm_config_evaluates_each_state_once() {
        let mut evaluations = 0;
        let config = fsm_config! {
            initial: "a",
            states: {
                { evaluations += 1; "a" } => { "x" => "a", "y" => "a" },
            }
        }
        .unwrap();

        assert_eq!(evaluations, 1);
        assert_eq!(config.state(&"a".to_string()).unwrap().transitions().len(), 2);
    }

    #[test]
    fn fsm_config_accepts_owned_string_states() {
        let start = String::from("start");
        let finish = String::from("finish");

        let config = fsm_config! {
            initial: start.clone(),
            states: {
                start => { "go" => finish.clone(), "stay" => "start" },
                finish => {},
            }
        }
        .unwrap();

        assert_eq!(
            config.states().collect::<Vec<_>>(),
            vec!["start", "finish"]
        );
        assert_eq!(
            config.target(&"start".to_string(), &"go".to_string()),
            Some(&"finish".to_string())
        );
    }
}
