//! Machine configuration: the initial state and the transition table.
//!
//! A [`Config`] is built once, validated, and then shared read-only by any
//! number of [`Fsm`](crate::core::Fsm) instances. It can be assembled in code
//! with [`ConfigBuilder`] or the [`fsm_config!`](crate::fsm_config) macro,
//! or loaded from JSON:
//!
//! ```json
//! {
//!   "initial": "hungry",
//!   "states": {
//!     "hungry": { "transitions": { "eat": "full" } },
//!     "full": { "transitions": {} }
//!   }
//! }
//! ```

pub mod builder;
pub mod error;
pub mod macros;
pub mod options;
pub mod table;

pub use builder::ConfigBuilder;
pub use error::ConfigError;
pub use options::{Options, ResetPolicy};
pub use table::Table;

use crate::core::Identifier;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Outgoing transitions of a single state, keyed by event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, E: Serialize",
    deserialize = "S: Deserialize<'de> + Identifier, E: Deserialize<'de> + Identifier"
))]
pub struct StateConfig<S, E> {
    #[serde(default)]
    transitions: Table<E, S>,
}

impl<S, E> Default for StateConfig<S, E> {
    fn default() -> Self {
        Self {
            transitions: Table::default(),
        }
    }
}

impl<S: Identifier, E: Identifier> StateConfig<S, E> {
    /// The full event → destination table.
    pub fn transitions(&self) -> &Table<E, S> {
        &self.transitions
    }

    /// Events declared on this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.transitions.keys()
    }

    /// Destination for `event`, if this state declares it.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions.get(event)
    }

    /// Whether this state declares `event`.
    pub fn has_event(&self, event: &E) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable description of a state machine.
///
/// # Example
///
/// ```rust
/// use retrace::config::Config;
///
/// let config: Config = Config::from_json(
///     r#"{
///         "initial": "hungry",
///         "states": {
///             "hungry": { "transitions": { "eat": "full" } },
///             "full": {}
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial(), "hungry");
/// assert_eq!(config.states().collect::<Vec<_>>(), vec!["hungry", "full"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, E: Serialize",
    deserialize = "S: Deserialize<'de> + Identifier, E: Deserialize<'de> + Identifier"
))]
pub struct Config<S = String, E = String> {
    initial: S,
    states: Table<S, StateConfig<S, E>>,
}

impl<S: Identifier, E: Identifier> Config<S, E> {
    /// Start a fluent builder.
    pub fn builder() -> ConfigBuilder<S, E> {
        ConfigBuilder::new()
    }

    /// The state a new machine starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    /// Declared states together with their transition tables.
    pub fn entries(&self) -> impl Iterator<Item = (&S, &StateConfig<S, E>)> {
        self.states.iter()
    }

    /// Transition table of `state`, if declared.
    pub fn state(&self, state: &S) -> Option<&StateConfig<S, E>> {
        self.states.get(state)
    }

    /// Whether `state` is declared.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of `event` when taken from `state`.
    pub fn target(&self, state: &S, event: &E) -> Option<&S> {
        self.states.get(state).and_then(|config| config.target(event))
    }

    /// Check that the initial state and every transition target are declared.
    ///
    /// A configuration that passes keeps every reachable state inside the
    /// state table, which is what lets `Fsm` hold its invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.states.contains_key(&self.initial) {
            return Err(ConfigError::UnknownInitialState {
                initial: format!("{:?}", self.initial),
            });
        }

        for (state, config) in self.states.iter() {
            for (event, target) in config.transitions.iter() {
                if !self.states.contains_key(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: format!("{state:?}"),
                        event: format!("{event:?}"),
                        target: format!("{target:?}"),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<S, E> Config<S, E>
where
    S: Identifier + Serialize + DeserializeOwned,
    E: Identifier + Serialize + DeserializeOwned,
{
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to the JSON shape accepted by `from_json`.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HUNGRY_CAT: &str = r#"{
        "initial": "hungry",
        "states": {
            "hungry": { "transitions": { "eat": "full", "sleep": "sleeping" } },
            "full": { "transitions": { "play": "hungry" } },
            "sleeping": { "transitions": { "wake": "hungry" } }
        }
    }"#;

    #[test]
    fn from_json_preserves_state_order() {
        let config: Config = Config::from_json(HUNGRY_CAT).unwrap();

        assert_eq!(config.initial(), "hungry");
        assert_eq!(
            config.states().collect::<Vec<_>>(),
            vec!["hungry", "full", "sleeping"]
        );
    }

    #[test]
    fn from_json_preserves_event_order() {
        let config: Config = Config::from_json(HUNGRY_CAT).unwrap();
        let hungry = config.state(&"hungry".to_string()).unwrap();

        assert_eq!(hungry.events().collect::<Vec<_>>(), vec!["eat", "sleep"]);
    }

    #[test]
    fn missing_transitions_means_empty_table() {
        let config: Config =
            Config::from_json(r#"{"initial": "only", "states": {"only": {}}}"#).unwrap();

        let only = config.state(&"only".to_string()).unwrap();
        assert!(only.transitions().is_empty());
    }

    #[test]
    fn target_looks_up_destination() {
        let config: Config = Config::from_json(HUNGRY_CAT).unwrap();

        assert_eq!(
            config.target(&"hungry".to_string(), &"eat".to_string()),
            Some(&"full".to_string())
        );
        assert_eq!(config.target(&"full".to_string(), &"eat".to_string()), None);
        assert_eq!(config.target(&"ghost".to_string(), &"eat".to_string()), None);
    }

    #[test]
    fn unknown_initial_state_is_rejected() {
        let result: Result<Config, _> =
            Config::from_json(r#"{"initial": "nowhere", "states": {"a": {}}}"#);

        assert!(matches!(
            result,
            Err(ConfigError::UnknownInitialState { .. })
        ));
    }

    #[test]
    fn dangling_target_is_rejected() {
        let result: Result<Config, _> = Config::from_json(
            r#"{"initial": "a", "states": {"a": {"transitions": {"go": "b"}}}}"#,
        );

        match result {
            Err(ConfigError::UnknownTarget { target, .. }) => assert_eq!(target, "\"b\""),
            other => panic!("Expected UnknownTarget, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        let result: Result<Config, _> = Config::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn duplicate_states_in_json_are_rejected() {
        let result: Result<Config, _> =
            Config::from_json(r#"{"initial": "a", "states": {"a": {}, "a": {}}}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn json_roundtrip_keeps_order() {
        let config: Config = Config::from_json(HUNGRY_CAT).unwrap();
        let json = config.to_json().unwrap();
        let reloaded: Config = Config::from_json(&json).unwrap();

        assert_eq!(config, reloaded);
        assert_eq!(
            reloaded.states().collect::<Vec<_>>(),
            vec!["hungry", "full", "sleeping"]
        );
    }
}
