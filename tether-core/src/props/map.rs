//! The prop bag passed between parent, bindings and wrapped component.

use indexmap::IndexMap;
use serde_json::Value;

use super::prop::{Callback, Prop};
use crate::store::Dispatch;

/// An ordered set of named props.
///
/// Keys keep the position of their first insertion. Overwriting an existing
/// key changes its value in place, which gives [`spread`](Self::spread) the
/// same shape as an object spread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(IndexMap<String, Prop>);

impl Props {
    /// An empty prop set.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Prop>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a prop. Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Prop>) -> Option<Prop> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a prop.
    pub fn get(&self, key: &str) -> Option<&Prop> {
        self.0.get(key)
    }

    /// Look up a data prop.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(Prop::as_value)
    }

    /// Look up a string data prop.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Prop::as_str)
    }

    /// Look up a callback prop.
    pub fn callback(&self, key: &str) -> Option<&Callback> {
        self.get(key).and_then(Prop::as_callback)
    }

    /// The `dispatch` prop installed by the default dispatch mapping.
    pub fn dispatch(&self) -> Option<&Dispatch> {
        self.get(DISPATCH_KEY).and_then(Prop::as_dispatch)
    }

    /// Whether a prop named `key` exists.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no props.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate props in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.0.iter().map(|(key, prop)| (key.as_str(), prop))
    }

    /// Copy every prop of `other` into `self`, overriding on collision.
    pub fn spread(&mut self, other: &Props) {
        for (key, prop) in &other.0 {
            self.0.insert(key.clone(), prop.clone());
        }
    }

    /// `{ ...own, ...state, ...dispatch }`.
    pub fn shallow_union(own: &Props, state: &Props, dispatch: &Props) -> Props {
        let mut merged = own.clone();
        merged.spread(state);
        merged.spread(dispatch);
        merged
    }

    /// Build props from a JSON object. Returns `None` for any other JSON.
    pub fn from_json(value: Value) -> Option<Props> {
        match value {
            Value::Object(map) => Some(Self(
                map.into_iter()
                    .map(|(key, value)| (key, Prop::Value(value)))
                    .collect(),
            )),
            _ => None,
        }
    }

    /// The data props as a JSON object. Capabilities are left out.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .filter_map(|(key, prop)| prop.as_value().map(|v| (key.clone(), v.clone())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Prop>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Key of the prop installed by the default dispatch mapping.
pub const DISPATCH_KEY: &str = "dispatch";

/// Default shape of dispatch-derived props: a single `dispatch` capability.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchProp {
    /// Forwards actions to the store.
    pub dispatch: Dispatch,
}

impl From<DispatchProp> for Props {
    fn from(prop: DispatchProp) -> Self {
        Props::new().with(DISPATCH_KEY, prop.dispatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shallow_union_later_sources_win() {
        let own = Props::new().with("message", "own").with("id", 1);
        let state = Props::new().with("message", "state").with("count", 2);
        let dispatch = Props::new().with("count", "dispatch");

        let merged = Props::shallow_union(&own, &state, &dispatch);

        assert_eq!(merged.str("message"), Some("state"));
        assert_eq!(merged.str("count"), Some("dispatch"));
        assert_eq!(merged.value("id"), Some(&json!(1)));
        // Keys keep their first-seen position.
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["message", "id", "count"]);
    }

    #[test]
    fn json_round_trip_skips_capabilities() {
        let props = Props::from_json(json!({ "message": "m", "n": 3 }))
            .unwrap()
            .with("dispatch", Dispatch::new(|action| action));

        assert!(props.dispatch().is_some());
        assert_eq!(props.to_json(), json!({ "message": "m", "n": 3 }));
        assert!(Props::from_json(json!([1, 2])).is_none());
    }

    #[test]
    fn dispatch_prop_converts_to_single_key() {
        let dispatch = Dispatch::new(|action| action);
        let props: Props = DispatchProp {
            dispatch: dispatch.clone(),
        }
        .into();

        assert_eq!(props.len(), 1);
        assert_eq!(props.dispatch(), Some(&dispatch));
    }
}
