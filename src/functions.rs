//! A string-keyed registry of unary functions.

use crate::error::{Error, Result};
use std::collections::HashMap;

pub struct FunctionMap<T, R> {
    functions: HashMap<String, Box<dyn Fn(T) -> R>>,
}

impl<T, R> FunctionMap<T, R> {
    pub fn new() -> Self {
        FunctionMap {
            functions: HashMap::new(),
        }
    }

    /// Registers `function` under `name`, replacing any function already registered there.
    pub fn add_function<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(T) -> R + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    pub fn get_function(&self, name: &str) -> Result<&dyn Fn(T) -> R> {
        self.functions
            .get(name)
            .map(|f| &**f)
            .ok_or_else(|| Error::FunctionNotFound(name.to_string()))
    }

    pub fn apply(&self, name: &str, arg: T) -> Result<R> {
        self.get_function(name).map(|f| f(arg))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<T, R> Default for FunctionMap<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a map with `abs`, `sgn`, `increment`, `decrement` and `square`. Arithmetic wraps on
/// overflow.
pub fn int_function_map() -> FunctionMap<i32, i32> {
    let mut map = FunctionMap::new();
    map.add_function("abs", |x: i32| x.wrapping_abs());
    map.add_function("sgn", |x: i32| x.signum());
    map.add_function("increment", |x: i32| x.wrapping_add(1));
    map.add_function("decrement", |x: i32| x.wrapping_sub(1));
    map.add_function("square", |x: i32| x.wrapping_mul(x));
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_all_int_functions() {
        let map = int_function_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map.names(), ["abs", "decrement", "increment", "sgn", "square"]);
    }

    #[test]
    fn abs() {
        let map = int_function_map();
        let abs = map.get_function("abs").unwrap();
        assert_eq!(abs(-192), 192);
        assert_eq!(abs(0), 0);
        assert_eq!(abs(7), 7);
        assert_eq!(abs(i32::MIN), i32::MIN);
    }

    #[test]
    fn sgn() {
        let map = int_function_map();
        assert_eq!(map.apply("sgn", -48).unwrap(), -1);
        assert_eq!(map.apply("sgn", 0).unwrap(), 0);
        assert_eq!(map.apply("sgn", 123).unwrap(), 1);
    }

    #[test]
    fn increment_and_decrement() {
        let map = int_function_map();
        assert_eq!(map.apply("increment", 399).unwrap(), 400);
        assert_eq!(map.apply("decrement", 800).unwrap(), 799);
        assert_eq!(map.apply("increment", i32::MAX).unwrap(), i32::MIN);
        assert_eq!(map.apply("decrement", i32::MIN).unwrap(), i32::MAX);
    }

    #[test]
    fn square() {
        let map = int_function_map();
        assert_eq!(map.apply("square", -12).unwrap(), 144);
        assert_eq!(map.apply("square", 0).unwrap(), 0);
    }

    #[test]
    fn unknown_function() {
        let map = int_function_map();
        assert!(!map.contains("sqrt"));
        match map.get_function("sqrt") {
            Err(Error::FunctionNotFound(name)) => assert_eq!(name, "sqrt"),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("sqrt should not be registered"),
        }
    }

    #[test]
    fn add_function_replaces() {
        let mut map = FunctionMap::new();
        assert!(map.is_empty());
        map.add_function("twice", |x: u8| x * 2);
        map.add_function("twice", |x: u8| x + x + 1);
        assert_eq!(map.len(), 1);
        assert_eq!(map.apply("twice", 3).unwrap(), 7);
    }
}
