//! Internal tunables, read once from the environment and cached.
//!
//! Adapted from the `env_param` crate's `EnvParam<T>` (an unpublished internal
//! crate, not depended on here): a lazily-initialized value that reads from an
//! environment variable on first access and falls back to a default.

use once_cell::sync::OnceCell;
use std::str::FromStr;

pub struct EnvParam<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
}

impl<T> EnvParam<T> {
    pub const fn new(env: &'static str, default: &'static str) -> Self {
        EnvParam {
            value: OnceCell::new(),
            env,
            default,
        }
    }
}

impl<T: FromStr> EnvParam<T> {
    fn read_default(&self) -> T {
        T::from_str(self.default).unwrap_or_else(|_| {
            panic!(
                "[env_param] invalid default value \"{}\" for environment variable \"{}\"",
                self.default, self.env
            )
        })
    }

    /// Returns the value: from the environment variable `self.env` if set and
    /// parseable, otherwise the default. Cached after the first call.
    pub fn get(&self) -> &T
    where
        T: Copy,
    {
        self.get_ref()
    }

    pub fn get_ref(&self) -> &T {
        let read = || match std::env::var(self.env) {
            Ok(raw) => match T::from_str(&raw) {
                Ok(value) => value,
                Err(_) => {
                    eprintln!(
                        "[env_param] WARNING: could not parse \"{}\" for environment variable \"{}\". Using default: \"{}\"",
                        raw, self.env, self.default
                    );
                    self.read_default()
                }
            },
            Err(_) => self.read_default(),
        };
        self.value.get_or_init(read)
    }
}

/// Trace-length cap for the reference `BoundedEngine` (see [`crate::engine::bounded`]).
pub static MAX_HORIZON: EnvParam<usize> = EnvParam::new("LTLFP_MAX_HORIZON", "6");

/// Safety cap on the number of ground argument tuples the mutex axioms and
/// the plan extractor will enumerate for a single action, before treating the
/// domain as misconfigured rather than hanging.
pub static MAX_GROUNDINGS: EnvParam<usize> = EnvParam::new("LTLFP_MAX_GROUNDINGS", "100000");
