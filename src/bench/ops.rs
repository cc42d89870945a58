//! Combining operations the benchmark reduces with.

use std::fmt;
use std::str::FromStr;

use super::config::ConfigError;

/// Cheap, associative and commutative: wrapping integer addition.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Expensive per-element operation.
///
/// Not associative, so the different policies are not expected to agree on
/// the result; it only exists to shift the cost from memory to compute.
#[inline]
pub fn heavy(a: i32, b: i32) -> i32 {
    let mut temp = 0i32;
    for i in 0..5 {
        temp = temp.wrapping_add(a.wrapping_mul(i).wrapping_add(b) % 1_000_000);
    }

    a.wrapping_add(b).wrapping_add(temp)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Light,
    Heavy,
}

impl Operation {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Light => "Normal reduce",
            Self::Heavy => "Reduce with heavy binary operation",
        }
    }

    pub fn combine(&self) -> fn(i32, i32) -> i32 {
        match self {
            Self::Light => add,
            Self::Heavy => heavy,
        }
    }

    /// Whether all policies must produce the same value.
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Heavy => f.write_str("heavy"),
        }
    }
}

impl FromStr for Operation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "add" => Ok(Self::Light),
            "heavy" => Ok(Self::Heavy),
            _ => Err(ConfigError::UnknownOperation(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn heavy_matches_hand_computation() {
        // temp = (0 + 2) + (1 + 2) + (2 + 2) + (3 + 2) + (4 + 2) = 20
        assert_eq!(heavy(1, 2), 1 + 2 + 20);
        assert_eq!(heavy(0, 0), 0);
    }

    #[test]
    fn heavy_never_overflows() {
        heavy(i32::MAX, i32::MAX);
        heavy(i32::MIN, i32::MIN);
        heavy(i32::MIN, -1);
    }

    #[test]
    fn parse_operations() {
        assert_eq!("light".parse::<Operation>().unwrap(), Operation::Light);
        assert_eq!(" Heavy ".parse::<Operation>().unwrap(), Operation::Heavy);
        assert!("medium".parse::<Operation>().is_err());
    }
}
