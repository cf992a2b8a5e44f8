use std::str::FromStr;

use crate::error::DictError;

/// Something the build knows how to produce from the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Dsl,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Dsl => "dsl",
        }
    }
}

impl FromStr for Target {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dsl" => Ok(Target::Dsl),
            other => Err(DictError::UnsupportedTarget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_target() {
        assert_eq!("dsl".parse::<Target>().unwrap(), Target::Dsl);
        assert_eq!(Target::Dsl.name(), "dsl");
    }

    #[test]
    fn unknown_target_is_unsupported() {
        match "epub".parse::<Target>() {
            Err(DictError::UnsupportedTarget(name)) => assert_eq!(name, "epub"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
