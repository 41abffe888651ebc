use std::fmt;

use crate::domain::request::Parameters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Missing { field: &'static str },
    MissingDependent {
        field: &'static str,
        trigger: &'static str,
    },
    MissingParameters { fields: Vec<&'static str> },
    NoAlternativeSatisfied { alternatives: Vec<Vec<&'static str>> },
    InvalidDateFormat { field: &'static str },
    InvalidBaseUrl { input: String },
    MissingEnvironment { name: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::MissingDependent { field, trigger } => {
                write!(f, "{field} is required when {trigger} is provided")
            }
            Self::MissingParameters { fields } => {
                write!(f, "Required parameters missing: {}", fields.join(", "))
            }
            Self::NoAlternativeSatisfied { alternatives } => {
                write!(
                    f,
                    "Required parameters missing. You must provide one of the following: "
                )?;
                for (idx, fields) in alternatives.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}) {}", idx + 1, join_with_and(fields))?;
                }
                Ok(())
            }
            Self::InvalidDateFormat { field } => {
                write!(f, "{field} must be in yyyy-mm-dd format")
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid base URL: {input}"),
            Self::MissingEnvironment { name } => {
                write!(f, "environment variable {name} is not set")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// One acceptable combination of request parameters.
///
/// `required` must all be present for the alternative to match. Once it matches,
/// every field in `then_required` must also be present, otherwise validation fails
/// with [`ValidationError::MissingDependent`] instead of trying the next alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternative {
    required: &'static [&'static str],
    then_required: &'static [&'static str],
}

impl Alternative {
    pub const fn new(required: &'static [&'static str]) -> Self {
        Self {
            required,
            then_required: &[],
        }
    }

    pub const fn requiring(self, then_required: &'static [&'static str]) -> Self {
        Self {
            required: self.required,
            then_required,
        }
    }

    fn fields(&self) -> Vec<&'static str> {
        self.required
            .iter()
            .chain(self.then_required)
            .copied()
            .collect()
    }
}

/// Return the index of the first alternative satisfied by `params`.
///
/// Alternatives are tried in declaration order and the first match wins.
pub fn first_satisfied<P: Parameters + ?Sized>(
    params: &P,
    alternatives: &[Alternative],
) -> Result<usize, ValidationError> {
    for (idx, alternative) in alternatives.iter().enumerate() {
        if !alternative.required.iter().all(|name| params.is_present(name)) {
            continue;
        }
        if let Some(field) = first_missing(params, alternative.then_required) {
            return Err(ValidationError::MissingDependent {
                field,
                trigger: alternative.required.first().copied().unwrap_or(field),
            });
        }
        return Ok(idx);
    }

    match alternatives {
        [single] => Err(ValidationError::Missing {
            field: first_missing(params, &single.fields()).unwrap_or("parameters"),
        }),
        _ => Err(ValidationError::NoAlternativeSatisfied {
            alternatives: alternatives.iter().map(Alternative::fields).collect(),
        }),
    }
}

/// Require every field, failing on the first one that is absent.
pub fn require_each<P: Parameters + ?Sized>(
    params: &P,
    fields: &[&'static str],
) -> Result<(), ValidationError> {
    match first_missing(params, fields) {
        Some(field) => Err(ValidationError::Missing { field }),
        None => Ok(()),
    }
}

/// Require every field, reporting all absent ones at once.
pub fn require_all<P: Parameters + ?Sized>(
    params: &P,
    fields: &[&'static str],
) -> Result<(), ValidationError> {
    let missing = fields
        .iter()
        .copied()
        .filter(|name| !params.is_present(name))
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingParameters { fields: missing })
    }
}

/// Check that `value` has the `yyyy-mm-dd` shape. Calendar validity is left to the provider.
pub fn require_iso_date(value: &str, field: &'static str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidDateFormat { field })
    }
}

fn first_missing<P: Parameters + ?Sized>(
    params: &P,
    fields: &[&'static str],
) -> Option<&'static str> {
    fields.iter().copied().find(|name| !params.is_present(name))
}

fn join_with_and(fields: &[&str]) -> String {
    match fields {
        [] => String::new(),
        [one] => (*one).to_owned(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    struct MapParams(BTreeMap<&'static str, String>);

    impl MapParams {
        fn of(pairs: &[(&'static str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(key, value)| (*key, (*value).to_owned()))
                    .collect(),
            )
        }
    }

    impl Parameters for MapParams {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    const ALTERNATIVES: &[Alternative] = &[
        Alternative::new(&["last_update"]),
        Alternative::new(&["start_date"]).requiring(&["end_date"]),
        Alternative::new(&["property_id", "type", "status"]),
    ];

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Missing { field: "property_id" };
        assert_eq!(err.to_string(), "property_id is required");

        let err = ValidationError::MissingDependent {
            field: "end_date",
            trigger: "start_date",
        };
        assert_eq!(
            err.to_string(),
            "end_date is required when start_date is provided"
        );

        let err = ValidationError::MissingParameters {
            fields: vec!["amount", "charge_id"],
        };
        assert_eq!(
            err.to_string(),
            "Required parameters missing: amount, charge_id"
        );

        let err = ValidationError::InvalidDateFormat { field: "start_date" };
        assert_eq!(err.to_string(), "start_date must be in yyyy-mm-dd format");
    }

    #[test]
    fn no_alternative_message_lists_every_combination() {
        let err = first_satisfied(&MapParams::of(&[]), ALTERNATIVES).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required parameters missing. You must provide one of the following: \
             1) last_update, 2) start_date and end_date, 3) property_id, type, and status"
        );
    }

    #[test]
    fn first_declared_alternative_wins() {
        let params = MapParams::of(&[
            ("property_id", "GCNS01"),
            ("type", "R"),
            ("status", "O"),
            ("last_update", "01-01-2024"),
        ]);
        assert_eq!(first_satisfied(&params, ALTERNATIVES), Ok(0));

        let params = MapParams::of(&[("property_id", "GCNS01"), ("type", "R"), ("status", "O")]);
        assert_eq!(first_satisfied(&params, ALTERNATIVES), Ok(2));
    }

    #[test]
    fn partial_combination_is_not_satisfied() {
        let params = MapParams::of(&[("property_id", "GCNS01"), ("type", "R")]);
        assert!(matches!(
            first_satisfied(&params, ALTERNATIVES),
            Err(ValidationError::NoAlternativeSatisfied { .. })
        ));
    }

    #[test]
    fn secondary_constraint_names_the_dependent_field() {
        let params = MapParams::of(&[("start_date", "2024-01-01")]);
        assert_eq!(
            first_satisfied(&params, ALTERNATIVES),
            Err(ValidationError::MissingDependent {
                field: "end_date",
                trigger: "start_date",
            })
        );
    }

    #[test]
    fn single_alternative_names_the_missing_field() {
        const ONLY: &[Alternative] = &[Alternative::new(&["property_id"])];
        assert_eq!(
            first_satisfied(&MapParams::of(&[]), ONLY),
            Err(ValidationError::Missing {
                field: "property_id"
            })
        );
    }

    #[test]
    fn require_each_stops_at_first_missing_field() {
        let params = MapParams::of(&[("start_date", "2024-01-01")]);
        assert_eq!(
            require_each(&params, &["start_date", "end_date", "property_id"]),
            Err(ValidationError::Missing { field: "end_date" })
        );
    }

    #[test]
    fn require_all_lists_every_missing_field() {
        let params = MapParams::of(&[("end_date", "2024-01-31")]);
        assert_eq!(
            require_all(&params, &["start_date", "end_date", "property_id"]),
            Err(ValidationError::MissingParameters {
                fields: vec!["start_date", "property_id"]
            })
        );
        assert_eq!(require_all(&params, &["end_date"]), Ok(()));
    }

    #[test]
    fn iso_date_shape_is_enforced() {
        assert!(require_iso_date("2024-01-01", "start_date").is_ok());
        assert!(require_iso_date("01/01/2024", "start_date").is_err());
        assert!(require_iso_date("2024-1-01", "start_date").is_err());
        assert!(require_iso_date("2024-01-01T00:00:00", "start_date").is_err());
        assert!(require_iso_date("", "start_date").is_err());
    }
}
