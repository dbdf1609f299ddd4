use std::collections::HashSet;
use std::fmt;
use serde::Serialize;

/// One entry of a closed enumeration, the code is what goes on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumOption {
    pub label: &'static str,
    pub code: i64,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for EnumOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.code)
    }
}

/// The set of values a field or placeholder may legally take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Inclusive integer range, values must sit on the step grid counted from min
    Range { min: i64, max: i64, step: i64 },
    /// Closed enumeration of label/code pairs
    Options(&'static [EnumOption]),
}

impl Domain {
    /// Returns true if the value is a member of the domain
    ///
    /// # Arguments
    ///
    /// * 'value' - the wire value to check
    pub fn check(&self, value: i64) -> bool {
        match self {
            Domain::Range { min, max, step } => {
                (*min..=*max).contains(&value) && *step > 0 && (value - min) % step == 0
            }
            Domain::Options(options) => options.iter().any(|o| o.code == value),
        }
    }

    /// Returns the label of an enumeration code, None for ranges and unknown codes
    ///
    /// # Arguments
    ///
    /// * 'code' - the wire value to look up
    pub fn label_for(&self, code: i64) -> Option<&'static str> {
        match self {
            Domain::Range { .. } => None,
            Domain::Options(options) => options.iter().find(|o| o.code == code).map(|o| o.label),
        }
    }

    /// Returns the code of an enumeration label, matching is case-insensitive
    ///
    /// # Arguments
    ///
    /// * 'label' - the option label as displayed, e.g. "30 min"
    pub fn code_for(&self, label: &str) -> Option<i64> {
        match self {
            Domain::Range { .. } => None,
            Domain::Options(options) => options.iter()
                .find(|o| o.label.eq_ignore_ascii_case(label.trim()))
                .map(|o| o.code),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Domain::Range { min, max, step } => min > max || *step < 1,
            Domain::Options(options) => options.is_empty(),
        }
    }

    /// Returns the first enumeration code that appears more than once
    pub fn duplicate_code(&self) -> Option<i64> {
        match self {
            Domain::Range { .. } => None,
            Domain::Options(options) => {
                let mut seen: HashSet<i64> = HashSet::new();
                options.iter().map(|o| o.code).find(|&c| !seen.insert(c))
            }
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Domain::Range { min, max, step: 1 } => write!(f, "[{}, {}]", min, max),
            Domain::Range { min, max, step } => write!(f, "[{}, {}] step {}", min, max, step),
            Domain::Options(options) => {
                let list = options.iter().map(|o| o.to_string()).collect::<Vec<String>>();
                write!(f, "{{{}}}", list.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[EnumOption] = &[
        EnumOption { label: "4A", code: 4 },
        EnumOption { label: "8A", code: 8 },
    ];

    #[test]
    fn range_is_inclusive() {
        let domain = Domain::Range { min: 50, max: 100, step: 1 };
        assert!(domain.check(50));
        assert!(domain.check(100));
        assert!(!domain.check(49));
        assert!(!domain.check(101));
    }

    #[test]
    fn range_enforces_step() {
        let domain = Domain::Range { min: 50, max: 305, step: 50 };
        assert!(domain.check(50));
        assert!(domain.check(300));
        assert!(!domain.check(60));
        assert!(!domain.check(305));
    }

    #[test]
    fn duplicate_codes_are_found() {
        const REPEATED: &[EnumOption] = &[
            EnumOption { label: "A", code: 1 },
            EnumOption { label: "B", code: 1 },
        ];
        assert_eq!(Domain::Options(REPEATED).duplicate_code(), Some(1));
        assert_eq!(Domain::Options(OPTIONS).duplicate_code(), None);
        assert_eq!(Domain::Range { min: 0, max: 1, step: 1 }.duplicate_code(), None);
    }

    #[test]
    fn options_accept_only_codes() {
        let domain = Domain::Options(OPTIONS);
        assert!(domain.check(4));
        assert!(!domain.check(6));
        assert_eq!(domain.label_for(8), Some("8A"));
        assert_eq!(domain.code_for("4a"), Some(4));
        assert_eq!(domain.code_for("6A"), None);
    }

    #[test]
    fn display_matches_reference_notation() {
        assert_eq!(Domain::Range { min: 0, max: 30, step: 1 }.to_string(), "[0, 30]");
        assert_eq!(Domain::Range { min: 50, max: 305, step: 50 }.to_string(), "[50, 305] step 50");
        assert_eq!(Domain::Options(OPTIONS).to_string(), "{4A (4), 8A (8)}");
    }

    #[test]
    fn empty_domains() {
        assert!(Domain::Range { min: 10, max: 5, step: 1 }.is_empty());
        assert!(Domain::Range { min: 0, max: 5, step: 0 }.is_empty());
        assert!(Domain::Options(&[]).is_empty());
        assert!(!Domain::Options(OPTIONS).is_empty());
    }
}
