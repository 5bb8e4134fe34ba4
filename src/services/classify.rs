//! Feature classification for test names
//!
//! Test titles are free-form text, so the bucket is a best-effort guess from
//! substrings of the lower-cased name. Rules are checked in table order and
//! the first match wins.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Feature bucket a failing test is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    DotRepeat,
    InsertExit,
    PasteAfterOp,
    Paste,
    Yank,
    Delete,
    Change,
    Find,
    MotionWord,
    UndoRedo,
    Other,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::DotRepeat,
        Feature::InsertExit,
        Feature::PasteAfterOp,
        Feature::Paste,
        Feature::Yank,
        Feature::Delete,
        Feature::Change,
        Feature::Find,
        Feature::MotionWord,
        Feature::UndoRedo,
        Feature::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::DotRepeat => "dot-repeat",
            Feature::InsertExit => "insert-exit",
            Feature::PasteAfterOp => "paste-after-op",
            Feature::Paste => "paste",
            Feature::Yank => "yank",
            Feature::Delete => "delete",
            Feature::Change => "change",
            Feature::Find => "find",
            Feature::MotionWord => "motion-word",
            Feature::UndoRedo => "undo-redo",
            Feature::Other => "other",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Feature::ALL.iter().map(|f| f.as_str()).collect();
                format!("Unknown feature: {s}. Expected one of {}", known.join(", "))
            })
    }
}

struct Rule {
    matches: fn(&str) -> bool,
    feature: Feature,
}

const RULES: [Rule; 10] = [
    Rule {
        matches: |n| n.contains("dot") || n.contains("'."),
        feature: Feature::DotRepeat,
    },
    Rule {
        matches: |n| n.contains("<esc>"),
        feature: Feature::InsertExit,
    },
    Rule {
        matches: |n| n.contains('p') && (n.contains('d') || n.contains('c')),
        feature: Feature::PasteAfterOp,
    },
    Rule {
        matches: |n| n.contains('p'),
        feature: Feature::Paste,
    },
    Rule {
        matches: |n| n.contains('y') && n.contains('w'),
        feature: Feature::Yank,
    },
    Rule {
        matches: |n| n.contains('d'),
        feature: Feature::Delete,
    },
    Rule {
        matches: |n| n.contains('c'),
        feature: Feature::Change,
    },
    Rule {
        matches: |n| n.contains('f') || n.contains('t'),
        feature: Feature::Find,
    },
    Rule {
        matches: |n| n.contains('w') || n.contains('b') || n.contains('e'),
        feature: Feature::MotionWord,
    },
    Rule {
        matches: |n| n.contains('u') || n.contains("<c-r>"),
        feature: Feature::UndoRedo,
    },
];

/// Guess the feature bucket for a test display name.
#[must_use]
pub fn guess_feature(name: &str) -> Feature {
    let lowered = name.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&lowered))
        .map_or(Feature::Other, |rule| rule.feature)
}
