// src/domain/tags.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a label into the comparison key used everywhere tags are matched:
/// lowercase, accents stripped, `-`/`_` treated as spaces, whitespace collapsed.
///
/// `"En-Progreso"`, `" en  progreso "` and `"EN_PROGRESO"` all fold to
/// `"en progreso"`; `"Tránsito"` folds to `"transito"`.
pub fn fold_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.nfd().filter(|c| !is_combining_mark(*c)) {
        let ch = match ch {
            '-' | '_' => ' ',
            other => other,
        };
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(ch.to_lowercase());
    }

    out
}

// Generates a closed tag enum with an `Other` fallback. Each known variant
// lists its display label followed by any extra accepted aliases.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// A value outside the known set, kept verbatim for display.
            Other(String),
        }

        impl $name {
            pub const KNOWN: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Parses a label leniently. Never fails: unknown labels become `Other`.
            pub fn from_label(raw: &str) -> Self {
                let key = fold_key(raw);
                $(
                    if key == fold_key($label) $(|| key == fold_key($alias))* {
                        return $name::$variant;
                    }
                )+
                $name::Other(raw.trim().to_string())
            }

            pub fn label(&self) -> &str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            /// Comparison key; two values match when their keys are equal.
            pub fn key(&self) -> String {
                fold_key(self.label())
            }

            pub fn matches(&self, other: &$name) -> bool {
                self.key() == other.key()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok($name::from_label(&raw))
            }
        }
    };
}

tag_enum! {
    /// Urgency tag on a report.
    Priority {
        Urgente => "Urgente",
        Media => "Media",
        Baja => "Baja",
    }
}

tag_enum! {
    /// Workflow state of a report.
    Status {
        Reportado => "Reportado",
        Verificado => "Verificado",
        EnProgreso => "En Progreso",
        Pausado => "Pausado",
        Resuelto => "Resuelto",
    }
}

tag_enum! {
    /// Problem classification.
    Category {
        Vialidad => "Vialidad",
        Transito => "Tránsito",
        Alumbrado => "Alumbrado" | "Alumbrado Público",
        Limpieza => "Limpieza" | "Limpieza Urbana",
        Seguridad => "Seguridad",
        EspaciosVerdes => "Espacios Verdes",
        Otros => "Otros",
    }
}

impl Status {
    /// Statuses a signed-in user may post as a timeline update.
    pub const UPDATABLE: &'static [Status] = &[
        Status::Verificado,
        Status::EnProgreso,
        Status::Pausado,
        Status::Resuelto,
    ];

    pub fn is_updatable(&self) -> bool {
        Self::UPDATABLE.iter().any(|s| s == self)
    }
}
