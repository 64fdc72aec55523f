//! Closed topic vocabulary with a fallback for off-script model output.

use std::fmt;

/// Topic assigned to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    Cocina,
    Servicio,
    Banos,
    Comida,
    Otros,
    /// Whatever the model answered when it ignored the label set.
    Unrecognized(String),
}

impl Topic {
    /// Labels the classifier prompt allows, in prompt order.
    pub const LABELS: [&'static str; 5] = ["cocina", "servicio", "baños", "comida", "otros"];

    /// Map trimmed model output onto a label, keeping unknown text verbatim.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let normalized = raw
            .trim_matches(|c: char| matches!(c, '\'' | '"' | '.' | '`') || c.is_whitespace())
            .to_lowercase();
        match normalized.as_str() {
            "cocina" => Self::Cocina,
            "servicio" => Self::Servicio,
            "baños" | "banos" => Self::Banos,
            "comida" => Self::Comida,
            "otros" => Self::Otros,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Cocina => "cocina",
            Self::Servicio => "servicio",
            Self::Banos => "baños",
            Self::Comida => "comida",
            Self::Otros => "otros",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
