use serde::{Serialize, Deserialize};

/// A labeled, colored outcome the wheel can land on.
///
/// Prizes are compared by name, which doubles as the identity key for
/// target lookups. The demo list below keeps names unique.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub name: String,
    pub color: String,
}

impl Prize {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// The fixed demo prize list. List order defines the wheel segment layout.
pub fn initial_prizes() -> Vec<Prize> {
    vec![
        Prize::new("סוף שבוע עם ניסים בדובאי", "#8b5cf6"), // Violet
        Prize::new("זכית באימוץ סבתא", "#3b82f6"),         // Blue
        Prize::new("זכית בשערות מסולסלאים", "#10b981"),    // Emerald
        Prize::new("ואיי ואיי יש דולרים?", "#f59e0b"),     // Amber
        Prize::new("משהו אחר", "#ef4444"),                 // Red
        Prize::new("זכית בקוסקו ומפרום", "#ec4899"),       // Pink
        Prize::new("זכית בפקס של יעקב", "#6366f1"),        // Indigo
        Prize::new("סיבוב ברכב של שביט", "#14b8a6"),       // Teal
    ]
}
