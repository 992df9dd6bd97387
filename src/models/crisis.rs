//! Crisis support content.
//!
//! The crisis tab must render even when the backend is down, so the
//! helplines ship with the client. `GET /api/crisis-resources` can replace
//! them when reachable.

use serde::Deserialize;

/// A helpline shown on the crisis tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrisisContact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub description: String,
}

impl CrisisContact {
    fn new(name: &str, phone: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            description: description.to_string(),
        }
    }

    /// Digits of the phone field, as dialled.
    pub fn dial_string(&self) -> String {
        dial_string(&self.phone)
    }
}

/// A short self-help technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopingStrategy {
    pub title: &'static str,
    pub description: &'static str,
}

/// Envelope for `GET /api/crisis-resources`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrisisResources {
    #[serde(default)]
    pub emergency_contacts: Vec<CrisisContact>,
    #[serde(default)]
    pub immediate_steps: Vec<String>,
}

/// Numbers offered in the "immediate danger" notice.
pub const EMERGENCY_NUMBERS: [(&str, &str); 2] = [
    ("Call 911", "911"),
    ("Call 988 (Suicide Prevention)", "988"),
];

pub const COPING_STRATEGIES: [CopingStrategy; 6] = [
    CopingStrategy {
        title: "5-4-3-2-1 Grounding",
        description: "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
    },
    CopingStrategy {
        title: "Deep Breathing",
        description: "Breathe in for 4 counts, hold for 4, breathe out for 6. Repeat.",
    },
    CopingStrategy {
        title: "Cold Water",
        description: "Splash cold water on your face or hold ice cubes to interrupt intense emotions",
    },
    CopingStrategy {
        title: "Call Someone",
        description: "Reach out to a trusted friend, family member, or counselor",
    },
    CopingStrategy {
        title: "Safe Space",
        description: "Go to a place where you feel secure and comfortable",
    },
    CopingStrategy {
        title: "Write It Down",
        description: "Journal your thoughts and feelings to help process them",
    },
];

/// Helplines bundled with the client.
pub fn default_contacts() -> Vec<CrisisContact> {
    vec![
        CrisisContact::new(
            "National Suicide Prevention Lifeline",
            "988",
            "24/7 free and confidential support for people in distress",
        ),
        CrisisContact::new(
            "Crisis Text Line",
            "Text HOME to 741741",
            "24/7 crisis support via text message",
        ),
        CrisisContact::new(
            "SAMHSA National Helpline",
            "1-800-662-4357",
            "Treatment referral and information service",
        ),
        CrisisContact::new(
            "National Domestic Violence Hotline",
            "1-800-799-7233",
            "24/7 confidential support for domestic violence survivors",
        ),
    ]
}

/// First steps bundled with the client.
pub fn default_steps() -> Vec<String> {
    [
        "If you're having thoughts of self-harm, please reach out for help immediately",
        "Contact emergency services (911) if in immediate danger",
        "Reach out to a trusted friend, family member, or counselor",
        "Use grounding techniques to help manage overwhelming feelings",
        "Remember: You are not alone, and help is available",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Keep only the digits of a phone field.
pub fn dial_string(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
