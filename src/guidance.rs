//! Display text for each strength level: names, requirements, crack-time
//! estimates and tips.

use crate::types::StrengthLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProfile {
    pub level: StrengthLevel,
    /// Name of the security level card, e.g. "Warrior".
    pub name: &'static str,
    /// Strength label shown on the bar, e.g. "Intermediate".
    pub label: &'static str,
    pub requirements: &'static str,
    /// Reward line printed on the card. Display only: points come from
    /// achievements, not from the card.
    pub reward: &'static str,
    pub description: &'static str,
    pub crack_time: &'static str,
    pub tip: Tip,
}

static PROFILES: [LevelProfile; 4] = [
    LevelProfile {
        level: StrengthLevel::Basic,
        name: "Beginner",
        label: "Basic",
        requirements: "8 characters, letters only",
        reward: "+10 XP",
        description: "Your first step toward security",
        crack_time: "< 1 second",
        tip: Tip {
            title: "Did you know?",
            body: "A password of only 8 letters can be cracked in seconds by a modern attacker.",
            action: "Add numbers to make it stronger",
        },
    },
    LevelProfile {
        level: StrengthLevel::Intermediate,
        name: "Warrior",
        label: "Intermediate",
        requirements: "10 characters, letters and numbers",
        reward: "+25 XP",
        description: "You guard your data like a warrior",
        crack_time: "~1 minute",
        tip: Tip {
            title: "Security tip",
            body: "Adding numbers grows the search space a lot, but you can still do better.",
            action: "Try uppercase letters and symbols",
        },
    },
    LevelProfile {
        level: StrengthLevel::Advanced,
        name: "Guardian",
        label: "Advanced",
        requirements: "12 characters, letters, numbers and symbols",
        reward: "+50 XP",
        description: "Elite guardian of cybersecurity",
        crack_time: "~34,000 years",
        tip: Tip {
            title: "Great progress!",
            body: "This password would hold out against brute force for thousands of years.",
            action: "Can you reach the master level?",
        },
    },
    LevelProfile {
        level: StrengthLevel::Expert,
        name: "Master",
        label: "Expert",
        requirements: "16+ characters, full combination",
        reward: "+100 XP",
        description: "Absolute password master!",
        crack_time: "billions of years",
        tip: Tip {
            title: "You are a master!",
            body: "This password is practically impossible to brute force.",
            action: "Share your achievement with others",
        },
    },
];

static SECURITY_FACTS: [&str; 5] = [
    "80% of data breaches involve weak passwords",
    "A modern computer can try a trillion passwords per second",
    "Using 2FA together with strong passwords cuts the risk by 99.9%",
    "'password123' is still one of the most used passwords in the world",
    "A random 12-character password beats a predictable 20-character phrase",
];

impl StrengthLevel {
    pub fn profile(self) -> &'static LevelProfile {
        &PROFILES[self.value() as usize - 1]
    }
}

/// Tip for the player's current level: the highest tip whose level does
/// not exceed it.
pub fn tip_for(current: StrengthLevel) -> &'static Tip {
    PROFILES
        .iter()
        .rev()
        .find(|profile| profile.level <= current)
        .map(|profile| &profile.tip)
        .unwrap_or(&PROFILES[0].tip)
}

/// Rotating security fact; `index` wraps around.
pub fn security_fact(index: usize) -> &'static str {
    SECURITY_FACTS[index % SECURITY_FACTS.len()]
}

pub fn security_facts() -> &'static [&'static str] {
    &SECURITY_FACTS
}
