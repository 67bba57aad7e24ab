//! Display formatting shared by the list pages.

use chrono::{DateTime, Utc};

use crate::types::{ChangeDirection, StatChange};

/// `128000` -> `"128,000"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"Context: 128,000 tokens"`.
pub fn context_window(tokens: u32) -> String {
    format!("Context: {} tokens", thousands(u64::from(tokens)))
}

/// `"Cost: $0.000010 per token"`.
pub fn cost_per_token(cost: f64) -> String {
    format!("Cost: ${cost:.6} per token")
}

/// Capability tags are stored snake_case; chips show them with spaces.
pub fn capability_label(capability: &str) -> String {
    capability.replace('_', " ")
}

/// `+2` / `-1`.
pub fn change_delta(change: &StatChange) -> String {
    let sign = match change.direction {
        ChangeDirection::Increase => '+',
        ChangeDirection::Decrease => '-',
    };
    format!("{sign}{}", change.value)
}

/// First two characters of a model name, for the avatar bubble.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect()
}

/// `"Mar 1, 2025, 15:30 UTC"`.
pub fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %H:%M UTC").to_string()
}

/// `"Last run: Mar 1, 2025, 15:30 UTC"`.
pub fn last_run(ts: &DateTime<Utc>) -> String {
    format!("Last run: {}", timestamp(ts))
}

/// `"1 step"` / `"3 steps"`.
pub fn step_count(steps: u32) -> String {
    if steps == 1 {
        "1 step".to_string()
    } else {
        format!("{steps} steps")
    }
}
