use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Stat card ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatChange {
    pub value: u32,
    #[serde(rename = "type")]
    pub direction: ChangeDirection,
}

impl StatChange {
    pub fn increase(value: u32) -> Self {
        Self {
            value,
            direction: ChangeDirection::Increase,
        }
    }

    pub fn decrease(value: u32) -> Self {
        Self {
            value,
            direction: ChangeDirection::Decrease,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.direction {
            ChangeDirection::Increase => "stat-change stat-change-up",
            ChangeDirection::Decrease => "stat-change stat-change-down",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<StatChange>,
    pub href: String,
}

// ── Agent ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Code,
    Design,
    Test,
}

impl AgentKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AgentKind::Code => "agent-icon agent-icon-code",
            AgentKind::Design => "agent-icon agent-icon-design",
            AgentKind::Test => "agent-icon agent-icon-test",
        }
    }

    /// Heroicons outline path drawn inside the agent avatar.
    pub fn icon_path(&self) -> &'static str {
        match self {
            AgentKind::Code => "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
            AgentKind::Design => {
                "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z"
            }
            AgentKind::Test => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Code => write!(f, "code"),
            AgentKind::Design => write!(f, "design"),
            AgentKind::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AgentKind,
    pub description: String,
    pub capabilities: Vec<String>,
    pub default_model_id: String,
    pub is_active: bool,
}

// ── Model ──

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub capabilities: Vec<String>,
    pub cost_per_token: f64,
    pub context_window: u32,
    pub is_active: bool,
}

// ── Workflow ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    Sequential,
    Parallel,
    Conditional,
}

impl std::fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowKind::Sequential => write!(f, "sequential"),
            WorkflowKind::Parallel => write!(f, "parallel"),
            WorkflowKind::Conditional => write!(f, "conditional"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    pub steps: u32,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<DateTime<Utc>>,
}

// ── Task ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Code,
    Design,
    Test,
    Security,
    Analysis,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::Code => write!(f, "Code"),
            TaskKind::Design => write!(f, "Design"),
            TaskKind::Test => write!(f, "Test"),
            TaskKind::Security => write!(f, "Security"),
            TaskKind::Analysis => write!(f, "Analysis"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "Low"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Verifying,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "badge badge-gray",
            TaskStatus::InProgress => "badge badge-blue",
            TaskStatus::Verifying => "badge badge-purple",
            TaskStatus::Completed => "badge badge-green",
            TaskStatus::Failed => "badge badge-red",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Verifying => write!(f, "Verifying"),
            TaskStatus::Completed => write!(f, "Completed"),
            TaskStatus::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Completion fraction in `0.0..=1.0`.
    #[serde(default)]
    pub progress: f32,
    #[serde(default)]
    pub cost: f64,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Progress as a whole percentage, clamped to `0..=100`.
    pub fn progress_percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

// ── Service status ──

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub label: String,
    pub state: String,
    /// `false` renders the value as plain text instead of a green badge.
    #[serde(default = "default_true")]
    pub badge: bool,
}

fn default_true() -> bool {
    true
}

/// Text shown in the active/inactive badge.
pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

pub fn active_css_class(is_active: bool) -> &'static str {
    if is_active {
        "badge badge-green"
    } else {
        "badge badge-gray"
    }
}
