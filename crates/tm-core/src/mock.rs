//! Hardcoded seed data rendered by every page.

use chrono::{TimeZone, Utc};

use crate::types::{
    Agent, AgentKind, Model, ServiceStatus, StatCard, StatChange, Task, Workflow, WorkflowKind,
};

/// Placeholder shown in the API key fields.
pub const API_KEY_MASK: &str = "••••••••••••••••••••••••••••••";

fn stat(title: &str, value: &str, description: &str, href: &str, change: Option<StatChange>) -> StatCard {
    StatCard {
        title: title.into(),
        value: value.into(),
        description: description.into(),
        change,
        href: href.into(),
    }
}

/// Stat cards shown before the mock load completes.
pub fn initial_stats() -> Vec<StatCard> {
    vec![
        stat("Active Tasks", "0", "Tasks currently in progress", "/tasks", None),
        stat("Models", "0", "Available AI models", "/models", None),
        stat("Agents", "0", "Configured AI agents", "/agents", None),
        stat("Workflows", "0", "Automated workflows", "/workflows", None),
    ]
}

/// Stat cards swapped in by the mock load.
pub fn loaded_stats() -> Vec<StatCard> {
    vec![
        stat(
            "Active Tasks",
            "12",
            "Tasks currently in progress",
            "/tasks",
            Some(StatChange::increase(2)),
        ),
        stat("Models", "3", "Available AI models", "/models", None),
        stat(
            "Agents",
            "4",
            "Configured AI agents",
            "/agents",
            Some(StatChange::increase(1)),
        ),
        stat("Workflows", "2", "Automated workflows", "/workflows", None),
    ]
}

pub fn demo_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "code-agent".into(),
            name: "Code Generation Agent".into(),
            kind: AgentKind::Code,
            description: "Generates code based on requirements".into(),
            capabilities: vec![
                "code_generation".into(),
                "code_review".into(),
                "documentation".into(),
            ],
            default_model_id: "gpt-4o".into(),
            is_active: true,
        },
        Agent {
            id: "design-agent".into(),
            name: "Design Agent".into(),
            kind: AgentKind::Design,
            description: "Creates design artifacts and mockups".into(),
            capabilities: vec!["design_creation".into(), "documentation".into()],
            default_model_id: "gpt-4o".into(),
            is_active: true,
        },
        Agent {
            id: "test-agent".into(),
            name: "Testing Agent".into(),
            kind: AgentKind::Test,
            description: "Generates and executes tests".into(),
            capabilities: vec!["test_generation".into(), "code_review".into()],
            default_model_id: "gpt-4o-mini".into(),
            is_active: true,
        },
    ]
}

pub fn demo_models() -> Vec<Model> {
    vec![
        Model {
            id: "gpt-4o".into(),
            name: "GPT-4o".into(),
            provider: "OpenAI".into(),
            capabilities: ["text", "code", "reasoning", "planning", "vision"]
                .map(String::from)
                .to_vec(),
            cost_per_token: 0.000_01,
            context_window: 128_000,
            is_active: true,
        },
        Model {
            id: "gpt-4o-mini".into(),
            name: "GPT-4o Mini".into(),
            provider: "OpenAI".into(),
            capabilities: ["text", "code", "reasoning", "planning"]
                .map(String::from)
                .to_vec(),
            cost_per_token: 0.000_005,
            context_window: 128_000,
            is_active: true,
        },
        Model {
            id: "claude-3-opus".into(),
            name: "Claude 3 Opus".into(),
            provider: "Anthropic".into(),
            capabilities: ["text", "code", "reasoning", "planning", "vision"]
                .map(String::from)
                .to_vec(),
            cost_per_token: 0.000_015,
            context_window: 200_000,
            is_active: true,
        },
    ]
}

pub fn demo_workflows() -> Vec<Workflow> {
    vec![
        Workflow {
            id: "code-review-workflow".into(),
            name: "Code Review Workflow".into(),
            description: "Automated code review workflow".into(),
            kind: WorkflowKind::Sequential,
            steps: 3,
            is_active: true,
            last_run: Utc.with_ymd_and_hms(2025, 3, 1, 15, 30, 0).single(),
        },
        Workflow {
            id: "design-to-code-workflow".into(),
            name: "Design to Code Workflow".into(),
            description: "Convert design mockups to code".into(),
            kind: WorkflowKind::Sequential,
            steps: 4,
            is_active: true,
            last_run: None,
        },
        Workflow {
            id: "security-scan-workflow".into(),
            name: "Security Scan Workflow".into(),
            description: "Scan code for security vulnerabilities".into(),
            kind: WorkflowKind::Parallel,
            steps: 5,
            is_active: false,
            last_run: Utc.with_ymd_and_hms(2025, 2, 28, 10, 15, 0).single(),
        },
    ]
}

/// Tasks returned by the mock source. Nothing has been submitted yet.
pub fn demo_tasks() -> Vec<Task> {
    Vec::new()
}

fn service(label: &str, state: &str) -> ServiceStatus {
    ServiceStatus {
        label: label.into(),
        state: state.into(),
        badge: true,
    }
}

/// Rows of the dashboard "System Status" panel.
pub fn dashboard_services() -> Vec<ServiceStatus> {
    vec![
        service("API Status", "Operational"),
        service("Database", "Connected"),
        service("Model Service", "Available"),
    ]
}

/// Rows of the settings "System Information" list.
pub fn system_info(version: &str) -> Vec<ServiceStatus> {
    vec![
        ServiceStatus {
            label: "Version".into(),
            state: version.into(),
            badge: false,
        },
        service("Database Status", "Connected"),
        service("Vector Database", "Operational"),
        service("API Status", "Operational"),
    ]
}
