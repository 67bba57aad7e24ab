use leptos::prelude::*;
use tm_core::format;
use tm_core::types::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let percent = task.progress_percent();
    view! {
        <li class="task-row">
            <div class="task-row-main">
                <span class="task-title">{task.title}</span>
                <span class="task-kind">{task.kind.to_string()}</span>
                <span class=format!("task-priority priority-{}", task.priority.to_string().to_lowercase())>
                    {task.priority.to_string()}
                </span>
                <span class=task.status.css_class()>{task.status.to_string()}</span>
            </div>
            <div
                class="progress"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=percent.to_string()
            >
                <div class="progress-bar" style=format!("width: {percent}%")></div>
            </div>
            <div class="task-meta">{format::timestamp(&task.created_at)}</div>
        </li>
    }
}
