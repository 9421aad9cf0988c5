//! Prompt construction for the AI service.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::task::domain::TaskRecord;

const SUGGESTION_TEMPLATE: &str = concat!(
    "Based on these existing tasks: \"",
    "{% for task in tasks %}{{ task.text }}",
    "{% if task.description %} - {{ task.description }}{% endif %}",
    "{% if not loop.last %}; {% endif %}{% endfor %}",
    "\". Suggest 3 short, actionable follow-up tasks. Return ONLY a simple list, ",
    "one task per line, no numbering, no JSON, no extra text."
);

const SUMMARY_TEMPLATE: &str = concat!(
    "Summarize these tasks in 2-3 sentences:\n",
    "{% for task in tasks %}{{ loop.index }}. {{ task.text }} ({{ task.status }})",
    "{% if task.description %}\n   {{ task.description }}{% endif %}",
    "{% if not loop.last %}\n{% endif %}{% endfor %}"
);

#[derive(Serialize)]
struct PromptTask<'a> {
    text: &'a str,
    description: &'a str,
    status: &'a str,
}

impl<'a> From<&'a TaskRecord> for PromptTask<'a> {
    fn from(task: &'a TaskRecord) -> Self {
        Self {
            text: task.text(),
            description: task.description(),
            status: task.status().as_str(),
        }
    }
}

fn render(template: &str, tasks: &[TaskRecord]) -> Result<String, minijinja::Error> {
    let views: Vec<PromptTask<'_>> = tasks.iter().map(PromptTask::from).collect();
    Environment::new().render_str(template, context! { tasks => views })
}

/// Builds the prompt asking for three follow-up tasks.
///
/// # Errors
///
/// Returns a [`minijinja::Error`] if the template fails to render.
pub fn suggestion_prompt(tasks: &[TaskRecord]) -> Result<String, minijinja::Error> {
    render(SUGGESTION_TEMPLATE, tasks)
}

/// Builds the prompt asking for a two-to-three sentence summary.
///
/// # Errors
///
/// Returns a [`minijinja::Error`] if the template fails to render.
pub fn summary_prompt(tasks: &[TaskRecord]) -> Result<String, minijinja::Error> {
    render(SUMMARY_TEMPLATE, tasks)
}
