use super::models::Task;

/// Case-insensitive substring match over name and description.
pub fn filter_by_search<'a, I>(tasks: I, term: &str) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.into_iter().collect();
    }
    tasks
        .into_iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Exact status match. An empty filter keeps everything.
pub fn filter_by_status<'a, I>(tasks: I, status: &str) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    if status.is_empty() {
        return tasks.into_iter().collect();
    }
    tasks
        .into_iter()
        .filter(|t| t.status.as_deref() == Some(status))
        .collect()
}
