//! Human-readable labels for the report table.

const NOT_AVAILABLE: &str = "N/A";

pub fn priority_label(priority: Option<i64>) -> &'static str {
    match priority {
        Some(1) => "Urgente",
        Some(2) => "Alta",
        Some(3) => "Normal",
        Some(4) => "Baja",
        _ => "Sin prioridad",
    }
}

/// Label for a priority histogram key (`"1"`..`"4"` or a sentinel).
pub fn priority_key_label(key: &str) -> &'static str {
    priority_label(key.parse::<i64>().ok())
}

pub fn status_label(status: &str) -> &str {
    match status {
        "complete" | "completada" => "Completada",
        "in progress" | "en curso" => "En Curso",
        "pending" | "pendiente" => "Pendiente",
        other => other,
    }
}

/// Cut `text` to `max` characters, appending `...` when shortened.
pub fn truncate_text(text: Option<&str>, max: usize) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}
