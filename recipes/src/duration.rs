/// Formats a duration in minutes the way it reads on a recipe card:
/// 90 becomes "1 hour 30 minutes".
pub fn hours_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    let mut parts = Vec::new();

    if hours == 1 {
        parts.push("1 hour".to_string());
    } else if hours > 1 {
        parts.push(format!("{hours} hours"));
    }

    if mins == 1 {
        parts.push("1 minute".to_string());
    } else if mins > 1 || hours == 0 {
        parts.push(format!("{mins} minutes"));
    }

    parts.join(" ")
}
