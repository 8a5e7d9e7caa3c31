use chrono::{DateTime, Utc};

/// Characters of description shown on a card before the expand affordance
pub const DESCRIPTION_PREVIEW_CHARS: usize = 300;

const YEAR_SECONDS: i64 = 31_536_000;
const MONTH_SECONDS: i64 = 2_592_000;
const DAY_SECONDS: i64 = 86_400;
const HOUR_SECONDS: i64 = 3_600;
const MINUTE_SECONDS: i64 = 60;

/// Coarse relative-time label for a job's posting date
///
/// Buckets are tried largest first and a bucket only wins when the
/// elapsed quotient is strictly greater than 1, so exactly one unit of
/// elapsed time falls through to the next smaller bucket (3,600s is
/// "60 minutos", not "1 hora").
pub fn time_ago(posted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(posted_at) = posted_at else {
        return "fecha desconocida".to_string();
    };

    let seconds = (now - posted_at).num_seconds();

    let interval = seconds / YEAR_SECONDS;
    if interval > 1 {
        return format!("{interval} años");
    }
    let interval = seconds / MONTH_SECONDS;
    if interval > 1 {
        return format!("{interval} meses");
    }
    let interval = seconds / DAY_SECONDS;
    if interval > 1 {
        return format!("{interval} días");
    }
    let interval = seconds / HOUR_SECONDS;
    if interval > 1 {
        return format!("{interval} horas");
    }
    let interval = seconds / MINUTE_SECONDS;
    if interval > 1 {
        return format!("{interval} minutos");
    }
    "ahora".to_string()
}

/// Display label for the estimated cost
pub fn cost_label(cost: Option<f64>) -> String {
    match cost {
        Some(cost) => format!("${cost}"),
        None => "No especificado".to_string(),
    }
}

/// Display label for the skill list
pub fn skills_label(skills: Option<&[String]>) -> String {
    match skills {
        Some(skills) => skills.join(", "),
        None => "No especificadas".to_string(),
    }
}

/// Card preview of the description, truncated at a char boundary
pub fn description_preview(description: Option<&str>) -> String {
    let Some(description) = description else {
        return "Sin descripción".to_string();
    };

    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &description[..idx]),
        None => description.to_string(),
    }
}

/// Whether the card preview hides part of the description
pub fn needs_expansion(description: Option<&str>) -> bool {
    description.is_some_and(|d| d.chars().count() > DESCRIPTION_PREVIEW_CHARS)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(seconds: i64) -> Option<DateTime<Utc>> {
        Some(now() - Duration::seconds(seconds))
    }

    #[test]
    fn exactly_one_hour_falls_through_to_minutes() {
        assert_eq!(time_ago(ago(3_600), now()), "60 minutos");
    }

    #[test]
    fn two_hours_is_labeled_in_hours() {
        assert_eq!(time_ago(ago(7_200), now()), "2 horas");
    }

    #[test]
    fn exactly_one_year_falls_through_to_months() {
        assert_eq!(time_ago(ago(31_536_000), now()), "12 meses");
    }

    #[test]
    fn multi_year_spans_are_labeled_in_years() {
        assert_eq!(time_ago(ago(3 * 31_536_000), now()), "3 años");
    }

    #[test]
    fn three_days_is_labeled_in_days() {
        assert_eq!(time_ago(ago(3 * 86_400), now()), "3 días");
    }

    #[test]
    fn under_two_minutes_is_now() {
        assert_eq!(time_ago(ago(0), now()), "ahora");
        assert_eq!(time_ago(ago(119), now()), "ahora");
    }

    #[test]
    fn future_dates_are_now() {
        assert_eq!(time_ago(ago(-500), now()), "ahora");
    }

    #[test]
    fn missing_date_has_fallback() {
        assert_eq!(time_ago(None, now()), "fecha desconocida");
    }

    #[test]
    fn cost_renders_with_currency_prefix_or_fallback() {
        assert_eq!(cost_label(Some(1500.0)), "$1500");
        assert_eq!(cost_label(Some(450.5)), "$450.5");
        assert_eq!(cost_label(None), "No especificado");
    }

    #[test]
    fn skills_join_or_fall_back() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        assert_eq!(skills_label(Some(&skills)), "Python, SQL");
        assert_eq!(skills_label(None), "No especificadas");
    }

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(description_preview(Some("corta")), "corta");
        assert!(!needs_expansion(Some("corta")));
    }

    #[test]
    fn long_descriptions_truncate_at_char_boundary() {
        let long = "á".repeat(400);
        let preview = description_preview(Some(&long));
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
        assert!(needs_expansion(Some(&long)));
    }

    #[test]
    fn missing_description_has_fallback() {
        assert_eq!(description_preview(None), "Sin descripción");
        assert!(!needs_expansion(None));
    }
}
