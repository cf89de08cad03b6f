use crate::types::scoring::ScoreBreakdown;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BreakdownDocument<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub breakdown: &'a ScoreBreakdown,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{build_comparison, ComparisonSelection};
    use crate::dataset;
    use crate::report::RankingRow;

    #[test]
    fn ranking_json_contains_scores_and_tiers() {
        let records = dataset::sample().expect("sample should load");
        let refs = records.iter().take(1).collect::<Vec<_>>();
        let rendered = to_json(&RankingRow::from_records(&refs)).expect("json should serialize");
        assert!(rendered.contains("\"health_score\": 88"));
        assert!(rendered.contains("\"tier\": \"highly_recommended\""));
        assert!(rendered.contains("\"last_commit\": \"2 days ago\""));
    }

    #[test]
    fn comparison_json_marks_empty_slots() {
        let records = dataset::sample().expect("sample should load");
        let mut selection = ComparisonSelection::new();
        selection.toggle("2").expect("room left");
        let view = build_comparison(&selection, &records).expect("ids exist");
        let rendered = to_json(&view).expect("json should serialize");
        assert_eq!(rendered.matches("\"slot\": \"empty\"").count(), 2);
        assert!(rendered.contains("\"slot\": \"filled\""));
        assert!(rendered.contains("\"name\": \"tensorflow\""));
    }
}
