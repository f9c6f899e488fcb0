use crate::models::{MoodAnalytics, MoodRecord};

/// Mood statistics for a period.
///
/// Not yet implemented: the store is never consulted and the same two sample
/// records come back for every `period`, which is echoed without validation.
pub fn mood_analytics(period: &str) -> MoodAnalytics {
    MoodAnalytics {
        period: period.to_string(),
        data: vec![
            sample("2025-10-19", "happy", &["друзья", "учёба"]),
            sample("2025-10-20", "sad", &["работа"]),
        ],
    }
}

fn sample(date: &str, mood: &str, topics: &[&str]) -> MoodRecord {
    MoodRecord {
        date: date.to_string(),
        mood: mood.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_is_echoed() {
        assert_eq!(mood_analytics("month").period, "month");
    }

    #[test]
    fn test_data_is_fixed_for_any_period() {
        let week = mood_analytics("week");
        for period in ["month", "banana", ""] {
            assert_eq!(mood_analytics(period).data, week.data);
        }

        assert_eq!(week.data.len(), 2);
        assert_eq!(week.data[0].date, "2025-10-19");
        assert_eq!(week.data[0].mood, "happy");
        assert_eq!(week.data[0].topics, vec!["друзья", "учёба"]);
        assert_eq!(week.data[1].date, "2025-10-20");
        assert_eq!(week.data[1].mood, "sad");
        assert_eq!(week.data[1].topics, vec!["работа"]);
    }
}
