//! Conversion between the wiki's `YYYY-MM-DD` dates and the `DD-MM-YYYY`
//! dates exchanged with callers, plus the optional by-day filter applied to
//! extracted collections.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use crate::error::Result;
use crate::model::{Match, TournamentResult};

pub(crate) const API_DATE_FORMAT: &str = "%d-%m-%Y";

/// Convert `YYYY-MM-DD` to `DD-MM-YYYY`. Returns `None` when `date` does not
/// have that shape.
pub fn to_api_date(date: &str) -> Option<String> {
    let (year, month, day) = split_date(date, [4, 2, 2])?;
    Some(format!("{day}-{month}-{year}"))
}

/// Convert `DD-MM-YYYY` back to `YYYY-MM-DD`.
pub fn from_api_date(date: &str) -> Option<String> {
    let (day, month, year) = split_date(date, [2, 2, 4])?;
    Some(format!("{year}-{month}-{day}"))
}

/// Convert a wiki date to `DD-MM-YYYY`, keeping any other text unchanged.
pub fn normalize_date(raw: &str) -> String {
    to_api_date(raw).unwrap_or_else(|| raw.to_string())
}

/// Parse a caller-supplied `DD-MM-YYYY` date.
pub fn parse_api_date(date: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date.trim(), API_DATE_FORMAT)?)
}

/// Calendar-day equality; the clock time of `date_time` is ignored.
pub fn is_same_day(date_time: &DateTime<Utc>, day: NaiveDate) -> bool {
    date_time.date_naive() == day
}

fn split_date(date: &str, widths: [usize; 3]) -> Option<(&str, &str, &str)> {
    let mut parts = date.split('-');
    let (a, b, c) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let shaped = [a, b, c]
        .iter()
        .zip(widths)
        .all(|(part, width)| {
            part.len() == width && part.bytes().all(|byte| byte.is_ascii_digit())
        });
    shaped.then_some((a, b, c))
}

/// A record that can be placed on a calendar day.
pub trait Dated {
    /// `false` when the record has no determinable date.
    fn is_on(&self, day: NaiveDate) -> bool;
}

impl Dated for Match {
    fn is_on(&self, day: NaiveDate) -> bool {
        self.date_time
            .as_ref()
            .is_some_and(|dt| is_same_day(dt, day))
    }
}

impl Dated for TournamentResult {
    fn is_on(&self, day: NaiveDate) -> bool {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, API_DATE_FORMAT).ok())
            == Some(day)
    }
}

/// Keep only records dated on `target` (`DD-MM-YYYY`). Records without a
/// determinable date are dropped. With no target, `records` pass through.
///
/// An unparseable target matches nothing.
pub fn filter_by_date<T: Dated>(records: Vec<T>, target: Option<&str>) -> Vec<T> {
    let Some(target) = target else {
        return records;
    };
    let day = match parse_api_date(target) {
        Ok(day) => day,
        Err(e) => {
            warn!(date = target, error = %e, "invalid filter date, dropping all records");
            return Vec::new();
        }
    };
    records
        .into_iter()
        .filter(|r| r.is_on(day))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::{ResultScore, ResultTeam, ResultTournament, Team, Tournament};

    fn match_at(date_time: Option<DateTime<Utc>>) -> Match {
        let team = Team {
            name: "Unknown Team".to_string(),
            tag: "UNK".to_string(),
            icon: None,
        };
        Match {
            team_left: team.clone(),
            team_right: team,
            tournament: Tournament {
                name: "Unknown Tournament".to_string(),
                game: None,
                link: None,
            },
            date_time,
            format: None,
        }
    }

    fn result_on(date: Option<&str>) -> TournamentResult {
        let team = ResultTeam {
            name: None,
            icon: None,
            score: None,
        };
        TournamentResult {
            date: date.map(str::to_string),
            placement: String::new(),
            tier: String::new(),
            tournament: ResultTournament {
                name: None,
                game: None,
                icon: None,
            },
            score: ResultScore {
                team_left: team.clone(),
                team_right: team,
            },
            prize: None,
            is_win: None,
        }
    }

    #[test]
    fn test_to_api_date() {
        assert_eq!(to_api_date("2023-05-10").as_deref(), Some("10-05-2023"));
        assert_eq!(to_api_date("2023-5-10"), None);
        assert_eq!(to_api_date("Q2 2023"), None);
        assert_eq!(to_api_date("2023-05-10-01"), None);
    }

    #[test]
    fn test_api_date_round_trip() {
        for date in ["2023-05-10", "1999-12-31", "2024-02-29", "0001-01-01"] {
            let api = to_api_date(date).unwrap();
            assert_eq!(from_api_date(&api).as_deref(), Some(date));
        }
    }

    #[test]
    fn test_normalize_date_keeps_unshaped_text() {
        assert_eq!(normalize_date("2021-01-04"), "04-01-2021");
        assert_eq!(normalize_date("2021-01-??"), "2021-01-??");
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let day = parse_api_date("10-05-2023").unwrap();
        let morning = Utc.with_ymd_and_hms(2023, 5, 10, 0, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2023, 5, 10, 23, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2023, 5, 11, 0, 0, 0).unwrap();
        assert!(is_same_day(&morning, day));
        assert!(is_same_day(&night, day));
        assert!(!is_same_day(&next, day));
    }

    #[test]
    fn test_filter_matches_by_calendar_day() {
        let records = vec![
            match_at(Some(Utc.with_ymd_and_hms(2023, 5, 10, 23, 30, 0).unwrap())),
            match_at(Some(Utc.with_ymd_and_hms(2023, 5, 11, 0, 30, 0).unwrap())),
            match_at(None),
        ];

        let kept = filter_by_date(records.clone(), Some("10-05-2023"));
        assert_eq!(kept.len(), 1);
        assert_eq!(
            kept[0].date_time,
            Some(Utc.with_ymd_and_hms(2023, 5, 10, 23, 30, 0).unwrap())
        );
        assert_eq!(filter_by_date(records, Some("11-05-2023")).len(), 1);
    }

    #[test]
    fn test_filter_by_date() {
        let records = vec![
            result_on(Some("10-05-2023")),
            result_on(Some("11-05-2023")),
            result_on(None),
        ];

        let kept = filter_by_date(records.clone(), Some("10-05-2023"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date.as_deref(), Some("10-05-2023"));

        assert!(filter_by_date(records.clone(), Some("12-05-2023")).is_empty());
        assert_eq!(filter_by_date(records.clone(), None).len(), 3);
        assert!(filter_by_date(records, Some("2023-05-10")).is_empty());
    }
}
