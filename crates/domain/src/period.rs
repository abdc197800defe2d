// crates/domain/src/period.rs
use std::{fmt, str::FromStr};

use arqa_shared_kernel::DomainError;
use chrono::{Datelike, Days, NaiveDate};

/// Reporting window of the dashboard, counted back from "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    Last7Days,
    Last30Days,
    QuarterToDate,
    YearToDate,
}

impl Period {
    /// First day included in the window.
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Last7Days => today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN),
            Self::Last30Days => today.checked_sub_days(Days::new(30)).unwrap_or(NaiveDate::MIN),
            Self::QuarterToDate => {
                let quarter_month = (today.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(today.year(), quarter_month, 1).unwrap_or(today)
            }
            Self::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        }
    }
}

impl FromStr for Period {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            "qtd" => Ok(Self::QuarterToDate),
            "ytd" => Ok(Self::YearToDate),
            _ => Err(DomainError::UnknownPeriod { period: s.to_string() }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::QuarterToDate => "QTD",
            Self::YearToDate => "YTD",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rolling_windows_count_back_in_days() {
        let today = date(2024, 3, 5);
        assert_eq!(Period::Last7Days.start_date(today), date(2024, 2, 27));
        assert_eq!(Period::Last30Days.start_date(today), date(2024, 2, 4));
    }

    #[test]
    fn quarter_and_year_to_date_start_on_the_first() {
        assert_eq!(Period::QuarterToDate.start_date(date(2024, 5, 17)), date(2024, 4, 1));
        assert_eq!(Period::QuarterToDate.start_date(date(2024, 12, 31)), date(2024, 10, 1));
        assert_eq!(Period::YearToDate.start_date(date(2024, 5, 17)), date(2024, 1, 1));
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("QTD".parse::<Period>().unwrap(), Period::QuarterToDate);
        assert_eq!("30d".parse::<Period>().unwrap(), Period::Last30Days);
        assert!("week".parse::<Period>().is_err());
        assert_eq!(Period::default(), Period::Last7Days);
    }
}
