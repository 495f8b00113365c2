use serde::{Deserialize, Serialize};

/// Количество недель в канонической временной шкале
pub const WEEKS_PER_YEAR: usize = 52;

/// Недель в месяцах квартала (розничный календарь 4-4-5)
const QUARTER_PATTERN: [usize; 3] = [4, 4, 5];

/// Строка справочника календаря: неделя -> месяц
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    /// Токен недели, "W01".."W52"
    pub week: String,
    /// Токен месяца, "M01".."M12"
    pub month: String,
}

impl CalendarWeek {
    /// Полный справочник из 52 недель в порядке возрастания
    pub fn canonical() -> Vec<CalendarWeek> {
        let mut weeks = Vec::with_capacity(WEEKS_PER_YEAR);
        let mut month = 0;
        for _quarter in 0..4 {
            for len in QUARTER_PATTERN {
                month += 1;
                for _ in 0..len {
                    weeks.push(CalendarWeek {
                        week: week_token(weeks.len() + 1),
                        month: format!("M{:02}", month),
                    });
                }
            }
        }
        weeks
    }
}

/// Токен недели по ее номеру (1-based)
pub fn week_token(n: usize) -> String {
    format!("W{:02}", n)
}

/// Каноническая шкала "W01".."W52"
pub fn canonical_weeks() -> Vec<String> {
    (1..=WEEKS_PER_YEAR).map(week_token).collect()
}

/// Входит ли токен в каноническую шкалу (сравнение только по токену)
pub fn is_canonical_week(token: &str) -> bool {
    let Some(digits) = token.strip_prefix('W') else {
        return false;
    };
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    digits
        .parse::<usize>()
        .map(|n| (1..=WEEKS_PER_YEAR).contains(&n))
        .unwrap_or(false)
}
