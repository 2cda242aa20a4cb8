//! Read-only models of the scheduler service's payloads, plus the small
//! amount of formatting needed to show them.

use serde::Deserialize;

/// Schedule metadata as returned by the scheduler service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub is_active: bool,
    pub cron_expression: String,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub next_run_time: Option<String>,
    #[serde(default)]
    pub last_run_at: Option<String>,
    /// `None` until the schedule has run once.
    #[serde(default)]
    pub last_run_success: Option<bool>,
}

impl Schedule {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Paused" }
    }

    pub fn last_run_label(&self) -> &'static str {
        match self.last_run_success {
            Some(true) => "Success",
            Some(false) => "Failed",
            None => "Never run",
        }
    }

    pub fn describe(&self) -> String {
        cron_to_human(&self.cron_expression)
    }
}

/// One entry of a schedule's execution log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecutionLog {
    #[serde(default)]
    pub id: Option<String>,
    pub success: bool,
    pub executed_at: String,
    #[serde(default = "one")]
    pub attempt: u32,
    #[serde(default = "one")]
    pub max_attempts: u32,
    #[serde(default)]
    pub error: Option<String>,
}

fn one() -> u32 {
    1
}

impl ExecutionLog {
    pub fn attempts_label(&self) -> String {
        format!("{}/{}", self.attempt, self.max_attempts)
    }
}

/// Envelope for `get schedule` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    pub success: bool,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `list execution log` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionLogResponse {
    pub success: bool,
    #[serde(default)]
    pub executions: Vec<ExecutionLog>,
}

const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Renders the common 5-field cron shapes in words; anything else is
/// returned unchanged.
pub fn cron_to_human(expr: &str) -> String {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    let [minute, hour, dom, month, dow] = fields.as_slice() else {
        return expr.to_string();
    };
    let (Ok(m), Ok(h)) = (minute.parse::<u8>(), hour.parse::<u8>()) else {
        return expr.to_string();
    };
    if m > 59 || h > 23 || *dom != "*" || *month != "*" {
        return expr.to_string();
    }
    let at = format!("{h:02}:{m:02}");
    match *dow {
        "*" => format!("Daily at {at}"),
        "1-5" => format!("Weekdays at {at}"),
        d => match d.parse::<usize>() {
            Ok(n) if n <= 7 => format!("Every {} at {at}", DAYS[n % 7]),
            _ => expr.to_string(),
        },
    }
}

/// Daily cron expression for an `HH:MM` delivery time.
pub fn cron_for_delivery_time(time: &str) -> Option<String> {
    let (h, m) = time.split_once(':')?;
    let (h, m) = (h.parse::<u8>().ok()?, m.parse::<u8>().ok()?);
    if h > 23 || m > 59 {
        return None;
    }
    Some(format!("{m} {h} * * *"))
}
