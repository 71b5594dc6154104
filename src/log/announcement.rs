use crate::log::level::LogLevel;
use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicBool, Ordering};

/// 公告中父节点为空时的占位
pub const ROOT_PARENT_NAME: &str = "root";

const TIME_STARTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 一次性的初始化公告
///
/// 模板中的 `{name}`、`{time_started}`、`{parent}` 在发出时用节点当时的值替换。
#[derive(Debug)]
pub struct Announcement {
    template: String,
    level: LogLevel,
    fired: AtomicBool,
}

impl Announcement {
    pub fn new(template: impl Into<String>, level: LogLevel) -> Self {
        Self {
            template: template.into(),
            level,
            fired: AtomicBool::new(false),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// 只有第一次调用返回 true
    pub fn try_fire(&self) -> bool {
        !self.fired.swap(true, Ordering::AcqRel)
    }

    pub fn render(&self, name: &str, time_started: DateTime<Local>, parent: Option<&str>) -> String {
        self.template
            .replace("{name}", name)
            .replace(
                "{time_started}",
                &time_started.format(TIME_STARTED_FORMAT).to_string(),
            )
            .replace("{parent}", parent.unwrap_or(ROOT_PARENT_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_placeholders() {
        let announcement = Announcement::new(
            "Logger {name} started at {time_started} (parent: {parent})",
            LogLevel::Info,
        );
        let time = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();

        assert_eq!(
            announcement.render("App.db", time, Some("App")),
            "Logger App.db started at 2024-05-01 08:30:00 (parent: App)"
        );
        assert_eq!(
            announcement.render("App", time, None),
            "Logger App started at 2024-05-01 08:30:00 (parent: root)"
        );
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let announcement = Announcement::new("{name} {pid}", LogLevel::Debug);
        let time = Local::now();
        assert_eq!(announcement.render("App", time, None), "App {pid}");
    }

    #[test]
    fn test_fires_once() {
        let announcement = Announcement::new("{name}", LogLevel::Info);
        assert!(!announcement.has_fired());
        assert!(announcement.try_fire());
        assert!(!announcement.try_fire());
        assert!(announcement.has_fired());
    }
}
