use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    /// `None` means no subscriber should be installed at all.
    pub fn to_level_filter(self) -> Option<LevelFilter> {
        match self {
            LogLevel::Debug => Some(LevelFilter::DEBUG),
            LogLevel::Info => Some(LevelFilter::INFO),
            LogLevel::Warn => Some(LevelFilter::WARN),
            LogLevel::Error => Some(LevelFilter::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LogLevel::Debug, Some(LevelFilter::DEBUG))]
    #[case(LogLevel::Info, Some(LevelFilter::INFO))]
    #[case(LogLevel::Warn, Some(LevelFilter::WARN))]
    #[case(LogLevel::Error, Some(LevelFilter::ERROR))]
    #[case(LogLevel::Silent, None)]
    fn maps_to_level_filter(#[case] level: LogLevel, #[case] expected: Option<LevelFilter>) {
        assert_eq!(level.to_level_filter(), expected);
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }
}
