use crate::domain::model::LogFormat;

pub trait ConfigProvider: Send + Sync {
    fn address(&self) -> &str;
    fn log_format(&self) -> LogFormat;
    fn verbose(&self) -> bool;
}
