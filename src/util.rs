/// Logging setup for the command-line tool.
///
/// This module configures the `log` facade with an `env_logger` backend that
/// writes timestamped lines to standard error. Error lines are formatted as
/// `<date> <time> <message>` so that the message can be recovered by dropping
/// the first two space-separated fields.
pub mod logging;
