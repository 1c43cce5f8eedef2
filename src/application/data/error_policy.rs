use clap::ValueEnum;
use derive_more::Display;

/// What the walker does with a subdirectory it cannot read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum ErrorPolicy {
    /// Fail the whole walk
    #[default]
    #[display("abort")]
    Abort,
    /// Keep the directory's line, leave out its contents and carry on
    #[display("skip")]
    Skip,
}
